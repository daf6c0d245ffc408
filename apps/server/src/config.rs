use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use rust_decimal::Decimal;
use teller_core::constants::{
    DEFAULT_CURRENCY_UNIT_SCALE, DEFAULT_MAX_DEPOSIT_AMOUNT, DEFAULT_MAX_WITHDRAWAL_AMOUNT,
    DEFAULT_MIN_INITIAL_DEPOSIT_AMOUNT,
};
use teller_core::TransactionPolicy;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub seed_demo_data: bool,
    pub policy: TransactionPolicy,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first if present.
    ///
    /// Fails on malformed values and on a transaction policy that does not pass
    /// its range checks, so a bad deployment never starts serving.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env_or =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let decimal_env = |key: &str, default: Decimal| -> anyhow::Result<Decimal> {
            match lookup(key) {
                Some(raw) => {
                    Decimal::from_str(raw.trim()).with_context(|| format!("Invalid {}", key))
                }
                None => Ok(default),
            }
        };

        let listen_addr: SocketAddr = env_or("TELLER_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid TELLER_LISTEN_ADDR")?;
        let db_path = env_or("TELLER_DB_PATH", "./db/teller.db");
        let cors_allow = env_or("TELLER_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("TELLER_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid TELLER_REQUEST_TIMEOUT_MS, expected milliseconds")?;
        let seed_demo_data = env_or("TELLER_SEED_DEMO_DATA", "true")
            .parse()
            .context("Invalid TELLER_SEED_DEMO_DATA, expected true or false")?;

        let policy = TransactionPolicy::new(
            decimal_env("TELLER_MAX_DEPOSIT_AMOUNT", DEFAULT_MAX_DEPOSIT_AMOUNT)?,
            decimal_env("TELLER_MAX_WITHDRAWAL_AMOUNT", DEFAULT_MAX_WITHDRAWAL_AMOUNT)?,
            decimal_env(
                "TELLER_MIN_INITIAL_DEPOSIT_AMOUNT",
                DEFAULT_MIN_INITIAL_DEPOSIT_AMOUNT,
            )?,
            env_or(
                "TELLER_CURRENCY_UNIT_SCALE",
                &DEFAULT_CURRENCY_UNIT_SCALE.to_string(),
            )
            .parse()
            .context("Invalid TELLER_CURRENCY_UNIT_SCALE")?,
        )
        .context("Invalid transaction policy")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            seed_demo_data,
            policy,
        })
    }
}
