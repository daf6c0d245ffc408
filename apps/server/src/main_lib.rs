use std::sync::Arc;

use crate::config::Config;
use teller_core::{AccountService, AccountServiceTrait, TransactionPolicy};
use teller_storage_sqlite::{db, seed_demo_data, AccountRepository, CustomerRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub policy: TransactionPolicy,
}

pub fn init_tracing() {
    let log_format = std::env::var("TELLER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    if config.seed_demo_data {
        let seeded = seed_demo_data(&writer).await?;
        if seeded == 0 {
            tracing::debug!("Database already populated, skipping demo data");
        }
    }

    let customer_repository = Arc::new(CustomerRepository::new(pool.clone(), writer.clone()));
    let account_repository = Arc::new(AccountRepository::new(pool, writer));
    let account_service = Arc::new(AccountService::new(
        customer_repository,
        account_repository,
        config.policy.clone(),
    ));

    tracing::info!(
        "Transaction policy: max deposit {}, max withdrawal {}, min initial deposit {}, scale {}",
        config.policy.max_deposit_amount(),
        config.policy.max_withdrawal_amount(),
        config.policy.min_initial_deposit_amount(),
        config.policy.currency_unit_scale()
    );

    Ok(Arc::new(AppState {
        account_service,
        policy: config.policy.clone(),
    }))
}
