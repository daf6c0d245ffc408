//! Transaction policy - the configured bounds on monetary amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_UNIT_SCALE, DEFAULT_MAX_DEPOSIT_AMOUNT, DEFAULT_MAX_WITHDRAWAL_AMOUNT,
    DEFAULT_MIN_INITIAL_DEPOSIT_AMOUNT, MAX_DECIMAL_SCALE,
};
use crate::money::AmountRule;
use crate::{Error, Result};

/// Process-wide thresholds governing valid transaction amounts.
///
/// Values are range-checked on construction and cannot be changed afterwards,
/// so one policy can be shared across concurrent requests. Validators receive
/// it explicitly rather than reading global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPolicy")]
pub struct TransactionPolicy {
    max_deposit_amount: Decimal,
    max_withdrawal_amount: Decimal,
    min_initial_deposit_amount: Decimal,
    currency_unit_scale: u32,
}

impl TransactionPolicy {
    /// Creates a policy, failing fast on any out-of-range value.
    ///
    /// Amounts must be strictly positive. The scale must be non-negative and
    /// representable by `Decimal` (at most 28).
    pub fn new(
        max_deposit_amount: Decimal,
        max_withdrawal_amount: Decimal,
        min_initial_deposit_amount: Decimal,
        currency_unit_scale: i64,
    ) -> Result<Self> {
        ensure_positive("maxDepositAmount", max_deposit_amount)?;
        ensure_positive("maxWithdrawalAmount", max_withdrawal_amount)?;
        ensure_positive("minInitialDepositAmount", min_initial_deposit_amount)?;

        let currency_unit_scale = u32::try_from(currency_unit_scale)
            .ok()
            .filter(|scale| *scale <= MAX_DECIMAL_SCALE)
            .ok_or_else(|| {
                Error::InvalidConfigValue(format!(
                    "currencyUnitScale must be between 0 and {}, got {}",
                    MAX_DECIMAL_SCALE, currency_unit_scale
                ))
            })?;

        Ok(Self {
            max_deposit_amount,
            max_withdrawal_amount,
            min_initial_deposit_amount,
            currency_unit_scale,
        })
    }

    pub fn max_deposit_amount(&self) -> Decimal {
        self.max_deposit_amount
    }

    pub fn max_withdrawal_amount(&self) -> Decimal {
        self.max_withdrawal_amount
    }

    pub fn min_initial_deposit_amount(&self) -> Decimal {
        self.min_initial_deposit_amount
    }

    pub fn currency_unit_scale(&self) -> u32 {
        self.currency_unit_scale
    }

    /// Rule applied to deposit amounts.
    pub fn deposit_rule(&self) -> AmountRule {
        AmountRule::new(
            "maximum deposit amount",
            self.max_deposit_amount,
            self.currency_unit_scale,
        )
    }

    /// Rule applied to withdrawal amounts.
    pub fn withdrawal_rule(&self) -> AmountRule {
        AmountRule::new(
            "maximum withdrawal amount",
            self.max_withdrawal_amount,
            self.currency_unit_scale,
        )
    }
}

impl Default for TransactionPolicy {
    fn default() -> Self {
        Self {
            max_deposit_amount: DEFAULT_MAX_DEPOSIT_AMOUNT,
            max_withdrawal_amount: DEFAULT_MAX_WITHDRAWAL_AMOUNT,
            min_initial_deposit_amount: DEFAULT_MIN_INITIAL_DEPOSIT_AMOUNT,
            currency_unit_scale: DEFAULT_CURRENCY_UNIT_SCALE,
        }
    }
}

fn ensure_positive(name: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(Error::InvalidConfigValue(format!(
            "{} must be greater than 0, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Unchecked shape used for deserialization; converted through [`TransactionPolicy::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPolicy {
    max_deposit_amount: Decimal,
    max_withdrawal_amount: Decimal,
    min_initial_deposit_amount: Decimal,
    currency_unit_scale: i64,
}

impl TryFrom<RawPolicy> for TransactionPolicy {
    type Error = Error;

    fn try_from(raw: RawPolicy) -> Result<Self> {
        TransactionPolicy::new(
            raw.max_deposit_amount,
            raw.max_withdrawal_amount,
            raw.min_initial_deposit_amount,
            raw.currency_unit_scale,
        )
    }
}
