//! Validators for inbound account requests.
//!
//! Each validator is built once from a [`TransactionPolicy`] and is stateless
//! afterwards. Every violated rule is reported, not just the first.

use rust_decimal::Decimal;

use super::validation_model::{
    AccountTransactionRequest, OpenAccountRequest, TransactionKind, ValidationErrors,
};
use crate::constants::fields;
use crate::money::{decimal_places, AmountRule};
use crate::policy::TransactionPolicy;

/// Validates [`OpenAccountRequest`]s against the minimum initial deposit.
#[derive(Debug, Clone)]
pub struct OpenAccountRequestValidator {
    min_initial_deposit: Decimal,
    scale: u32,
}

impl OpenAccountRequestValidator {
    pub fn new(policy: &TransactionPolicy) -> Self {
        Self {
            min_initial_deposit: policy.min_initial_deposit_amount(),
            scale: policy.currency_unit_scale(),
        }
    }

    pub fn validate(&self, request: &OpenAccountRequest) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if request.initial_deposit < self.min_initial_deposit {
            errors.add(
                fields::INITIAL_DEPOSIT,
                format!(
                    "Initial deposit must be greater than or equal to {}.",
                    self.min_initial_deposit
                ),
            );
        }
        if decimal_places(request.initial_deposit) > self.scale {
            errors.add(
                fields::INITIAL_DEPOSIT,
                format!(
                    "Initial deposit must use a maximum of {} decimal places.",
                    self.scale
                ),
            );
        }

        errors.into_result()
    }
}

/// Validates deposit and withdrawal requests.
///
/// Deposits and withdrawals carry independent maxima, so each kind has its
/// own [`AmountRule`] with its own derived precision.
#[derive(Debug, Clone)]
pub struct AccountTransactionValidator {
    deposit_rule: AmountRule,
    withdrawal_rule: AmountRule,
}

impl AccountTransactionValidator {
    pub fn new(policy: &TransactionPolicy) -> Self {
        Self {
            deposit_rule: policy.deposit_rule(),
            withdrawal_rule: policy.withdrawal_rule(),
        }
    }

    pub fn rule_for(&self, kind: TransactionKind) -> &AmountRule {
        match kind {
            TransactionKind::Deposit => &self.deposit_rule,
            TransactionKind::Withdrawal => &self.withdrawal_rule,
        }
    }

    pub fn validate(
        &self,
        kind: TransactionKind,
        request: &AccountTransactionRequest,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.add_all(
            fields::AMOUNT,
            self.rule_for(kind).check("Amount", request.amount),
        );
        errors.into_result()
    }
}
