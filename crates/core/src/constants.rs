use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default upper bound for a single deposit
pub const DEFAULT_MAX_DEPOSIT_AMOUNT: Decimal = dec!(1000000000.00);

/// Default upper bound for a single withdrawal
pub const DEFAULT_MAX_WITHDRAWAL_AMOUNT: Decimal = dec!(1000000000.00);

/// Default minimum deposit required to open an account
pub const DEFAULT_MIN_INITIAL_DEPOSIT_AMOUNT: Decimal = dec!(100);

/// Default number of fractional digits allowed on an amount
pub const DEFAULT_CURRENCY_UNIT_SCALE: u32 = 2;

/// Largest scale a `Decimal` can represent
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Maximum length of a customer's display name
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 100;

/// Field names used as keys in validation error maps
pub mod fields {
    pub const AMOUNT: &str = "amount";
    pub const INITIAL_DEPOSIT: &str = "initialDeposit";
    pub const NAME: &str = "name";
}
