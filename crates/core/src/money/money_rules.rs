//! Precision, scale, and range rules for monetary amounts.
//!
//! Every computation here works on the decimal representation directly.
//! Amounts never pass through `f64`, so a limit such as `1000000.23`
//! yields exactly the digit counts its text suggests.

use rust_decimal::Decimal;

/// Number of fractional digits in `amount`, ignoring trailing zeros.
///
/// `1.10` has one decimal place, `1.001` has three, `100` has none.
pub fn decimal_places(amount: Decimal) -> u32 {
    amount.normalize().scale()
}

/// Number of digits in the integer part of `amount`'s magnitude.
///
/// Values with magnitude below one have no integer digits.
pub fn integer_digits(amount: Decimal) -> u32 {
    let whole = amount.abs().trunc().normalize();
    if whole.is_zero() {
        return 0;
    }
    whole.mantissa().unsigned_abs().ilog10() + 1
}

/// Exact `floor(log10(amount))` for a positive amount.
///
/// Returns `None` for zero and negative amounts, where the logarithm is undefined.
pub fn magnitude_exponent(amount: Decimal) -> Option<i64> {
    if amount <= Decimal::ZERO {
        return None;
    }
    // amount = mantissa * 10^-scale, so the exponent of the leading digit is
    // the mantissa's own exponent shifted down by the scale.
    let normalized = amount.normalize();
    let mantissa_exponent = i64::from(normalized.mantissa().unsigned_abs().ilog10());
    Some(mantissa_exponent - i64::from(normalized.scale()))
}

/// Total significant digits allowed for amounts bounded by `max_amount`
/// with `scale` fractional digits: `floor(log10(max_amount)) + scale + 1`.
///
/// Never less than `scale`, so a limit below one still admits its fractional digits.
pub fn derive_precision(max_amount: Decimal, scale: u32) -> u32 {
    let exponent = magnitude_exponent(max_amount).unwrap_or(0);
    let precision = exponent + i64::from(scale) + 1;
    u32::try_from(precision).unwrap_or(0).max(scale)
}

/// Range and digit constraints for one kind of amount (deposit, withdrawal, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRule {
    limit_name: &'static str,
    max_amount: Decimal,
    scale: u32,
    precision: u32,
}

impl AmountRule {
    /// Builds a rule, deriving its precision from the given limit and scale.
    pub fn new(limit_name: &'static str, max_amount: Decimal, scale: u32) -> Self {
        Self {
            limit_name,
            max_amount,
            scale,
            precision: derive_precision(max_amount, scale),
        }
    }

    pub fn max_amount(&self) -> Decimal {
        self.max_amount
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Checks `amount` against every rule and returns one message per violation.
    ///
    /// An empty vector means the amount is acceptable. `subject` names the
    /// value in messages, e.g. "Amount".
    pub fn check(&self, subject: &str, amount: Decimal) -> Vec<String> {
        let mut messages = Vec::new();

        if amount <= Decimal::ZERO {
            messages.push(format!("{} must be greater than 0.", subject));
        }

        let places = decimal_places(amount);
        if places > self.scale {
            messages.push(format!(
                "{} must use a maximum of {} decimal places.",
                subject, self.scale
            ));
        }

        let allowed_integer_digits = self.precision.saturating_sub(self.scale);
        if integer_digits(amount) > allowed_integer_digits {
            messages.push(format!(
                "{} must not be more than {} digits in total, with allowance for {} decimals.",
                subject, self.precision, self.scale
            ));
        }

        if amount > self.max_amount {
            messages.push(format!(
                "{} must be less than or equal to the {}: {}.",
                subject, self.limit_name, self.max_amount
            ));
        }

        messages
    }
}
