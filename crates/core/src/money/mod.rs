//! Money module - exact decimal digit arithmetic and amount rules.

mod money_rules;

pub use money_rules::{
    decimal_places, derive_precision, integer_digits, magnitude_exponent, AmountRule,
};
