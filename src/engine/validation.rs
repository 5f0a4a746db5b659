//! Transaction validation functions
//!
//! Decides whether a swap clears the minimum USD-equivalent value before the
//! form lets the user submit it. Validation here only gates a warning in the
//! UI; settlement happens on-chain, so the threshold math works in `Decimal`
//! rather than in scaled integers.
//!
//! The public entry points never fail: every error is folded into a
//! [`ValidationResult`] with `is_valid == false`.

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ExchangeDirection, ValidationResult};

use super::config::ValidatorConfig;
use super::conversion::{min_token_amount, price_to_usd};
use super::errors::ValidationError;

impl From<ValidationError> for ValidationResult {
    fn from(err: ValidationError) -> Self {
        ValidationResult::invalid(err.to_string())
    }
}

// ============================================================================
// Individual Validation Functions
// ============================================================================

/// Split a signed plain decimal ("-12.5", "+.5", "3.") into sign and digits
///
/// Only ASCII digits and a single '.' are allowed after the sign: no digit
/// separators, no exponent, at least one digit.
fn split_plain_decimal(input: &str) -> Option<(&str, &str, &str)> {
    let (sign, unsigned) = match input.strip_prefix(|c: char| c == '-' || c == '+') {
        // '+' carries no information
        Some(rest) if input.starts_with('-') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", input),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }
    Some((sign, integer, fraction))
}

/// Parse the amount typed by the user as a positive decimal number
///
/// Digits beyond `decimals` are truncated toward zero, so an amount smaller
/// than one base unit counts as zero.
///
/// # Returns
/// * `Ok(amount)` if the amount is a number greater than zero
/// * `Err(ValidationError::NonPositiveAmount)` if it is not a plain decimal
///   number, or is zero or negative
/// * `Err(ValidationError::InternalParseError)` if it is a well-formed number
///   too large for a `Decimal`
pub fn validate_amount(amount: &str, decimals: u8) -> Result<Decimal, ValidationError> {
    let (sign, integer, fraction) =
        split_plain_decimal(amount.trim()).ok_or(ValidationError::NonPositiveAmount)?;

    let integer = if integer.is_empty() { "0" } else { integer };
    let normalized = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };

    let value = Decimal::from_str(&normalized)
        .map_err(|e| ValidationError::InternalParseError(e.to_string()))?
        .round_dp_with_strategy(u32::from(decimals), RoundingStrategy::ToZero);

    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(value)
}

/// Validate the token price for a sell and convert it to USD per token
///
/// # Returns
/// * `Ok(price_usd)` for a present, non-zero price
/// * `Err(ValidationError::MissingPrice)` if no price was supplied
/// * `Err(ValidationError::NonPositivePrice)` if the price is zero
pub fn validate_price(price: Option<&BigUint>) -> Result<Decimal, ValidationError> {
    let price = price.ok_or(ValidationError::MissingPrice)?;
    if price.is_zero() {
        return Err(ValidationError::NonPositivePrice);
    }
    price_to_usd(price)
}

// ============================================================================
// Transaction Validator
// ============================================================================

/// Minimum-value check for both sides of the pair
#[derive(Debug, Clone, Default)]
pub struct TransactionValidator {
    config: ValidatorConfig,
}

impl TransactionValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a transaction and report the outcome for display
    ///
    /// # Arguments
    /// * `amount` - Raw string from the input field
    /// * `direction` - `Buy` spends stablecoin, `Sell` spends the token
    /// * `price` - USD per token scaled by `10^18`; required for `Sell`
    /// * `decimals` - Precision of the asset being spent
    pub fn validate(
        &self,
        amount: &str,
        direction: ExchangeDirection,
        price: Option<&BigUint>,
        decimals: u8,
    ) -> ValidationResult {
        match self.evaluate(amount, direction, price, decimals) {
            Ok(value) => ValidationResult::valid(value),
            Err(err) => {
                if let ValidationError::InternalParseError(reason) = &err {
                    tracing::warn!(%direction, amount, reason = %reason, "Validation aborted");
                } else {
                    tracing::debug!(%direction, amount, error = %err, "Transaction rejected");
                }
                ValidationResult::from(err)
            }
        }
    }

    /// Same checks as [`validate`](Self::validate), returning the first error
    ///
    /// On success the USD value of the transaction is returned.
    pub fn evaluate(
        &self,
        amount: &str,
        direction: ExchangeDirection,
        price: Option<&BigUint>,
        decimals: u8,
    ) -> Result<Decimal, ValidationError> {
        match direction {
            ExchangeDirection::Buy => self.evaluate_buy(amount, decimals),
            ExchangeDirection::Sell => self.evaluate_sell(amount, price, decimals),
        }
    }

    /// Stablecoin is treated as exactly 1 USD, so the amount is the value
    fn evaluate_buy(&self, amount: &str, decimals: u8) -> Result<Decimal, ValidationError> {
        let value = validate_amount(amount, decimals)?;
        let minimum = self.config.min_transaction_usd;

        if value < minimum {
            return Err(ValidationError::BelowMinimum {
                minimum,
                required_tokens: None,
                token_precision: self.config.min_token_precision,
            });
        }
        Ok(value)
    }

    fn evaluate_sell(
        &self,
        amount: &str,
        price: Option<&BigUint>,
        decimals: u8,
    ) -> Result<Decimal, ValidationError> {
        let price = price.ok_or(ValidationError::MissingPrice)?;
        let quantity = validate_amount(amount, decimals)?;
        let price_usd = validate_price(Some(price))?;
        let minimum = self.config.min_transaction_usd;

        let total_usd = quantity.checked_mul(price_usd).ok_or_else(|| {
            ValidationError::InternalParseError("transaction value overflow".to_string())
        })?;

        if total_usd < minimum {
            let precision = self.config.min_token_precision;
            return Err(ValidationError::BelowMinimum {
                minimum,
                required_tokens: Some(min_token_amount(minimum, price_usd, precision)?),
                token_precision: precision,
            });
        }
        Ok(total_usd)
    }
}

// ============================================================================
// Composite Validation Function
// ============================================================================

/// Validate a transaction with the default configuration
///
/// # Example
/// ```
/// use swap_validator::engine::validate_transaction;
/// use swap_validator::models::ExchangeDirection;
///
/// let result = validate_transaction("0.5", ExchangeDirection::Buy, None, 6);
/// assert!(!result.is_valid);
/// assert_eq!(result.message.as_deref(), Some("Minimum transaction value is $1.00"));
/// ```
pub fn validate_transaction(
    amount: &str,
    direction: ExchangeDirection,
    price: Option<&BigUint>,
    decimals: u8,
) -> ValidationResult {
    TransactionValidator::default().validate(amount, direction, price, decimals)
}

// ============================================================================
// Tests
// ============================================================================
