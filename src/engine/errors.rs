//! Error types for amount parsing and transaction validation
//!
//! Every fallible operation in the engine returns `ValidationError`. The
//! validator entry points never hand these to the caller directly: they are
//! folded into a [`ValidationResult`](crate::models::ValidationResult) so a
//! bad keystroke in an input field can never crash the form that called us.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors that can occur while parsing amounts or validating a transaction
///
/// The `Display` text of each variant is the user-facing message that ends up
/// in `ValidationResult::message`, so keep it short and readable.
///
/// # Error Categories
///
/// - **Input Errors**: `InvalidFormat`, `NonPositiveAmount`, `DecimalsMismatch`
/// - **Price Errors**: `MissingPrice`, `NonPositivePrice`
/// - **Threshold Errors**: `BelowMinimum`
/// - **Internal Errors**: `InternalParseError`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount string does not match the numeric grammar or is too long
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),

    /// Sell validation needs a token price
    #[error("Token price required for sell validation")]
    MissingPrice,

    /// Amount is zero, negative or not a number
    #[error("Invalid amount")]
    NonPositiveAmount,

    /// Token price is zero
    #[error("Token price not available")]
    NonPositivePrice,

    /// Transaction value is under the configured minimum
    #[error("{}", below_minimum_message(.minimum, .required_tokens, .token_precision))]
    BelowMinimum {
        minimum: Decimal,
        /// Tokens needed to reach the minimum (sell side only)
        required_tokens: Option<Decimal>,
        /// Fraction digits shown for `required_tokens`
        token_precision: u32,
    },

    /// Two scaled amounts with different precision were combined
    #[error("Decimals mismatch: {left} vs {right}")]
    DecimalsMismatch { left: u8, right: u8 },

    /// Unexpected failure while converting numbers (overflow and the like)
    #[error("Unable to process amount: {0}")]
    InternalParseError(String),
}

fn below_minimum_message(
    minimum: &Decimal,
    required_tokens: &Option<Decimal>,
    token_precision: &u32,
) -> String {
    let token_precision = *token_precision;
    // Display precision pads but does not round
    let minimum = minimum.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    match required_tokens {
        Some(tokens) => format!(
            "Minimum transaction value is ${:.2}. You need at least {:.*} tokens",
            minimum,
            token_precision as usize,
            tokens.round_dp_with_strategy(token_precision, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("Minimum transaction value is ${:.2}", minimum),
    }
}

impl ValidationError {
    /// Returns true if the error comes from the amount the user typed
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidFormat(_)
                | ValidationError::NonPositiveAmount
                | ValidationError::DecimalsMismatch { .. }
        )
    }

    /// Returns true if the error comes from the price supplied by the caller
    pub fn is_price_error(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingPrice | ValidationError::NonPositivePrice
        )
    }
}
