//! Swap Validation Engine
//!
//! This module contains the core numeric functionality:
//! - `errors` - Error types for parsing and validation
//! - `amount` - Fixed-point amount parsing and formatting
//! - `conversion` - Token/stablecoin price conversion
//! - `validation` - Minimum-value transaction checks
//! - `allowance` - Approval threshold checks
//! - `config` - Validator configuration

pub mod allowance;
pub mod amount;
pub mod config;
pub mod conversion;
pub mod errors;
pub mod validation;

// Re-export commonly used types for convenience
pub use allowance::{check_allowance, needs_approval, needs_approval_scaled};
pub use amount::{format_amount, parse_amount, ScaledAmount, MAX_INPUT_LEN, PRICE_DECIMALS};
pub use config::ValidatorConfig;
pub use conversion::{min_token_amount, price_to_usd, quote, quote_buy, quote_sell, Quote};
pub use errors::ValidationError;
pub use validation::{validate_transaction, TransactionValidator};
