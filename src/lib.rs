// Library Crate Root
// lib.rs

// Pure, synchronous swap-form logic: fixed-point amounts, minimum-value
// validation, allowance checks and price conversion. No I/O lives here.
pub mod engine;
pub mod models;
pub mod utils;

// pub use = re-export at crate root
pub use engine::{
    check_allowance, format_amount, needs_approval, parse_amount, quote, validate_transaction,
    Quote, ScaledAmount, TransactionValidator, ValidationError, ValidatorConfig,
};
pub use models::{ApprovalDecision, ExchangeDirection, ValidationResult};
