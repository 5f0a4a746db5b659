use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a transaction validation, rendered directly by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Reason shown to the user when the transaction is rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// USD value of the transaction when it passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<Decimal>,
}

impl ValidationResult {
    pub fn valid(actual_value: Decimal) -> Self {
        Self {
            is_valid: true,
            message: None,
            actual_value: Some(actual_value),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            actual_value: None,
        }
    }
}

/// Whether the spender contract must be approved before the swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    pub needs_approval: bool,
    /// Diagnostic when the inputs could not be compared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApprovalDecision {
    pub fn new(needs_approval: bool) -> Self {
        Self {
            needs_approval,
            message: None,
        }
    }
}
