//! Allowance checks
//!
//! Before a swap can spend a token, the user must have granted the swap
//! contract an allowance at least as large as the amount. Both sides are
//! compared as scaled integers at the token's precision.

use std::cmp::Ordering;

use crate::models::ApprovalDecision;

use super::amount::ScaledAmount;
use super::errors::ValidationError;

/// Compare two scaled amounts; equal allowance is enough
pub fn needs_approval_scaled(
    allowance: &ScaledAmount,
    requested: &ScaledAmount,
) -> Result<bool, ValidationError> {
    Ok(allowance.checked_cmp(requested)? == Ordering::Less)
}

/// Parse both amounts at `decimals` and compare them
///
/// # Returns
/// * `Ok(true)` if the allowance is strictly smaller than the requested amount
/// * `Err(ValidationError::InvalidFormat)` if either string is malformed
pub fn needs_approval(
    allowance: &str,
    requested: &str,
    decimals: u8,
) -> Result<bool, ValidationError> {
    let allowance = ScaledAmount::parse(allowance, decimals)?;
    let requested = ScaledAmount::parse(requested, decimals)?;
    needs_approval_scaled(&allowance, &requested)
}

/// Approval decision for display
///
/// Malformed input never escapes as an error: the decision then asks for
/// approval and carries the reason in `message`.
pub fn check_allowance(allowance: &str, requested: &str, decimals: u8) -> ApprovalDecision {
    match needs_approval(allowance, requested, decimals) {
        Ok(needed) => ApprovalDecision::new(needed),
        Err(err) => {
            tracing::debug!(allowance, requested, error = %err, "Allowance check failed");
            ApprovalDecision {
                needs_approval: true,
                message: Some(err.to_string()),
            }
        }
    }
}
