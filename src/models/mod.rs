pub mod direction;
pub mod validation;

pub use direction::ExchangeDirection;
pub use validation::{ApprovalDecision, ValidationResult};
