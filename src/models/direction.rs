use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::ValidationError;

/// Exchange direction: which side of the pair is being spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeDirection {
    /// Stablecoin → token
    Buy,
    /// Token → stablecoin
    Sell,
}

impl fmt::Display for ExchangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeDirection::Buy => write!(f, "buy"),
            ExchangeDirection::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for ExchangeDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(ExchangeDirection::Buy),
            "sell" => Ok(ExchangeDirection::Sell),
            other => Err(ValidationError::InvalidFormat(format!(
                "unknown direction '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("buy".parse::<ExchangeDirection>(), Ok(ExchangeDirection::Buy));
        assert_eq!(" SELL ".parse::<ExchangeDirection>(), Ok(ExchangeDirection::Sell));
        assert!("swap".parse::<ExchangeDirection>().is_err());
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(
            serde_json::to_string(&ExchangeDirection::Sell).unwrap(),
            r#""sell""#
        );
        let dir: ExchangeDirection = serde_json::from_str(r#""buy""#).unwrap();
        assert_eq!(dir, ExchangeDirection::Buy);
        assert_eq!(ExchangeDirection::Buy.to_string(), "buy");
    }
}
