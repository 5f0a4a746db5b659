use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Transaction validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Minimum transaction value in USD, applied to both directions
    #[serde(default = "default_min_transaction_usd")]
    pub min_transaction_usd: Decimal,

    /// Fraction digits of the minimum token quantity reported on a sell
    #[serde(default = "default_min_token_precision")]
    pub min_token_precision: u32,

    /// Decimals assumed when the caller does not name any
    #[serde(default = "default_decimals")]
    pub default_decimals: u8,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_transaction_usd: default_min_transaction_usd(),
            min_token_precision: default_min_token_precision(),
            default_decimals: default_decimals(),
        }
    }
}

impl ValidatorConfig {
    /// Build a config from `MIN_TRANSACTION_USD`, `MIN_TOKEN_PRECISION` and
    /// `DEFAULT_DECIMALS`
    ///
    /// Missing or unparseable values fall back to the defaults. A negative
    /// minimum is ignored as well.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let min_transaction_usd = lookup("MIN_TRANSACTION_USD")
            .and_then(|s| s.trim().parse::<Decimal>().ok())
            .filter(|v| *v >= Decimal::ZERO)
            .unwrap_or(defaults.min_transaction_usd);

        let min_token_precision = lookup("MIN_TOKEN_PRECISION")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|p| *p <= MAX_TOKEN_PRECISION)
            .unwrap_or(defaults.min_token_precision);

        let default_decimals = lookup("DEFAULT_DECIMALS")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .unwrap_or(defaults.default_decimals);

        Self {
            min_transaction_usd,
            min_token_precision,
            default_decimals,
        }
    }
}

/// Largest scale `rust_decimal` can round to
const MAX_TOKEN_PRECISION: u32 = 28;

// Default value functions for serde
fn default_min_transaction_usd() -> Decimal {
    dec!(1.0)
}

fn default_min_token_precision() -> u32 {
    6
}

fn default_decimals() -> u8 {
    18
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.min_transaction_usd, dec!(1.0));
        assert_eq!(config.min_token_precision, 6);
        assert_eq!(config.default_decimals, 18);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());

        let config: ValidatorConfig =
            serde_json::from_str(r#"{"min_transaction_usd":"5.5","min_token_precision":2}"#)
                .unwrap();
        assert_eq!(config.min_transaction_usd, dec!(5.5));
        assert_eq!(config.min_token_precision, 2);
        assert_eq!(config.default_decimals, 18);
    }

    #[test]
    fn test_lookup_valid_overrides() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[
            ("MIN_TRANSACTION_USD", " 2.50 "),
            ("MIN_TOKEN_PRECISION", "2"),
            ("DEFAULT_DECIMALS", "6"),
        ]));
        assert_eq!(config.min_transaction_usd, dec!(2.5));
        assert_eq!(config.min_token_precision, 2);
        assert_eq!(config.default_decimals, 6);
    }

    #[test]
    fn test_lookup_unparseable_values_fall_back() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[
            ("MIN_TRANSACTION_USD", "one dollar"),
            ("MIN_TOKEN_PRECISION", "-1"),
            ("DEFAULT_DECIMALS", "300"),
        ]));
        assert_eq!(config, ValidatorConfig::default());

        let config = ValidatorConfig::from_lookup(lookup_from(&[("MIN_TOKEN_PRECISION", "40")]));
        assert_eq!(config.min_token_precision, 6);
    }

    #[test]
    fn test_lookup_negative_minimum_ignored() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[("MIN_TRANSACTION_USD", "-5")]));
        assert_eq!(config.min_transaction_usd, dec!(1.0));

        let config = ValidatorConfig::from_lookup(lookup_from(&[("MIN_TRANSACTION_USD", "0")]));
        assert_eq!(config.min_transaction_usd, Decimal::ZERO);
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Only this test touches these variables
        std::env::set_var("MIN_TRANSACTION_USD", "3");
        std::env::set_var("MIN_TOKEN_PRECISION", "abc");
        let config = ValidatorConfig::from_env();
        std::env::remove_var("MIN_TRANSACTION_USD");
        std::env::remove_var("MIN_TOKEN_PRECISION");

        assert_eq!(config.min_transaction_usd, dec!(3));
        assert_eq!(config.min_token_precision, 6);
    }
}
