//! Fixed-point amount parsing and formatting
//!
//! Amounts travel through the form as human decimal strings (`"10.5"`) and
//! are compared as integers scaled by `10^decimals`, the same representation
//! token contracts use on-chain. All conversions here are exact integer
//! arithmetic over `BigUint`; nothing in this module touches floating point.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Longest amount string accepted by the parser
pub const MAX_INPUT_LEN: usize = 20;

/// Prices are always quoted with 18 decimals, whatever the token uses
pub const PRICE_DECIMALS: u8 = 18;

/// Largest scale `rust_decimal` can represent
const MAX_DECIMAL_SCALE: u8 = 28;

/// Returns `10^decimals`
pub fn pow10(decimals: u8) -> BigUint {
    BigUint::from(10u32).pow(u32::from(decimals))
}

/// Parse a decimal string into an integer scaled by `10^decimals`
///
/// Accepts "optional digits, optional single '.', optional digits". The
/// empty string (and a lone `"."`) parse as zero. Fractional digits beyond
/// `decimals` are truncated, never rounded up.
///
/// # Errors
/// * `ValidationError::InvalidFormat` if the input is longer than
///   [`MAX_INPUT_LEN`], contains anything other than ASCII digits and '.',
///   or has more than one decimal point
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use swap_validator::engine::parse_amount;
///
/// assert_eq!(parse_amount("10.5", 6).unwrap(), BigUint::from(10_500_000u64));
/// assert_eq!(parse_amount("0.1234567", 6).unwrap(), BigUint::from(123_456u64));
/// ```
pub fn parse_amount(input: &str, decimals: u8) -> Result<BigUint, ValidationError> {
    if input.len() > MAX_INPUT_LEN {
        return Err(ValidationError::InvalidFormat(format!(
            "input exceeds {} characters",
            MAX_INPUT_LEN
        )));
    }

    if let Some(c) = input.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(ValidationError::InvalidFormat(format!(
            "unexpected character '{}'",
            c
        )));
    }

    let (integer, fraction) = match input.split_once('.') {
        Some((i, f)) => (i, f),
        None => (input, ""),
    };

    if fraction.contains('.') {
        return Err(ValidationError::InvalidFormat(
            "more than one decimal point".to_string(),
        ));
    }

    let width = decimals as usize;
    // ASCII only past this point, byte slicing is safe
    let fraction = if fraction.len() > width {
        &fraction[..width]
    } else {
        fraction
    };

    let digits = format!("{integer}{fraction:0<width$}");
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }

    BigUint::from_str(&digits).map_err(|e| ValidationError::InternalParseError(e.to_string()))
}

/// Format a scaled integer back into its minimal decimal string
///
/// Trailing fractional zeros and a dangling '.' are dropped; zero formats
/// as `"0"`. Thousands separators and fixed fraction digits are a display
/// concern, see [`crate::utils::display`].
pub fn format_amount(value: &BigUint, decimals: u8) -> String {
    let digits = value.to_string();
    let width = decimals as usize;
    if width == 0 {
        return digits;
    }

    let padded = if digits.len() <= width {
        format!("{:0>w$}", digits, w = width + 1)
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - width);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

/// A non-negative quantity stored as an integer scaled by `10^decimals`
///
/// Two amounts can only be compared or combined when they share the same
/// `decimals`; the checked operations report a mismatch instead of silently
/// comparing values on different scales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaledAmount {
    value: BigUint,
    decimals: u8,
}

impl ScaledAmount {
    /// Wrap an already-scaled integer (e.g. a raw on-chain balance)
    pub fn new(value: BigUint, decimals: u8) -> Self {
        Self { value, decimals }
    }

    pub fn zero(decimals: u8) -> Self {
        Self::new(BigUint::zero(), decimals)
    }

    /// Parse a decimal string at the given precision, see [`parse_amount`]
    pub fn parse(input: &str, decimals: u8) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_amount(input, decimals)?, decimals))
    }

    /// The raw scaled integer
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn ensure_same_scale(&self, other: &Self) -> Result<(), ValidationError> {
        if self.decimals != other.decimals {
            return Err(ValidationError::DecimalsMismatch {
                left: self.decimals,
                right: other.decimals,
            });
        }
        Ok(())
    }

    /// Compare two amounts at the same precision
    pub fn checked_cmp(&self, other: &Self) -> Result<Ordering, ValidationError> {
        self.ensure_same_scale(other)?;
        Ok(self.value.cmp(&other.value))
    }

    /// Add two amounts at the same precision
    pub fn checked_add(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_same_scale(other)?;
        Ok(Self::new(&self.value + &other.value, self.decimals))
    }

    /// Re-express the amount at another precision
    ///
    /// Reducing precision truncates the dropped digits.
    pub fn rescale(&self, to_decimals: u8) -> Self {
        let value = match self.decimals.cmp(&to_decimals) {
            Ordering::Equal => self.value.clone(),
            Ordering::Greater => &self.value / pow10(self.decimals - to_decimals),
            Ordering::Less => &self.value * pow10(to_decimals - self.decimals),
        };
        Self::new(value, to_decimals)
    }

    /// Convert to a `Decimal` for threshold math
    ///
    /// Precision beyond 28 fractional digits is truncated first.
    ///
    /// # Errors
    /// * `ValidationError::InternalParseError` if the value does not fit in a `Decimal`
    pub fn to_decimal(&self) -> Result<Decimal, ValidationError> {
        let scaled = if self.decimals > MAX_DECIMAL_SCALE {
            self.rescale(MAX_DECIMAL_SCALE)
        } else {
            self.clone()
        };

        let raw = scaled.value.to_i128().ok_or_else(|| {
            ValidationError::InternalParseError(format!("{} is out of range", self))
        })?;

        Decimal::try_from_i128_with_scale(raw, u32::from(scaled.decimals))
            .map_err(|e| ValidationError::InternalParseError(e.to_string()))
    }
}

impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(&self.value, self.decimals))
    }
}
