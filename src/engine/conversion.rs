//! Token ⇄ stablecoin price conversion
//!
//! A price is the number of stablecoin units (USD) one whole token is worth,
//! scaled by `10^18`. Conversions keep everything in integers until the very
//! end and truncate the result, so a quote never promises more than the
//! contract would settle.

use num_bigint::BigUint;
use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::ExchangeDirection;

use super::amount::{pow10, ScaledAmount, PRICE_DECIMALS};
use super::errors::ValidationError;

/// Result of converting an amount across the pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub direction: ExchangeDirection,
    pub amount_in: ScaledAmount,
    pub amount_out: ScaledAmount,
    pub price: BigUint,
}

/// Convert an 18-decimal price into USD per token
pub fn price_to_usd(price: &BigUint) -> Result<Decimal, ValidationError> {
    ScaledAmount::new(price.clone(), PRICE_DECIMALS).to_decimal()
}

/// Stablecoin received for selling `token_amount` at `price`
///
/// `out = amount * price * 10^stable_dec / (10^18 * 10^token_dec)`, truncated.
pub fn quote_sell(
    token_amount: &ScaledAmount,
    price: &BigUint,
    stable_decimals: u8,
) -> Result<ScaledAmount, ValidationError> {
    if price.is_zero() {
        return Err(ValidationError::NonPositivePrice);
    }
    if token_amount.is_zero() {
        return Ok(ScaledAmount::zero(stable_decimals));
    }

    let numerator = token_amount.value() * price * pow10(stable_decimals);
    let denominator = pow10(PRICE_DECIMALS) * pow10(token_amount.decimals());

    Ok(ScaledAmount::new(numerator / denominator, stable_decimals))
}

/// Tokens received for spending `stable_amount` at `price`
///
/// `out = amount * 10^18 * 10^token_dec / (price * 10^stable_dec)`, truncated.
pub fn quote_buy(
    stable_amount: &ScaledAmount,
    price: &BigUint,
    token_decimals: u8,
) -> Result<ScaledAmount, ValidationError> {
    if price.is_zero() {
        return Err(ValidationError::NonPositivePrice);
    }
    if stable_amount.is_zero() {
        return Ok(ScaledAmount::zero(token_decimals));
    }

    let numerator = stable_amount.value() * pow10(PRICE_DECIMALS) * pow10(token_decimals);
    let denominator = price * pow10(stable_amount.decimals());

    Ok(ScaledAmount::new(numerator / denominator, token_decimals))
}

/// Quote either side of the pair
///
/// For `Buy` the input is stablecoin and `out_decimals` are the token's;
/// for `Sell` it is the other way round.
pub fn quote(
    direction: ExchangeDirection,
    amount_in: &ScaledAmount,
    price: &BigUint,
    out_decimals: u8,
) -> Result<Quote, ValidationError> {
    let amount_out = match direction {
        ExchangeDirection::Buy => quote_buy(amount_in, price, out_decimals)?,
        ExchangeDirection::Sell => quote_sell(amount_in, price, out_decimals)?,
    };

    Ok(Quote {
        direction,
        amount_in: amount_in.clone(),
        amount_out,
        price: price.clone(),
    })
}

/// Smallest token quantity worth at least `minimum_usd`, to `precision` decimal places
pub fn min_token_amount(
    minimum_usd: Decimal,
    price_usd: Decimal,
    precision: u32,
) -> Result<Decimal, ValidationError> {
    if price_usd <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice);
    }

    minimum_usd
        .checked_div(price_usd)
        .map(|tokens| tokens.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| ValidationError::InternalParseError("minimum token amount overflow".to_string()))
}
