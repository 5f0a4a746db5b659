//! Integration tests exercising the public API the way the swap form does:
//! raw strings in, display-ready results out.

use std::str::FromStr;

use num_bigint::BigUint;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use swap_validator::engine::{needs_approval, quote_buy, quote_sell};
use swap_validator::utils::display::{format_fixed, format_usd};
use swap_validator::{
    check_allowance, format_amount, parse_amount, validate_transaction, ExchangeDirection,
    ScaledAmount, TransactionValidator, ValidatorConfig,
};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// $0.10 per token, 18 decimals
fn ten_cents() -> BigUint {
    BigUint::from(100_000_000_000_000_000u128)
}

// ---------------------------------------------------------------------------
// Form scenarios
// ---------------------------------------------------------------------------

#[test]
fn buy_form_feedback() {
    let cases = [
        ("0.5", false),
        ("1", true),
        ("1.00", true),
        ("-5", false),
        ("", false),
        ("250.75", true),
    ];
    for (input, expected) in cases {
        let result = validate_transaction(input, ExchangeDirection::Buy, None, 6);
        assert_eq!(result.is_valid, expected, "input {input:?}");
    }

    let negative = validate_transaction("-5", ExchangeDirection::Buy, None, 6);
    assert_eq!(negative.message.as_deref(), Some("Invalid amount"));
}

#[test]
fn sell_form_feedback() {
    let price = ten_cents();

    let ok = validate_transaction("100", ExchangeDirection::Sell, Some(&price), 18);
    assert!(ok.is_valid);
    assert_eq!(ok.actual_value, Some(dec!(10)));

    let small = validate_transaction("5", ExchangeDirection::Sell, Some(&price), 18);
    assert!(!small.is_valid);
    assert!(small.message.unwrap().contains("10.000000"));
}

#[test]
fn malformed_input_never_escapes() {
    for direction in [ExchangeDirection::Buy, ExchangeDirection::Sell] {
        let result = validate_transaction("12.34.56", direction, Some(&ten_cents()), 18);
        assert!(!result.is_valid);
        assert!(result.message.is_some());
    }

    assert!(parse_amount("12.34.56", 18).is_err());
    assert!(check_allowance("12.34.56", "1", 18).needs_approval);
}

#[test]
fn allowance_scenarios() {
    assert_eq!(needs_approval("5", "10", 6), Ok(true));
    assert_eq!(needs_approval("25.5", "25.5", 18), Ok(false));
    assert!(!check_allowance("25.5", "25.5", 18).needs_approval);
}

#[test]
fn sell_quote_matches_validated_value() {
    // The exact integer quote and the threshold check agree on the value
    let price = ten_cents();
    let tokens = ScaledAmount::parse("100", 18).unwrap();
    let usdc = quote_sell(&tokens, &price, 6).unwrap();

    let validated = TransactionValidator::new(ValidatorConfig::default())
        .evaluate("100", ExchangeDirection::Sell, Some(&price), 18)
        .unwrap();

    assert_eq!(usdc.to_decimal().unwrap(), validated);
    assert_eq!(format_usd(validated), "$10.00");
}

#[test]
fn buy_then_sell_never_gains() {
    let price = BigUint::from(3_000_000_000_000_000_000u128);
    let spent = ScaledAmount::parse("10", 6).unwrap();

    let tokens = quote_buy(&spent, &price, 18).unwrap();
    let back = quote_sell(&tokens, &price, 6).unwrap();

    assert!(back.checked_cmp(&spent).unwrap().is_le());
    assert_eq!(format_fixed(&tokens, 4), "3.3333");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

prop_compose! {
    /// Decimal string with at most `max_fraction` fraction digits
    fn decimal_string(max_fraction: usize)(
        integer in "[0-9]{1,8}",
        fraction in proptest::collection::vec(0u8..10, 0..=max_fraction),
    ) -> String {
        if fraction.is_empty() {
            integer
        } else {
            let fraction: String = fraction.iter().map(|d| char::from(b'0' + d)).collect();
            format!("{integer}.{fraction}")
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_format_inverts_parse(input in decimal_string(6), decimals in 6u8..=18) {
        let scaled = parse_amount(&input, decimals).unwrap();
        let formatted = format_amount(&scaled, decimals);

        prop_assert_eq!(
            Decimal::from_str(&formatted).unwrap(),
            Decimal::from_str(&input).unwrap()
        );
        // Minimal form: never a trailing fractional zero
        prop_assert!(!(formatted.contains('.') && formatted.ends_with('0')));
    }

    #[test]
    fn prop_needs_approval_iff_allowance_smaller(
        allowance in decimal_string(6),
        requested in decimal_string(6),
        decimals in 6u8..=18,
    ) {
        let needed = needs_approval(&allowance, &requested, decimals).unwrap();
        let allowance_value = Decimal::from_str(&allowance).unwrap();
        let requested_value = Decimal::from_str(&requested).unwrap();

        prop_assert_eq!(needed, allowance_value < requested_value);
    }
}
