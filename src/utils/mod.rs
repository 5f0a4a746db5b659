// Presentation helpers for amounts shown in the swap form
// Kept out of the engine: nothing here affects a validation outcome

pub mod display {
    use rust_decimal::{Decimal, RoundingStrategy};

    use crate::engine::ScaledAmount;

    /// Insert ',' every three digits in the integer part
    pub fn group_thousands(s: &str) -> String {
        let (sign, unsigned) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        match fraction {
            Some(f) => format!("{sign}{grouped}.{f}"),
            None => format!("{sign}{grouped}"),
        }
    }

    /// Fixed number of fraction digits, truncated and grouped
    pub fn format_fixed(amount: &ScaledAmount, fraction_digits: u8) -> String {
        let digits = amount.rescale(fraction_digits).value().to_string();
        let width = fraction_digits as usize;
        if width == 0 {
            return group_thousands(&digits);
        }

        let padded = if digits.len() <= width {
            format!("{:0>w$}", digits, w = width + 1)
        } else {
            digits
        };
        let (integer, fraction) = padded.split_at(padded.len() - width);
        group_thousands(&format!("{integer}.{fraction}"))
    }

    /// Dollar amount with two decimals
    pub fn format_usd(value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${}", group_thousands(&format!("{:.2}", rounded)))
    }

}
