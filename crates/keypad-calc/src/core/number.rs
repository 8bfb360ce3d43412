//! Result formatting
//!
//! Numbers are shown the way web calculators show them: the shortest digit
//! string that round-trips, plain notation for magnitudes in `[1e-6, 1e21)`,
//! exponent notation (`1e+21`, `1.5e-7`) outside that range.

/// Largest decimal exponent (exclusive) printed in plain notation
const PLAIN_MAX_EXP: i32 = 21;
/// Smallest decimal exponent (exclusive) printed in plain notation
const PLAIN_MIN_EXP: i32 = -6;

/// Formats a result for the display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0 as well
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match shortest_digits(value.abs()) {
        Some((digits, exponent)) => format!("{sign}{}", layout(&digits, exponent)),
        None => format!("{value}"),
    }
}

/// Splits a positive finite value into its shortest round-trip digits and the
/// position of the decimal point relative to the first digit.
fn shortest_digits(value: f64) -> Option<(String, i32)> {
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    Some((digits, exponent + 1))
}

fn layout(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;

    if len <= point && point <= PLAIN_MAX_EXP {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= PLAIN_MAX_EXP {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if PLAIN_MIN_EXP < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp = point - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", exp.abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", exp.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(420.0), "420");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(-0.75), "-0.75");
    }

    #[test]
    fn test_format_shortest_roundtrip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_small_plain_boundary() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000015), "0.0000015");
        assert_eq!(format_number(0.0000001), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_large_plain_boundary() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.25e22), "1.25e+22");
        assert_eq!(format_number(-1e21), "-1e+21");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_extremes() {
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(format_number(5e-324), "5e-324");
    }

    proptest! {
        /// Whatever we print parses back to the same value
        #[test]
        fn prop_format_roundtrips(value in proptest::num::f64::NORMAL) {
            let text = format_number(value);
            let parsed: f64 = text.parse().unwrap();
            prop_assert_eq!(parsed, value);
        }

        #[test]
        fn prop_integers_have_no_fraction(value in -1_000_000_000i64..1_000_000_000) {
            prop_assert_eq!(format_number(value as f64), value.to_string());
        }
    }
}
