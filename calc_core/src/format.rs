//! # Number Formatting
//!
//! Two separate concerns live here:
//!
//! - **Result text**: turning a computed `f64` into the canonical string that
//!   becomes the new entry (`number_to_string`, `to_exponential`,
//!   `format_result`). These strings are parsed again as operands.
//! - **Display text**: decorating an entry for the screen
//!   (`format_display`). Never fed back into arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::config::EngineConfig;
//! use calc_core::format::{format_display, number_to_string};
//!
//! let config = EngineConfig::default();
//! assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
//! assert_eq!(format_display(&config, "1234567"), "1,234,567");
//! assert_eq!(format_display(&config, "999.5"), "999.5");
//! ```

use crate::config::EngineConfig;

/// Largest decimal-point position written without an exponent.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal-point position written without an exponent.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Canonical shortest text for a number.
///
/// Uses plain decimal notation while the value is within `1e-7 < |x| < 1e21`
/// and exponent notation (`1e+21`, `1.5e-7`) outside that range. Negative
/// zero renders as `0`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first significant digit
    let n = exponent + 1;

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, rest)
        };
        format!("{}{}", mantissa, exponent_suffix(n - 1))
    };

    format!("{}{}", sign, body)
}

/// Scientific notation with a fixed number of fractional digits
/// (`to_exponential(2e13, 5) == "2.00000e+13"`).
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }

    let formatted = format!("{:.*e}", fraction_digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{}{}", mantissa, exponent_suffix(exponent))
        }
        None => formatted,
    }
}

/// Round half toward positive infinity at the given number of decimal places.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    round_half_up(value * scale) / scale
}

/// Convert a computed result into entry text.
///
/// Returns the text together with the value it stands for. Above the
/// scientific threshold the text is scientific notation and the value keeps
/// full precision; otherwise both are the rounded result. A value too large
/// to scale for rounding is written in scientific notation as well.
pub fn format_result(config: &EngineConfig, value: f64) -> (String, f64) {
    if value.abs() > config.scientific_threshold {
        return (to_exponential(value, config.scientific_fraction_digits), value);
    }

    let rounded = round_to_places(value, config.result_decimal_places);
    if rounded.is_finite() {
        (number_to_string(rounded), rounded)
    } else {
        (to_exponential(value, config.scientific_fraction_digits), value)
    }
}

/// Parse entry text as a decimal number.
///
/// Accepts the forms the engine produces (`12`, `12.`, `-0.5`, `2.00000e+13`)
/// and rejects anything else, including `Error`, `inf` and `NaN`.
pub fn parse_number(text: &str) -> Option<f64> {
    let valid_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !valid_chars || !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decorate entry text for the primary display or the expression trace.
///
/// Non-numeric text and exponent notation pass through untouched, as do
/// numbers below the grouping threshold. Larger numbers get thousands
/// separators; a fraction longer than the configured maximum is rounded
/// and trimmed, a shorter one is kept exactly as typed.
pub fn format_display(config: &EngineConfig, text: &str) -> String {
    let Some(value) = parse_number(text) else {
        return text.to_string();
    };
    if value.abs() < config.grouping_threshold || text.contains(['e', 'E']) {
        return text.to_string();
    }

    let (sign, unsigned) = if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        ("+", rest)
    } else {
        ("", text)
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let max_frac = config.max_display_fraction_digits;
    let (int_digits, fraction) = match frac_part {
        Some(frac) if frac.len() > max_frac => {
            let (int_digits, frac) = round_decimal_digits(int_part, frac, max_frac);
            let trimmed = frac.trim_end_matches('0').to_string();
            // Rounded fractions drop the point entirely when nothing is left
            let fraction = if trimmed.is_empty() { None } else { Some(trimmed) };
            (int_digits, fraction)
        }
        other => (int_part.to_string(), other.map(str::to_string)),
    };

    let mut out = format!("{}{}", sign, group_thousands(&int_digits));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn shortest_digits(abs: f64) -> (String, i32) {
    let formatted = format!("{:e}", abs);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn exponent_suffix(exponent: i32) -> String {
    if exponent < 0 {
        format!("e-{}", -exponent)
    } else {
        format!("e+{}", exponent)
    }
}

fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    // f64::round goes away from zero; negative ties must go up instead
    if value < 0.0 && rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Round `int_part.frac_part` to `places` fractional digits, half away from zero.
fn round_decimal_digits(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(places).is_some_and(|b| *b >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (int_digits, frac_digits) = text.split_at(int_len);
    (int_digits.to_string(), frac_digits.to_string())
}

fn group_thousands(int_digits: &str) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_string_plain() {
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(42.0), "42");
        assert_eq!(number_to_string(-5.0), "-5");
        assert_eq!(number_to_string(0.5), "0.5");
        assert_eq!(number_to_string(1234.5678), "1234.5678");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn test_number_to_string_exponent() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e22), "1.5e+22");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_number_to_string_non_finite() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(2e13, 5), "2.00000e+13");
        assert_eq!(to_exponential(-1.234567e15, 5), "-1.23457e+15");
        assert_eq!(to_exponential(0.00012, 2), "1.20e-4");
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(0.1 + 0.2, 10), 0.3);
        assert_eq!(round_to_places(1.0 / 3.0, 10), 0.3333333333);
        assert_eq!(round_to_places(2.5, 0), 3.0);
        assert_eq!(round_to_places(-2.5, 0), -2.0);
        assert_eq!(round_to_places(-2.6, 0), -3.0);
    }

    #[test]
    fn test_format_result_paths() {
        let config = EngineConfig::default();
        assert_eq!(format_result(&config, 0.1 + 0.2), ("0.3".to_string(), 0.3));

        let (text, value) = format_result(&config, 2e13 + 0.123);
        assert_eq!(text, "2.00000e+13");
        assert_eq!(value, 2e13 + 0.123);

        // The threshold itself is not above the threshold
        assert_eq!(format_result(&config, 1e12).0, "1000000000000");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12."), Some(12.0));
        assert_eq!(parse_number("0."), Some(0.0));
        assert_eq!(parse_number("-0.5"), Some(-0.5));
        assert_eq!(parse_number("2.00000e+13"), Some(2e13));
        assert_eq!(parse_number("Error"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_format_display_grouping() {
        let config = EngineConfig::default();
        assert_eq!(format_display(&config, "1234567"), "1,234,567");
        assert_eq!(format_display(&config, "1000"), "1,000");
        assert_eq!(format_display(&config, "-1234.5"), "-1,234.5");
        assert_eq!(format_display(&config, "999"), "999");
        assert_eq!(format_display(&config, "0."), "0.");
        assert_eq!(format_display(&config, "+1234"), "+1,234");
    }

    #[test]
    fn test_format_display_keeps_typed_fraction() {
        let config = EngineConfig::default();
        assert_eq!(format_display(&config, "1234."), "1,234.");
        assert_eq!(format_display(&config, "1234.50"), "1,234.50");
    }

    #[test]
    fn test_format_display_rounds_long_fraction() {
        let config = EngineConfig::default();
        assert_eq!(format_display(&config, "1234.1234567891"), "1,234.12345679");
        assert_eq!(format_display(&config, "1234.0000000001"), "1,234");
        assert_eq!(format_display(&config, "9999.999999999"), "10,000");
    }

    #[test]
    fn test_format_display_passthrough() {
        let config = EngineConfig::default();
        assert_eq!(format_display(&config, "Error"), "Error");
        assert_eq!(format_display(&config, "2.00000e+13"), "2.00000e+13");
        assert_eq!(format_display(&config, "1e-7"), "1e-7");
    }
}
