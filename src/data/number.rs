//! Loose numeric coercion and number rendering
//!
//! Dashboard hosts hand us states as strings ("42.5", "", "unavailable") and
//! attributes as whatever JSON they happened to be. These helpers give every
//! such value one well-defined numeric reading and one textual form.

/// Coerce text to a number the way the dashboard host does.
///
/// - Surrounding whitespace is ignored, and an empty string is `0`
/// - Decimal and exponent notation, plus `Infinity` with an optional sign
/// - `0x`, `0o` and `0b` radix prefixes (unsigned only)
/// - Anything else is `NaN`
pub fn coerce_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix(s) {
        return value;
    }

    // Rust's float parser also takes "inf" and "nan"; the host doesn't
    let plain = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !plain {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(f64::NAN);
    }

    Some(
        u128::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

/// Render a number in its default textual form.
///
/// Integral values drop the fraction ("42"), very large or very small
/// magnitudes switch to exponent form ("1e+21", "1e-7").
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

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// Render a number with exactly `digits` fractional digits.
///
/// Halfway cases round away from zero. Magnitudes of 1e21 and above fall
/// back to [`number_to_string`].
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }

    let magnitude = value.abs();
    let scale = 10f64.powi(digits as i32);
    let scaled = magnitude * scale;

    let formatted = if scaled.fract() == 0.5 && scaled < 9_007_199_254_740_992.0 {
        format!("{:.*}", digits, (scaled.floor() + 1.0) / scale)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if value < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Round to the nearest integer, halfway cases toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  42.5 "), 42.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("-7"), -7.0);
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("unavailable").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("12px").is_nan());
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0x+1").is_nan());
        assert!(coerce_number("0b-1").is_nan());
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(42.0), "42");
        assert_eq!(number_to_string(42.5), "42.5");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(42.345, 1), "42.3");
        assert_eq!(to_fixed(42.0, 2), "42.00");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(73.0, 0), "73");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(49.5), 50.0);
        assert_eq!(round_half_up(49.4), 49.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}
