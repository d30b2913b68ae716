//! Display formatting of raw label values

use crate::config::ValueFormat;
use crate::data::number::{number_to_string, to_fixed};
use crate::data::Scalar;

/// Format a raw value as `prefix + value + suffix`.
///
/// Values with a finite numeric reading are rendered as numbers, with exactly
/// `decimals` fraction digits when set. Anything else is rendered as its own
/// text, and a missing value as nothing.
pub fn format_value(raw: Option<&Scalar>, format: &ValueFormat) -> String {
    let number = raw.map_or(f64::NAN, Scalar::to_number);

    let value = if number.is_finite() {
        match format.decimals {
            Some(decimals) => to_fixed(number, decimals),
            None => number_to_string(number),
        }
    } else {
        raw.map(Scalar::to_string).unwrap_or_default()
    };

    format!("{}{}{}", format.prefix, value, format.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_with(decimals: Option<usize>, prefix: &str, suffix: &str) -> ValueFormat {
        ValueFormat {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            decimals,
        }
    }

    #[test]
    fn test_decimals() {
        let format = format_with(Some(1), "", "%");
        assert_eq!(format_value(Some(&Scalar::Number(42.345)), &format), "42.3%");
        assert_eq!(format_value(Some(&Scalar::from("7")), &format), "7.0%");
    }

    #[test]
    fn test_missing_value_keeps_affixes() {
        assert_eq!(format_value(None, &format_with(None, "", "%")), "%");
        assert_eq!(format_value(None, &format_with(Some(2), "~", " min")), "~ min");
    }

    #[test]
    fn test_default_number_form() {
        let format = ValueFormat::default();
        assert_eq!(format_value(Some(&Scalar::Number(73.0)), &format), "73%");
        assert_eq!(format_value(Some(&Scalar::from("12.50")), &format), "12.5%");
        assert_eq!(format_value(Some(&Scalar::from(true)), &format), "1%");
    }

    #[test]
    fn test_non_numeric_passes_through() {
        let format = format_with(Some(0), "", "");
        assert_eq!(format_value(Some(&Scalar::from("idle")), &format), "idle");
        assert_eq!(format_value(Some(&Scalar::Number(f64::NAN)), &format), "NaN");
        assert_eq!(
            format_value(Some(&Scalar::Number(f64::INFINITY)), &format),
            "Infinity"
        );
    }
}
