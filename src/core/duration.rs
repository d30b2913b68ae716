//! Clock-like duration strings (`HH:MM:SS`) to seconds

use crate::data::number::coerce_number;
use crate::data::Scalar;

/// Parse `HH:MM:SS` into seconds.
///
/// Empty input is `0`. A missing or non-numeric segment makes the result
/// `NaN`; segments past the third are ignored.
pub fn parse_time_string(time: &str) -> f64 {
    if time.is_empty() {
        return 0.0;
    }

    let mut segments = time.split(':').map(coerce_number);
    let hours = segments.next().unwrap_or(f64::NAN);
    let minutes = segments.next().unwrap_or(f64::NAN);
    let seconds = segments.next().unwrap_or(f64::NAN);

    hours * 3600.0 + minutes * 60.0 + seconds
}

/// Duration in seconds of a read value; numbers are already seconds
pub fn parse_duration(value: Option<&Scalar>) -> f64 {
    match value {
        None => 0.0,
        Some(Scalar::Number(seconds)) => *seconds,
        Some(Scalar::Text(text)) => parse_time_string(text),
        Some(other) if !other.is_truthy() => 0.0,
        Some(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_string() {
        assert_eq!(parse_time_string("00:00:00"), 0.0);
        assert_eq!(parse_time_string("01:00:00"), 3600.0);
        assert_eq!(parse_time_string("00:30:00"), 1800.0);
        assert_eq!(parse_time_string("1:02:03"), 3723.0);
        assert_eq!(parse_time_string(""), 0.0);
    }

    #[test]
    fn test_malformed_segments_are_nan() {
        assert!(parse_time_string("01:00").is_nan());
        assert!(parse_time_string("aa:00:00").is_nan());
        assert!(parse_time_string("soon").is_nan());
    }

    #[test]
    fn test_parse_duration_matches_empty_and_missing() {
        assert_eq!(parse_duration(None), parse_duration(Some(&Scalar::from(""))));
        assert_eq!(parse_duration(Some(&Scalar::Number(90.0))), 90.0);
        assert_eq!(parse_duration(Some(&Scalar::from("00:01:30"))), 90.0);
        assert!(parse_duration(Some(&Scalar::from(true))).is_nan());
    }
}
