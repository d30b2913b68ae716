//! Temporal progress: countdown-by-duration and absolute intervals
//!
//! Both modes read their inputs through the entity-or-attribute reader. A
//! `None` result means resolution was abandoned with a warning; a `NaN` result
//! means the inputs were read but made no sense, which the progress guard
//! reports on its own.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::clock::Clock;
use super::diagnostics::{Diagnostics, ResolveWarning};
use super::duration::parse_duration;
use super::reader::read_entity_or_attribute;
use crate::config::{TimeIssue, TimeSource};
use crate::data::number::round_half_up;
use crate::data::{EntitySnapshot, Registry, Scalar};

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn is_truthy(value: Option<&Scalar>) -> bool {
    value.is_some_and(Scalar::is_truthy)
}

/// Percentage of a time window that has passed, unclamped
pub fn resolve_time_progress(
    time: &TimeSource,
    registry: &Registry,
    current: &EntitySnapshot,
    clock: &dyn Clock,
    diag: &mut dyn Diagnostics,
) -> Option<f64> {
    match time {
        TimeSource::Countdown { initial, remaining } => {
            let initial_value = read_entity_or_attribute(initial, registry, current);
            let remaining_value = read_entity_or_attribute(remaining, registry, current);
            if !is_truthy(initial_value) || !is_truthy(remaining_value) {
                diag.warn(ResolveWarning::CountdownValuesInvalid {
                    initial: initial_value.cloned(),
                    remaining: remaining_value.cloned(),
                });
                return None;
            }

            let initial = parse_duration(initial_value);
            let remaining = parse_duration(remaining_value);
            Some(countdown_percentage(initial, remaining))
        }
        TimeSource::Interval { start, end } => {
            let start_value = read_entity_or_attribute(start, registry, current);
            let end_value = read_entity_or_attribute(end, registry, current);
            let (Some(start_value), Some(end_value)) = (
                start_value.filter(|v| v.is_truthy()),
                end_value.filter(|v| v.is_truthy()),
            ) else {
                diag.warn(ResolveWarning::IntervalValuesInvalid {
                    start: start_value.cloned(),
                    end: end_value.cloned(),
                });
                return None;
            };

            match (parse_instant(start_value), parse_instant(end_value)) {
                (Some(start), Some(end)) => Some(interval_percentage(start, end, clock.now())),
                _ => {
                    tracing::debug!(
                        "Unparseable interval bounds: start={} end={}",
                        start_value,
                        end_value
                    );
                    Some(f64::NAN)
                }
            }
        }
        TimeSource::Incomplete(issue) => {
            diag.warn(match issue {
                TimeIssue::CountdownPair => ResolveWarning::CountdownPairIncomplete,
                TimeIssue::IntervalPair => ResolveWarning::IntervalPairIncomplete,
                TimeIssue::NoMode => ResolveWarning::TimeModeMissing,
            });
            None
        }
    }
}

/// Elapsed share of `initial` seconds given `remaining` seconds left
pub fn countdown_percentage(initial: f64, remaining: f64) -> f64 {
    let elapsed = initial - remaining;
    round_half_up(elapsed / initial * 100.0)
}

/// Elapsed share of `[start, end]` at `now`
pub fn interval_percentage(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let total = (end - start).num_milliseconds() as f64;
    let elapsed = (now - start).num_milliseconds() as f64;
    round_half_up(elapsed / total * 100.0)
}

/// Parse a date-like value: ISO-8601 text, a bare date, or epoch milliseconds
pub fn parse_instant(value: &Scalar) -> Option<DateTime<Utc>> {
    match value {
        Scalar::Number(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        Scalar::Text(text) => parse_date_string(text.trim()),
        _ => None,
    }
}

fn parse_date_string(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(text, format) {
            return Some(instant.with_timezone(&Utc));
        }
    }

    // No offset given; read as UTC
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::diagnostics::CollectedDiagnostics;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_countdown_progress() {
        let registry = Registry::new().with_entity("sensor.total", EntitySnapshot::new("01:00:00"));
        let current = EntitySnapshot::new("on").with_attribute("remaining", "00:30:00");
        let time = TimeSource::Countdown {
            initial: "sensor.total".into(),
            remaining: "remaining".into(),
        };
        let mut diag = CollectedDiagnostics::new();

        let progress = resolve_time_progress(&time, &registry, &current, &FixedClock::at(t0()), &mut diag);
        assert_eq!(progress, Some(50.0));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_countdown_with_missing_read_aborts() {
        let registry = Registry::new();
        let current = EntitySnapshot::new("on").with_attribute("total", "01:00:00");
        let time = TimeSource::Countdown {
            initial: "total".into(),
            remaining: "remaining".into(),
        };
        let mut diag = CollectedDiagnostics::new();

        let progress = resolve_time_progress(&time, &registry, &current, &FixedClock::at(t0()), &mut diag);
        assert_eq!(progress, None);
        assert_eq!(
            diag.warnings,
            vec![ResolveWarning::CountdownValuesInvalid {
                initial: Some(Scalar::from("01:00:00")),
                remaining: None,
            }]
        );
    }

    #[test]
    fn test_interval_progress() {
        let start = t0();
        let end = start + Duration::seconds(1000);
        let now = start + Duration::seconds(250);
        let current = EntitySnapshot::new("on")
            .with_attribute("started_at", start.to_rfc3339())
            .with_attribute("ends_at", end.to_rfc3339());
        let time = TimeSource::Interval {
            start: "started_at".into(),
            end: "ends_at".into(),
        };
        let mut diag = CollectedDiagnostics::new();

        let progress = resolve_time_progress(&time, &Registry::new(), &current, &FixedClock::at(now), &mut diag);
        assert_eq!(progress, Some(25.0));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_interval_with_garbage_dates_is_nan() {
        let current = EntitySnapshot::new("on")
            .with_attribute("started_at", "yesterday")
            .with_attribute("ends_at", "tomorrow");
        let time = TimeSource::Interval {
            start: "started_at".into(),
            end: "ends_at".into(),
        };
        let mut diag = CollectedDiagnostics::new();

        let progress = resolve_time_progress(&time, &Registry::new(), &current, &FixedClock::at(t0()), &mut diag);
        assert!(progress.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_incomplete_pairs_warn() {
        let mut diag = CollectedDiagnostics::new();
        let progress = resolve_time_progress(
            &TimeSource::Incomplete(TimeIssue::IntervalPair),
            &Registry::new(),
            &EntitySnapshot::default(),
            &FixedClock::at(t0()),
            &mut diag,
        );
        assert_eq!(progress, None);
        assert_eq!(diag.warnings, vec![ResolveWarning::IntervalPairIncomplete]);
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = t0();
        assert_eq!(parse_instant(&Scalar::from("2024-05-01T12:00:00Z")), Some(expected));
        assert_eq!(parse_instant(&Scalar::from("2024-05-01T14:00:00+02:00")), Some(expected));
        assert_eq!(parse_instant(&Scalar::from("2024-05-01 12:00:00+00:00")), Some(expected));
        assert_eq!(parse_instant(&Scalar::from("2024-05-01T12:00:00.000")), Some(expected));
        assert_eq!(parse_instant(&Scalar::from("2024-05-01 12:00")), Some(expected));
        assert_eq!(
            parse_instant(&Scalar::from("2024-05-01")),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_instant(&Scalar::Number(expected.timestamp_millis() as f64)),
            Some(expected)
        );
        assert_eq!(parse_instant(&Scalar::from("not a date")), None);
    }

    #[test]
    fn test_degenerate_windows() {
        assert!(countdown_percentage(0.0, 0.0).is_nan());
        assert_eq!(countdown_percentage(0.0, 10.0), f64::NEG_INFINITY);
        let start = t0();
        assert!(interval_percentage(start, start, start).is_nan());
        assert_eq!(interval_percentage(start, start, start + Duration::seconds(1)), f64::INFINITY);
    }
}
