//! Recoverable warnings and the sinks they are reported to
//!
//! Resolvers never log on their own. Every recoverable condition is handed to
//! a [`Diagnostics`] sink, and the caller decides how it surfaces.

use crate::data::Scalar;

/// A condition that degraded the output but did not stop resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveWarning {
    /// The progress value had no numeric reading; the bar shows 0
    ProgressNotNumeric { value: Option<Scalar> },
    /// The progress value fell outside 0-100 and was clamped
    ProgressOutOfRange { value: f64 },
    /// Only one of `time.initial` / `time.remaining` was configured
    CountdownPairIncomplete,
    /// Only one of `time.start` / `time.end` was configured
    IntervalPairIncomplete,
    /// `time` was configured without either pair
    TimeModeMissing,
    /// A countdown read came back empty
    CountdownValuesInvalid {
        initial: Option<Scalar>,
        remaining: Option<Scalar>,
    },
    /// An interval read came back empty
    IntervalValuesInvalid {
        start: Option<Scalar>,
        end: Option<Scalar>,
    },
    /// `value` had neither an entity/attribute nor a template
    ValueSourceMalformed,
    /// `text_position` was not left, center or right
    UnknownTextPosition { value: String },
}

fn describe(value: &Option<Scalar>) -> String {
    match value {
        Some(v) => format!("{:?}", v.to_string()),
        None => "undefined".to_string(),
    }
}

impl ResolveWarning {
    pub fn message(&self) -> String {
        match self {
            ResolveWarning::ProgressNotNumeric { value } => {
                format!("Progress value must be a number, currently: {}", describe(value))
            }
            ResolveWarning::ProgressOutOfRange { value } => format!(
                "Progress value must be a number between 0 - 100, currently: {}",
                value
            ),
            ResolveWarning::CountdownPairIncomplete => {
                "time.initial & time.remaining are co-dependent".to_string()
            }
            ResolveWarning::IntervalPairIncomplete => {
                "time.start & time.end are co-dependent".to_string()
            }
            ResolveWarning::TimeModeMissing => {
                "time must define initial & remaining or start & end".to_string()
            }
            ResolveWarning::CountdownValuesInvalid { initial, remaining } => format!(
                "Invalid values for time.initial and/or time.remaining, must be HH:MM:SS (initial: {}, remaining: {})",
                describe(initial),
                describe(remaining)
            ),
            ResolveWarning::IntervalValuesInvalid { start, end } => format!(
                "Invalid values for time.start and/or time.end, must be Date strings (start: {}, end: {})",
                describe(start),
                describe(end)
            ),
            ResolveWarning::ValueSourceMalformed => {
                "config.value must define entity/attribute or template".to_string()
            }
            ResolveWarning::UnknownTextPosition { value } => format!(
                "text_position must be left, center or right, currently: {:?}",
                value
            ),
        }
    }
}

/// Sink for recoverable warnings
pub trait Diagnostics {
    fn warn(&mut self, warning: ResolveWarning);
}

/// Forwards warnings to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, warning: ResolveWarning) {
        tracing::warn!("ProgressBarFeature: {}", warning.message());
    }
}

/// Keeps every warning, optionally echoing it to `tracing` as well
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub warnings: Vec<ResolveWarning>,
    echo: bool,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect and also log through `tracing`
    pub fn echoing() -> Self {
        Self {
            warnings: Vec::new(),
            echo: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn contains(&self, warning: &ResolveWarning) -> bool {
        self.warnings.contains(warning)
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn warn(&mut self, warning: ResolveWarning) {
        if self.echo {
            tracing::warn!("ProgressBarFeature: {}", warning.message());
        }
        self.warnings.push(warning);
    }
}
