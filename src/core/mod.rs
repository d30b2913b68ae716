//! Core resolution logic
//!
//! Pure functions of (configuration, current snapshot, registry) plus the
//! injected clock and diagnostics sink. NO imports from frontend/.

pub mod clock;
pub mod diagnostics;
pub mod duration;
pub mod feature;
pub mod format;
pub mod progress;
pub mod reader;
pub mod style;
pub mod text;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use diagnostics::{CollectedDiagnostics, Diagnostics, ResolveWarning, TracingDiagnostics};
pub use feature::ProgressBarFeature;
