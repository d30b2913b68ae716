//! Progress bar feature - progress, label and style-token resolution
//!
//! Given a feature configuration, the entity the feature is bound to, and a
//! registry of every entity, produce the percentage, label, and style tokens
//! a dashboard renderer needs to draw one progress bar.

pub mod config;
pub mod core;
pub mod data;
pub mod frontend;
pub mod widgets;

pub use crate::config::{ConfigError, FeatureConfig, RawFeatureConfig, Scenario};
pub use crate::core::{
    Clock, CollectedDiagnostics, Diagnostics, FixedClock, ProgressBarFeature, ResolveWarning,
    SystemClock, TracingDiagnostics,
};
pub use crate::data::{EntitySnapshot, Registry, Scalar};
pub use crate::widgets::ProgressBarState;
