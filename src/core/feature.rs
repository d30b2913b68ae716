//! Full resolution pass for one progress bar feature
//!
//! Progress resolves first; style tokens and the label both build on it.

use super::clock::Clock;
use super::diagnostics::Diagnostics;
use super::progress::resolve_progress;
use super::style::{
    resolve_color, resolve_color_bg, resolve_position, resolve_size, resolve_text_color,
    resolve_text_position, resolve_text_shadow, resolve_text_size,
};
use super::text::resolve_display_text;
use crate::config::{ConfigError, FeatureConfig, RawFeatureConfig};
use crate::data::{EntitySnapshot, Registry};
use crate::widgets::ProgressBarState;

/// A validated feature ready to be resolved against entity state
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarFeature {
    config: FeatureConfig,
}

impl ProgressBarFeature {
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Validate a host configuration; `None` means none was supplied
    pub fn from_raw(raw: Option<&RawFeatureConfig>) -> Result<Self, ConfigError> {
        FeatureConfig::parse(raw).map(Self::new)
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Resolve the render state. Interval progress reads `clock` once.
    pub fn resolve(
        &self,
        current: &EntitySnapshot,
        registry: &Registry,
        clock: &dyn Clock,
        diag: &mut dyn Diagnostics,
    ) -> ProgressBarState {
        let config = &self.config;
        let percentage = resolve_progress(config, current, registry, clock, diag);

        let style = &config.style;
        let label = &config.label;
        let text = resolve_display_text(label, current, registry, percentage, diag);

        ProgressBarState {
            percentage,
            color: resolve_color(style.color.as_ref(), percentage),
            background_color: resolve_color_bg(style.background.as_deref()),
            size: resolve_size(style),
            position: resolve_position(style.position.as_deref()),
            anchored: config.anchoring_requested(),
            text,
            text_color: resolve_text_color(label),
            text_shadow: resolve_text_shadow(label),
            text_size: resolve_text_size(label),
            text_position: resolve_text_position(label.text_position.as_deref(), diag),
        }
    }
}
