//! The canonical 0-100 percentage driving the bar
//!
//! Exactly one source wins (see [`ProgressSource`]). Whatever it produces is
//! then guarded: no numeric reading gives 0, anything outside 0-100 is
//! clamped, and `inverse` flips the result.

use super::clock::Clock;
use super::diagnostics::{Diagnostics, ResolveWarning};
use super::reader::read_entity_or_attribute;
use super::time::resolve_time_progress;
use crate::config::{FeatureConfig, ProgressSource};
use crate::data::number::round_half_up;
use crate::data::{EntitySnapshot, Registry, Scalar};

/// Resolve the bar percentage for `config`
pub fn resolve_progress(
    config: &FeatureConfig,
    current: &EntitySnapshot,
    registry: &Registry,
    clock: &dyn Clock,
    diag: &mut dyn Diagnostics,
) -> u8 {
    let raw = raw_progress(&config.progress, current, registry, clock, diag);
    finalize_progress(raw, config.inverse, diag)
}

/// The unguarded value of a progress source; `None` when nothing was produced
pub fn raw_progress(
    source: &ProgressSource,
    current: &EntitySnapshot,
    registry: &Registry,
    clock: &dyn Clock,
    diag: &mut dyn Diagnostics,
) -> Option<Scalar> {
    match source {
        ProgressSource::Attribute(id) | ProgressSource::Entity(id) => {
            read_entity_or_attribute(id, registry, current).cloned()
        }
        ProgressSource::Template(value) => Some(value.clone()),
        ProgressSource::Time(time) => {
            resolve_time_progress(time, registry, current, clock, diag).map(Scalar::Number)
        }
    }
}

/// Guard, clamp, round and invert a raw progress value
pub fn finalize_progress(raw: Option<Scalar>, inverse: bool, diag: &mut dyn Diagnostics) -> u8 {
    let value = raw.as_ref().map_or(f64::NAN, Scalar::to_number);

    if value.is_nan() {
        diag.warn(ResolveWarning::ProgressNotNumeric { value: raw });
        return 0;
    }

    let mut value = value;
    if !(0.0..=100.0).contains(&value) {
        diag.warn(ResolveWarning::ProgressOutOfRange { value });
        value = value.clamp(0.0, 100.0);
    }

    // Round before flipping so inverse and plain always sum to 100
    let value = round_half_up(value) as u8;
    if inverse {
        100 - value
    } else {
        value
    }
}
