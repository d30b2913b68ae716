//! Label text shown over the bar

use super::diagnostics::{Diagnostics, ResolveWarning};
use super::format::format_value;
use super::reader::read_entity_or_attribute;
use crate::config::{LabelConfig, LabelSource};
use crate::data::{EntitySnapshot, Registry, Scalar};

/// Resolve the label: `"<name>: <value>"`, `"<name>"`, `"<value>"`, or
/// nothing when neither is shown.
pub fn resolve_display_text(
    label: &LabelConfig,
    current: &EntitySnapshot,
    registry: &Registry,
    progress: u8,
    diag: &mut dyn Diagnostics,
) -> String {
    if !label.show_name && !label.show_value {
        return String::new();
    }

    let name = match &label.name {
        Some(name) => name.clone(),
        None => current
            .friendly_name()
            .map(Scalar::to_string)
            .unwrap_or_default(),
    };

    let progress_value = Scalar::Number(f64::from(progress));
    let raw_value = match &label.source {
        LabelSource::Progress => Some(progress_value),
        LabelSource::Read(id) => read_entity_or_attribute(id, registry, current).cloned(),
        LabelSource::Template(value) => Some(value.clone()),
        LabelSource::Malformed => {
            diag.warn(ResolveWarning::ValueSourceMalformed);
            Some(progress_value)
        }
    };

    let value = format_value(raw_value.as_ref(), &label.format);

    match (label.show_name, label.show_value) {
        (true, true) => format!("{}: {}", name, value),
        (true, false) => name,
        _ => value,
    }
}
