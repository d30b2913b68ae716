//! Style tokens: color, background, thickness, edge position, label styling
//!
//! Values starting with `--` name CSS custom properties and are wrapped as
//! `var(--name)`; everything else passes through untouched.

use super::diagnostics::{Diagnostics, ResolveWarning};
use crate::config::{BarColor, LabelConfig, StyleConfig};
use crate::widgets::{EdgeAnchor, TextPosition};

pub const DEFAULT_COLOR: &str = "--primary-color";
/// Track tint derived from whatever the bar color resolved to
pub const DERIVED_BACKGROUND: &str = "hsla(from var(--progress-bar-color) h s l / .2)";
pub const ANCHORED_SIZE: &str = "3px";
pub const DEFAULT_SIZE: &str = "--feature-height";
/// Meter hue multiplier; 100% lands on green (hue 120)
pub const METER_VIBRANCY: f64 = 1.2;

pub const DEFAULT_TEXT_COLOR: &str = "--text-primary-color";
pub const DEFAULT_TEXT_SHADOW: &str = "0 1px 2px rgba(0,0,0,.35)";
pub const DEFAULT_TEXT_SIZE: &str = "12px";

pub fn resolve_css_vars(value: &str) -> String {
    if value.starts_with("--") {
        format!("var({})", value)
    } else {
        value.to_string()
    }
}

pub fn resolve_color(color: Option<&BarColor>, progress: u8) -> String {
    match color {
        Some(BarColor::Meter) => format!(
            "hsl(calc({} * {}), 100%, 40%)",
            progress.min(100),
            METER_VIBRANCY
        ),
        Some(BarColor::Fixed(color)) => resolve_css_vars(color),
        None => resolve_css_vars(DEFAULT_COLOR),
    }
}

pub fn resolve_color_bg(background: Option<&str>) -> String {
    match background {
        Some(background) => resolve_css_vars(background),
        None => DERIVED_BACKGROUND.to_string(),
    }
}

/// Explicit size, else a compact bar when positioned, else the theme height
pub fn resolve_size(style: &StyleConfig) -> String {
    let size = match (&style.size, &style.position) {
        (Some(size), _) => size.as_str(),
        (None, Some(_)) => ANCHORED_SIZE,
        (None, None) => DEFAULT_SIZE,
    };
    resolve_css_vars(size)
}

pub fn resolve_position(position: Option<&str>) -> Option<EdgeAnchor> {
    match position {
        Some("top") => Some(EdgeAnchor::Top),
        Some("bottom") => Some(EdgeAnchor::Bottom),
        _ => None,
    }
}

pub fn resolve_text_position(position: Option<&str>, diag: &mut dyn Diagnostics) -> TextPosition {
    let Some(position) = position else {
        return TextPosition::default();
    };

    TextPosition::parse(position).unwrap_or_else(|| {
        diag.warn(ResolveWarning::UnknownTextPosition {
            value: position.to_string(),
        });
        TextPosition::default()
    })
}

pub fn resolve_text_color(label: &LabelConfig) -> String {
    resolve_css_vars(label.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR))
}

pub fn resolve_text_shadow(label: &LabelConfig) -> String {
    label
        .text_shadow
        .clone()
        .unwrap_or_else(|| DEFAULT_TEXT_SHADOW.to_string())
}

pub fn resolve_text_size(label: &LabelConfig) -> String {
    resolve_css_vars(label.text_size.as_deref().unwrap_or(DEFAULT_TEXT_SIZE))
}
