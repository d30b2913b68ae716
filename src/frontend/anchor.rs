//! Ancestor patches for edge-anchored bars
//!
//! An anchored bar is absolutely positioned, so the surfaces between it and
//! the card must stop being positioning contexts, the card must clip it, and
//! the card grid must stop reserving a row for it. Finding those surfaces is
//! the host's job ([`CardHost`]); this module only says what to change.

use crate::widgets::ProgressBarState;

/// Ancestor surfaces touched when anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSurface {
    Container,
    CardFeatures,
    Card,
    CardGrid,
}

impl CardSurface {
    /// Selector the host matches against, piercing shadow roots
    pub fn selector(&self) -> &'static str {
        match self {
            CardSurface::Container => ".container",
            CardSurface::CardFeatures => "hui-card-features",
            CardSurface::Card => "ha-card",
            CardSurface::CardGrid => ".card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchValue {
    Set(&'static str),
    /// Read the current integer value and write it back minus one
    DecrementRowSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePatch {
    pub surface: CardSurface,
    pub property: &'static str,
    pub value: PatchValue,
}

pub const ROW_SIZE_PROPERTY: &str = "--row-size";

/// Patches to apply for `state`; empty unless the bar is anchored
pub fn anchor_patch_plan(state: &ProgressBarState) -> Vec<StylePatch> {
    if !state.anchored {
        return Vec::new();
    }

    vec![
        StylePatch {
            surface: CardSurface::Container,
            property: "position",
            value: PatchValue::Set("static"),
        },
        StylePatch {
            surface: CardSurface::CardFeatures,
            property: "position",
            value: PatchValue::Set("static"),
        },
        StylePatch {
            surface: CardSurface::Card,
            property: "overflow",
            value: PatchValue::Set("hidden"),
        },
        StylePatch {
            surface: CardSurface::CardGrid,
            property: ROW_SIZE_PROPERTY,
            value: PatchValue::DecrementRowSize,
        },
    ]
}

/// Leading integer of `value` minus one; `None` if there is no leading integer
pub fn decrement_row_size(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    let rows: i64 = trimmed[..digits_end].parse().ok()?;
    Some(rows.checked_sub(1)?.to_string())
}

/// Surfaces of one rendered card, as seen from the bar element
pub trait CardHost {
    /// Computed value of `property` on `surface`, if the surface exists
    fn computed_style(&self, surface: CardSurface, property: &str) -> Option<String>;

    /// Set an inline style; returns false when the surface is not found
    fn set_style(&mut self, surface: CardSurface, property: &str, value: &str) -> bool;
}

/// Apply `plan` to `host`, returning how many patches took effect
pub fn apply_anchor_patches(host: &mut dyn CardHost, plan: &[StylePatch]) -> usize {
    let mut applied = 0;

    for patch in plan {
        let value = match patch.value {
            PatchValue::Set(value) => value.to_string(),
            PatchValue::DecrementRowSize => {
                let current = host.computed_style(patch.surface, patch.property);
                match current.as_deref().and_then(decrement_row_size) {
                    Some(value) => value,
                    None => {
                        tracing::debug!(
                            "Leaving {} on {} untouched: {:?}",
                            patch.property,
                            patch.surface.selector(),
                            current
                        );
                        continue;
                    }
                }
            }
        };

        if host.set_style(patch.surface, patch.property, &value) {
            applied += 1;
        } else {
            tracing::debug!("No {} surface found for anchoring", patch.surface.selector());
        }
    }

    applied
}
