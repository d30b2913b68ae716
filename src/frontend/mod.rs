//! Host adapter layer
//!
//! Turns a resolved [`ProgressBarState`](crate::widgets::ProgressBarState)
//! into what a DOM host consumes: the inline custom-property block, class
//! names, and the ancestor patches that let an anchored bar reach the card
//! edge. Nothing here feeds back into resolution.

pub mod anchor;
pub mod css;

pub use anchor::{anchor_patch_plan, apply_anchor_patches, CardHost, CardSurface, StylePatch};
pub use css::{style_declaration, StyleDeclaration};
