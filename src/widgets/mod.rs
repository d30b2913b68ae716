//! Widget state structs (rendering-agnostic)
//!
//! State-only structures handed from the resolvers to whatever draws them.
//! No rendering logic lives here.

pub mod progress_bar;

pub use progress_bar::{EdgeAnchor, ProgressBarState, TextPosition};
