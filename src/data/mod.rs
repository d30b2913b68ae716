//! Data layer - Pure state without UI coupling
//!
//! Entity snapshots, the registry, and the loose value coercions every
//! resolver shares. NO imports from core/ or frontend/.

pub mod entity;
pub mod number;

pub use entity::*;
