//! Renderers turning a snapshot into output.
//!
//! Icon asset lookup lives here rather than in the engine, which only knows
//! abstract tiers and bands.

pub mod icons;
pub mod json;
pub mod text;

pub use icons::IconStyle;
