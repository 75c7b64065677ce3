//! Platform-agnostic scorecard state, derived values and layout math.

pub mod color;
pub mod format;
pub mod geometry;
pub mod platform;
pub mod score;
pub mod state;
pub mod style;
