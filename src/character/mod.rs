//! Characters: attributes, the character record, derived stats and progression.

pub mod attributes;
pub mod derived_stats;
pub mod progression;
pub mod types;

pub use attributes::*;
pub use derived_stats::*;
pub use progression::*;
pub use types::*;
