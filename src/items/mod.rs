//! Item system: catalog rows, inventory entries, equipment slots and enhancement.

pub mod enhancement;
pub mod equipment;
pub mod types;

pub use enhancement::*;
pub use equipment::*;
pub use types::*;
