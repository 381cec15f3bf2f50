//! Constants, configuration and the shared game context.

pub mod config;
pub mod constants;
pub mod context;

pub use config::*;
pub use constants::*;
pub use context::*;
