//! Turn-based combat: difficulty profiles, monsters, resolution math and the
//! encounter state machine.

pub mod difficulty;
pub mod logic;
pub mod math;
pub mod types;

pub use difficulty::*;
pub use logic::*;
pub use types::*;
