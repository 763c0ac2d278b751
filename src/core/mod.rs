pub mod error;
pub mod types;

pub use error::{ArenaError, Result};
pub use types::{CombatantId, Round};
