use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Unknown combatant class: {0}")]
    UnknownClass(String),

    #[error("Roster needs at least two combatants, got {0}")]
    RosterTooSmall(usize),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
