use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    #[error("Obstacle registry is full: all {capacity} ids are in use")]
    RegistryFull { capacity: usize },

    #[error("Plan unavailable: {reason}")]
    PlanUnavailable { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
