use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuildPointsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GuildPointsError>;
