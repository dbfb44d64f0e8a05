use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A record submitted for writing lacks a usable string `id`.
    #[error("ID is a required field")]
    IdRequired,

    /// A destructive reset was attempted outside test mode without force.
    #[error("refusing to reset the data file outside test mode (pass force to override)")]
    ResetNotPermitted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
