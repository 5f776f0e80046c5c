use thiserror::Error;

#[derive(Error, Debug)]
pub enum KardexError {
    #[error("{0} cannot be empty")]
    InvalidField(&'static str),

    #[error("A record with ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Malformed inventory data: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KardexError {
    /// Whether the interactive menu can report this error and keep running.
    /// I/O and malformed-state failures end the session instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidField(_) | Self::DuplicateId(_) | Self::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, KardexError>;
