use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("io error: {0}")]
    Io(String),
}

impl SimError {
    pub fn empty_requests() -> Self {
        SimError::InvalidInput("request sequence is empty".to_string())
    }

    pub fn bad_disk_size(disk_size: i64) -> Self {
        SimError::Configuration(format!("disk size must be positive, got {}", disk_size))
    }
}
