use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Stored or submitted content is not a JSON object.
    #[error("parse error: {0}")]
    Parse(String),
    #[error("read error: {0}")]
    Read(String),
    #[error("write error: {0}")]
    Write(String),
}

impl ServiceError {
    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Parse(_) => 1101,
            ServiceError::Read(_) => 1201,
            ServiceError::Write(_) => 1202,
        }
    }
}
