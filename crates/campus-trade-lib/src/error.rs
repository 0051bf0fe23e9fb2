use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
    #[error("date has invalid format: {0:?}")]
    InvalidDate(String),
    #[error("{0} is not a supported image")]
    UnsupportedFile(String),
    #[error("{name} is too large ({size} bytes)")]
    FileTooLarge { name: String, size: u64 },
}
