use thiserror::Error;

/// Raised by the checked summation entry points.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SummationError {
    #[error("element count {count} exceeds sequence length {len}")]
    CountExceedsLength { count: usize, len: usize },
    #[error("adding offset {offset} to sum {sum} overflows i64")]
    OffsetOverflow { sum: i64, offset: i64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse summation config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
