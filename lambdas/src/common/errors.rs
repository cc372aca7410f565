use std::fmt::Display;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to build response: {0}")]
    HttpError(#[from] lambda_http::http::Error),
}

/// Any failure reported by the store during a write. Throttling, validation,
/// transport and service faults are not told apart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to put record into {table_name}: {message}")]
pub struct StoreError {
    pub table_name: String,
    pub message: String,
}

impl StoreError {
    pub fn new(table_name: impl Into<String>, message: impl Display) -> Self {
        Self {
            table_name: table_name.into(),
            message: message.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
    #[error("table name must not be empty")]
    EmptyTableName,
}
