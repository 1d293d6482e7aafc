// errors.rs
use astra::Response;
use std::io;
use thiserror::Error;

/// Errors raised while serving a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Export Error: {0}")]
    ExportError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Errors that stop the listings dataset from loading at all.
/// Individual bad rows are dropped and counted instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' not found in CSV header")]
    MissingColumn(&'static str),
    #[error("no valid listings remain after dropping {dropped} malformed rows")]
    NoValidRows { dropped: usize },
}
