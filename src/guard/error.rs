use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Any non-2xx answer from the backend. The status is preserved for
    /// logging, but callers must treat every variant of this as a plain
    /// failure.
    #[error("request failed: {status}, {message}")]
    RequestFailed { status: StatusCode, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("session store: {0}")]
    Store(#[from] std::io::Error),
    #[error("invalid session file: {0}")]
    Json(#[from] serde_json::Error),
}
