use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// The record store could not be read. Callers recover from this by
/// showing an empty dataset; it never aborts a session.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("record store unreachable: {0}")]
    Transport(String),
    #[error("record store did not answer within {0:?}")]
    TimedOut(Duration),
}

impl From<mongodb::error::Error> for ConnectionError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
