use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use refmirror_finder::FindError;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The mirror lookup itself failed — distinct from a successful
    /// lookup that found nothing.
    #[error("mirror lookup failed: {0}")]
    Lookup(#[from] FindError),

    /// The per-request time budget ran out.
    #[error("request timed out")]
    Timeout,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Lookup(err) if err.is_cancelled() => StatusCode::REQUEST_TIMEOUT,
            Self::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
