// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Every way an analysis request can fail. Malformed HTML is not in here: the
/// extractor degrades to default values instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Unable to reach the website: {0}")]
    UnreachableHost(String),
    #[error("Page not found: {0}")]
    NotFound(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput(_) => "invalid_input",
            AnalysisError::UnreachableHost(_) => "unreachable_host",
            AnalysisError::NotFound(_) => "not_found",
            AnalysisError::Upstream(_) => "upstream_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::InvalidInput(_) | AnalysisError::UnreachableHost(_) => {
                StatusCode::BAD_REQUEST
            }
            AnalysisError::NotFound(_) => StatusCode::NOT_FOUND,
            AnalysisError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_4xx_and_upstream_is_5xx() {
        assert_eq!(
            AnalysisError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AnalysisError::UnreachableHost("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AnalysisError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert!(AnalysisError::Upstream("x".into())
            .status_code()
            .is_server_error());
    }

    #[test]
    fn messages_are_human_readable() {
        let err = AnalysisError::UnreachableHost("example.invalid".into());
        assert!(err.to_string().starts_with("Unable to reach the website"));
        assert_eq!(err.kind(), "unreachable_host");
    }
}
