use serde::Serialize;
use thiserror::Error;
use tsp_core::{MatrixError, SolveError};

/// Category of a rejected or failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedRequest,
    MissingMatrix,
    InvalidMatrix,
    SizeExceeded,
    Internal,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request body is not a JSON object: {0}")]
    MalformedRequest(#[source] serde_json::Error),
    #[error("request has no matrix")]
    MissingMatrix,
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(#[source] MatrixError),
    #[error("matrix has {cities} cities, the limit is {max}")]
    SizeExceeded { cities: usize, max: usize },
    #[error("solver failed: {0}")]
    Internal(#[source] SolveError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::MalformedRequest(_) => ErrorKind::MalformedRequest,
            ServiceError::MissingMatrix => ErrorKind::MissingMatrix,
            ServiceError::InvalidMatrix(_) => ErrorKind::InvalidMatrix,
            ServiceError::SizeExceeded { .. } => ErrorKind::SizeExceeded,
            ServiceError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Suggested HTTP status for the transport layer.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Internal => 500,
            _ => 400,
        }
    }

    /// Caller-facing payload. Internal failures never expose table details.
    pub fn to_response(&self) -> ErrorResponse {
        let (error, message) = match self {
            ServiceError::MalformedRequest(_) => (
                "Invalid request body",
                "Request body must be a JSON object".to_string(),
            ),
            ServiceError::MissingMatrix => (
                "Missing required field: matrix",
                "Please provide a distance matrix".to_string(),
            ),
            ServiceError::InvalidMatrix(MatrixError::DistanceOverflow { .. }) => (
                "Invalid distance matrix",
                "Distances are too large to add up to a finite route length".to_string(),
            ),
            ServiceError::InvalidMatrix(_) => (
                "Invalid distance matrix",
                "Matrix must be square, have zero diagonal, and non-negative distances".to_string(),
            ),
            ServiceError::SizeExceeded { max, .. } => (
                "Matrix too large",
                format!("Maximum supported matrix size is {max}x{max} due to computational complexity"),
            ),
            ServiceError::Internal(_) => (
                "Internal server error",
                "Failed to optimize route. Please check your input and try again.".to_string(),
            ),
        };
        ErrorResponse {
            kind: self.kind(),
            error: error.to_string(),
            message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub error: String,
    pub message: String,
}
