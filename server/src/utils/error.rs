use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Failure while writing to the store; reported to the caller as a bad request.
    #[error("{0}")]
    WriteFailed(StoreError),

    #[error("{0}")]
    ReadFailed(StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::WriteFailed(_) => StatusCode::BAD_REQUEST,
            AppError::ReadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(msg) => {
                error!(message = %msg, "Validation error");
            }
            AppError::WriteFailed(e) => {
                error!(error = ?e, "Failed to store user");
            }
            AppError::ReadFailed(e) => {
                error!(error = ?e, "Failed to read users");
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        self.log();

        error_response(self.to_string(), status)
    }
}
