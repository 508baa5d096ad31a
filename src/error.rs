use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::{error, warn};

/// Wire-level error. Every variant maps to a fixed status code and a JSON
/// body of the shape `{"message": ...}`; no driver detail reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied, no token provided")]
    NoToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Converts a store failure into the fixed per-endpoint 500, keeping the
/// driver detail in the server log only. Constraint violations are logged
/// at warn so they can be told apart from connectivity problems.
pub fn store_error(msg: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
    move |e| {
        match e.as_database_error().map(|db| db.kind()) {
            Some(
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation,
            ) => warn!(error = %e, "constraint violation: {msg}"),
            _ => error!(error = %e, "{msg}"),
        }
        ApiError::Internal(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::NoToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::BadRequest("User not found").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Invoice not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("Failed to fetch invoices").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_text() {
        assert_eq!(
            ApiError::NoToken.to_string(),
            "Access denied, no token provided"
        );
        assert_eq!(ApiError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(
            ApiError::NotFound("Zakazka not found").to_string(),
            "Zakazka not found"
        );
    }
}
