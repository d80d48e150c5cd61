use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the service layer. `Validation` and `NotFound` map to
/// client responses; anything else from the database stays a server error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation errors")]
    Validation(Vec<String>),
    #[error("database error: {0}")]
    Db(sqlx::Error),
}

fn is_constraint_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => matches!(
            db.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ),
        _ => false,
    }
}

impl From<sqlx::Error> for AppError {
    // Constraint violations on commit count as validation failures; callers
    // never need to tell the two apart.
    fn from(err: sqlx::Error) -> Self {
        if is_constraint_violation(&err) {
            AppError::Validation(vec!["validation errors".to_string()])
        } else {
            AppError::Db(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{} not found", entity) })),
            )
                .into_response(),
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::Db(err) => {
                error!("database failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
