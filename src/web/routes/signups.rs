use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::signup_service::{self, NewSignup};

pub async fn create_signup_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<NewSignup>,
) -> Result<impl IntoResponse, AppError> {
    let signup = signup_service::create_signup(&pool, body).await?;
    Ok((StatusCode::CREATED, Json(signup)))
}
