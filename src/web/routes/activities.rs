use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::activity_service;

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let activities = activity_service::list_activities(&pool).await?;
    Ok(Json(activities))
}

pub async fn delete_activity_handler(
    State(pool): State<SqlitePool>,
    Path(activity_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    activity_service::delete_activity(&pool, activity_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
