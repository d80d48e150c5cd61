use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::camper_service::{self, CamperPatch, NewCamper};

pub async fn campers_handler(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let campers = camper_service::list_campers(&pool).await?;
    Ok(Json(campers))
}

pub async fn create_camper_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<NewCamper>,
) -> Result<impl IntoResponse, AppError> {
    let camper = camper_service::create_camper(&pool, body).await?;
    Ok((StatusCode::CREATED, Json(camper)))
}

pub async fn camper_by_id_handler(
    State(pool): State<SqlitePool>,
    Path(camper_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let camper = camper_service::load_camper_detail(&pool, camper_id).await?;
    Ok(Json(camper))
}

pub async fn patch_camper_handler(
    State(pool): State<SqlitePool>,
    Path(camper_id): Path<i64>,
    Json(body): Json<CamperPatch>,
) -> Result<impl IntoResponse, AppError> {
    let camper = camper_service::update_camper(&pool, camper_id, body).await?;
    Ok((StatusCode::ACCEPTED, Json(camper)))
}

pub async fn delete_camper_handler(
    State(pool): State<SqlitePool>,
    Path(camper_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    camper_service::delete_camper(&pool, camper_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
