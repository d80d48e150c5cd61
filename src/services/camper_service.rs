use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::signup_repo::SignupActivityRow;
use crate::database::{camper_repo, signup_repo};
use crate::error::AppError;
use crate::models::CamperRow;
use crate::services::activity_service::ActivitySummaryView;

#[derive(Debug, Deserialize)]
pub struct NewCamper {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Deserialize, Default)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Restricted shape returned by list queries.
#[derive(Debug, Serialize)]
pub struct CamperSummaryView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummaryView,
}

#[derive(Debug, Serialize)]
pub struct CamperDetailView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

fn check_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name required".to_string());
    }
    Ok(())
}

fn check_age(age: i64) -> Result<(), String> {
    if !(8..=18).contains(&age) {
        return Err("age out of range".to_string());
    }
    Ok(())
}

pub async fn list_campers(pool: &SqlitePool) -> Result<Vec<CamperSummaryView>, AppError> {
    let rows = camper_repo::list_campers(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| CamperSummaryView {
            id: row.id,
            name: row.name,
            age: row.age,
        })
        .collect())
}

pub async fn load_camper_detail(
    pool: &SqlitePool,
    camper_id: i64,
) -> Result<CamperDetailView, AppError> {
    let Some(row) = camper_repo::load_camper_by_id(pool, camper_id).await? else {
        return Err(AppError::NotFound("Camper"));
    };
    let signups = signup_repo::list_signups_for_camper(pool, camper_id).await?;
    Ok(build_detail_view(row, signups))
}

pub async fn create_camper(
    pool: &SqlitePool,
    new: NewCamper,
) -> Result<CamperDetailView, AppError> {
    let mut errors = Vec::new();
    let name = new.name.unwrap_or_default();
    if let Err(e) = check_name(&name) {
        errors.push(e);
    }
    if let Some(age) = new.age {
        if let Err(e) = check_age(age) {
            errors.push(e);
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // An absent age falls through to the NOT NULL column constraint.
    let camper_id = camper_repo::insert_camper(pool, &name, new.age).await?;
    load_camper_detail(pool, camper_id).await
}

pub async fn update_camper(
    pool: &SqlitePool,
    camper_id: i64,
    patch: CamperPatch,
) -> Result<CamperDetailView, AppError> {
    let Some(current) = camper_repo::load_camper_by_id(pool, camper_id).await? else {
        return Err(AppError::NotFound("Camper"));
    };

    // Only the fields present in the patch are re-validated.
    let mut errors = Vec::new();
    if let Some(name) = patch.name.as_deref() {
        if let Err(e) = check_name(name) {
            errors.push(e);
        }
    }
    if let Some(age) = patch.age {
        if let Err(e) = check_age(age) {
            errors.push(e);
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let name = patch.name.unwrap_or(current.name);
    let age = patch.age.unwrap_or(current.age);
    camper_repo::update_camper(pool, camper_id, &name, age).await?;
    load_camper_detail(pool, camper_id).await
}

pub async fn delete_camper(pool: &SqlitePool, camper_id: i64) -> Result<(), AppError> {
    let deleted = camper_repo::delete_camper_with_signups(pool, camper_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Camper"));
    }
    Ok(())
}

fn build_detail_view(row: CamperRow, signups: Vec<SignupActivityRow>) -> CamperDetailView {
    CamperDetailView {
        id: row.id,
        name: row.name,
        age: row.age,
        signups: signups
            .into_iter()
            .map(|s| CamperSignupView {
                id: s.id,
                time: s.time,
                camper_id: s.camper_id,
                activity_id: s.activity_id,
                activity: ActivitySummaryView {
                    id: s.activity_id,
                    name: s.activity_name,
                    difficulty: s.activity_difficulty,
                },
            })
            .collect(),
    }
}
