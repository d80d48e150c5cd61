use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::activity_repo;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ActivitySummaryView {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

pub async fn list_activities(pool: &SqlitePool) -> Result<Vec<ActivitySummaryView>, AppError> {
    let rows = activity_repo::list_activities(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| ActivitySummaryView {
            id: row.id,
            name: row.name,
            difficulty: row.difficulty,
        })
        .collect())
}

pub async fn delete_activity(pool: &SqlitePool, activity_id: i64) -> Result<(), AppError> {
    let deleted = activity_repo::delete_activity_with_signups(pool, activity_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Activity"));
    }
    Ok(())
}
