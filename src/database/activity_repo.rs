use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id,
  name,
  difficulty
FROM activities
ORDER BY id
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_ACTIVITY: &str = r#"
SELECT
  id,
  name,
  difficulty
FROM activities
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_activity_by_id(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_ACTIVITY)
        .bind(activity_id)
        .fetch_optional(pool)
        .await
}

const SQL_DELETE_SIGNUPS_FOR_ACTIVITY: &str = r#"
DELETE FROM signups WHERE activity_id = ?1
"#;

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities WHERE id = ?1
"#;

/// Removes an activity and its signups in one transaction.
/// Returns the number of activity rows deleted (0 when the id is unknown).
pub async fn delete_activity_with_signups(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    sqlx::query(SQL_DELETE_SIGNUPS_FOR_ACTIVITY)
        .bind(activity_id)
        .execute(&mut *tx)
        .await?;
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(activity_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(res.rows_affected())
}
