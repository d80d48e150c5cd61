use sqlx::SqlitePool;

use crate::models::SignupRow;

/// Signup joined with the scalar fields of its activity, for camper detail
/// responses. The camper side is never re-expanded here.
#[derive(Debug, sqlx::FromRow)]
pub struct SignupActivityRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity_name: Option<String>,
    pub activity_difficulty: Option<i64>,
}

const SQL_LIST_SIGNUPS_FOR_CAMPER: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?1
ORDER BY s.id
"#;

pub async fn list_signups_for_camper(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Vec<SignupActivityRow>> {
    sqlx::query_as::<_, SignupActivityRow>(SQL_LIST_SIGNUPS_FOR_CAMPER)
        .bind(camper_id)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_SIGNUP: &str = r#"
SELECT
  id,
  time,
  camper_id,
  activity_id
FROM signups
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_signup_by_id(
    pool: &SqlitePool,
    signup_id: i64,
) -> sqlx::Result<Option<SignupRow>> {
    sqlx::query_as::<_, SignupRow>(SQL_LOAD_SIGNUP)
        .bind(signup_id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3)
"#;

pub async fn insert_signup(
    pool: &SqlitePool,
    time: i64,
    camper_id: i64,
    activity_id: i64,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP)
        .bind(time)
        .bind(camper_id)
        .bind(activity_id)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
