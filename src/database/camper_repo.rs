use sqlx::SqlitePool;

use crate::models::CamperRow;

const SQL_LIST_CAMPERS: &str = r#"
SELECT
  id,
  name,
  age
FROM campers
ORDER BY id
"#;

pub async fn list_campers(pool: &SqlitePool) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_CAMPERS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_CAMPER: &str = r#"
SELECT
  id,
  name,
  age
FROM campers
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_camper_by_id(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Option<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LOAD_CAMPER)
        .bind(camper_id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_CAMPER: &str = r#"
INSERT INTO campers (name, age) VALUES (?1, ?2)
"#;

pub async fn insert_camper(
    pool: &SqlitePool,
    name: &str,
    age: Option<i64>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_CAMPER)
        .bind(name)
        .bind(age)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_CAMPER: &str = r#"
UPDATE campers SET name = ?1, age = ?2 WHERE id = ?3
"#;

pub async fn update_camper(
    pool: &SqlitePool,
    camper_id: i64,
    name: &str,
    age: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_CAMPER)
        .bind(name)
        .bind(age)
        .bind(camper_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_SIGNUPS_FOR_CAMPER: &str = r#"
DELETE FROM signups WHERE camper_id = ?1
"#;

const SQL_DELETE_CAMPER: &str = r#"
DELETE FROM campers WHERE id = ?1
"#;

/// Removes a camper and its signups in one transaction.
/// Returns the number of camper rows deleted (0 when the id is unknown).
pub async fn delete_camper_with_signups(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    sqlx::query(SQL_DELETE_SIGNUPS_FOR_CAMPER)
        .bind(camper_id)
        .execute(&mut *tx)
        .await?;
    let res = sqlx::query(SQL_DELETE_CAMPER)
        .bind(camper_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(res.rows_affected())
}
