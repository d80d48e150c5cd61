use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    pool
}

pub async fn seed_camper(pool: &SqlitePool, name: &str, age: i64) -> i64 {
    let res = sqlx::query("INSERT INTO campers (name, age) VALUES (?1, ?2)")
        .bind(name)
        .bind(age)
        .execute(pool)
        .await
        .unwrap();
    res.last_insert_rowid()
}

pub async fn seed_activity(pool: &SqlitePool, name: &str, difficulty: i64) -> i64 {
    let res = sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?1, ?2)")
        .bind(name)
        .bind(difficulty)
        .execute(pool)
        .await
        .unwrap();
    res.last_insert_rowid()
}

pub async fn seed_signup(pool: &SqlitePool, time: i64, camper_id: i64, activity_id: i64) -> i64 {
    let res = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3)")
        .bind(time)
        .bind(camper_id)
        .bind(activity_id)
        .execute(pool)
        .await
        .unwrap();
    res.last_insert_rowid()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .unwrap()
}
