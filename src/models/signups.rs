#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}
