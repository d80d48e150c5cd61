pub mod routes;

use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;

use crate::web::routes::{activities, campers, signups};

pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/campers",
            get(campers::campers_handler).post(campers::create_camper_handler),
        )
        .route(
            "/campers/:id",
            get(campers::camper_by_id_handler)
                .patch(campers::patch_camper_handler)
                .delete(campers::delete_camper_handler),
        )
        .route("/activities", get(activities::activities_handler))
        .route("/activities/:id", delete(activities::delete_activity_handler))
        .route("/signups", post(signups::create_signup_handler))
        .with_state(pool)
}
