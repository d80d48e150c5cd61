pub mod activity_repo;
pub mod camper_repo;
pub mod signup_repo;
