use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::{activity_repo, camper_repo, signup_repo};
use crate::error::AppError;
use crate::services::activity_service::ActivitySummaryView;
use crate::services::camper_service::CamperSummaryView;

#[derive(Debug, Deserialize)]
pub struct NewSignup {
    pub time: Option<i64>,
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SignupDetailView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummaryView,
    pub camper: CamperSummaryView,
}

fn check_time(time: i64) -> Result<(), String> {
    if !(0..=23).contains(&time) {
        return Err("time out of range".to_string());
    }
    Ok(())
}

pub async fn create_signup(
    pool: &SqlitePool,
    new: NewSignup,
) -> Result<SignupDetailView, AppError> {
    let mut errors = Vec::new();
    if let Some(time) = new.time {
        if let Err(e) = check_time(time) {
            errors.push(e);
        }
    }

    // Foreign-key targets are checked up front so the caller gets a field
    // error instead of a bare constraint failure.
    let camper = match new.camper_id {
        Some(id) => {
            let found = camper_repo::load_camper_by_id(pool, id).await?;
            if found.is_none() {
                errors.push("camper_id invalid".to_string());
            }
            found
        }
        None => None,
    };
    let activity = match new.activity_id {
        Some(id) => {
            let found = activity_repo::load_activity_by_id(pool, id).await?;
            if found.is_none() {
                errors.push("activity_id invalid".to_string());
            }
            found
        }
        None => None,
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let (Some(time), Some(camper), Some(activity)) = (new.time, camper, activity) else {
        // Absent fields would only bounce off the NOT NULL constraints.
        return Err(AppError::Validation(vec!["validation errors".to_string()]));
    };

    let signup_id = signup_repo::insert_signup(pool, time, camper.id, activity.id).await?;
    let Some(signup) = signup_repo::load_signup_by_id(pool, signup_id).await? else {
        return Err(AppError::NotFound("Signup"));
    };

    Ok(SignupDetailView {
        id: signup.id,
        time: signup.time,
        camper_id: signup.camper_id,
        activity_id: signup.activity_id,
        activity: ActivitySummaryView {
            id: activity.id,
            name: activity.name,
            difficulty: activity.difficulty,
        },
        camper: CamperSummaryView {
            id: camper.id,
            name: camper.name,
            age: camper.age,
        },
    })
}
