pub mod activities;
pub mod campers;
pub mod signups;

pub use activities::ActivityRow;
pub use campers::CamperRow;
pub use signups::SignupRow;
