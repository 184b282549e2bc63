pub mod auth;
pub mod conference;
pub mod submission;
pub mod talk;
pub mod user_talks;
