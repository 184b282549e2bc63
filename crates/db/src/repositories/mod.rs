//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod conference_repo;
pub mod submission_repo;
pub mod talk_repo;
pub mod talk_revision_repo;
pub mod user_repo;

pub use conference_repo::ConferenceRepo;
pub use submission_repo::SubmissionRepo;
pub use talk_repo::TalkRepo;
pub use talk_revision_repo::TalkRevisionRepo;
pub use user_repo::UserRepo;
