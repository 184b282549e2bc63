//! Row structs and input DTOs, one module per table.

pub mod conference;
pub mod submission;
pub mod talk;
pub mod talk_revision;
pub mod user;
