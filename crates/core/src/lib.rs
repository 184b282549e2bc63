//! Domain logic for the Symposium submission tracker.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! persists what these modules produce and the `api` crate wires both to
//! axum handlers.

pub mod conference_form;
pub mod error;
pub mod pagination;
pub mod revision;
pub mod types;
pub mod validation;
