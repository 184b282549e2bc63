//! Submission entity model.

use serde::Serialize;
use sqlx::FromRow;
use symposium_core::types::{DbId, Timestamp};

/// A submission row: one talk revision submitted to one conference.
///
/// `id` is a UUID v4 rendered as a 36-character string.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Submission {
    pub id: String,
    pub conference_id: DbId,
    pub talk_revision_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
