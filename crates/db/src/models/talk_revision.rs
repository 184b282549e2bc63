//! Talk revision entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use symposium_core::revision::Revision;
use symposium_core::types::{DbId, Timestamp};
use validator::Validate;

/// A revision row from the `talk_revisions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TalkRevision {
    pub id: DbId,
    pub talk_id: DbId,
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub talk_type: Option<String>,
    pub length: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub slides: Option<String>,
    pub organizer_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Revision for TalkRevision {
    fn revision_id(&self) -> DbId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for a new revision. Also used for the first revision of a new talk.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTalkRevision {
    #[validate(length(min = 1, max = 255, message = "The title field is required."))]
    pub title: String,
    #[serde(rename = "type")]
    #[validate(length(max = 255))]
    pub talk_type: Option<String>,
    #[validate(length(max = 255))]
    pub length: Option<String>,
    #[validate(length(max = 255))]
    pub level: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub slides: Option<String>,
    pub organizer_notes: Option<String>,
}
