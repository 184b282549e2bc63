//! Conference entity model.
//!
//! Conferences are created from [`symposium_core::conference_form::ConferenceInput`],
//! so there is no separate create DTO here.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use symposium_core::types::{DbId, Timestamp};

/// A conference row from the `conferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Conference {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub starts_at: Option<NaiveDate>,
    pub ends_at: Option<NaiveDate>,
    pub cfp_starts_at: Option<NaiveDate>,
    pub cfp_ends_at: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
