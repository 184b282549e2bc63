//! Talk entity model.

use serde::Serialize;
use sqlx::FromRow;
use symposium_core::types::{DbId, Timestamp};

/// A talk row from the `talks` table. All content lives on its revisions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Talk {
    pub id: DbId,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
