//! Repository for the `conferences` table.

use sqlx::PgPool;
use symposium_core::conference_form::ConferenceInput;
use symposium_core::types::DbId;

use crate::models::conference::Conference;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, title, description, url, starts_at, ends_at, \
                       cfp_starts_at, cfp_ends_at, created_at, updated_at";

/// Provides create and read operations for conferences.
pub struct ConferenceRepo;

impl ConferenceRepo {
    /// Insert a validated conference owned by `author_id`.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &ConferenceInput,
    ) -> Result<Conference, sqlx::Error> {
        let query = format!(
            "INSERT INTO conferences
                (author_id, title, description, url, starts_at, ends_at, cfp_starts_at, cfp_ends_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(input.cfp_starts_at)
            .bind(input.cfp_ends_at)
            .fetch_one(pool)
            .await
    }

    /// Find a conference by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences WHERE id = $1");
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List conferences, soonest-starting first; undated conferences last.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Conference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM conferences
             ORDER BY starts_at ASC NULLS LAST, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
