//! Repository for the `talks` table.

use sqlx::PgPool;
use symposium_core::types::DbId;

use crate::models::talk::Talk;
use crate::models::talk_revision::{CreateTalkRevision, TalkRevision};
use crate::repositories::TalkRevisionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, created_at, updated_at";

/// Provides operations for talks.
pub struct TalkRepo;

impl TalkRepo {
    /// Create a talk together with its first revision in one transaction.
    pub async fn create_with_revision(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateTalkRevision,
    ) -> Result<(Talk, TalkRevision), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO talks (author_id) VALUES ($1) RETURNING {COLUMNS}");
        let talk = sqlx::query_as::<_, Talk>(&query)
            .bind(author_id)
            .fetch_one(&mut *tx)
            .await?;

        let revision = TalkRevisionRepo::insert_inner(&mut tx, talk.id, input).await?;

        tx.commit().await?;
        Ok((talk, revision))
    }

    /// Find a talk by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Talk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talks WHERE id = $1");
        sqlx::query_as::<_, Talk>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a talk only if `author_id` wrote it.
    ///
    /// Someone else's talk and a missing talk both come back as `None`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        author_id: DbId,
    ) -> Result<Option<Talk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talks WHERE id = $1 AND author_id = $2");
        sqlx::query_as::<_, Talk>(&query)
            .bind(id)
            .bind(author_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's talks, oldest first.
    pub async fn list_by_author(pool: &PgPool, author_id: DbId) -> Result<Vec<Talk>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM talks WHERE author_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Talk>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }
}
