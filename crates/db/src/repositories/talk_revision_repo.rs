//! Repository for the `talk_revisions` table.

use sqlx::PgPool;
use symposium_core::revision::current_revision;
use symposium_core::types::DbId;

use crate::models::talk_revision::{CreateTalkRevision, TalkRevision};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, talk_id, title, type, length, level, description, \
                                  slides, organizer_notes, created_at, updated_at";

/// Provides operations for talk revisions.
///
/// Revisions are append-only: a talk changes by gaining a new revision.
pub struct TalkRevisionRepo;

impl TalkRevisionRepo {
    /// Append a revision to `talk_id`. It becomes the talk's current revision.
    pub async fn create(
        pool: &PgPool,
        talk_id: DbId,
        input: &CreateTalkRevision,
    ) -> Result<TalkRevision, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let revision = Self::insert_inner(&mut tx, talk_id, input).await?;
        tx.commit().await?;
        Ok(revision)
    }

    /// Every revision of a talk, oldest first.
    pub async fn list_by_talk(
        pool: &PgPool,
        talk_id: DbId,
    ) -> Result<Vec<TalkRevision>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM talk_revisions WHERE talk_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, TalkRevision>(&query)
            .bind(talk_id)
            .fetch_all(pool)
            .await
    }

    /// Every revision of every talk authored by `author_id`, grouped by talk.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Vec<TalkRevision>, sqlx::Error> {
        let query = format!(
            "SELECT {cols} FROM talk_revisions r
             JOIN talks t ON t.id = r.talk_id
             WHERE t.author_id = $1
             ORDER BY r.talk_id, r.created_at, r.id",
            cols = prefixed_columns("r")
        );
        sqlx::query_as::<_, TalkRevision>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// The talk's current revision, or `None` if it has none.
    pub async fn find_current(
        pool: &PgPool,
        talk_id: DbId,
    ) -> Result<Option<TalkRevision>, sqlx::Error> {
        let revisions = Self::list_by_talk(pool, talk_id).await?;
        Ok(current_revision(&revisions).cloned())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert a revision within an existing transaction.
    pub(crate) async fn insert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        talk_id: DbId,
        input: &CreateTalkRevision,
    ) -> Result<TalkRevision, sqlx::Error> {
        let query = format!(
            "INSERT INTO talk_revisions
                (talk_id, title, type, length, level, description, slides, organizer_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TalkRevision>(&query)
            .bind(talk_id)
            .bind(&input.title)
            .bind(&input.talk_type)
            .bind(&input.length)
            .bind(&input.level)
            .bind(&input.description)
            .bind(&input.slides)
            .bind(&input.organizer_notes)
            .fetch_one(&mut **tx)
            .await
    }

    /// Load a talk's revisions within an existing transaction.
    pub(crate) async fn list_by_talk_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        talk_id: DbId,
    ) -> Result<Vec<TalkRevision>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talk_revisions WHERE talk_id = $1");
        sqlx::query_as::<_, TalkRevision>(&query)
            .bind(talk_id)
            .fetch_all(&mut **tx)
            .await
    }
}

/// `COLUMNS` qualified with a table alias, for joins.
fn prefixed_columns(alias: &str) -> String {
    COLUMNS
        .split(", ")
        .map(|c| format!("{alias}.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
