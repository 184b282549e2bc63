//! Repository for the `submissions` table.
//!
//! Submissions are created and withdrawn per (conference, talk) pair. A
//! submission always points at one concrete revision, but withdrawal
//! matches on every revision of the talk so that a talk revised after
//! submission can still be withdrawn.

use sqlx::PgPool;
use symposium_core::revision::current_revision;
use symposium_core::types::DbId;
use uuid::Uuid;

use crate::models::submission::Submission;
use crate::repositories::TalkRevisionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, conference_id, talk_revision_id, created_at, updated_at";

/// Provides the submission lifecycle and submission lookups.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Submit the talk's current revision to a conference.
    ///
    /// Returns `None` when the talk has no revisions (including when the
    /// talk does not exist). Submitting the same talk twice creates two
    /// rows.
    pub async fn create_for_talk(
        pool: &PgPool,
        conference_id: DbId,
        talk_id: DbId,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let revisions = TalkRevisionRepo::list_by_talk_inner(&mut tx, talk_id).await?;
        let Some(revision) = current_revision(&revisions) else {
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO submissions (id, conference_id, talk_revision_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let submission = sqlx::query_as::<_, Submission>(&query)
            .bind(Uuid::new_v4().to_string())
            .bind(conference_id)
            .bind(revision.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            submission_id = %submission.id,
            conference_id,
            talk_id,
            talk_revision_id = revision.id,
            "Inserted submission"
        );
        Ok(Some(submission))
    }

    /// Withdraw a talk from one conference.
    ///
    /// Deletes every submission joining `conference_id` to any revision of
    /// `talk_id`, current or historical. Other conferences, other talks and
    /// the conference and talk rows are untouched. Returns the number of
    /// rows removed; zero is not an error.
    pub async fn delete_for_talk(
        pool: &PgPool,
        conference_id: DbId,
        talk_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM submissions
             WHERE conference_id = $1
               AND talk_revision_id IN (SELECT id FROM talk_revisions WHERE talk_id = $2)",
        )
        .bind(conference_id)
        .bind(talk_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Find a submission by its UUID string.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All submissions to a conference, in submission order.
    pub async fn list_by_conference(
        pool: &PgPool,
        conference_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE conference_id = $1
             ORDER BY created_at, talk_revision_id"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(conference_id)
            .fetch_all(pool)
            .await
    }

    /// All submissions pointing at one specific revision.
    pub async fn list_by_revision(
        pool: &PgPool,
        talk_revision_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE talk_revision_id = $1
             ORDER BY created_at, conference_id"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(talk_revision_id)
            .fetch_all(pool)
            .await
    }

    /// All submissions of any revision of a talk.
    pub async fn list_by_talk(
        pool: &PgPool,
        talk_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        sqlx::query_as::<_, Submission>(
            "SELECT s.id, s.conference_id, s.talk_revision_id, s.created_at, s.updated_at
             FROM submissions s
             JOIN talk_revisions r ON r.id = s.talk_revision_id
             WHERE r.talk_id = $1
             ORDER BY s.created_at, s.conference_id",
        )
        .bind(talk_id)
        .fetch_all(pool)
        .await
    }

    /// Number of submissions to a conference.
    pub async fn count_by_conference(
        pool: &PgPool,
        conference_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM submissions WHERE conference_id = $1")
            .bind(conference_id)
            .fetch_one(pool)
            .await
    }
}
