//! Handlers for the `/submissions` resource.
//!
//! Both endpoints address a submission by its (conference, talk) pair
//! rather than by submission id.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use symposium_core::error::CoreError;
use symposium_core::types::DbId;
use symposium_db::models::submission::Submission;
use symposium_db::repositories::{ConferenceRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::talk::find_owned_talk;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating or withdrawing a submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub conference_id: DbId,
    pub talk_id: DbId,
}

/// POST /api/v1/submissions
///
/// Submit the current revision of the caller's talk to a conference.
/// Someone else's talk answers 404 and nothing is written.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmissionRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Submission>>)> {
    let talk = find_owned_talk(&state, input.talk_id, &auth).await?;

    ConferenceRepo::find_by_id(&state.pool, input.conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: input.conference_id,
        }))?;

    let submission = SubmissionRepo::create_for_talk(&state.pool, input.conference_id, talk.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TalkRevision",
            id: talk.id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        conference_id = input.conference_id,
        talk_id = talk.id,
        submission_id = %submission.id,
        "Talk submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// DELETE /api/v1/submissions
///
/// Withdraw the caller's talk from one conference. Succeeds with 204 even
/// when there was nothing to withdraw.
pub async fn destroy(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmissionRequest>,
) -> AppResult<StatusCode> {
    let talk = find_owned_talk(&state, input.talk_id, &auth).await?;

    let removed = SubmissionRepo::delete_for_talk(&state.pool, input.conference_id, talk.id).await?;

    tracing::info!(
        user_id = auth.user_id,
        conference_id = input.conference_id,
        talk_id = talk.id,
        removed,
        "Talk withdrawn"
    );

    Ok(StatusCode::NO_CONTENT)
}
