//! Handlers for the `/talks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use symposium_core::error::CoreError;
use symposium_core::types::DbId;
use symposium_db::models::submission::Submission;
use symposium_db::models::talk::Talk;
use symposium_db::models::talk_revision::{CreateTalkRevision, TalkRevision};
use symposium_db::repositories::{SubmissionRepo, TalkRepo, TalkRevisionRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::resources::talk::TalkResource;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a talk the caller owns, or 404.
pub(crate) async fn find_owned_talk(
    state: &AppState,
    talk_id: DbId,
    auth: &AuthUser,
) -> AppResult<Talk> {
    TalkRepo::find_owned(&state.pool, talk_id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Talk",
            id: talk_id,
        }))
}

/// POST /api/v1/talks
///
/// Create a talk with its first revision. Responds with the talk resource.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTalkRevision>,
) -> AppResult<(StatusCode, Json<DataResponse<TalkResource>>)> {
    input.validate()?;

    let (talk, revision) = TalkRepo::create_with_revision(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        talk_id = talk.id,
        talk_revision_id = revision.id,
        "Talk created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TalkResource::new(&talk, &revision),
        }),
    ))
}

/// POST /api/v1/talks/{id}/revisions
///
/// Append a revision; it becomes the talk's current revision. Existing
/// submissions keep pointing at the revision they were made with.
pub async fn create_revision(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(talk_id): Path<DbId>,
    Json(input): Json<CreateTalkRevision>,
) -> AppResult<(StatusCode, Json<DataResponse<TalkRevision>>)> {
    input.validate()?;
    let talk = find_owned_talk(&state, talk_id, &auth).await?;

    let revision = TalkRevisionRepo::create(&state.pool, talk.id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        talk_id = talk.id,
        talk_revision_id = revision.id,
        "Talk revision created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: revision })))
}

/// GET /api/v1/talks/{id}/submissions
///
/// Every submission of any revision of the caller's talk.
pub async fn list_submissions(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(talk_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let talk = find_owned_talk(&state, talk_id, &auth).await?;
    let submissions = SubmissionRepo::list_by_talk(&state.pool, talk.id).await?;
    Ok(Json(DataResponse { data: submissions }))
}
