//! Handlers for the `/conferences` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use symposium_core::conference_form;
use symposium_core::error::CoreError;
use symposium_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use symposium_core::types::DbId;
use symposium_db::models::conference::Conference;
use symposium_db::models::submission::Submission;
use symposium_db::repositories::{ConferenceRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

async fn find_conference(state: &AppState, id: DbId) -> AppResult<Conference> {
    ConferenceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id,
        }))
}

/// POST /api/v1/conferences
///
/// The body is taken as a raw form: empty fields are dropped, the rest is
/// validated, and the conference is stored with the caller as author.
/// Validation failures answer 422 with the per-field error list.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(raw): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<DataResponse<Conference>>)> {
    let input = conference_form::fill_out(raw)?;

    let conference = ConferenceRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        conference_id = conference.id,
        "Conference created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: conference })))
}

/// GET /api/v1/conferences
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Conference>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let conferences = ConferenceRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: conferences }))
}

/// GET /api/v1/conferences/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Conference>>> {
    let conference = find_conference(&state, id).await?;
    Ok(Json(DataResponse { data: conference }))
}

/// GET /api/v1/conferences/{id}/submissions
///
/// All submissions to the conference, in submission order.
pub async fn list_submissions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let conference = find_conference(&state, id).await?;
    let submissions = SubmissionRepo::list_by_conference(&state.pool, conference.id).await?;
    Ok(Json(DataResponse { data: submissions }))
}
