//! Handlers for `/users/{user_id}/talks`.

use axum::extract::{Path, State};
use axum::Json;
use symposium_core::error::CoreError;
use symposium_core::types::DbId;
use symposium_db::repositories::{TalkRepo, TalkRevisionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::resources::talk::{build_talk_resources, TalkResource};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{user_id}/talks
///
/// Display all of the given user's talks. Only the user themselves may look;
/// anyone else gets 404, exactly as if the user did not exist.
pub async fn index(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TalkResource>>>> {
    if !auth.owns(user_id) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    let talks = TalkRepo::list_by_author(&state.pool, user_id).await?;
    let revisions = TalkRevisionRepo::list_by_author(&state.pool, user_id).await?;

    Ok(Json(DataResponse {
        data: build_talk_resources(&talks, revisions),
    }))
}
