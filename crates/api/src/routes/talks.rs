//! Route definitions for the `/talks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::talk;
use crate::state::AppState;

/// Routes mounted at `/talks`.
///
/// ```text
/// POST   /                                  -> create
/// POST   /{id}/revisions                    -> create_revision
/// GET    /{id}/submissions                  -> list_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(talk::create))
        .route("/{id}/revisions", post(talk::create_revision))
        .route("/{id}/submissions", get(talk::list_submissions))
}
