//! Route definitions for the `/conferences` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::conference;
use crate::state::AppState;

/// Routes mounted at `/conferences`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// GET    /{id}/submissions                  -> list_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(conference::list).post(conference::create))
        .route("/{id}", get(conference::get_by_id))
        .route("/{id}/submissions", get(conference::list_submissions))
}
