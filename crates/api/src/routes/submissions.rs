//! Route definitions for the `/submissions` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST   /                                  -> create
/// DELETE /                                  -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submission::create).delete(submission::destroy))
}
