//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_talks;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /{user_id}/talks                   -> index
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}/talks", get(user_talks::index))
}
