pub mod auth;
pub mod conferences;
pub mod health;
pub mod submissions;
pub mod talks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /users/{user_id}/talks                           the caller's talks as resources
///
/// /talks                                           create talk + first revision
/// /talks/{id}/revisions                            append revision
/// /talks/{id}/submissions                          submissions of a talk
///
/// /conferences                                     list, create
/// /conferences/{id}                                get
/// /conferences/{id}/submissions                    submissions to a conference
///
/// /submissions                                     submit (POST), withdraw (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/talks", talks::router())
        .nest("/conferences", conferences::router())
        .nest("/submissions", submissions::router())
}
