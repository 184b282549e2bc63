//! Liveness and schema status at `GET /health`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and the schema is current.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the migration table could not be read.
    pub pending_migrations: Option<usize>,
}

impl HealthResponse {
    fn new(db_healthy: bool, pending_migrations: Option<usize>) -> Self {
        let schema_current = pending_migrations == Some(0);
        Self {
            status: if db_healthy && schema_current { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            pending_migrations,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = symposium_db::health_check(&state.pool).await.is_ok();

    let pending = if db_healthy {
        match symposium_db::pending_migrations(&state.pool).await {
            Ok(n) => Some(n),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read migration status");
                None
            }
        }
    } else {
        None
    };

    Json(HealthResponse::new(db_healthy, pending))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_migrations_degrade_status() {
        assert_eq!(HealthResponse::new(true, Some(0)).status, "ok");
        assert_eq!(HealthResponse::new(true, Some(2)).status, "degraded");
        assert_eq!(HealthResponse::new(true, None).status, "degraded");
        assert_eq!(HealthResponse::new(false, None).status, "degraded");
    }
}
