use crate::types::DbId;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Missing, or owned by someone other than the caller.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
