//! Current-revision selection for talks.
//!
//! A talk keeps every revision it ever had. The one created last is the
//! talk's *current* revision and is the only one new submissions point at.

use crate::types::{DbId, Timestamp};

/// Anything that can take part in current-revision selection.
pub trait Revision {
    fn revision_id(&self) -> DbId;
    fn created_at(&self) -> Timestamp;
}

/// Pick the current revision: latest `created_at`, ties broken by the
/// highest id.
///
/// Returns `None` for an empty slice.
pub fn current_revision<R: Revision>(revisions: &[R]) -> Option<&R> {
    revisions
        .iter()
        .max_by_key(|r| (r.created_at(), r.revision_id()))
}
