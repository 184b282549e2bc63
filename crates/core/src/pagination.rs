//! Limit/offset bounds for list endpoints.

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 50;

/// Largest page a caller may request.
pub const MAX_LIMIT: i64 = 200;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
