//! ID generation utilities.

use uuid::Uuid;

/// Generate a unique decision cycle ID.
///
/// # Example
///
/// ```rust
/// use goout_core::identifier::generate_cycle_id;
///
/// let id = generate_cycle_id();
/// assert!(id.starts_with("cycle_"));
/// ```
#[must_use]
pub fn generate_cycle_id() -> String {
    format!("cycle_{}", Uuid::new_v4().simple())
}

/// Generate a unique chat session ID.
#[must_use]
pub fn generate_session_id() -> String {
    format!("chat_{}", Uuid::new_v4().simple())
}
