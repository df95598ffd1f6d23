//! Authenticated request context.

/// Identity of an authenticated caller, carried from the token extractor
/// into every service call that needs one.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The caller's user ID.
    pub user_id: i32,
    /// The caller's username. Notes created in this context are owned by
    /// this name.
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i32, username: String) -> Self {
        Self { user_id, username }
    }
}
