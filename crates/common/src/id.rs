//! ID generation utilities.

use uuid::Uuid;

/// ID generator for entities.
///
/// Posts, comments, ratings and follow edges all use random UUID v4
/// string identifiers, so a single generator serves every entity.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new UUID v4-based ID.
    #[must_use]
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
