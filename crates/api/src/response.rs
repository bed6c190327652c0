//! API response types.

use serde::Serialize;

/// Acknowledgement payload for deletes and follow changes.
#[derive(Debug, Serialize)]
pub struct Status {
    /// Human-readable description of what happened.
    pub message: String,
}

impl Status {
    /// Create a status acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_message() {
        let status = Status::new("Deleted user bob");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["message"], "Deleted user bob");
    }
}
