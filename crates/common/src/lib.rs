//! Shared plumbing for the CodeDale crates: logging setup, runtime
//! directory checks and small wire types used by more than one crate.

pub mod env;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
        assert_eq!(serde_json::to_value(&h).unwrap(), serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn error_body_serializes_without_message_when_absent() {
        let body = types::ErrorBody::new("Failed to save module");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Failed to save module"}));
    }
}
