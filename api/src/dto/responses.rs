use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const GREETING_MESSAGE: &str = "مرحباً بك في تطبيق غيمة التجريبي!";

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: String, // ISO-8601, UTC, millisecond precision
}

impl GreetingResponse {
    pub fn now() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn greeting_serializes_exactly_two_keys() {
        let value = serde_json::to_value(GreetingResponse::now()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["message"], GREETING_MESSAGE);
        assert!(object["timestamp"].is_string());
    }

    #[test]
    fn timestamp_is_utc_iso8601_with_millis() {
        let greeting = GreetingResponse::now();

        // 2024-05-01T12:34:56.789Z
        assert_eq!(greeting.timestamp.len(), 24);
        assert!(greeting.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&greeting.timestamp).is_ok());
    }

    #[test]
    fn timestamp_reflects_creation_time() {
        let before = Utc::now();
        let greeting = GreetingResponse::now();
        let after = Utc::now();

        let stamped = DateTime::parse_from_rfc3339(&greeting.timestamp).unwrap();
        // Millisecond truncation can put the stamp just under `before`.
        assert!(stamped >= before - chrono::Duration::milliseconds(1));
        assert!(stamped <= after);
    }
}
