use serde::{Deserialize, Serialize};

/// Error body returned by the catalog API on a rejected request: `{"error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Failure {
    /// Extracts the server message from a raw response body.
    ///
    /// Anything that is not a JSON object with a non-empty `error` string
    /// yields `None`, so callers can fall back to their own wording.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Failure>(body)
            .ok()
            .and_then(|failure| failure.error)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_body() {
        assert_eq!(
            Failure::message_from_body(r#"{"error": "Categoria já existe"}"#),
            Some("Categoria já existe".to_string())
        );
    }

    #[test]
    fn test_message_from_body_without_error() {
        assert_eq!(Failure::message_from_body(r#"{"message": "ok"}"#), None);
        assert_eq!(Failure::message_from_body(r#"{"error": ""}"#), None);
        assert_eq!(Failure::message_from_body("<html>502</html>"), None);
        assert_eq!(Failure::message_from_body(""), None);
    }

    #[test]
    fn test_failure_serializes_error_field() {
        let body = serde_json::to_string(&Failure {
            error: Some("Nome é obrigatório".to_string()),
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"Nome é obrigatório"}"#);
    }
}
