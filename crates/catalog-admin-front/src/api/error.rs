use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: status {status}")]
    Status {
        status: u16,
        /// Text of the `{"error": ...}` body, when the server sent one.
        message: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("JSON encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_from_status() {
        let rejected = ApiError::Status {
            status: 400,
            message: Some("Categoria já existe".to_string()),
        };
        assert_eq!(rejected.server_message(), Some("Categoria já existe"));

        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.server_message(), None);
        assert_eq!(
            ApiError::Network("Failed to fetch".to_string()).server_message(),
            None
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error: status 404");
    }
}
