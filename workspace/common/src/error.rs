use thiserror::Error;

/// Failures a backend call can end in. Every variant is caught at the client
/// boundary and turned into a fallback, never shown raw to a screen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (DNS, CORS, connection reset)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The body was not the shape the endpoint promises
    #[error("Malformed response: {0}")]
    Payload(String),
}

impl ClientError {
    pub fn payload(message: impl Into<String>) -> Self {
        ClientError::Payload(message.into())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Payload(error.to_string())
    }
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ClientError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ClientError::Transport("connection refused".into()).to_string(),
            "Request failed: connection refused"
        );
        assert_eq!(
            ClientError::payload("missing results array").to_string(),
            "Malformed response: missing results array"
        );
    }

    #[test]
    fn test_serde_error_becomes_payload_error() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert!(matches!(ClientError::from(err), ClientError::Payload(_)));
    }
}
