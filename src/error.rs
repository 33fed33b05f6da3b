use crate::types::DepthSizePair;

/// Failures raised by a [`crate::dispatch::RequestDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    Request(String),
    /// The service answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The response body, or the unwrapped payload, could not be decoded.
    Decode(String),
    /// The response envelope lacks the expected JSON pointer.
    MalformedEnvelope(String),
}

impl TransportError {
    /// Request failures and server-side errors may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Request(_) => true,
            TransportError::Status { status, .. } => *status >= 500,
            TransportError::Decode(_) | TransportError::MalformedEnvelope(_) => false,
        }
    }

    pub fn message(&self) -> String {
        use TransportError::*;
        match self {
            Request(e) => format!("request failed: {e}"),
            Status { status, body } => format!("service returned HTTP {status}: {body}"),
            Decode(e) => format!("could not decode response: {e}"),
            MalformedEnvelope(pointer) => format!("response envelope has no '{pointer}'"),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TransportError {}

/// Errors surfaced by [`crate::client::CompressedNftClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The depth/size pair is not a supported tree shape. Nothing was sent.
    InvalidConfiguration(DepthSizePair),
    /// Whatever the dispatcher raised, unchanged.
    Transport(TransportError),
}

impl ClientError {
    pub fn message(&self) -> String {
        match self {
            ClientError::InvalidConfiguration(pair) => {
                format!("invalid depth size pair {pair}")
            }
            ClientError::Transport(e) => e.message(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(e) => Some(e),
            ClientError::InvalidConfiguration(_) => None,
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(e: TransportError) -> Self {
        ClientError::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClientError::InvalidConfiguration(DepthSizePair::new(3, 9));
        assert!(err.message().contains("invalid depth size pair"));
        assert!(err.message().contains("max_buffer_size=9"));

        let inner = TransportError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        let err = ClientError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(TransportError::Request("timeout".to_string()).is_retryable());
        assert!(TransportError::Status {
            status: 503,
            body: String::new()
        }
        .is_retryable());
        assert!(!TransportError::Status {
            status: 400,
            body: String::new()
        }
        .is_retryable());
        assert!(!TransportError::Decode("eof".to_string()).is_retryable());
        assert!(!TransportError::MalformedEnvelope("/result".to_string()).is_retryable());
    }
}
