use thiserror::Error;

/// Failure of a single gateway round trip.
///
/// Every operation is atomic from the client's point of view: it either
/// yields its full result or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The server answered 2xx but the body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
