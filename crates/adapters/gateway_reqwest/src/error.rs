//! Gateway adapter error types.

use blindhub_domain::error::{BlindHubError, GatewayError};

/// Errors specific to the reqwest gateway adapter.
#[derive(Debug, thiserror::Error)]
pub enum ReqwestGatewayError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid gateway endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Why it could not be parsed.
        reason: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be assembled.
    #[error("failed to build gateway request")]
    Request(#[source] reqwest::Error),

    /// The request never completed (DNS, refused connection, timeout, …).
    #[error("failed to reach gateway")]
    Connect(#[source] reqwest::Error),

    /// The gateway was reached but the exchange broke down (redirect loop,
    /// protocol error).
    #[error("gateway exchange failed")]
    Transport(#[source] reqwest::Error),

    /// The gateway answered but its body could not be read.
    #[error("failed to read gateway response body")]
    Body(#[source] reqwest::Error),
}

impl ReqwestGatewayError {
    /// Classify an error returned by `RequestBuilder::send`.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Connect(err)
        } else if err.is_builder() {
            Self::Request(err)
        } else {
            Self::Transport(err)
        }
    }

    /// Convert into a [`BlindHubError::Gateway`] for propagation across port
    /// boundaries.
    ///
    /// Connection failures become [`GatewayError::Unreachable`] with the
    /// full cause chain as message.
    pub fn into_domain(self) -> BlindHubError {
        match self {
            Self::Connect(err) => GatewayError::Unreachable(error_chain(&err)).into(),
            other => GatewayError::Exchange(Box::new(other)).into(),
        }
    }
}

impl From<ReqwestGatewayError> for BlindHubError {
    fn from(err: ReqwestGatewayError) -> Self {
        err.into_domain()
    }
}

/// Render an error and all its sources as `outer: inner: innermost`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
