//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BlindHubError`] via `#[from]`.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum BlindHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("gateway error")]
    Gateway(#[from] GatewayError),
}

/// Input rejected before anything is sent to the gateway.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The command is not one of `up`, `down`, `stop` and the relay policy
    /// only admits known commands.
    #[error("unknown command {0:?}, expected one of up, down, stop")]
    UnknownCommand(String),
}

/// Failures talking to the remote device gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The outbound call never completed: DNS failure, refused connection,
    /// transport timeout. The message is shown to the caller verbatim.
    #[error("{0}")]
    Unreachable(String),

    /// Anything else going wrong around the exchange (bad endpoint, body
    /// that cannot be read, …).
    #[error("gateway exchange failed")]
    Exchange(#[source] Box<dyn std::error::Error + Send + Sync>),
}
