//! Relay — the outcome of forwarding a command to the remote gateway, and
//! the policy deciding what may be forwarded.

use std::fmt;

use serde::Deserialize;

use crate::command::Command;
use crate::error::ValidationError;

/// Separator between the remote body and its status reason in the text
/// handed back to callers.
pub const REASON_SEPARATOR: &str = " ::: ";

/// What the remote gateway answered to a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    /// Numeric HTTP status of the remote response.
    pub status: u16,
    /// Human-readable status reason (e.g. `Accepted`). Empty when the
    /// status has no known reason phrase.
    pub reason: String,
    /// Raw response body.
    pub body: String,
}

/// Result of relaying one command.
///
/// Both variants are turned into plain text for the caller; the caller
/// cannot structurally tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The gateway answered, whatever its status code.
    Success { body: String, reason: String },
    /// The outbound call could not be completed.
    Failure { message: String },
}

impl RelayOutcome {
    /// Whether the gateway was reached.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Text form returned to the caller.
    #[must_use]
    pub fn into_text(self) -> String {
        self.to_string()
    }
}

impl From<GatewayReply> for RelayOutcome {
    fn from(reply: GatewayReply) -> Self {
        Self::Success {
            body: reply.body,
            reason: reply.reason,
        }
    }
}

impl fmt::Display for RelayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { body, reason } => write!(f, "{body}{REASON_SEPARATOR}{reason}"),
            Self::Failure { message } => f.write_str(message),
        }
    }
}

/// Which commands the relay agrees to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayPolicy {
    /// Forward any token verbatim.
    #[default]
    Passthrough,
    /// Forward only `up`, `down` and `stop`.
    AllowList,
}

impl RelayPolicy {
    /// Check a raw token against the policy.
    ///
    /// Returns the recognized [`Command`] when there is one; under
    /// [`Passthrough`](Self::Passthrough) an unrecognized token is admitted
    /// and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownCommand`] when the policy is
    /// [`AllowList`](Self::AllowList) and the token is not a known command.
    pub fn admit(self, raw: &str) -> Result<Option<Command>, ValidationError> {
        match (self, raw.parse::<Command>()) {
            (_, Ok(command)) => Ok(Some(command)),
            (Self::Passthrough, Err(_)) => Ok(None),
            (Self::AllowList, Err(err)) => Err(err),
        }
    }
}

impl fmt::Display for RelayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => f.write_str("passthrough"),
            Self::AllowList => f.write_str("allow_list"),
        }
    }
}

impl std::str::FromStr for RelayPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passthrough" => Ok(Self::Passthrough),
            "allow_list" => Ok(Self::AllowList),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// A relay policy name that is neither `passthrough` nor `allow_list`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown relay policy {0:?}, expected passthrough or allow_list")]
pub struct UnknownPolicy(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_body_and_reason_with_separator() {
        let outcome = RelayOutcome::Success {
            body: "OK".to_string(),
            reason: "Accepted".to_string(),
        };
        assert_eq!(outcome.into_text(), "OK ::: Accepted");
    }

    #[test]
    fn should_return_failure_message_untouched() {
        let outcome = RelayOutcome::Failure {
            message: "could not resolve host: devices.example".to_string(),
        };
        assert_eq!(outcome.into_text(), "could not resolve host: devices.example");
    }

    #[test]
    fn should_keep_empty_reason_after_separator() {
        let outcome = RelayOutcome::Success {
            body: String::new(),
            reason: String::new(),
        };
        assert_eq!(outcome.to_string(), " ::: ");
    }

    #[test]
    fn should_display_same_text_as_into_text() {
        let outcome = RelayOutcome::Success {
            body: "moving".to_string(),
            reason: "No Content".to_string(),
        };
        assert_eq!(outcome.to_string(), outcome.clone().into_text());
    }

    #[test]
    fn should_build_success_from_gateway_reply() {
        let reply = GatewayReply {
            status: 500,
            reason: "Internal Server Error".to_string(),
            body: "motor jammed".to_string(),
        };
        let outcome = RelayOutcome::from(reply);
        assert!(outcome.is_success());
        assert_eq!(outcome.into_text(), "motor jammed ::: Internal Server Error");
    }

    #[test]
    fn should_admit_anything_under_passthrough() {
        assert_eq!(RelayPolicy::Passthrough.admit("up"), Ok(Some(Command::Up)));
        assert_eq!(RelayPolicy::Passthrough.admit("42.5"), Ok(None));
        assert_eq!(RelayPolicy::Passthrough.admit("status"), Ok(None));
    }

    #[test]
    fn should_reject_unknown_token_under_allow_list() {
        assert_eq!(RelayPolicy::AllowList.admit("stop"), Ok(Some(Command::Stop)));
        assert_eq!(
            RelayPolicy::AllowList.admit("status"),
            Err(ValidationError::UnknownCommand("status".to_string()))
        );
    }

    #[test]
    fn should_default_to_passthrough() {
        assert_eq!(RelayPolicy::default(), RelayPolicy::Passthrough);
    }

    #[test]
    fn should_parse_policy_names() {
        assert_eq!("allow_list".parse::<RelayPolicy>(), Ok(RelayPolicy::AllowList));
        assert_eq!("passthrough".parse::<RelayPolicy>(), Ok(RelayPolicy::Passthrough));
        assert!("strict".parse::<RelayPolicy>().is_err());
    }

    #[test]
    fn should_deserialize_policy_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: RelayPolicy,
        }
        let parsed: Wrapper = toml::from_str("policy = 'allow_list'").unwrap();
        assert_eq!(parsed.policy, RelayPolicy::AllowList);
    }
}
