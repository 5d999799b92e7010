//! Relay service — forwards a command to the remote gateway and reports
//! what happened as text.

use blindhub_domain::error::{BlindHubError, GatewayError};
use blindhub_domain::relay::{RelayOutcome, RelayPolicy};

use crate::ports::DeviceGateway;

/// Application service relaying commands to the blind controller.
pub struct RelayService<G> {
    gateway: G,
    policy: RelayPolicy,
}

impl<G: DeviceGateway> RelayService<G> {
    /// Create a new service forwarding through `gateway` with the
    /// pass-through policy.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            policy: RelayPolicy::default(),
        }
    }

    /// Replace the relay policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RelayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Policy applied before anything is sent.
    #[must_use]
    pub fn policy(&self) -> RelayPolicy {
        self.policy
    }

    /// Forward `command` verbatim as the body of a single gateway call.
    ///
    /// A completed exchange yields [`RelayOutcome::Success`] whatever the
    /// remote status; a call that never completed yields
    /// [`RelayOutcome::Failure`] carrying the transport message. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`BlindHubError::Validation`] when the policy rejects the
    /// command (nothing is sent), or [`GatewayError::Exchange`] failures
    /// propagated from the gateway.
    #[tracing::instrument(skip(self), fields(policy = %self.policy))]
    pub async fn relay(&self, command: &str) -> Result<RelayOutcome, BlindHubError> {
        if self.policy.admit(command)?.is_none() {
            tracing::warn!("forwarding unrecognized command");
        }

        match self.gateway.send(command.to_string()).await {
            Ok(reply) => {
                tracing::info!(status = reply.status, reason = %reply.reason, "gateway answered");
                Ok(RelayOutcome::from(reply))
            }
            Err(BlindHubError::Gateway(GatewayError::Unreachable(message))) => {
                tracing::warn!(%message, "gateway unreachable");
                Ok(RelayOutcome::Failure { message })
            }
            Err(err) => Err(err),
        }
    }
}
