//! Gateway port — one outbound exchange with the remote blind controller.

use std::future::Future;

use blindhub_domain::error::BlindHubError;
use blindhub_domain::relay::GatewayReply;

/// Delivers a raw command body to the remote device gateway.
///
/// Implementations must report a call that never completed (DNS failure,
/// refused connection, transport timeout) as
/// [`GatewayError::Unreachable`](blindhub_domain::error::GatewayError::Unreachable)
/// with the message the caller should see. Any remote answer, whatever its
/// status code, is a [`GatewayReply`].
pub trait DeviceGateway {
    /// Send `body` to the gateway and capture its answer.
    fn send(
        &self,
        body: String,
    ) -> impl Future<Output = Result<GatewayReply, BlindHubError>> + Send;
}

impl<T: DeviceGateway + Send + Sync> DeviceGateway for std::sync::Arc<T> {
    fn send(
        &self,
        body: String,
    ) -> impl Future<Output = Result<GatewayReply, BlindHubError>> + Send {
        (**self).send(body)
    }
}
