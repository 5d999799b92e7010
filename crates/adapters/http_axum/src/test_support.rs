//! Stub gateways and helpers shared by the handler tests.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, Response};

use blindhub_app::ports::DeviceGateway;
use blindhub_app::services::relay_service::RelayService;
use blindhub_domain::error::{BlindHubError, GatewayError};
use blindhub_domain::relay::{GatewayReply, RelayPolicy};

use crate::state::AppState;

/// Answers every call with the same reply and records what was sent.
pub(crate) struct RecordingGateway {
    reply: GatewayReply,
    sent: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub(crate) fn answering(body: &str, status: u16, reason: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: GatewayReply {
                status,
                reason: reason.to_string(),
                body: body.to_string(),
            },
            sent: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl DeviceGateway for RecordingGateway {
    async fn send(&self, body: String) -> Result<GatewayReply, BlindHubError> {
        self.sent.lock().unwrap().push(body);
        Ok(self.reply.clone())
    }
}

/// Fails every call as if the remote host could not be reached.
pub(crate) struct UnreachableGateway(pub(crate) &'static str);

impl DeviceGateway for UnreachableGateway {
    async fn send(&self, _body: String) -> Result<GatewayReply, BlindHubError> {
        Err(GatewayError::Unreachable(self.0.to_string()).into())
    }
}

/// Fails every call after reaching the remote.
pub(crate) struct BrokenGateway;

impl DeviceGateway for BrokenGateway {
    async fn send(&self, _body: String) -> Result<GatewayReply, BlindHubError> {
        let source = std::io::Error::other("connection reset mid-body");
        Err(GatewayError::Exchange(Box::new(source)).into())
    }
}

pub(crate) fn state_with<G>(gateway: G, policy: RelayPolicy) -> AppState<G>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    AppState::new(RelayService::new(gateway).with_policy(policy))
}

pub(crate) fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(crate) async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
