//! Server-side rendered HTML remote (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod remote;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use blindhub_app::ports::DeviceGateway;
use blindhub_domain::error::BlindHubError;

use crate::error::status_and_message;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<G>() -> Router<AppState<G>>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(remote::index))
        .route("/remote/{command}", post(remote::send::<G>))
}

/// Errors raised by dashboard handlers, rendered back into the remote page.
pub struct DashboardError(BlindHubError);

impl From<BlindHubError> for DashboardError {
    fn from(err: BlindHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, remote::RemoteTemplate::with_error(message)).into_response()
    }
}
