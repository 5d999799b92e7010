//! Relay endpoint for the remote control.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use blindhub_app::ports::DeviceGateway;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the relay endpoint.
pub enum RelayResponse {
    /// Relay text, whether the gateway answered or could not be reached.
    Ok(String),
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => (StatusCode::OK, text).into_response(),
        }
    }
}

/// `GET /api/remote/{command}`
///
/// Forwards the decoded path segment to the gateway and answers
/// `<remote body> ::: <remote reason>`, or the connection error message.
pub async fn relay<G>(
    State(state): State<AppState<G>>,
    Path(command): Path<String>,
) -> Result<RelayResponse, ApiError>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    let outcome = state.relay_service.relay(&command).await?;
    Ok(RelayResponse::Ok(outcome.into_text()))
}
