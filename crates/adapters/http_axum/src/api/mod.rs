//! Plain-text API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod remote;

use axum::Router;
use axum::routing::get;

use blindhub_app::ports::DeviceGateway;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<G>() -> Router<AppState<G>>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    Router::new().route("/remote/{command}", get(remote::relay::<G>))
}
