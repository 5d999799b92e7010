//! Shared application state for axum handlers.

use std::sync::Arc;

use blindhub_app::ports::DeviceGateway;
use blindhub_app::services::relay_service::RelayService;

/// Application state shared across all axum handlers.
///
/// Generic over the gateway type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the gateway itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<G> {
    /// Command relay service.
    pub relay_service: Arc<RelayService<G>>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
        }
    }
}

impl<G> AppState<G>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(relay_service: RelayService<G>) -> Self {
        Self {
            relay_service: Arc::new(relay_service),
        }
    }
}
