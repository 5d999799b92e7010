//! # blindhub-adapter-gateway-reqwest
//!
//! HTTP gateway adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## How it works
//!
//! Every command is sent as the raw body of a `POST` to a single configured
//! endpoint (usually a tunnel in front of the blind controller). No headers,
//! no authentication, no retry. The remote answer is captured as status,
//! canonical reason phrase and body text, whatever the status code.
//!
//! A request that never completes is reported as
//! [`GatewayError::Unreachable`](blindhub_domain::error::GatewayError::Unreachable)
//! carrying the full cause chain of the client error.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `blindhub-app` and `blindhub-domain`.

mod config;
mod error;

pub use config::GatewayConfig;
pub use error::ReqwestGatewayError;

use std::time::Duration;

use reqwest::{Client, Url};

use blindhub_app::ports::DeviceGateway;
use blindhub_domain::error::BlindHubError;
use blindhub_domain::relay::GatewayReply;

/// [`DeviceGateway`] posting commands over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDeviceGateway {
    client: Client,
    endpoint: Url,
}

impl HttpDeviceGateway {
    /// Build a gateway from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReqwestGatewayError::InvalidEndpoint`] when the endpoint is
    /// not an absolute URL, or [`ReqwestGatewayError::Client`] when the HTTP
    /// client cannot be initialised.
    pub fn new(config: &GatewayConfig) -> Result<Self, ReqwestGatewayError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|err| ReqwestGatewayError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: err.to_string(),
            })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ReqwestGatewayError::Client)?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Endpoint commands are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn exchange(&self, body: String) -> Result<GatewayReply, ReqwestGatewayError> {
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "posting to gateway");

        let response = self
            .client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await
            .map_err(ReqwestGatewayError::from_send)?;

        let status = response.status();
        let body = response.text().await.map_err(ReqwestGatewayError::Body)?;

        Ok(GatewayReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

impl DeviceGateway for HttpDeviceGateway {
    async fn send(&self, body: String) -> Result<GatewayReply, BlindHubError> {
        self.exchange(body).await.map_err(ReqwestGatewayError::into_domain)
    }
}
