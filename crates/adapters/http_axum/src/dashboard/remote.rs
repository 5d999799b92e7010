//! Remote control page — one button per blind command.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use blindhub_app::ports::DeviceGateway;
use blindhub_domain::command::Command;

use super::DashboardError;
use crate::state::AppState;

/// A button on the remote.
struct CommandButton {
    token: &'static str,
    label: &'static str,
}

/// Message shown above the buttons after a command was sent.
struct Flash {
    text: String,
    success: bool,
}

/// Remote page template.
#[derive(Template)]
#[template(path = "remote.html")]
pub struct RemoteTemplate {
    buttons: Vec<CommandButton>,
    flash: Option<Flash>,
}

impl RemoteTemplate {
    fn new(flash: Option<Flash>) -> Self {
        let buttons = Command::ALL
            .into_iter()
            .map(|cmd| CommandButton {
                token: cmd.as_str(),
                label: cmd.label(),
            })
            .collect();
        Self { buttons, flash }
    }

    pub(crate) fn with_error(text: String) -> Self {
        Self::new(Some(Flash {
            text,
            success: false,
        }))
    }
}

impl IntoResponse for RemoteTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — the remote.
pub async fn index() -> RemoteTemplate {
    RemoteTemplate::new(None)
}

/// `POST /remote/{command}` — relay a command and show what the gateway said.
pub async fn send<G>(
    State(state): State<AppState<G>>,
    Path(command): Path<String>,
) -> Result<RemoteTemplate, DashboardError>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    let outcome = state.relay_service.relay(&command).await?;
    let success = outcome.is_success();
    Ok(RemoteTemplate::new(Some(Flash {
        text: outcome.into_text(),
        success,
    })))
}
