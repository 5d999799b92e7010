//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use blindhub_domain::error::BlindHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BlindHubError`] to an HTTP response with appropriate status code.
///
/// Connection failures never get here: the relay service folds them into a
/// text outcome answered with 200.
pub struct ApiError(BlindHubError);

impl From<BlindHubError> for ApiError {
    fn from(err: BlindHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Status code and caller-facing message for an error. Gateway failures are
/// logged here and hidden behind a generic message.
pub(crate) fn status_and_message(err: &BlindHubError) -> (StatusCode, String) {
    match err {
        BlindHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        BlindHubError::Gateway(err) => {
            tracing::error!(error = ?err, "gateway error");
            (StatusCode::BAD_GATEWAY, "gateway error".to_string())
        }
    }
}
