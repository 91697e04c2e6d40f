//! Error responses for the HTTP surface.
//!
//! Every failing request produces the same envelope,
//! `{"status": <int>, "errorMessage": <string>}`, and is logged exactly
//! once with the caller-supplied request/correlation identifiers before
//! the response is returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::NodeGraphError;

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    pub error_message: String,
}

/// A domain or storage failure paired with the request's correlation
/// identifiers, ready to be rendered as a response.
///
/// The identifiers are optional only because the error may occur while the
/// headers themselves are being extracted.
#[derive(Debug)]
pub struct ApiError {
    pub error: NodeGraphError,
    pub request_id: Option<String>,
    pub correlation_id: Option<String>,
}

/// The single kind-to-status switch.
fn status_for(error: &NodeGraphError) -> StatusCode {
    match error {
        NodeGraphError::NotFound(_) => StatusCode::NOT_FOUND,
        NodeGraphError::InvalidOperation(_) | NodeGraphError::MalformedRequest(_) => {
            StatusCode::BAD_REQUEST
        }
        NodeGraphError::DuplicateResource(_) | NodeGraphError::StoreIntegrity(_) => {
            StatusCode::CONFLICT
        }
        NodeGraphError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        NodeGraphError::StoreLockContention(_) => StatusCode::LOCKED,
        NodeGraphError::Store(_) | NodeGraphError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.error);
        let body = ErrorBody {
            status: status.as_u16(),
            error_message: self.error.to_string(),
        };
        tracing::error!(
            request_id = self.request_id.as_deref().unwrap_or("-"),
            correlation_id = self.correlation_id.as_deref().unwrap_or("-"),
            status = body.status,
            "{}",
            body.error_message
        );
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_table() {
        let cases = [
            (NodeGraphError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                NodeGraphError::InvalidOperation("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                NodeGraphError::MalformedRequest("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                NodeGraphError::DuplicateResource("x".into()),
                StatusCode::CONFLICT,
            ),
            (
                NodeGraphError::StoreIntegrity("x".into()),
                StatusCode::CONFLICT,
            ),
            (
                NodeGraphError::StoreUnavailable("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                NodeGraphError::StoreLockContention("x".into()),
                StatusCode::LOCKED,
            ),
            (
                NodeGraphError::Store("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                NodeGraphError::Config("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected, "wrong status for {error}");
        }
    }

    #[test]
    fn envelope_uses_camel_case_error_message() {
        let body = ErrorBody {
            status: 404,
            error_message: "Node 1 not found.".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": 404, "errorMessage": "Node 1 not found."})
        );
    }
}
