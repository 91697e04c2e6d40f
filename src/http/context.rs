//! Per-request correlation context.
//!
//! The caller supplies `x-request-id` and `x-correlation-id` headers; they
//! are opaque strings that carry no business meaning and exist only so
//! errors can be traced across systems. The context is threaded explicitly
//! through each handler; it is never ambient state.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::NodeGraphError;
use crate::http::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Caller-supplied correlation identifiers for one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub correlation_id: String,
}

impl RequestContext {
    /// Attach this request's identifiers to a failure.
    pub fn fail(&self, error: NodeGraphError) -> ApiError {
        ApiError {
            error,
            request_id: Some(self.request_id.clone()),
            correlation_id: Some(self.correlation_id.clone()),
        }
    }
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = header_value(parts, REQUEST_ID_HEADER);
        let correlation_id = header_value(parts, CORRELATION_ID_HEADER);
        match (request_id, correlation_id) {
            (Some(request_id), Some(correlation_id)) => Ok(Self {
                request_id,
                correlation_id,
            }),
            (request_id, correlation_id) => {
                let missing = if request_id.is_none() {
                    REQUEST_ID_HEADER
                } else {
                    CORRELATION_ID_HEADER
                };
                Err(ApiError {
                    error: NodeGraphError::MalformedRequest(format!(
                        "missing required header {missing}"
                    )),
                    request_id,
                    correlation_id,
                })
            }
        }
    }
}
