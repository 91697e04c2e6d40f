//! Request handlers for the node-manager API.
//!
//! Each handler is a thin translation layer: validate the request shape,
//! delegate to the edge store or the tree builder, map failures through
//! the error envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::NodeGraphError;
use crate::graph::tree::build_tree;
use crate::http::context::RequestContext;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::types::NodeTree;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEdgeRequest {
    pub from_id: i64,
    pub to_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResponse {
    pub from_id: i64,
    pub to_id: i64,
}

/// `POST /v1/node-manager/edges`
///
/// The pre-insert lookup gives the duplicate error a friendly message; the
/// unique index remains the authority against concurrent creates of the
/// same pair.
pub async fn create_edge(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateEdgeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EdgeResponse>), ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ctx.fail(NodeGraphError::MalformedRequest(rejection.body_text())))?;

    let store = state.store.lock().await;
    let existing = store
        .find_edge(request.from_id, request.to_id)
        .map_err(|e| ctx.fail(e))?;
    if existing.is_some() {
        return Err(ctx.fail(NodeGraphError::DuplicateResource(format!(
            "Edge from {} to {} already exists.",
            request.from_id, request.to_id
        ))));
    }
    let edge = store
        .create_edge(request.from_id, request.to_id)
        .map_err(|e| ctx.fail(e))?;

    Ok((
        StatusCode::CREATED,
        Json(EdgeResponse {
            from_id: edge.from_id,
            to_id: edge.to_id,
        }),
    ))
}

/// `DELETE /v1/node-manager/edges/{fromId}/{toId}`
///
/// Idempotent from the caller's perspective: 204 whether or not a row was
/// actually removed.
pub async fn delete_edge(
    State(state): State<AppState>,
    ctx: RequestContext,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((from_id, to_id)) = path
        .map_err(|rejection| ctx.fail(NodeGraphError::MalformedRequest(rejection.body_text())))?;

    let store = state.store.lock().await;
    store.delete_edge(from_id, to_id).map_err(|e| ctx.fail(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /v1/node-manager/edges/tree/{nodeId}`
pub async fn get_tree(
    State(state): State<AppState>,
    ctx: RequestContext,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<NodeTree>, ApiError> {
    let Path(node_id) = path
        .map_err(|rejection| ctx.fail(NodeGraphError::MalformedRequest(rejection.body_text())))?;

    let store = state.store.lock().await;
    let tree = build_tree(&store, node_id).map_err(|e| ctx.fail(e))?;

    Ok(Json(tree))
}
