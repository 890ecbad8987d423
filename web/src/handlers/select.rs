//! Move selection and model info handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use minimax::SearchError;

use crate::types::{ModelInfoResponse, MoveRequest, MoveResponse};
use crate::AppState;

/// Recommend a move for the position in the request.
///
/// Search depth comes from the request when given, otherwise from the
/// configured default, and is capped by the configured maximum.
pub async fn select_move(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, (StatusCode, String)> {
    let depth = req.depth.unwrap_or(state.default_depth);
    if depth < 1 || depth > state.max_depth {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("depth must be between 1 and {}", state.max_depth),
        ));
    }

    let selected = state
        .selector
        .select_move_fen(&req.fen, depth)
        .map_err(|e| match e {
            SearchError::InvalidPosition(_) | SearchError::NoLegalMoves => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            SearchError::Evaluator(_) => {
                tracing::error!("evaluation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        })?;

    Ok(Json(MoveResponse {
        mv: selected.mv.to_string(),
        score: selected.score,
        depth,
        nodes: selected.nodes,
    }))
}

/// Get info about the loaded evaluation model.
pub async fn get_model_info(State(state): State<Arc<AppState>>) -> Json<ModelInfoResponse> {
    let status = if state.model.loaded {
        "Model loaded".to_string()
    } else {
        "No model loaded - using material evaluation".to_string()
    };

    Json(ModelInfoResponse {
        loaded: state.model.loaded,
        path: state.model.path.clone(),
        status,
    })
}
