//! Response types for the web API.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Recommended move for a position.
#[derive(Serialize, Deserialize)]
pub struct MoveResponse {
    /// Best move in coordinate notation (e.g. "e2e4", "e7e8q")
    #[serde(rename = "move")]
    pub mv: String,
    /// Value of the chosen move's subtree, in the model's [0, 1] range
    pub score: f32,
    /// Depth actually searched
    pub depth: u32,
    /// Nodes visited during the search
    pub nodes: u64,
}

/// Info about the evaluation model behind the selector.
#[derive(Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub loaded: bool,
    pub path: Option<String>,
    pub status: String,
}
