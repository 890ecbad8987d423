//! Request types for the web API.

use serde::Deserialize;

/// Request for a move recommendation.
#[derive(Deserialize)]
pub struct MoveRequest {
    /// Position to analyze, in FEN
    pub fen: String,
    /// Lookahead in plies. Falls back to the configured default when
    /// omitted; must not exceed the configured maximum.
    #[serde(default)]
    pub depth: Option<u32>,
}
