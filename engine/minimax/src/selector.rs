//! Root-level move selection.
//!
//! The selector enumerates the legal root moves, searches each resulting
//! child position, and returns the move with the strictly greatest value.
//! Ties keep the first move in the rules engine's enumeration order.
//!
//! The root always searches children with `maximizing = false` and the
//! oracle's score is never sign-inverted, matching the model's training
//! contract: the selected move maximizes whatever scalar the oracle
//! reports, for either side to move.

use std::str::FromStr;

use chess::{Board, ChessMove, MoveGen};
use tracing::{debug, trace};

use crate::evaluator::Evaluator;
use crate::search::{Search, SearchError};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy)]
pub struct SelectedMove {
    /// Best move at the root.
    pub mv: ChessMove,

    /// Value of the best move's subtree.
    pub score: f32,

    /// Nodes visited across the whole selection.
    pub nodes: u64,
}

/// Root-level driver around [`Search`].
///
/// Owns the evaluator for its lifetime: construct one selector at
/// startup with the loaded oracle and share it across requests.
pub struct MoveSelector<E: Evaluator> {
    evaluator: E,
}

impl<E: Evaluator> MoveSelector<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Select the best move for the side to move, looking ahead `depth`
    /// plies.
    ///
    /// The input board is never mutated; child positions are independent
    /// copies. Returns [`SearchError::NoLegalMoves`] when the game is
    /// already over at the root.
    pub fn select_move(&self, board: &Board, depth: u32) -> Result<SelectedMove, SearchError> {
        let mut search = Search::new(&self.evaluator);
        let mut best_move: Option<ChessMove> = None;
        let mut best_value = f32::NEG_INFINITY;

        for mv in MoveGen::new_legal(board) {
            let child = board.make_move_new(mv);
            let value = search.search(
                &child,
                depth.saturating_sub(1),
                f32::NEG_INFINITY,
                f32::INFINITY,
                false,
            )?;
            trace!(%mv, value, "scored root move");

            // Strict comparison: ties keep the first-enumerated move
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        let mv = best_move.ok_or(SearchError::NoLegalMoves)?;
        debug!(
            %mv,
            score = best_value,
            nodes = search.nodes(),
            leaf_evals = search.leaf_evals(),
            "selected move"
        );

        Ok(SelectedMove {
            mv,
            score: best_value,
            nodes: search.nodes(),
        })
    }

    /// Select a move from a FEN position description.
    ///
    /// This is the entire boundary the service layer calls: FEN in,
    /// coordinate notation out (via the returned move's `Display`).
    pub fn select_move_fen(&self, fen: &str, depth: u32) -> Result<SelectedMove, SearchError> {
        let board =
            Board::from_str(fen).map_err(|e| SearchError::InvalidPosition(e.to_string()))?;
        self.select_move(&board, depth)
    }
}
