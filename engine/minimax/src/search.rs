//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The game tree is never materialized: the recursion stack is the tree.
//! Each node copies the board for its children (`Board` is `Copy` and
//! cheap to duplicate), so the caller's state is never mutated and no
//! make/unmake bookkeeping exists to get wrong on a pruning exit.
//!
//! Pruning only skips subtrees that cannot affect the result; for any
//! position and depth the returned value equals an unpruned minimax over
//! the same tree. There is deliberately no move ordering, transposition
//! table or iterative deepening - oracle latency dominates, so the depth
//! is kept small instead.

use chess::{Board, BoardStatus, MoveGen};
use thiserror::Error;

use crate::encoding::encode;
use crate::evaluator::{Evaluator, EvaluatorError};

/// Errors that can occur during move selection.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The position description could not be parsed into a valid board.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// The root position has no legal moves (the game is already over).
    #[error("no legal moves: the game is already over")]
    NoLegalMoves,

    /// The evaluation oracle failed; the search cannot continue.
    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),
}

/// A single bounded search over a game tree.
///
/// Borrows the evaluator for its lifetime and accumulates node/leaf
/// counters across recursive calls.
pub struct Search<'a, E: Evaluator> {
    evaluator: &'a E,
    nodes: u64,
    leaf_evals: u64,
}

impl<'a, E: Evaluator> Search<'a, E> {
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            nodes: 0,
            leaf_evals: 0,
        }
    }

    /// Nodes visited so far, leaves included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Oracle calls made so far.
    pub fn leaf_evals(&self) -> u64 {
        self.leaf_evals
    }

    /// Score a position directly with the oracle.
    pub fn evaluate(&mut self, board: &Board) -> Result<f32, SearchError> {
        self.leaf_evals += 1;
        Ok(self.evaluator.score(&encode(board))?)
    }

    /// Minimax value of `board` searched to `depth` plies.
    ///
    /// At `depth == 0`, or when the rules engine reports the game over,
    /// the position is scored directly and the bounds are ignored.
    /// Otherwise the legal moves are searched in enumeration order,
    /// stopping early once `beta <= alpha`.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f32,
        mut beta: f32,
        maximizing: bool,
    ) -> Result<f32, SearchError> {
        self.nodes += 1;

        if depth == 0 || board.status() != BoardStatus::Ongoing {
            return self.evaluate(board);
        }

        if maximizing {
            let mut best = f32::NEG_INFINITY;
            for mv in MoveGen::new_legal(board) {
                let child = board.make_move_new(mv);
                let value = self.search(&child, depth - 1, alpha, beta, false)?;
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = f32::INFINITY;
            for mv in MoveGen::new_legal(board) {
                let child = board.make_move_new(mv);
                let value = self.search(&child, depth - 1, alpha, beta, true)?;
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::MaterialEvaluator;
    use std::str::FromStr;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).expect("valid FEN")
    }

    /// Reference implementation: plain minimax without pruning.
    fn plain_minimax<E: Evaluator>(
        search: &mut Search<'_, E>,
        board: &Board,
        depth: u32,
        maximizing: bool,
    ) -> f32 {
        if depth == 0 || board.status() != BoardStatus::Ongoing {
            return search.evaluate(board).unwrap();
        }
        let values = MoveGen::new_legal(board)
            .map(|mv| plain_minimax(search, &board.make_move_new(mv), depth - 1, !maximizing));
        if maximizing {
            values.fold(f32::NEG_INFINITY, f32::max)
        } else {
            values.fold(f32::INFINITY, f32::min)
        }
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let evaluator = MaterialEvaluator::new();
        let positions = [
            Board::default(),
            // Tactical middlegame: material swings within two plies
            board("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"),
            // Sparse endgame
            board("8/2k5/8/3p4/3P4/3K4/8/8 w - - 0 1"),
        ];

        for b in positions {
            for depth in 1..=3 {
                let pruned = Search::new(&evaluator)
                    .search(&b, depth, f32::NEG_INFINITY, f32::INFINITY, true)
                    .unwrap();
                let plain = plain_minimax(&mut Search::new(&evaluator), &b, depth, true);
                assert!(
                    (pruned - plain).abs() < 1e-6,
                    "depth {}: pruned {} != plain {}",
                    depth,
                    pruned,
                    plain
                );
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let evaluator = MaterialEvaluator::new();
        let b = board("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");

        let mut pruned = Search::new(&evaluator);
        pruned
            .search(&b, 3, f32::NEG_INFINITY, f32::INFINITY, true)
            .unwrap();

        let mut unpruned = Search::new(&evaluator);
        plain_minimax(&mut unpruned, &b, 3, true);

        assert!(pruned.leaf_evals() < unpruned.leaf_evals());
    }

    #[test]
    fn test_depth_zero_is_direct_evaluation() {
        let evaluator = MaterialEvaluator::new();
        let b = Board::default();

        let searched = Search::new(&evaluator)
            .search(&b, 0, f32::NEG_INFINITY, f32::INFINITY, true)
            .unwrap();
        let direct = evaluator.score(&encode(&b)).unwrap();
        assert_eq!(searched, direct);
    }

    #[test]
    fn test_terminal_short_circuits_any_depth() {
        let evaluator = MaterialEvaluator::new();
        // Fool's mate: game over, White to move
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_ne!(b.status(), BoardStatus::Ongoing);

        let direct = evaluator.score(&encode(&b)).unwrap();
        for depth in [0, 1, 5] {
            let mut search = Search::new(&evaluator);
            let value = search
                .search(&b, depth, f32::NEG_INFINITY, f32::INFINITY, true)
                .unwrap();
            assert_eq!(value, direct, "depth {}", depth);
            assert_eq!(search.nodes(), 1, "no recursion at a terminal node");
        }
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let evaluator = MaterialEvaluator::new();
        let b = board("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
        let before = b;
        Search::new(&evaluator)
            .search(&b, 2, f32::NEG_INFINITY, f32::INFINITY, true)
            .unwrap();
        assert_eq!(b, before);
    }

    #[test]
    fn test_search_is_deterministic() {
        let evaluator = MaterialEvaluator::new();
        let b = Board::default();
        let first = Search::new(&evaluator)
            .search(&b, 2, f32::NEG_INFINITY, f32::INFINITY, true)
            .unwrap();
        let second = Search::new(&evaluator)
            .search(&b, 2, f32::NEG_INFINITY, f32::INFINITY, true)
            .unwrap();
        assert_eq!(first, second);
    }
}
