//! Fixed-depth minimax move selection for chess.
//!
//! This crate turns a chess position into a move recommendation by
//! combining three pieces:
//!
//! 1. **Encoding**: a position becomes a 14x8x8 tensor of 0/1 values
//!    (piece placement plus per-side legal-move destination planes)
//! 2. **Evaluation**: an [`Evaluator`] scores the tensor - in production
//!    a convolutional network behind ONNX Runtime, in tests a material
//!    counter
//! 3. **Search**: fixed-depth minimax with alpha-beta pruning over the
//!    legal-move tree, driven from the root by [`MoveSelector`]
//!
//! # Usage
//!
//! ```rust
//! use minimax::{MaterialEvaluator, MoveSelector};
//!
//! let selector = MoveSelector::new(MaterialEvaluator::new());
//! let selected = selector
//!     .select_move_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 2)
//!     .unwrap();
//!
//! println!("Best move: {}", selected.mv);
//! println!("Score: {}", selected.score);
//! ```
//!
//! # Design
//!
//! The search is deliberately simple: no move ordering, no transposition
//! table, no iterative deepening. Oracle inference dominates the cost of
//! a node by orders of magnitude, so the useful lever is the depth limit,
//! not search-tree refinements. Selection is fully deterministic: the
//! same position and depth always produce the same move.

pub mod encoding;
pub mod evaluator;
pub mod search;
pub mod selector;

#[cfg(feature = "onnx")]
pub mod onnx;

// Re-export main types
pub use encoding::{encode, PositionTensor, BLACK_MOBILITY_PLANE, NUM_PLANES, WHITE_MOBILITY_PLANE};
pub use evaluator::{Evaluator, EvaluatorError, MaterialEvaluator};
pub use search::{Search, SearchError};
pub use selector::{MoveSelector, SelectedMove};

#[cfg(feature = "onnx")]
pub use onnx::OnnxEvaluator;
