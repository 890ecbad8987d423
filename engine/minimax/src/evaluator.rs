//! Evaluator interface for position scoring.
//!
//! The evaluator is the oracle the search consults at leaf positions. In
//! production it is a convolutional network behind ONNX Runtime (see the
//! `onnx` module); for tests and benches [`MaterialEvaluator`] provides a
//! deterministic score from the tensor alone.
//!
//! Evaluators are loaded once before the first search and never mutated
//! afterwards; the search treats them as pure functions. A per-call
//! failure is not recoverable and aborts the search that observed it.

use thiserror::Error;

use crate::encoding::PositionTensor;

/// Errors that can occur while loading or running an evaluator.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("model error: {0}")]
    Model(String),

    #[error("evaluation failed: {0}")]
    EvaluationFailed(String),
}

/// A position-scoring oracle.
///
/// `score` must be deterministic and stateless per call, returning a value
/// in a bounded range (the trained model emits `[0, 1]`). Higher is better
/// for the side the model was trained to favor; the search applies no sign
/// convention of its own.
pub trait Evaluator: Send + Sync {
    fn score(&self, tensor: &PositionTensor) -> Result<f32, EvaluatorError>;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn score(&self, tensor: &PositionTensor) -> Result<f32, EvaluatorError> {
        (**self).score(tensor)
    }
}

/// Standard material weights per piece plane (pawn through king).
const PLANE_WEIGHTS: [f32; 6] = [1.0, 3.0, 3.0, 5.0, 9.0, 0.0];

/// Largest material imbalance the normalization allows for: one side keeps
/// everything (39 points), the other only the king.
const MAX_IMBALANCE: f32 = 39.0;

/// Deterministic evaluator scoring normalized material balance.
///
/// Reads only the piece planes of the tensor and maps White's material
/// advantage into `[0, 1]`, with 0.5 meaning equal material. No model
/// file is required, which makes it the evaluator of choice for unit
/// tests, benches and API tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for MaterialEvaluator {
    fn score(&self, tensor: &PositionTensor) -> Result<f32, EvaluatorError> {
        let mut balance = 0.0;
        for (plane, weight) in PLANE_WEIGHTS.iter().enumerate() {
            balance += tensor.plane(plane).sum() * weight;
            balance -= tensor.plane(plane + 6).sum() * weight;
        }
        Ok(0.5 + balance / (2.0 * MAX_IMBALANCE))
    }
}
