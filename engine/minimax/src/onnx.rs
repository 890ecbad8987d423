//! ONNX Runtime evaluator for neural network position scoring.
//!
//! Runs the convolutional evaluation model exported by the Python
//! trainer. The model is loaded once at startup and never reloaded; a
//! missing or unreadable model file must abort startup, because the
//! search has no defined behavior without a working oracle.
//!
//! # Model Format
//!
//! The ONNX model is expected to have:
//! - Input: "board" - shape (1, 8, 8, 14) float32, channels-last
//! - Output: "value" - shape (1, 1) float32 in [0, 1]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use ort::{session::Session, value::Value};
use tracing::debug;

use crate::encoding::PositionTensor;
use crate::evaluator::{Evaluator, EvaluatorError};

/// ONNX Runtime evaluator that loads and runs the evaluation network.
///
/// Uses a Mutex internally because `Session::run` requires `&mut self`,
/// but the `Evaluator` trait uses `&self` so the evaluator can be shared
/// behind an `Arc`.
pub struct OnnxEvaluator {
    session: Mutex<Session>,
    /// Number of inferences performed (for diagnostics)
    inference_count: AtomicU64,
    /// Total inference time in microseconds (for diagnostics)
    total_inference_time_us: AtomicU64,
}

impl std::fmt::Debug for OnnxEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEvaluator")
            .field(
                "inference_count",
                &self.inference_count.load(Ordering::Relaxed),
            )
            .finish_non_exhaustive()
    }
}

impl OnnxEvaluator {
    /// Load the ONNX model from the given path.
    ///
    /// # Arguments
    /// * `model_path` - Path to the .onnx model file
    /// * `intra_threads` - ONNX Runtime intra-op thread count
    pub fn load<P: AsRef<Path>>(model_path: P, intra_threads: usize) -> Result<Self, EvaluatorError> {
        let session = Session::builder()
            .map_err(|e| EvaluatorError::Model(format!("Failed to create session builder: {}", e)))?
            .with_intra_threads(intra_threads)
            .map_err(|e| EvaluatorError::Model(format!("Failed to set intra threads: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| EvaluatorError::Model(format!("Failed to load model: {}", e)))?;

        Ok(Self {
            session: Mutex::new(session),
            inference_count: AtomicU64::new(0),
            total_inference_time_us: AtomicU64::new(0),
        })
    }
}

impl Evaluator for OnnxEvaluator {
    fn score(&self, tensor: &PositionTensor) -> Result<f32, EvaluatorError> {
        let input_value = Value::from_array(tensor.to_input())
            .map_err(|e| EvaluatorError::Model(format!("Failed to create input tensor: {}", e)))?;

        // Run inference - extract the value inside the lock scope
        let inference_start = Instant::now();
        let value = {
            let mut session = self.session.lock().map_err(|e| {
                EvaluatorError::EvaluationFailed(format!("Failed to acquire session lock: {}", e))
            })?;
            let outputs = session
                .run(ort::inputs!["board" => input_value])
                .map_err(|e| EvaluatorError::EvaluationFailed(format!("Inference failed: {}", e)))?;

            // Output is shape (1, 1)
            let value_output = outputs
                .get("value")
                .ok_or_else(|| EvaluatorError::Model("Missing value output".to_string()))?;

            let (_shape, value_data) = value_output.try_extract_tensor::<f32>().map_err(|e| {
                EvaluatorError::Model(format!("Failed to extract value tensor: {}", e))
            })?;

            value_data
                .first()
                .copied()
                .ok_or_else(|| EvaluatorError::Model("Empty value output".to_string()))?
        };

        // Track inference timing for diagnostics
        let inference_time_us = inference_start.elapsed().as_micros() as u64;
        self.total_inference_time_us
            .fetch_add(inference_time_us, Ordering::Relaxed);
        let count = self.inference_count.fetch_add(1, Ordering::Relaxed) + 1;

        // Log stats periodically (every 1,000 inferences)
        if count % 1_000 == 0 {
            let total_us = self.total_inference_time_us.load(Ordering::Relaxed);
            let avg_us = total_us / count;
            debug!(
                "ONNX inference stats: {} calls, avg {:.2}ms per call",
                count,
                avg_us as f64 / 1000.0
            );
        }

        Ok(value)
    }
}
