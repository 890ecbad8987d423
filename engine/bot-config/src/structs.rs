//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_data_dir() -> String {
    defaults::data_dir().into()
}
fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_host() -> String {
    defaults::host().into()
}
fn d_port() -> u16 {
    defaults::port()
}
fn d_allowed_origins() -> Vec<String> {
    defaults::allowed_origins().to_vec()
}
fn d_depth() -> u32 {
    defaults::depth()
}
fn d_max_depth() -> u32 {
    defaults::max_depth()
}
fn d_model_path() -> String {
    defaults::model_path().into()
}
fn d_onnx_intra_threads() -> usize {
    defaults::onnx_intra_threads()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_data_dir")]
    pub data_dir: String,
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir().into(),
            log_level: defaults::log_level().into(),
        }
    }
}

/// Web server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WebConfig {
    #[serde(default = "d_host")]
    pub host: String,
    #[serde(default = "d_port")]
    pub port: u16,
    /// CORS allowed origins. Empty = allow all origins (development mode with warning).
    /// Set to specific domains in production (e.g., ["https://your-domain.com"]).
    #[serde(default = "d_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: defaults::host().into(),
            port: defaults::port(),
            allowed_origins: defaults::allowed_origins().to_vec(),
        }
    }
}

/// Search configuration for the move selector
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Default lookahead in plies when a request does not specify one
    #[serde(default = "d_depth")]
    pub depth: u32,
    /// Upper bound accepted from API requests
    #[serde(default = "d_max_depth")]
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: defaults::depth(),
            max_depth: defaults::max_depth(),
        }
    }
}

/// Evaluation model configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the .onnx model file
    #[serde(default = "d_model_path")]
    pub path: String,
    /// ONNX Runtime intra-op thread count
    #[serde(default = "d_onnx_intra_threads")]
    pub onnx_intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: defaults::model_path().into(),
            onnx_intra_threads: defaults::onnx_intra_threads(),
        }
    }
}
