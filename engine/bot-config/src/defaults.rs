//! Default configuration values loaded from config.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time,
//! so every component and the documentation agree on the same values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    web: WebDefaults,
    search: SearchDefaults,
    model: ModelDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    data_dir: String,
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct WebDefaults {
    host: String,
    port: u16,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    depth: u32,
    max_depth: u32,
}

#[derive(Debug, Deserialize)]
struct ModelDefaults {
    path: String,
    onnx_intra_threads: usize,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn data_dir() -> &'static str {
    &DEFAULTS.common.data_dir
}
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Web
pub fn host() -> &'static str {
    &DEFAULTS.web.host
}
pub fn port() -> u16 {
    DEFAULTS.web.port
}
/// CORS allowed origins. Empty = allow all origins (development mode).
pub fn allowed_origins() -> &'static [String] {
    &[]
}

// Search
pub fn depth() -> u32 {
    DEFAULTS.search.depth
}
pub fn max_depth() -> u32 {
    DEFAULTS.search.max_depth
}

// Model
pub fn model_path() -> &'static str {
    &DEFAULTS.model.path
}
pub fn onnx_intra_threads() -> usize {
    DEFAULTS.model.onnx_intra_threads
}
