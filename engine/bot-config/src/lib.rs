//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across all Rust components.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CHESSBOT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CHESSBOT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CHESSBOT_COMMON_DATA_DIR=/data
//!     CHESSBOT_WEB_HOST=127.0.0.1
//!     CHESSBOT_WEB_PORT=3000
//!     CHESSBOT_SEARCH_DEPTH=2
//!     CHESSBOT_MODEL_PATH=/models/chess_cnn.onnx
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
