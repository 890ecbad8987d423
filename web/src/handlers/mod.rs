//! HTTP request handlers.

mod health;
mod select;

pub use health::*;
pub use select::*;
