//! Sakura Player CLI Library
//!
//! Terminal front-end over the catalog, playback and auth crates.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{CliError, Result};
