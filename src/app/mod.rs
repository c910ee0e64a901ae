//! Application Layer
//!
//! User-facing CLI, configuration management and report rendering.

pub mod cli;
pub mod config;
pub mod report;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
