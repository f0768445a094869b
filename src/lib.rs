pub mod config;
pub mod error;

// Sanitization core
pub mod sanitize;

// Write-path validation
pub mod forms;

// HTTP API
pub mod api;

// Command-line interface
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use sanitize::{
    encode_attribute, sanitize, sanitize_and_truncate, sanitize_html, sanitize_javascript,
    sanitize_stripped_text, OutputContext,
};
