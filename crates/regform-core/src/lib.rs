//! # regform-core
//!
//! Core types, settings, and error types shared by the regform crates.
//! This crate has no dependency on the form model and provides the foundation
//! for the other crates.
//!
//! ## Modules
//!
//! - [`checks`] - Configuration checks
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Form and application settings
//! - [`settings_loader`] - Loading settings from TOML and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod checks;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult, ValidationError};
pub use settings::{FormSettings, Settings};
