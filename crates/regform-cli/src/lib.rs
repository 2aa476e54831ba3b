//! # regform-cli
//!
//! Command-line driver for the registration form. The binary plays the part
//! of the UI event source: command-line values become input and blur events,
//! and the result is printed as HTML or JSON.
//!
//! - **Command framework** - [`CliCommand`](command::CliCommand) and
//!   [`CommandRegistry`](command::CommandRegistry)
//! - **Built-in commands** - `render`, `submit`, `check`
//!
//! ## Quick Start
//!
//! ```rust
//! use regform_cli::command::CommandRegistry;
//! use regform_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! assert_eq!(registry.list_commands(), vec!["check", "render", "submit"]);
//! ```

// - result_large_err: FormError is the crate-wide error type
// - unused_async: command handlers keep a uniform async signature
#![allow(clippy::result_large_err)]
#![allow(clippy::unused_async)]

pub mod args;
pub mod command;
pub mod commands;

use regform_core::{settings_loader, FormResult, Settings};

/// Loads settings from an optional TOML file, then applies environment overrides.
pub fn load_settings(path: Option<&str>) -> FormResult<Settings> {
    match path {
        Some(path) => settings_loader::from_toml_file_with_env(path),
        None => Ok(settings_loader::from_env()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[form]\nlanguages = [\"Italian\", \"Dutch\"]").unwrap();

        let settings = load_settings(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(settings.form.languages, vec!["Italian", "Dutch"]);
        assert_eq!(settings.form.password_min_length, 8);
    }

    #[test]
    fn test_load_settings_missing_file_is_fatal() {
        let err = load_settings(Some("/nonexistent/regform.toml")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
