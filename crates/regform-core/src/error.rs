//! Core error types for regform.
//!
//! This module provides the error enum [`FormError`] covering validation
//! failures, control lookups, configuration problems, and IO. User-input
//! validation failures are carried as [`ValidationError`] values and never
//! escalate beyond the form that produced them.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

/// Represents a validation error with optional field-level errors.
///
/// Validation errors can be either simple (a single message with a code such
/// as `required` or `minlength`) or compound (containing per-field error
/// lists keyed by control path).
///
/// # Examples
///
/// ```
/// use regform_core::error::ValidationError;
///
/// // Simple validation error
/// let err = ValidationError::new("Password is required", "required");
///
/// // Field-level validation errors
/// let mut field_errors = std::collections::BTreeMap::new();
/// field_errors.insert(
///     "email".to_string(),
///     vec![ValidationError::new("Email is required", "required")],
/// );
/// let err = ValidationError::with_field_errors(field_errors);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of validation failure (e.g. "required", "pattern").
    pub code: String,
    /// Additional parameters used to interpolate the error message.
    pub params: HashMap<String, String>,
    /// Per-field validation errors, keyed by control path.
    pub field_errors: BTreeMap<String, Vec<Self>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
            field_errors: BTreeMap::new(),
        }
    }

    /// Creates a `ValidationError` containing per-field errors.
    pub fn with_field_errors(field_errors: BTreeMap<String, Vec<Self>>) -> Self {
        Self {
            message: String::new(),
            code: String::new(),
            params: HashMap::new(),
            field_errors,
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns the codes reported for the given field path.
    pub fn codes_for(&self, field: &str) -> Vec<&str> {
        self.field_errors
            .get(field)
            .map(|errors| errors.iter().map(|e| e.code.as_str()).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}", self.message)?;
        } else if !self.field_errors.is_empty() {
            let mut first = true;
            for (field, errors) in &self.field_errors {
                for error in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{field}: {error}")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for regform.
#[derive(Error, Debug)]
pub enum FormError {
    // ── Validation ───────────────────────────────────────────────────

    /// One or more controls failed validation.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    /// An event referenced a control path that does not exist.
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// A select control received a value outside its options.
    #[error("Invalid choice for {field}: {value:?}")]
    InvalidChoice {
        /// The control path.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A pattern validator was given a source that is not a valid regex.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormError {
    /// Returns the process exit code associated with this error.
    ///
    /// - `ValidationError`, `UnknownControl`, `InvalidChoice` -> 1
    /// - Everything else -> 2
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ValidationError(_) | Self::UnknownControl(_) | Self::InvalidChoice { .. } => 1,
            Self::InvalidPattern(_)
            | Self::ConfigurationError(_)
            | Self::SerializationError(_)
            | Self::IoError(_) => 2,
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_simple() {
        let err = ValidationError::new("Email is required", "required");
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn test_validation_error_display_field_errors() {
        let mut field_errors = BTreeMap::new();
        field_errors.insert(
            "email".to_string(),
            vec![ValidationError::new("Email is required", "required")],
        );
        field_errors.insert(
            "password".to_string(),
            vec![ValidationError::new("Password is required", "required")],
        );
        let err = ValidationError::with_field_errors(field_errors);
        assert_eq!(
            err.to_string(),
            "email: Email is required; password: Password is required"
        );
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Too short.", "minlength").with_param("requiredLength", "8");
        assert_eq!(err.params.get("requiredLength").unwrap(), "8");
    }

    #[test]
    fn test_codes_for() {
        let mut field_errors = BTreeMap::new();
        field_errors.insert(
            "email".to_string(),
            vec![
                ValidationError::new("a", "required"),
                ValidationError::new("b", "pattern"),
            ],
        );
        let err = ValidationError::with_field_errors(field_errors);
        assert_eq!(err.codes_for("email"), vec!["required", "pattern"]);
        assert!(err.codes_for("password").is_empty());
    }

    #[test]
    fn test_form_error_exit_codes() {
        assert_eq!(
            FormError::ValidationError(ValidationError::new("x", "y")).exit_code(),
            1
        );
        assert_eq!(FormError::UnknownControl("x".into()).exit_code(), 1);
        assert_eq!(
            FormError::InvalidChoice {
                field: "language".into(),
                value: "Klingon".into()
            }
            .exit_code(),
            1
        );
        assert_eq!(FormError::InvalidPattern("(".into()).exit_code(), 2);
        assert_eq!(FormError::ConfigurationError("x".into()).exit_code(), 2);
    }

    #[test]
    fn test_form_error_display() {
        let err = FormError::UnknownControl("name.middleName".into());
        assert_eq!(err.to_string(), "Unknown control: name.middleName");

        let err = FormError::InvalidChoice {
            field: "language".into(),
            value: "Klingon".into(),
        };
        assert_eq!(err.to_string(), "Invalid choice for language: \"Klingon\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormError = io_err.into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("file missing"));
    }
}
