//! Error message templates.
//!
//! Each control owns an [`ErrorMessages`] table mapping an [`ErrorKind`] to a
//! template. Templates may reference the error's parameters in braces, e.g.
//! `"we need another {remaining} characters!"`. Kinds without a custom
//! template fall back to [`default_template`].

use std::collections::HashMap;

use crate::validators::{ControlError, ErrorKind};

/// Returns the built-in template for an error kind.
pub const fn default_template(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "This field is required.",
        ErrorKind::Pattern => "Enter a value matching {requiredPattern}.",
        ErrorKind::MinLength => {
            "Ensure this value has at least {requiredLength} characters (it has {actualLength})."
        }
    }
}

/// Replaces every `{name}` placeholder with its parameter value.
///
/// Placeholders without a matching parameter are left untouched.
///
/// # Examples
///
/// ```
/// use regform_forms::messages::interpolate;
///
/// let msg = interpolate("need {n} more", &[("n", "3".to_string())]);
/// assert_eq!(msg, "need 3 more");
/// ```
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    params.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

/// Per-control message templates keyed by error kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessages {
    templates: HashMap<ErrorKind, String>,
}

impl ErrorMessages {
    /// Creates an empty table (all kinds use the default templates).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template for a kind, replacing any previous one.
    pub fn insert(&mut self, kind: ErrorKind, template: impl Into<String>) {
        self.templates.insert(kind, template.into());
    }

    /// Returns the template used for a kind.
    pub fn template(&self, kind: ErrorKind) -> &str {
        self.templates
            .get(&kind)
            .map_or_else(|| default_template(kind), String::as_str)
    }

    /// Renders the message for an error.
    pub fn render(&self, error: &ControlError) -> String {
        interpolate(self.template(error.kind()), &error.params())
    }
}
