//! Control validators.
//!
//! A validator maps a control's current string value to either success or a
//! single [`ControlError`]. A control runs every attached validator on each
//! value change and keeps all the failures, so its validity is the logical
//! AND of the individual results.
//!
//! Three validators are built in:
//!
//! | Validator | Error kind | Fails when |
//! |---|---|---|
//! | [`RequiredValidator`] | `required` | the value is empty |
//! | [`PatternValidator`] | `pattern` | the value does not fully match the pattern |
//! | [`MinLengthValidator`] | `minlength` | the value has fewer than `n` characters |

use std::fmt;

use regex::Regex;
use regform_core::{FormError, FormResult, ValidationError};

/// The kind of a validation failure.
///
/// Kinds are used to look up error messages and to query a control for a
/// specific failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// The value is empty but must not be.
    Required,
    /// The value does not match the required pattern.
    Pattern,
    /// The value is shorter than the required length.
    MinLength,
}

impl ErrorKind {
    /// Returns the stable error code (`required`, `pattern`, `minlength`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern => "pattern",
            Self::MinLength => "minlength",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single validation failure together with the data needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// The value is empty.
    Required,
    /// The value does not match `required_pattern`.
    Pattern {
        /// The anchored pattern source.
        required_pattern: String,
        /// The value that failed to match.
        actual_value: String,
    },
    /// The value is shorter than `required_length`.
    MinLength {
        /// The minimum number of characters.
        required_length: usize,
        /// The number of characters in the value.
        actual_length: usize,
    },
}

impl ControlError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Required => ErrorKind::Required,
            Self::Pattern { .. } => ErrorKind::Pattern,
            Self::MinLength { .. } => ErrorKind::MinLength,
        }
    }

    /// Returns the interpolation parameters carried by this error.
    ///
    /// `minlength` additionally exposes `remaining`, the number of characters
    /// still missing.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Required => Vec::new(),
            Self::Pattern {
                required_pattern,
                actual_value,
            } => vec![
                ("requiredPattern", required_pattern.clone()),
                ("actualValue", actual_value.clone()),
            ],
            Self::MinLength {
                required_length,
                actual_length,
            } => vec![
                ("requiredLength", required_length.to_string()),
                ("actualLength", actual_length.to_string()),
                (
                    "remaining",
                    required_length.saturating_sub(*actual_length).to_string(),
                ),
            ],
        }
    }

    /// Returns the error payload as JSON, keyed the same way as [`params`](Self::params).
    ///
    /// `required` has no payload and maps to `true`.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::Required => serde_json::Value::Bool(true),
            Self::Pattern {
                required_pattern,
                actual_value,
            } => serde_json::json!({
                "requiredPattern": required_pattern,
                "actualValue": actual_value,
            }),
            Self::MinLength {
                required_length,
                actual_length,
            } => serde_json::json!({
                "requiredLength": required_length,
                "actualLength": actual_length,
            }),
        }
    }

    /// Converts this error into a core [`ValidationError`] with the given message.
    pub fn to_validation_error(&self, message: impl Into<String>) -> ValidationError {
        self.params()
            .into_iter()
            .fold(ValidationError::new(message, self.kind().code()), |err, (k, v)| {
                err.with_param(k, v)
            })
    }
}

/// A trait for validating control values.
///
/// Validators are pure: the same value always produces the same result.
///
/// # Examples
///
/// ```
/// use regform_forms::validators::{MinLengthValidator, Validator};
///
/// let v = MinLengthValidator::new(3);
/// assert!(v.validate("abc").is_ok());
/// assert!(v.validate("ab").is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the given value, returning the failure if invalid.
    fn validate(&self, value: &str) -> Result<(), ControlError>;

    /// Returns the kind of error this validator reports.
    fn kind(&self) -> ErrorKind;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

/// Validates that a value is not empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), ControlError> {
        if value.is_empty() {
            return Err(ControlError::Required);
        }
        Ok(())
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Required
    }

    fn name(&self) -> &str {
        "RequiredValidator"
    }
}

/// Validates that a value fully matches a regular expression.
///
/// The pattern is anchored at both ends, so `[^@]*@[^@]*` accepts `a@b`
/// but rejects `a@b@c`.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    source: String,
    regex: Regex,
}

impl PatternValidator {
    /// Compiles a new `PatternValidator`.
    ///
    /// A leading `^` and trailing `$` are added when missing.
    pub fn new(pattern: &str) -> FormResult<Self> {
        let mut source = String::with_capacity(pattern.len() + 2);
        if !pattern.starts_with('^') {
            source.push('^');
        }
        source.push_str(pattern);
        if !pattern.ends_with('$') {
            source.push('$');
        }
        let regex =
            Regex::new(&source).map_err(|e| FormError::InvalidPattern(format!("{pattern}: {e}")))?;
        Ok(Self { source, regex })
    }

    /// Returns the anchored pattern source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Validator for PatternValidator {
    fn validate(&self, value: &str) -> Result<(), ControlError> {
        if self.regex.is_match(value) {
            return Ok(());
        }
        Err(ControlError::Pattern {
            required_pattern: self.source.clone(),
            actual_value: value.to_string(),
        })
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Pattern
    }

    fn name(&self) -> &str {
        "PatternValidator"
    }
}

/// Validates that a value has at least `min_length` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
    /// The minimum required length.
    pub min_length: usize,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator` with the given minimum length.
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), ControlError> {
        let actual_length = value.chars().count();
        if actual_length < self.min_length {
            return Err(ControlError::MinLength {
                required_length: self.min_length,
                actual_length,
            });
        }
        Ok(())
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::MinLength
    }

    fn name(&self) -> &str {
        "MinLengthValidator"
    }
}

/// Runs every validator against `value` and collects the failures in order.
pub fn run_validators(validators: &[Box<dyn Validator>], value: &str) -> Vec<ControlError> {
    validators
        .iter()
        .filter_map(|v| v.validate(value).err())
        .collect()
}
