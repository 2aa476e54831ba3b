//! Settings for regform.
//!
//! [`Settings`] holds the application configuration (logging and the default
//! skin) and nests [`FormSettings`], which parameterizes the registration
//! form itself. Every field has a default, so a partial configuration file
//! only needs to name what it changes.

use serde::{Deserialize, Serialize};

/// The languages offered by the language selector, in display order.
pub const DEFAULT_LANGUAGES: [&str; 3] = ["English", "French", "German"];

/// The default minimum password length.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// The default email pattern: anything containing an `@`.
pub const DEFAULT_EMAIL_PATTERN: &str = "[^@]*@[^@]*";

/// Parameters of the registration form.
///
/// # Examples
///
/// ```
/// use regform_core::settings::FormSettings;
///
/// let form = FormSettings::default();
/// assert_eq!(form.languages, vec!["English", "French", "German"]);
/// assert_eq!(form.password_min_length, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Selectable languages, rendered after an empty placeholder option.
    pub languages: Vec<String>,
    /// Minimum number of characters required in the password.
    pub password_min_length: usize,
    /// Pattern the email value must match (anchored at both ends).
    pub email_pattern: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect(),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
        }
    }
}

/// The complete set of application settings.
///
/// # Examples
///
/// ```
/// use regform_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.skin, "alert");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level or filter directive (e.g. "info", "`regform_forms=debug`").
    pub log_level: String,

    // ── Rendering ────────────────────────────────────────────────────

    /// The skin used when none is requested explicitly ("alert" or "status").
    pub skin: String,

    // ── Form ─────────────────────────────────────────────────────────

    /// Registration form parameters.
    pub form: FormSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            skin: "alert".to_string(),
            form: FormSettings::default(),
        }
    }
}
