//! Configuration checks.
//!
//! [`run_checks`] inspects a [`Settings`] value for misconfigurations that
//! would make the registration form unusable or surprising: an empty or
//! duplicated language list, a zero password length, an email pattern that
//! does not compile, or an unknown skin.

use std::collections::HashSet;

use crate::settings::Settings;

/// Skin names understood by the renderer lookup.
pub const KNOWN_SKINS: [&str; 2] = ["alert", "status"];

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    /// Informational message.
    Info = 1,
    /// A potential problem.
    Warning = 2,
    /// A definite problem that should be fixed.
    Error = 3,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A diagnostic message produced by a configuration check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// The human-readable message describing the issue.
    pub msg: String,
    /// An optional hint on how to fix the issue.
    pub hint: Option<String>,
    /// A unique identifier for this check message (e.g. "form.E001").
    pub id: String,
}

impl CheckMessage {
    /// Creates a new `CheckMessage`.
    pub fn new(level: CheckLevel, msg: impl Into<String>, hint: Option<&str>, id: &str) -> Self {
        Self {
            level,
            msg: msg.into(),
            hint: hint.map(String::from),
            id: id.to_string(),
        }
    }

    /// Returns `true` if this message is at error level.
    pub fn is_serious(&self) -> bool {
        self.level >= CheckLevel::Error
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ({}) {}", self.level, self.id, self.msg)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        Ok(())
    }
}

/// Runs all configuration checks against the given settings.
pub fn run_checks(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    let form = &settings.form;

    if form.languages.is_empty() {
        messages.push(CheckMessage::new(
            CheckLevel::Error,
            "No languages configured",
            Some("Add at least one entry to form.languages"),
            "form.E001",
        ));
    }

    let mut seen = HashSet::new();
    for lang in &form.languages {
        if lang.is_empty() {
            messages.push(CheckMessage::new(
                CheckLevel::Error,
                "Empty language name",
                Some("The empty value is reserved for the placeholder option"),
                "form.E002",
            ));
        } else if !seen.insert(lang.as_str()) {
            messages.push(CheckMessage::new(
                CheckLevel::Warning,
                format!("Language '{lang}' is listed more than once"),
                None,
                "form.W001",
            ));
        }
    }

    if form.password_min_length == 0 {
        messages.push(CheckMessage::new(
            CheckLevel::Warning,
            "password_min_length is 0, the minimum length check never fails",
            Some("Set form.password_min_length to a positive value"),
            "form.W002",
        ));
    }

    if let Err(e) = regex::Regex::new(&form.email_pattern) {
        messages.push(CheckMessage::new(
            CheckLevel::Error,
            format!("email_pattern does not compile: {e}"),
            None,
            "form.E003",
        ));
    }

    if !KNOWN_SKINS.contains(&settings.skin.as_str()) {
        messages.push(CheckMessage::new(
            CheckLevel::Error,
            format!("Unknown skin '{}'", settings.skin),
            Some("Use one of: alert, status"),
            "render.E001",
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_pass() {
        assert!(run_checks(&Settings::default()).is_empty());
    }

    #[test]
    fn test_no_languages() {
        let mut settings = Settings::default();
        settings.form.languages.clear();
        let messages = run_checks(&settings);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "form.E001");
        assert!(messages[0].is_serious());
    }

    #[test]
    fn test_duplicate_and_empty_languages() {
        let mut settings = Settings::default();
        settings.form.languages = vec!["English".into(), "English".into(), String::new()];
        let ids: Vec<_> = run_checks(&settings).into_iter().map(|m| m.id).collect();
        assert!(ids.contains(&"form.W001".to_string()));
        assert!(ids.contains(&"form.E002".to_string()));
    }

    #[test]
    fn test_zero_min_length() {
        let mut settings = Settings::default();
        settings.form.password_min_length = 0;
        let messages = run_checks(&settings);
        assert_eq!(messages[0].id, "form.W002");
        assert!(!messages[0].is_serious());
    }

    #[test]
    fn test_bad_pattern_and_skin() {
        let mut settings = Settings::default();
        settings.form.email_pattern = "([".into();
        settings.skin = "material".into();
        let ids: Vec<_> = run_checks(&settings).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["form.E003", "render.E001"]);
    }

    #[test]
    fn test_message_display() {
        let msg = CheckMessage::new(CheckLevel::Error, "boom", Some("fix it"), "form.E001");
        assert_eq!(msg.to_string(), "ERROR: (form.E001) boom\n\tHINT: fix it");
    }
}
