//! The registration form component.
//!
//! [`RegistrationForm`] assembles the control tree once:
//!
//! ```text
//! registration
//! ├── name
//! │   ├── firstName   required
//! │   └── lastName    required
//! ├── email           required, pattern
//! ├── password        required, minlength
//! └── language        select, no validators
//! ```
//!
//! and then reacts to [`FormEvent`]s coming from the UI. Every event is
//! applied synchronously: the affected control is re-validated before the
//! handler returns, so any state read afterwards is current.
//!
//! Submission is guarded by overall validity. A valid submit snapshots the
//! value tree into a [`RegistrationValue`], hands it to the configured
//! [`SubmissionSink`], and resets the whole form.

use std::fmt;

use serde::{Deserialize, Serialize};

use regform_core::logging::form_span;
use regform_core::{FormError, FormResult, FormSettings};

use crate::bound_field::BoundControl;
use crate::control::FormControl;
use crate::group::FormGroup;
use crate::validators::{ErrorKind, MinLengthValidator, PatternValidator, RequiredValidator};
use crate::widgets::WidgetType;

/// Control paths of the registration form.
pub mod paths {
    /// The `name` group.
    pub const NAME: &str = "name";
    /// First name, inside the `name` group.
    pub const FIRST_NAME: &str = "name.firstName";
    /// Last name, inside the `name` group.
    pub const LAST_NAME: &str = "name.lastName";
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Password.
    pub const PASSWORD: &str = "password";
    /// Preferred language.
    pub const LANGUAGE: &str = "language";
}

/// Label of the empty option that forces an explicit language choice.
pub const LANGUAGE_PLACEHOLDER: &str = "Please select a language";

/// The `name` part of a submitted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameValue {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

/// Snapshot of every leaf value, shaped like the control tree.
///
/// Serializes as
/// `{"name": {"firstName", "lastName"}, "email", "password", "language"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationValue {
    /// The name group.
    pub name: NameValue,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Selected language, empty if none was chosen.
    pub language: String,
}

/// A UI event delivered to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed the value of the control at `path`.
    Input {
        /// Control path, e.g. `"name.firstName"`.
        path: String,
        /// The new value.
        value: String,
    },
    /// The control at `path` lost focus.
    Blur {
        /// Control path.
        path: String,
    },
    /// The user pressed the submit button.
    Submit,
}

impl FormEvent {
    /// Creates an input event.
    pub fn input(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Creates a blur event.
    pub fn blur(path: impl Into<String>) -> Self {
        Self::Blur { path: path.into() }
    }
}

/// Receives the value of each successful submission.
///
/// Any `Fn(&RegistrationValue)` closure is a sink, which makes it easy to
/// forward submissions to a caller-supplied callback.
pub trait SubmissionSink: Send + Sync {
    /// Handles one submitted value.
    fn submitted(&self, value: &RegistrationValue) -> FormResult<()>;
}

impl<F> SubmissionSink for F
where
    F: Fn(&RegistrationValue) + Send + Sync,
{
    fn submitted(&self, value: &RegistrationValue) -> FormResult<()> {
        self(value);
        Ok(())
    }
}

/// Emits one `info` log event per submission, with the password masked.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submitted(&self, value: &RegistrationValue) -> FormResult<()> {
        let mut logged = value.clone();
        logged.password = "*".repeat(value.password.chars().count());
        let json = serde_json::to_string(&logged)?;
        tracing::info!(value = %json, "Form Submitted");
        Ok(())
    }
}

/// The registration form: control tree, event handling, and submission.
///
/// # Examples
///
/// ```
/// use regform_core::FormSettings;
/// use regform_forms::registration::{paths, RegistrationForm};
///
/// let mut form = RegistrationForm::new(&FormSettings::default()).unwrap();
/// assert!(!form.can_submit());
///
/// form.input(paths::FIRST_NAME, "A").unwrap();
/// form.input(paths::LAST_NAME, "B").unwrap();
/// form.input(paths::EMAIL, "a@b").unwrap();
/// form.input(paths::PASSWORD, "12345678").unwrap();
/// assert!(form.can_submit());
///
/// let value = form.submit().unwrap();
/// assert_eq!(value.name.first_name, "A");
/// assert_eq!(form.value().name.first_name, "");
/// ```
pub struct RegistrationForm {
    form: FormGroup,
    languages: Vec<String>,
    sink: Box<dyn SubmissionSink>,
    span: tracing::Span,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("form", &self.form)
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}

impl RegistrationForm {
    /// Builds the form from settings, logging submissions through [`LogSink`].
    ///
    /// Fails if the configured email pattern is not a valid regex.
    pub fn new(settings: &FormSettings) -> FormResult<Self> {
        let form = build_tree(settings)?;
        tracing::debug!(
            languages = settings.languages.len(),
            password_min_length = settings.password_min_length,
            "registration form created"
        );
        Ok(Self {
            form,
            languages: settings.languages.clone(),
            sink: Box::new(LogSink),
            span: form_span("registration"),
        })
    }

    /// Replaces the submission sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl SubmissionSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Dispatches a UI event.
    ///
    /// Returns the submitted value for a successful [`FormEvent::Submit`],
    /// `None` for other events.
    pub fn handle(&mut self, event: FormEvent) -> FormResult<Option<RegistrationValue>> {
        match event {
            FormEvent::Input { path, value } => self.input(&path, value).map(|()| None),
            FormEvent::Blur { path } => self.blur(&path).map(|()| None),
            FormEvent::Submit => self.submit().map(Some),
        }
    }

    /// Applies a user edit to the control at `path`.
    ///
    /// The language control only accepts `""` or one of the configured
    /// languages.
    pub fn input(&mut self, path: &str, value: impl Into<String>) -> FormResult<()> {
        let _guard = self.span.enter();
        self.form.input(path, value)
    }

    /// Marks the control at `path` as touched.
    pub fn blur(&mut self, path: &str) -> FormResult<()> {
        let _guard = self.span.enter();
        tracing::trace!(control = path, "blur");
        self.form.blur(path)
    }

    /// Marks every control as touched, revealing all pending errors.
    pub fn mark_all_as_touched(&mut self) {
        self.form.mark_all_as_touched();
    }

    /// Returns `true` if the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    /// Submits the form.
    ///
    /// While the form is invalid this is inert: nothing is emitted, nothing
    /// is reset, and the per-field errors are returned as
    /// [`FormError::ValidationError`]. Otherwise the snapshot is handed to
    /// the sink, the form is reset, and the snapshot is returned.
    pub fn submit(&mut self) -> FormResult<RegistrationValue> {
        let span = self.span.clone();
        let _guard = span.enter();

        if let Some(err) = self.form.validation_error() {
            tracing::debug!(errors = %err, "submit ignored, form invalid");
            return Err(FormError::ValidationError(err));
        }

        let value = self.value();
        self.sink.submitted(&value)?;
        self.form.reset();
        Ok(value)
    }

    /// Resets every control to its empty initial state.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Returns `true` if every control is valid.
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Returns the typed value snapshot.
    pub fn value(&self) -> RegistrationValue {
        let get = |path: &str| {
            self.form
                .get_control(path)
                .map(|c| c.value().to_string())
                .unwrap_or_default()
        };
        RegistrationValue {
            name: NameValue {
                first_name: get(paths::FIRST_NAME),
                last_name: get(paths::LAST_NAME),
            },
            email: get(paths::EMAIL),
            password: get(paths::PASSWORD),
            language: get(paths::LANGUAGE),
        }
    }

    /// Returns the value snapshot as generic JSON.
    pub fn value_json(&self) -> serde_json::Value {
        self.form.value()
    }

    /// Returns the underlying control tree.
    pub const fn form(&self) -> &FormGroup {
        &self.form
    }

    /// Returns the leaf control at `path`.
    pub fn control(&self, path: &str) -> Option<&FormControl> {
        self.form.get_control(path)
    }

    /// Returns the selectable languages in display order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Returns a bound control for rendering the control at `path`.
    pub fn bound(&self, path: &str) -> Option<BoundControl<'_>> {
        self.form
            .get_control(path)
            .map(|c| BoundControl::new(path, c))
    }

    /// Returns bound controls for every leaf, in declaration order.
    pub fn bound_controls(&self) -> Vec<BoundControl<'_>> {
        self.form
            .controls()
            .into_iter()
            .map(|(path, c)| BoundControl::new(path, c))
            .collect()
    }
}

fn build_tree(settings: &FormSettings) -> FormResult<FormGroup> {
    let first_name = FormControl::new("firstName", "")
        .label("First Name")
        .validator(RequiredValidator)
        .error_message(ErrorKind::Required, "First Name is required!");

    let last_name = FormControl::new("lastName", "")
        .label("Last Name")
        .validator(RequiredValidator)
        .error_message(ErrorKind::Required, "Last Name is required!");

    let email = FormControl::new("email", "")
        .label("Email")
        .widget(WidgetType::EmailInput)
        .validator(RequiredValidator)
        .validator(PatternValidator::new(&settings.email_pattern)?)
        .error_message(ErrorKind::Required, "Email is required")
        .error_message(
            ErrorKind::Pattern,
            "The email address must contain at least the @ character!",
        );

    let password = FormControl::new("password", "")
        .label("Password")
        .widget(WidgetType::PasswordInput)
        .validator(RequiredValidator)
        .validator(MinLengthValidator::new(settings.password_min_length))
        .error_message(ErrorKind::Required, "Password is required")
        .error_message(
            ErrorKind::MinLength,
            "Password must be {requiredLength} characters long, we need another {remaining} characters!",
        );

    let language = FormControl::new("language", "")
        .label("Language")
        .choices(settings.languages.clone(), Some(LANGUAGE_PLACEHOLDER));

    Ok(FormGroup::new("registration")
        .group(
            FormGroup::new(paths::NAME)
                .control(first_name)
                .control(last_name),
        )
        .control(email)
        .control(password)
        .control(language))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm::new(&FormSettings::default()).unwrap()
    }

    fn fill(form: &mut RegistrationForm) {
        form.input(paths::FIRST_NAME, "A").unwrap();
        form.input(paths::LAST_NAME, "B").unwrap();
        form.input(paths::EMAIL, "a@b").unwrap();
        form.input(paths::PASSWORD, "12345678").unwrap();
        form.input(paths::LANGUAGE, "French").unwrap();
    }

    #[test]
    fn test_tree_shape() {
        let form = form();
        let paths: Vec<_> = form.form().controls().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec![
                paths::FIRST_NAME,
                paths::LAST_NAME,
                paths::EMAIL,
                paths::PASSWORD,
                paths::LANGUAGE
            ]
        );
        assert_eq!(form.languages(), &["English", "French", "German"]);
    }

    #[test]
    fn test_initially_invalid_and_empty() {
        let form = form();
        assert!(!form.is_valid());
        assert!(!form.can_submit());
        assert_eq!(form.value(), RegistrationValue::default());
    }

    #[test]
    fn test_language_not_required() {
        let mut form = form();
        form.input(paths::FIRST_NAME, "A").unwrap();
        form.input(paths::LAST_NAME, "B").unwrap();
        form.input(paths::EMAIL, "a@b").unwrap();
        form.input(paths::PASSWORD, "12345678").unwrap();
        assert!(form.can_submit());
        assert_eq!(form.value().language, "");
    }

    #[test]
    fn test_submit_emits_and_resets() {
        let seen: Arc<Mutex<Vec<RegistrationValue>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let mut form = form().with_sink(move |v: &RegistrationValue| {
            sink.lock().unwrap().push(v.clone());
        });
        fill(&mut form);
        form.blur(paths::EMAIL).unwrap();

        let value = form.submit().unwrap();
        assert_eq!(value.name.first_name, "A");
        assert_eq!(value.language, "French");
        assert_eq!(seen.lock().unwrap().as_slice(), &[value]);

        assert_eq!(form.value(), RegistrationValue::default());
        assert!(form.form().is_pristine());
        assert!(form.form().is_untouched());
    }

    #[test]
    fn test_submit_invalid_is_inert() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let mut form = form().with_sink(move |_: &RegistrationValue| {
            *counter.lock().unwrap() += 1;
        });
        form.input(paths::FIRST_NAME, "A").unwrap();

        let err = form.submit().unwrap_err();
        let FormError::ValidationError(err) = err else {
            panic!("expected validation error");
        };
        assert_eq!(err.codes_for(paths::LAST_NAME), vec!["required"]);
        assert_eq!(*calls.lock().unwrap(), 0);
        // Nothing was reset
        assert_eq!(form.value().name.first_name, "A");
        assert!(form.form().is_dirty());
    }

    #[test]
    fn test_handle_events() {
        let mut form = form();
        assert_eq!(form.handle(FormEvent::input(paths::FIRST_NAME, "A")).unwrap(), None);
        assert_eq!(form.handle(FormEvent::blur(paths::FIRST_NAME)).unwrap(), None);
        assert!(form.control(paths::FIRST_NAME).unwrap().is_touched());
        assert!(form.handle(FormEvent::Submit).is_err());

        fill(&mut form);
        let submitted = form.handle(FormEvent::Submit).unwrap().unwrap();
        assert_eq!(submitted.password, "12345678");
    }

    #[test]
    fn test_unknown_path_and_bad_language() {
        let mut form = form();
        assert!(matches!(
            form.input("name.middleName", "X"),
            Err(FormError::UnknownControl(_))
        ));
        assert!(matches!(
            form.input(paths::LANGUAGE, "Klingon"),
            Err(FormError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_custom_settings() {
        let settings = FormSettings {
            languages: vec!["Italian".into()],
            password_min_length: 4,
            email_pattern: ".+@.+".into(),
        };
        let mut form = RegistrationForm::new(&settings).unwrap();
        form.input(paths::PASSWORD, "abcd").unwrap();
        assert!(form.control(paths::PASSWORD).unwrap().is_valid());
        form.input(paths::EMAIL, "@b").unwrap();
        assert!(form
            .control(paths::EMAIL)
            .unwrap()
            .has_error(ErrorKind::Pattern));
        assert!(form.input(paths::LANGUAGE, "French").is_err());
    }

    #[test]
    fn test_invalid_email_pattern_setting() {
        let settings = FormSettings {
            email_pattern: "([".into(),
            ..FormSettings::default()
        };
        assert!(matches!(
            RegistrationForm::new(&settings),
            Err(FormError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_value_serializes_in_spec_shape() {
        let mut form = form();
        fill(&mut form);
        let json = serde_json::to_value(form.value()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": {"firstName": "A", "lastName": "B"},
                "email": "a@b",
                "password": "12345678",
                "language": "French"
            })
        );
        assert_eq!(json, form.value_json());
    }

    #[test]
    fn test_log_sink() {
        let value = RegistrationValue {
            password: "secret".into(),
            ..RegistrationValue::default()
        };
        assert!(LogSink.submitted(&value).is_ok());
    }

    #[test]
    fn test_password_message_interpolates_remaining() {
        let mut form = form();
        form.input(paths::PASSWORD, "12345").unwrap();
        let bound = form.bound(paths::PASSWORD).unwrap();
        assert_eq!(
            bound.messages(),
            vec!["Password must be 8 characters long, we need another 3 characters!"]
        );
    }

    #[test]
    fn test_email_block_uses_email_pattern_error() {
        let mut form = form();
        form.input(paths::EMAIL, "no-at-symbol").unwrap();
        // Password stays untouched and empty; only the email's own error shows.
        let bound = form.bound(paths::EMAIL).unwrap();
        assert_eq!(
            bound.messages(),
            vec!["The email address must contain at least the @ character!"]
        );
    }
}
