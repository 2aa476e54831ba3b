//! Leaf form controls.
//!
//! A [`FormControl`] holds one input's current value together with its
//! validators, the errors those validators currently report, and the
//! interaction flags:
//!
//! - **dirty**: the user has changed the value since creation or reset
//! - **touched**: the input has lost focus since creation or reset
//!
//! Both flags only move forward until [`FormControl::reset`]. Errors are
//! recomputed synchronously whenever the value changes, so they never lag
//! behind the value.

use regform_core::ValidationError;

use crate::messages::ErrorMessages;
use crate::validators::{run_validators, ControlError, ErrorKind, Validator};
use crate::widgets::WidgetType;

/// Validity of a control or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    /// No validator reports an error.
    Valid,
    /// At least one validator reports an error.
    Invalid,
}

impl ControlStatus {
    /// Returns the status name as used in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
        }
    }
}

/// A single named input with its value, validators, and interaction state.
///
/// # Examples
///
/// ```
/// use regform_forms::control::FormControl;
/// use regform_forms::validators::{ErrorKind, RequiredValidator};
///
/// let mut ctrl = FormControl::new("firstName", "").validator(RequiredValidator);
/// assert!(ctrl.has_error(ErrorKind::Required));
/// assert!(ctrl.is_pristine());
///
/// ctrl.input("Ada");
/// assert!(ctrl.is_valid());
/// assert!(ctrl.is_dirty());
/// ```
#[derive(Debug)]
pub struct FormControl {
    name: String,
    value: String,
    initial: String,
    validators: Vec<Box<dyn Validator>>,
    errors: Vec<ControlError>,
    dirty: bool,
    touched: bool,
    /// Human-readable label.
    pub label: String,
    /// The widget type used for rendering.
    pub widget: WidgetType,
    /// Allowed values for select controls (empty for free text).
    pub choices: Vec<String>,
    /// Label of the empty option offered before the choices.
    pub placeholder: Option<String>,
    /// Message templates keyed by error kind.
    pub messages: ErrorMessages,
}

impl FormControl {
    /// Creates a new control with the given initial value and no validators.
    pub fn new(name: impl Into<String>, initial: impl Into<String>) -> Self {
        let name = name.into();
        let initial = initial.into();
        Self {
            label: name.clone(),
            name,
            value: initial.clone(),
            initial,
            validators: Vec::new(),
            errors: Vec::new(),
            dirty: false,
            touched: false,
            widget: WidgetType::TextInput,
            choices: Vec::new(),
            placeholder: None,
            messages: ErrorMessages::new(),
        }
    }

    /// Adds a validator and re-validates the current value.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self.update_validity();
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the widget type.
    #[must_use]
    pub fn widget(mut self, widget: WidgetType) -> Self {
        self.widget = widget;
        self
    }

    /// Turns this control into a select over `choices` with an optional
    /// placeholder option.
    #[must_use]
    pub fn choices(mut self, choices: Vec<String>, placeholder: Option<&str>) -> Self {
        self.widget = WidgetType::Select;
        self.choices = choices;
        self.placeholder = placeholder.map(String::from);
        self
    }

    /// Sets a custom error message template for a given error kind.
    #[must_use]
    pub fn error_message(mut self, kind: ErrorKind, template: impl Into<String>) -> Self {
        self.messages.insert(kind, template);
        self
    }

    /// Returns the control's own name (the last path segment).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the value restored by [`reset`](Self::reset).
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Sets the value programmatically and re-validates.
    ///
    /// Does not mark the control as dirty.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.update_validity();
    }

    /// Applies a user edit: sets the value, marks the control dirty, and
    /// re-validates.
    pub fn input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
        self.update_validity();
        tracing::debug!(
            control = %self.name,
            status = self.status().as_str(),
            errors = self.errors.len(),
            "control input"
        );
    }

    /// Marks the control as touched (the input lost focus).
    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    /// Marks the control as dirty without changing its value.
    pub fn mark_as_dirty(&mut self) {
        self.dirty = true;
    }

    /// Restores the initial value and clears the dirty and touched flags.
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.dirty = false;
        self.touched = false;
        self.update_validity();
    }

    /// Returns `true` if `value` is acceptable for this control's choices.
    ///
    /// Free-text controls accept anything; selects accept the empty
    /// placeholder value and any listed choice.
    pub fn accepts(&self, value: &str) -> bool {
        self.choices.is_empty() || value.is_empty() || self.choices.iter().any(|c| c == value)
    }

    /// Returns `true` if a `required` validator is attached.
    pub fn is_required(&self) -> bool {
        self.validators
            .iter()
            .any(|v| v.kind() == ErrorKind::Required)
    }

    /// Returns the errors reported for the current value.
    pub fn errors(&self) -> &[ControlError] {
        &self.errors
    }

    /// Returns `true` if an error of the given kind is active.
    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.get_error(kind).is_some()
    }

    /// Returns the active error of the given kind, if any.
    pub fn get_error(&self, kind: ErrorKind) -> Option<&ControlError> {
        self.errors.iter().find(|e| e.kind() == kind)
    }

    /// Returns the current status.
    pub fn status(&self) -> ControlStatus {
        if self.errors.is_empty() {
            ControlStatus::Valid
        } else {
            ControlStatus::Invalid
        }
    }

    /// Returns `true` if no validator reports an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if at least one validator reports an error.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns `true` if the user changed the value since creation or reset.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` if the user has not changed the value.
    pub const fn is_pristine(&self) -> bool {
        !self.dirty
    }

    /// Returns `true` if the input lost focus since creation or reset.
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns `true` if the input has not lost focus yet.
    pub const fn is_untouched(&self) -> bool {
        !self.touched
    }

    /// Returns the rendered message for each active error, in validator order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| self.messages.render(e)).collect()
    }

    /// Returns the active errors as core validation errors.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        self.errors
            .iter()
            .map(|e| e.to_validation_error(self.messages.render(e)))
            .collect()
    }

    fn update_validity(&mut self) {
        self.errors = run_validators(&self.validators, &self.value);
    }
}
