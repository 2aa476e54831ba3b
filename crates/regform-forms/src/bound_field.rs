//! Bound controls: controls paired with their path, widget, and display state.
//!
//! A [`BoundControl`] is created while rendering to pair a control with its
//! full path and widget. Its [`DisplayState`] is derived from validity and
//! interaction: nothing is highlighted until the user has edited the value
//! or left the input.

use std::collections::HashMap;

use crate::control::{ControlStatus, FormControl};
use crate::validators::ErrorKind;
use crate::widgets::{self, escape_html, Widget};

/// Feedback styling to apply to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Untouched and pristine: neither valid nor invalid styling.
    Neutral,
    /// Valid after interaction.
    Valid,
    /// Invalid after interaction.
    Invalid,
}

impl DisplayState {
    /// Derives the display state from validity and the interaction flags.
    pub const fn derive(status: ControlStatus, dirty: bool, touched: bool) -> Self {
        if !(dirty || touched) {
            return Self::Neutral;
        }
        match status {
            ControlStatus::Valid => Self::Valid,
            ControlStatus::Invalid => Self::Invalid,
        }
    }

    /// Returns the display state of a control.
    pub fn of(control: &FormControl) -> Self {
        Self::derive(control.status(), control.is_dirty(), control.is_touched())
    }
}

/// A control bound to its path and widget for rendering.
pub struct BoundControl<'a> {
    /// Full dot-separated path of the control.
    pub path: String,
    /// The control being rendered.
    pub control: &'a FormControl,
    /// The widget instance used for rendering.
    pub widget: Box<dyn Widget>,
}

impl<'a> BoundControl<'a> {
    /// Creates a new `BoundControl`.
    pub fn new(path: impl Into<String>, control: &'a FormControl) -> Self {
        let widget = widgets::create_widget(
            control.widget,
            &control.choices,
            control.placeholder.as_deref(),
        );
        Self {
            path: path.into(),
            control,
            widget,
        }
    }

    /// Returns the derived display state.
    pub fn display_state(&self) -> DisplayState {
        DisplayState::of(self.control)
    }

    /// Returns `true` if inline error messages should be shown.
    ///
    /// Errors are hidden until the control is dirty or touched.
    pub fn show_errors(&self) -> bool {
        self.display_state() == DisplayState::Invalid
    }

    /// Returns `true` if this control has any errors, shown or not.
    pub fn has_errors(&self) -> bool {
        self.control.is_invalid()
    }

    /// Returns the rendered error messages (empty while errors are hidden).
    ///
    /// While `required` is active only its message is shown; the other
    /// errors stay in the control's error set.
    pub fn messages(&self) -> Vec<String> {
        if !self.show_errors() {
            return Vec::new();
        }
        match self.control.get_error(ErrorKind::Required) {
            Some(required) => vec![self.control.messages.render(required)],
            None => self.control.error_messages(),
        }
    }

    /// Returns the auto-generated HTML `id` for this control.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.path.replace('.', "-"))
    }

    /// Renders the widget HTML with the control's current value.
    ///
    /// `id` and `required` are added unless `extra_attrs` sets them.
    pub fn render(&self, extra_attrs: &HashMap<String, String>) -> String {
        let mut attrs = extra_attrs.clone();
        attrs.entry("id".to_string()).or_insert_with(|| self.auto_id());
        if self.control.is_required() {
            attrs
                .entry("required".to_string())
                .or_insert_with(|| "required".to_string());
        }
        self.widget
            .render(&self.path, Some(self.control.value()), &attrs)
    }

    /// Renders a `<label>` element for this control.
    pub fn label_tag(&self) -> String {
        let label_id = self.widget.id_for_label(&self.auto_id());
        format!(
            r#"<label for="{label_id}">{}</label>"#,
            escape_html(&self.control.label)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{MinLengthValidator, PatternValidator, RequiredValidator};
    use crate::widgets::WidgetType;

    fn first_name() -> FormControl {
        FormControl::new("firstName", "")
            .label("First Name")
            .validator(RequiredValidator)
            .error_message(ErrorKind::Required, "First Name is required!")
    }

    #[test]
    fn test_derive_table() {
        use ControlStatus::{Invalid, Valid};
        assert_eq!(DisplayState::derive(Valid, false, false), DisplayState::Neutral);
        assert_eq!(DisplayState::derive(Invalid, false, false), DisplayState::Neutral);
        assert_eq!(DisplayState::derive(Valid, true, false), DisplayState::Valid);
        assert_eq!(DisplayState::derive(Valid, false, true), DisplayState::Valid);
        assert_eq!(DisplayState::derive(Invalid, true, false), DisplayState::Invalid);
        assert_eq!(DisplayState::derive(Invalid, false, true), DisplayState::Invalid);
    }

    #[test]
    fn test_neutral_before_interaction() {
        let ctrl = first_name();
        let bc = BoundControl::new("name.firstName", &ctrl);
        assert_eq!(bc.display_state(), DisplayState::Neutral);
        assert!(bc.has_errors());
        assert!(!bc.show_errors());
        assert!(bc.messages().is_empty());
    }

    #[test]
    fn test_touched_empty_required_is_invalid() {
        let mut ctrl = first_name();
        ctrl.mark_as_touched();
        let bc = BoundControl::new("name.firstName", &ctrl);
        assert_eq!(bc.display_state(), DisplayState::Invalid);
        assert_eq!(bc.messages(), vec!["First Name is required!"]);
    }

    #[test]
    fn test_required_message_hides_secondary_messages() {
        let mut ctrl = FormControl::new("email", "")
            .validator(RequiredValidator)
            .validator(PatternValidator::new("[^@]*@[^@]*").unwrap())
            .error_message(ErrorKind::Required, "Email is required")
            .error_message(ErrorKind::Pattern, "Needs an @");
        ctrl.mark_as_touched();

        let bc = BoundControl::new("email", &ctrl);
        assert_eq!(bc.messages(), vec!["Email is required"]);
        assert!(ctrl.has_error(ErrorKind::Pattern));
    }

    #[test]
    fn test_secondary_message_shown_once_value_present() {
        let mut ctrl = FormControl::new("password", "")
            .validator(RequiredValidator)
            .validator(MinLengthValidator::new(8))
            .error_message(ErrorKind::MinLength, "Need {remaining} more");
        ctrl.input("abc");
        let bc = BoundControl::new("password", &ctrl);
        assert_eq!(bc.messages(), vec!["Need 5 more"]);
    }

    #[test]
    fn test_dirty_valid() {
        let mut ctrl = first_name();
        ctrl.input("Ada");
        let bc = BoundControl::new("name.firstName", &ctrl);
        assert_eq!(bc.display_state(), DisplayState::Valid);
        assert!(bc.messages().is_empty());
    }

    #[test]
    fn test_render_adds_id_and_required() {
        let ctrl = first_name();
        let bc = BoundControl::new("name.firstName", &ctrl);
        let html = bc.render(&HashMap::new());
        assert!(html.contains(r#"id="id_name-firstName""#));
        assert!(html.contains(r#"required="required""#));
        assert!(html.contains(r#"name="name.firstName""#));
    }

    #[test]
    fn test_render_optional_has_no_required() {
        let ctrl = FormControl::new("language", "").choices(vec!["French".into()], Some("Pick"));
        let bc = BoundControl::new("language", &ctrl);
        assert_eq!(bc.widget.widget_type(), WidgetType::Select);
        let html = bc.render(&HashMap::new());
        assert!(!html.contains("required"));
        assert!(html.contains("<select"));
    }

    #[test]
    fn test_label_tag() {
        let ctrl = first_name();
        let bc = BoundControl::new("name.firstName", &ctrl);
        assert_eq!(
            bc.label_tag(),
            r#"<label for="id_name-firstName">First Name</label>"#
        );
    }
}
