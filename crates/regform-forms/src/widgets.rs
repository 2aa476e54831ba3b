//! Widget system for rendering HTML form elements.
//!
//! Widgets are the bridge between controls and their HTML representation.
//! Each widget knows how to render itself for a given name, value, and
//! attribute map, and which `id` its `<label>` should point at.

use std::collections::HashMap;
use std::fmt;

/// Enumerates the built-in widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<input type="password">`.
    PasswordInput,
    /// `<select>`.
    Select,
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::EmailInput => "EmailInput",
            Self::PasswordInput => "PasswordInput",
            Self::Select => "Select",
        };
        write!(f, "{name}")
    }
}

/// A trait for HTML form widgets.
pub trait Widget: Send + Sync + fmt::Debug {
    /// Returns the widget type enum variant.
    fn widget_type(&self) -> WidgetType;

    /// Renders the widget as an HTML string.
    ///
    /// # Arguments
    /// - `name` - The HTML `name` attribute
    /// - `value` - The current value to display (if any)
    /// - `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &HashMap<String, String>) -> String;

    /// Returns the HTML `id` attribute value for a label targeting this widget.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Formats an HTML attributes map into a string like ` key="value" key2="value2"`.
pub fn render_attrs(attrs: &HashMap<String, String>) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut parts: Vec<String> = attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{}""#, escape_html(v)))
        .collect();
    parts.sort(); // deterministic output for testing
    parts.join("")
}

fn render_input(
    input_type: &str,
    name: &str,
    value: Option<&str>,
    attrs: &HashMap<String, String>,
) -> String {
    let val = escape_html(value.unwrap_or(""));
    format!(
        r#"<input type="{input_type}" name="{name}" value="{val}"{} />"#,
        render_attrs(attrs)
    )
}

// ---------------------------------------------------------------------------
// Built-in widgets
// ---------------------------------------------------------------------------

/// A basic `<input type="text">` widget.
#[derive(Debug, Clone)]
pub struct TextInput;

impl Widget for TextInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::TextInput
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &HashMap<String, String>) -> String {
        render_input("text", name, value, attrs)
    }
}

/// A `<input type="email">` widget.
#[derive(Debug, Clone)]
pub struct EmailInput;

impl Widget for EmailInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::EmailInput
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &HashMap<String, String>) -> String {
        render_input("email", name, value, attrs)
    }
}

/// A `<input type="password">` widget.
///
/// By default, does not render the current value.
#[derive(Debug, Clone, Default)]
pub struct PasswordInput {
    /// Whether to render the value attribute. Defaults to `false`.
    pub render_value: bool,
}

impl Widget for PasswordInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::PasswordInput
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &HashMap<String, String>) -> String {
        let val = if self.render_value { value } else { None };
        render_input("password", name, val, attrs)
    }
}

/// A `<select>` widget.
///
/// When `placeholder` is set, an extra `<option value="">` is rendered first
/// so the user has to pick an entry explicitly.
#[derive(Debug, Clone)]
pub struct Select {
    /// The available choices as `(value, display_label)` pairs.
    pub choices: Vec<(String, String)>,
    /// Label of the leading empty option.
    pub placeholder: Option<String>,
}

impl Select {
    /// Creates a new `Select` widget with the given choices.
    pub fn new(choices: Vec<(String, String)>) -> Self {
        Self {
            choices,
            placeholder: None,
        }
    }

    /// Adds a leading empty option with the given label.
    #[must_use]
    pub fn with_placeholder(mut self, label: impl Into<String>) -> Self {
        self.placeholder = Some(label.into());
        self
    }
}

impl Widget for Select {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Select
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &HashMap<String, String>) -> String {
        let current = value.unwrap_or("");
        let mut options = String::new();
        if let Some(label) = &self.placeholder {
            let selected = if current.is_empty() { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value=""{selected}>{}</option>"#,
                escape_html(label)
            ));
        }
        for (val, label) in &self.choices {
            let selected = if val == current { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_html(val),
                escape_html(label)
            ));
        }
        format!(
            r#"<select name="{name}"{}>{options}</select>"#,
            render_attrs(attrs)
        )
    }
}

/// Creates a boxed widget from a `WidgetType`, populating choices if applicable.
///
/// Choices and placeholder are ignored for non-select widgets.
pub fn create_widget(
    widget_type: WidgetType,
    choices: &[String],
    placeholder: Option<&str>,
) -> Box<dyn Widget> {
    match widget_type {
        WidgetType::TextInput => Box::new(TextInput),
        WidgetType::EmailInput => Box::new(EmailInput),
        WidgetType::PasswordInput => Box::new(PasswordInput::default()),
        WidgetType::Select => {
            let select = Select::new(choices.iter().map(|c| (c.clone(), c.clone())).collect());
            match placeholder {
                Some(label) => Box::new(select.with_placeholder(label)),
                None => Box::new(select),
            }
        }
    }
}
