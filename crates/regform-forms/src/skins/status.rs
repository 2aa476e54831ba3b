//! Status-style skin: `has-success` / `has-danger` on the form group.

use std::collections::HashMap;
use std::fmt::Write;

use regform_core::FormResult;

use crate::bound_field::{BoundControl, DisplayState};
use crate::registration::{paths, RegistrationForm};
use crate::widgets::escape_html;

use super::{submit_button, value_block, Skin};

/// Colours the whole form group and lists errors under the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusSkin;

impl StatusSkin {
    const fn group_class(state: DisplayState) -> &'static str {
        match state {
            DisplayState::Neutral => "form-group",
            DisplayState::Valid => "form-group has-success",
            DisplayState::Invalid => "form-group has-danger",
        }
    }

    const fn input_class(state: DisplayState) -> &'static str {
        match state {
            DisplayState::Neutral => "form-control",
            DisplayState::Valid => "form-control form-control-success",
            DisplayState::Invalid => "form-control form-control-danger",
        }
    }

    fn field(bound: &BoundControl<'_>) -> String {
        let state = bound.display_state();
        let mut attrs = HashMap::new();
        attrs.insert("class".to_string(), Self::input_class(state).to_string());

        let mut html = format!(r#"<div class="{}">"#, Self::group_class(state));
        html.push_str(&bound.label_tag());
        html.push_str(&bound.render(&attrs));
        if bound.show_errors() {
            html.push_str(r#"<div class="form-control-feedback">"#);
            for msg in bound.messages() {
                let _ = write!(html, "<p>{}</p>", escape_html(&msg));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

impl Skin for StatusSkin {
    fn name(&self) -> &'static str {
        "status"
    }

    fn render(&self, form: &RegistrationForm) -> FormResult<String> {
        let mut html = String::from(r#"<div class="container"><form novalidate>"#);
        let mut in_fieldset = false;
        for bound in form.bound_controls() {
            let grouped = bound.path.starts_with(&format!("{}.", paths::NAME));
            if grouped && !in_fieldset {
                html.push_str("<fieldset>");
            } else if !grouped && in_fieldset {
                html.push_str("</fieldset>");
            }
            in_fieldset = grouped;
            html.push_str(&Self::field(&bound));
        }
        if in_fieldset {
            html.push_str("</fieldset>");
        }
        html.push_str(&submit_button(form));
        html.push_str(&value_block(form)?);
        html.push_str("</form></div>");
        Ok(html)
    }
}
