//! Alert-style skin: input classes plus an `alert alert-danger` message box.

use std::collections::HashMap;
use std::fmt::Write;

use regform_core::{FormError, FormResult};

use crate::bound_field::{BoundControl, DisplayState};
use crate::registration::{paths, RegistrationForm};
use crate::widgets::escape_html;

use super::{submit_button, value_block, Skin};

/// Marks inputs with `is-valid` / `is-invalid` and lists errors in an alert box.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertSkin;

impl AlertSkin {
    const fn input_class(state: DisplayState) -> &'static str {
        match state {
            DisplayState::Neutral => "form-control",
            DisplayState::Valid => "form-control is-valid",
            DisplayState::Invalid => "form-control is-invalid",
        }
    }

    fn field(bound: &BoundControl<'_>) -> String {
        let mut attrs = HashMap::new();
        attrs.insert(
            "class".to_string(),
            Self::input_class(bound.display_state()).to_string(),
        );

        let mut html = String::from(r#"<div class="form-group">"#);
        html.push_str(&bound.label_tag());
        html.push_str(&bound.render(&attrs));
        if bound.show_errors() {
            html.push_str(r#"<div class="alert alert-danger">"#);
            for msg in bound.messages() {
                let _ = write!(html, "<p>{}</p>", escape_html(&msg));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

impl Skin for AlertSkin {
    fn name(&self) -> &'static str {
        "alert"
    }

    fn render(&self, form: &RegistrationForm) -> FormResult<String> {
        let field = |path: &str| {
            form.bound(path)
                .map(|b| Self::field(&b))
                .ok_or_else(|| FormError::UnknownControl(path.to_string()))
        };

        let mut html = String::from(r#"<div class="container"><form novalidate>"#);
        html.push_str("<fieldset>");
        html.push_str(&field(paths::FIRST_NAME)?);
        html.push_str(&field(paths::LAST_NAME)?);
        html.push_str("</fieldset>");
        html.push_str(&field(paths::EMAIL)?);
        html.push_str(&field(paths::PASSWORD)?);
        html.push_str(&field(paths::LANGUAGE)?);
        html.push_str(&submit_button(form));
        html.push_str(&value_block(form)?);
        html.push_str("</form></div>");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use regform_core::FormSettings;

    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm::new(&FormSettings::default()).unwrap()
    }

    #[test]
    fn test_initial_render_has_no_feedback() {
        let html = AlertSkin.render(&form()).unwrap();
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains("is-valid"));
        assert!(!html.contains("alert-danger"));
        assert!(html.contains("<fieldset>"));
        assert!(html.contains(r#"<option value="" selected>Please select a language</option>"#));
        assert!(html.contains(r#"class="btn btn-primary" disabled"#));
    }

    #[test]
    fn test_touched_required_shows_alert() {
        let mut form = form();
        form.blur(paths::FIRST_NAME).unwrap();
        let html = AlertSkin.render(&form).unwrap();
        assert!(html.contains(r#"class="form-control is-invalid""#));
        assert!(html.contains(
            r#"<div class="alert alert-danger"><p>First Name is required!</p></div>"#
        ));
        assert!(!html.contains("Last Name is required!"));
    }

    #[test]
    fn test_valid_field_marked_valid() {
        let mut form = form();
        form.input(paths::EMAIL, "a@b").unwrap();
        let html = AlertSkin.render(&form).unwrap();
        assert!(html.contains(r#"class="form-control is-valid""#));
    }

    #[test]
    fn test_language_gets_valid_class_after_selection() {
        let mut form = form();
        form.input(paths::LANGUAGE, "German").unwrap();
        let html = AlertSkin.render(&form).unwrap();
        assert!(html.contains(
            r#"<select name="language" class="form-control is-valid" id="id_language">"#
        ));
        assert!(html.contains(r#"<option value="German" selected>German</option>"#));
    }
}
