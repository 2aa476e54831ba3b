//! HTML skins for the registration form.
//!
//! A skin turns the current state of a [`RegistrationForm`] into markup. Two
//! skins ship with the crate and share nothing but the model:
//!
//! - [`AlertSkin`]: `is-valid` / `is-invalid` on the input, messages in an
//!   `alert alert-danger` box
//! - [`StatusSkin`]: `has-success` / `has-danger` on the form group,
//!   `form-control-success` / `form-control-danger` on the input, messages in
//!   a `form-control-feedback` box
//!
//! Both disable the submit button while the form is invalid and append the
//! current value as pretty-printed JSON.

mod alert;
mod status;

pub use alert::AlertSkin;
pub use status::StatusSkin;

use regform_core::{FormError, FormResult};

use crate::registration::RegistrationForm;
use crate::widgets::escape_html;

/// Renders a registration form to HTML.
pub trait Skin: Send + Sync {
    /// Returns the skin's lookup name.
    fn name(&self) -> &'static str;

    /// Renders the whole form in its current state.
    fn render(&self, form: &RegistrationForm) -> FormResult<String>;
}

/// Looks up a skin by name (`"alert"` or `"status"`).
pub fn skin_by_name(name: &str) -> FormResult<Box<dyn Skin>> {
    match name {
        "alert" => Ok(Box::new(AlertSkin)),
        "status" => Ok(Box::new(StatusSkin)),
        other => Err(FormError::ConfigurationError(format!(
            "Unknown skin '{other}' (expected 'alert' or 'status')"
        ))),
    }
}

/// Renders the submit button, disabled unless the form can be submitted.
fn submit_button(form: &RegistrationForm) -> String {
    let disabled = if form.can_submit() { "" } else { " disabled" };
    format!(r#"<button type="submit" class="btn btn-primary"{disabled}>Submit</button>"#)
}

/// Renders the live value as escaped, pretty-printed JSON.
fn value_block(form: &RegistrationForm) -> FormResult<String> {
    let json = serde_json::to_string_pretty(&form.value())?;
    Ok(format!("<pre>{}</pre>", escape_html(&json)))
}

#[cfg(test)]
mod tests {
    use regform_core::FormSettings;

    use super::*;

    #[test]
    fn test_skin_by_name() {
        assert_eq!(skin_by_name("alert").unwrap().name(), "alert");
        assert_eq!(skin_by_name("status").unwrap().name(), "status");
        assert!(matches!(
            skin_by_name("material"),
            Err(FormError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_submit_button_disabled_until_valid() {
        let mut form = RegistrationForm::new(&FormSettings::default()).unwrap();
        assert!(submit_button(&form).contains(" disabled"));
        form.input("name.firstName", "A").unwrap();
        form.input("name.lastName", "B").unwrap();
        form.input("email", "a@b").unwrap();
        form.input("password", "12345678").unwrap();
        assert!(!submit_button(&form).contains("disabled"));
    }

    #[test]
    fn test_value_block_escapes() {
        let mut form = RegistrationForm::new(&FormSettings::default()).unwrap();
        form.input("name.firstName", "<A>").unwrap();
        let block = value_block(&form).unwrap();
        assert!(block.starts_with("<pre>{"));
        assert!(block.contains("&lt;A&gt;"));
    }
}
