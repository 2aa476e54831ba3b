//! # regform
//!
//! A registration form modelled as a reactive control tree.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on `regform`
//! to get everything, or on individual crates for finer-grained control.
//!
//! ```rust
//! use regform::core::FormSettings;
//! use regform::forms::registration::paths;
//! use regform::forms::{skin_by_name, RegistrationForm};
//!
//! let mut form = RegistrationForm::new(&FormSettings::default()).unwrap();
//! form.input(paths::EMAIL, "ada@example.com").unwrap();
//! form.blur(paths::EMAIL).unwrap();
//!
//! let html = skin_by_name("status").unwrap().render(&form).unwrap();
//! assert!(html.contains("has-success"));
//! ```

/// Errors, settings, configuration checks, and logging setup.
pub use regform_core as core;

/// Controls, validators, widgets, skins, and the registration form.
pub use regform_forms as forms;

/// Command framework and built-in commands.
#[cfg(feature = "cli")]
pub use regform_cli as cli;

/// Commonly used types.
pub mod prelude {
    pub use regform_core::{FormError, FormResult, FormSettings, Settings, ValidationError};
    pub use regform_forms::{
        AlertSkin, DisplayState, FormEvent, RegistrationForm, RegistrationValue, Skin, StatusSkin,
        SubmissionSink,
    };
}

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
