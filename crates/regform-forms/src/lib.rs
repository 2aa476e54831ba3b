//! # regform-forms
//!
//! Reactive form model for regform. Provides leaf controls with validators,
//! nested groups with aggregated state, bound controls with derived display
//! state, widgets for HTML rendering, two interchangeable skins, and the
//! registration form component that ties them together.

pub mod bound_field;
pub mod control;
pub mod group;
pub mod messages;
pub mod registration;
pub mod skins;
pub mod validators;
pub mod widgets;

pub use bound_field::{BoundControl, DisplayState};
pub use control::{ControlStatus, FormControl};
pub use group::{AbstractControl, FormGroup};
pub use registration::{FormEvent, LogSink, RegistrationForm, RegistrationValue, SubmissionSink};
pub use skins::{skin_by_name, AlertSkin, Skin, StatusSkin};
pub use validators::{ControlError, ErrorKind, Validator};
