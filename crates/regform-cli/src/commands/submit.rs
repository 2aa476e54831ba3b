//! The `submit` command.
//!
//! Replays field arguments, then submits. A valid form prints the submitted
//! value as JSON. An invalid one prints the active errors as
//! `{path: {code: payload}}` JSON and fails with the field errors.

use std::io::Write;

use async_trait::async_trait;
use regform_core::{FormError, Settings};
use regform_forms::RegistrationForm;

use crate::args::{apply_field_args, field_args};
use crate::command::CliCommand;

/// Submits the registration form.
pub struct SubmitCommand;

#[async_trait]
impl CliCommand for SubmitCommand {
    fn name(&self) -> &'static str {
        "submit"
    }

    fn help(&self) -> &'static str {
        "Fill in the form and submit it, printing the value as JSON"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        field_args(cmd)
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut (dyn Write + Send),
    ) -> Result<(), FormError> {
        let mut form = RegistrationForm::new(&settings.form)?;
        apply_field_args(&mut form, matches)?;

        let value = match form.submit() {
            Ok(value) => value,
            Err(err) => {
                let errors = serde_json::to_string_pretty(&form.form().errors_json())?;
                writeln!(out, "{errors}")?;
                return Err(err);
            }
        };
        let json = serde_json::to_string_pretty(&value)?;
        writeln!(out, "{json}")?;
        Ok(())
    }
}
