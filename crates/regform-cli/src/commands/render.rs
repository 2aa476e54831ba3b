//! The `render` command.
//!
//! Builds the form, replays field arguments as user events, and prints the
//! HTML produced by the selected skin.

use std::io::Write;

use async_trait::async_trait;
use regform_core::{FormError, Settings};
use regform_forms::{skin_by_name, RegistrationForm};

use crate::args::{apply_field_args, field_args};
use crate::command::CliCommand;

/// Renders the registration form as HTML.
pub struct RenderCommand;

#[async_trait]
impl CliCommand for RenderCommand {
    fn name(&self) -> &'static str {
        "render"
    }

    fn help(&self) -> &'static str {
        "Render the form as HTML after applying field values"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        field_args(cmd)
            .arg(
                clap::Arg::new("skin")
                    .long("skin")
                    .value_name("NAME")
                    .help("Skin to render with (alert or status)"),
            )
            .arg(
                clap::Arg::new("touch-all")
                    .long("touch-all")
                    .action(clap::ArgAction::SetTrue)
                    .help("Mark every control as touched before rendering"),
            )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut (dyn Write + Send),
    ) -> Result<(), FormError> {
        let skin_name = matches
            .get_one::<String>("skin")
            .map_or(settings.skin.as_str(), String::as_str);
        let skin = skin_by_name(skin_name)?;

        let mut form = RegistrationForm::new(&settings.form)?;
        apply_field_args(&mut form, matches)?;
        if matches.get_flag("touch-all") {
            form.mark_all_as_touched();
        }

        tracing::debug!(skin = skin.name(), valid = form.is_valid(), "rendering form");
        let html = skin.render(&form)?;
        writeln!(out, "{html}")?;
        Ok(())
    }
}
