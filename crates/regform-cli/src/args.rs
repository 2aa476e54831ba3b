//! Field arguments shared by the `render` and `submit` commands.
//!
//! Each flag maps to one control path. Supplying a flag behaves like the
//! user typing the value and then leaving the input.

use regform_core::FormResult;
use regform_forms::registration::paths;
use regform_forms::{FormEvent, RegistrationForm};

/// Flag id and control path, in form order.
pub const FIELD_ARGS: [(&str, &str); 5] = [
    ("first-name", paths::FIRST_NAME),
    ("last-name", paths::LAST_NAME),
    ("email", paths::EMAIL),
    ("password", paths::PASSWORD),
    ("language", paths::LANGUAGE),
];

/// Adds one `--<field> <VALUE>` option per control.
pub fn field_args(cmd: clap::Command) -> clap::Command {
    FIELD_ARGS.iter().fold(cmd, |cmd, (id, path)| {
        cmd.arg(
            clap::Arg::new(*id)
                .long(*id)
                .value_name("VALUE")
                .help(format!("Value typed into {path}")),
        )
    })
}

/// Replays every supplied field argument as an input event followed by a blur.
pub fn apply_field_args(form: &mut RegistrationForm, matches: &clap::ArgMatches) -> FormResult<()> {
    for (id, path) in FIELD_ARGS {
        if let Some(value) = matches.get_one::<String>(id) {
            form.handle(FormEvent::input(path, value.as_str()))?;
            form.handle(FormEvent::blur(path))?;
        }
    }
    Ok(())
}
