//! Command framework for the regform CLI.
//!
//! This module provides the [`CliCommand`] trait for defining subcommands and
//! [`CommandRegistry`] for registering, discovering, and dispatching them.
//!
//! ## Defining a Custom Command
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use regform_cli::command::CliCommand;
//! use regform_core::{FormError, Settings};
//!
//! struct LanguagesCommand;
//!
//! #[async_trait]
//! impl CliCommand for LanguagesCommand {
//!     fn name(&self) -> &'static str { "languages" }
//!     fn help(&self) -> &'static str { "List selectable languages" }
//!
//!     async fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         settings: &Settings,
//!         out: &mut (dyn std::io::Write + Send),
//!     ) -> Result<(), FormError> {
//!         for lang in &settings.form.languages {
//!             writeln!(out, "{lang}")?;
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::io::Write;

use async_trait::async_trait;
use regform_core::{FormError, Settings};

/// A subcommand that can be registered and invoked through the CLI.
///
/// Implementations define a name, help text, optional arguments, and an
/// async handler that writes its result to `out`.
#[async_trait]
pub trait CliCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &'static str;

    /// Returns a short help description for this command.
    fn help(&self) -> &'static str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command with the given argument matches and settings.
    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut (dyn Write + Send),
    ) -> Result<(), FormError>;
}

/// A registry of CLI commands.
///
/// Commands are registered by name and can be looked up, listed, or executed.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn CliCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command.
    ///
    /// If a command with the same name already exists, it is replaced.
    pub fn register(&mut self, command: Box<dyn CliCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns a reference to the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn CliCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level clap `Command` containing all registered subcommands.
    ///
    /// The global `--settings <FILE>` option is available to every subcommand.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("regform")
            .about("Registration form driver")
            .subcommand_required(true)
            .arg(
                clap::Arg::new("settings")
                    .long("settings")
                    .value_name("FILE")
                    .global(true)
                    .help("TOML settings file"),
            );

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by_key(|(name, _)| **name);

        for (name, cmd) in entries {
            let subcmd = clap::Command::new(*name).about(cmd.help());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Executes the command identified by the given argument matches.
    pub async fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut (dyn Write + Send),
    ) -> Result<(), FormError> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            FormError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self
            .get(name)
            .ok_or_else(|| FormError::ConfigurationError(format!("Unknown command: {name}")))?;

        tracing::debug!(command = name, "executing command");
        cmd.handle(sub_matches, settings, out).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCommand;

    #[async_trait]
    impl CliCommand for EchoCommand {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn help(&self) -> &'static str {
            "Print the skin name"
        }

        fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
            cmd.arg(
                clap::Arg::new("loud")
                    .long("loud")
                    .action(clap::ArgAction::SetTrue),
            )
        }

        async fn handle(
            &self,
            matches: &clap::ArgMatches,
            settings: &Settings,
            out: &mut (dyn Write + Send),
        ) -> Result<(), FormError> {
            let skin = if matches.get_flag("loud") {
                settings.skin.to_uppercase()
            } else {
                settings.skin.clone()
            };
            writeln!(out, "{skin}")?;
            Ok(())
        }
    }

    struct FailingCommand;

    #[async_trait]
    impl CliCommand for FailingCommand {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn help(&self) -> &'static str {
            "A command that always fails"
        }

        async fn handle(
            &self,
            _matches: &clap::ArgMatches,
            _settings: &Settings,
            _out: &mut (dyn Write + Send),
        ) -> Result<(), FormError> {
            Err(FormError::ConfigurationError("deliberate failure".to_string()))
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(EchoCommand));
        registry.register(Box::new(FailingCommand));
        registry
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("echo").unwrap().help(), "Print the skin name");
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.list_commands(), vec!["echo", "fail"]);
    }

    #[test]
    fn test_build_cli_parses_global_settings() {
        let matches = registry()
            .build_cli()
            .try_get_matches_from(["regform", "echo", "--settings", "x.toml", "--loud"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("settings").map(String::as_str),
            Some("x.toml")
        );
    }

    #[tokio::test]
    async fn test_execute_dispatches() {
        let registry = registry();
        let matches = registry
            .build_cli()
            .try_get_matches_from(["regform", "echo", "--loud"])
            .unwrap();
        let mut out = Vec::new();
        registry
            .execute(&matches, &Settings::default(), &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ALERT\n");
    }

    #[tokio::test]
    async fn test_execute_propagates_failure() {
        let registry = registry();
        let matches = registry
            .build_cli()
            .try_get_matches_from(["regform", "fail"])
            .unwrap();
        let err = registry
            .execute(&matches, &Settings::default(), &mut Vec::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("deliberate failure"));
    }
}
