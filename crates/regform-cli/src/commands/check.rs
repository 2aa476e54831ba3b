//! The `check` command.
//!
//! Runs the configuration checks from [`regform_core::checks`] and prints
//! each finding.

use std::io::Write;

use async_trait::async_trait;
use regform_core::checks::{run_checks, CheckLevel};
use regform_core::{FormError, Settings};

use crate::command::CliCommand;

/// Validates the loaded settings.
///
/// Fails when at least one error-level finding is reported; warnings are
/// printed but do not change the outcome.
pub struct CheckCommand;

#[async_trait]
impl CliCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Check the settings for problems"
    }

    async fn handle(
        &self,
        _matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut (dyn Write + Send),
    ) -> Result<(), FormError> {
        let messages = run_checks(settings);

        if messages.is_empty() {
            writeln!(out, "Check identified no issues")?;
            tracing::info!("check identified no issues");
            return Ok(());
        }

        let errors = messages.iter().filter(|m| m.is_serious()).count();
        let warnings = messages
            .iter()
            .filter(|m| m.level == CheckLevel::Warning)
            .count();

        for msg in &messages {
            writeln!(out, "{msg}")?;
        }
        writeln!(
            out,
            "Check identified {} issue(s) ({errors} error(s), {warnings} warning(s))",
            messages.len()
        )?;

        if errors > 0 {
            return Err(FormError::ConfigurationError(format!(
                "Check found {errors} error(s)"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_core::FormSettings;

    async fn run(settings: &Settings) -> (Result<(), FormError>, String) {
        let matches = clap::Command::new("check").get_matches_from(["check"]);
        let mut out = Vec::new();
        let result = CheckCommand.handle(&matches, settings, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_default_settings_pass() {
        let (result, out) = run(&Settings::default()).await;
        assert!(result.is_ok());
        assert_eq!(out, "Check identified no issues\n");
    }

    #[tokio::test]
    async fn test_warning_only_still_passes() {
        let settings = Settings {
            form: FormSettings {
                password_min_length: 0,
                ..FormSettings::default()
            },
            ..Settings::default()
        };
        let (result, out) = run(&settings).await;
        assert!(result.is_ok());
        assert!(out.contains("WARNING: (form.W002)"));
        assert!(out.contains("(0 error(s), 1 warning(s))"));
    }

    #[tokio::test]
    async fn test_errors_fail_with_exit_code_two() {
        let settings = Settings {
            skin: "fancy".to_string(),
            ..Settings::default()
        };
        let (result, out) = run(&settings).await;
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(out.contains("ERROR: (render.E001) Unknown skin 'fancy'"));
        assert!(out.contains("HINT: Use one of: alert, status"));
    }
}
