use std::process::ExitCode;

use regform_cli::command::CommandRegistry;
use regform_cli::commands::register_builtin_commands;
use regform_cli::load_settings;
use regform_core::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    let matches = registry.build_cli().get_matches();

    let settings_path = matches.get_one::<String>("settings").map(String::as_str);
    let settings = match load_settings(settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    setup_logging(&settings);

    let mut stdout = std::io::stdout();
    match registry.execute(&matches, &settings, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
