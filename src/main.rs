use cidr_contains::cli;
use cidr_contains::config::Settings;
use cidr_contains::logging;
use cidr_contains::version::version;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();

    let (settings, config_error) = match Settings::from_env() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    if let Err(e) = logging::init(&settings) {
        eprintln!("{} failed to initialise logging: {e}", "Warning:".yellow());
    }
    if let Some(e) = config_error {
        log::warn!("{e}, using default settings");
    }

    let version = version();
    log::debug!("#Start main() version={version}");

    let outcome = cli::run(std::env::args_os(), version);
    outcome.report();
    ExitCode::from(outcome.exit_code())
}
