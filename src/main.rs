use clap::Parser;
use log::{LevelFilter, error};
use omim_append::cli::Cli;
use omim_append::config::error::ConfigError;
use omim_append::error::ConstructionError;
use omim_append::{OmimAppend, RunSummary};
use std::process::ExitCode;

fn init_logger(quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    let show_progress = !cli.quiet;
    let config = cli.into_config()?;
    let app = OmimAppend::new(config, show_progress)?;
    Ok(app.run())
}

fn is_usage_error(err: &anyhow::Error) -> bool {
    let config_err = match err.downcast_ref::<ConstructionError>() {
        Some(ConstructionError::Config(config_err)) => Some(config_err),
        _ => err.downcast_ref::<ConfigError>(),
    };
    config_err.is_some_and(ConfigError::is_argument_inconsistency)
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if is_usage_error(err) { 2 } else { 1 }
}

fn error_message(err: &anyhow::Error, code: u8) -> String {
    match code {
        2 => format!("{err:#} Run omim-append --help for usage."),
        _ => format!("{err:#}"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.quiet);

    match run(cli) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            let code = exit_code(&err);
            error!("{}", error_message(&err, code));
            ExitCode::from(code)
        }
    }
}
