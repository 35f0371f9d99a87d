mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else if let Err(err) = cli.run_default().await {
        eprintln!("{err:#}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

fn setup_logger(cli: &Cli) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, invalid_env_level) = match (cli.verbose, env_level.as_deref()) {
        (true, _) => (tracing::Level::DEBUG, None),
        (false, None) => (DEFAULT_LOG_LEVEL, None),
        (false, Some(value)) => match parse_log_level(value) {
            Some(level) => (level, None),
            None => (DEFAULT_LOG_LEVEL, Some(value)),
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(value) = invalid_env_level {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{value}`");
    }
}

/// Maps a `LOG_LEVEL` value to a level. `verbose` is an alias for `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels_are_case_insensitive() {
        assert_eq!(parse_log_level("TRACE"), Some(tracing::Level::TRACE));
        assert_eq!(parse_log_level(" Verbose "), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("warn"), Some(tracing::Level::WARN));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn validate_command_parses() {
        let cli = Cli::try_parse_from([
            "gqldoc",
            "validate",
            "--schema",
            "schema.graphql",
            "--max-depth",
            "5",
            "queries/",
        ]);
        assert!(matches!(cli, Ok(Cli { cmd: Some(_), .. })));
    }

    #[test]
    fn validate_command_requires_a_schema() {
        assert!(Cli::try_parse_from(["gqldoc", "validate", "queries/"]).is_err());
    }
}
