//! Player development benchmark generator CLI.

use clap::{ColorChoice, Parser};
use pdp_cli::logging::{LogConfig, LogFormat, init_logging};
use pdp_cli::types::GenerateOptions;
use pdp_model::Sport;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_all, run_check, run_sport, run_sports};
use crate::summary::{print_check, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = GenerateOptions {
        output_dir: cli.output_dir.clone(),
        output_file: None,
        dry_run: cli.dry_run,
    };
    let runs = match &cli.command {
        Command::Athletics(args) => run_sport(Sport::Athletics, args, &options).map(|run| vec![run]),
        Command::Rugby(args) => run_sport(Sport::Rugby, args, &options).map(|run| vec![run]),
        Command::IrishDancing(args) => {
            run_sport(Sport::IrishDancing, args, &options).map(|run| vec![run])
        }
        Command::All => run_all(&options),
        Command::Sports => run_sports().map(|()| Vec::new()),
        Command::Check(args) => {
            let exit_code = match run_check(args) {
                Ok(result) => {
                    print_check(&result);
                    if result.report.has_errors() { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            };
            std::process::exit(exit_code);
        }
    };
    let exit_code = match runs {
        Ok(runs) => {
            if !runs.is_empty() {
                print_summary(&runs);
            }
            if runs.iter().any(|run| run.has_errors()) { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
