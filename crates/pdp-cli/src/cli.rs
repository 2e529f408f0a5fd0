//! CLI argument definitions for the benchmark generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pdp-benchmarks",
    version,
    about = "Regenerate player development benchmark import files",
    long_about = "Regenerate player development benchmark import files.\n\n\
                  Enumerates every valid skill, age group, gender and level\n\
                  combination for athletics, rugby and Irish dancing and writes\n\
                  one JSON import document per sport."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory for generated files (default: $PDP_BENCHMARKS_DIR or the current directory).
    #[arg(long = "output-dir", value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Generate and report without writing files.
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Regenerate athletics benchmarks.
    Athletics(SportArgs),

    /// Regenerate rugby benchmarks.
    Rugby(SportArgs),

    /// Regenerate Irish dancing benchmarks.
    IrishDancing(SportArgs),

    /// Regenerate every sport into the output directory.
    All,

    /// List registered generators.
    Sports,

    /// Validate an existing benchmark import file.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct SportArgs {
    /// File name to write instead of the sport's default.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Benchmark document to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sport_subcommand_uses_kebab_case() {
        let cli = Cli::try_parse_from(["pdp-benchmarks", "irish-dancing", "-o", "dance.json"])
            .unwrap();
        match cli.command {
            Command::IrishDancing(args) => {
                assert_eq!(args.output, Some(PathBuf::from("dance.json")));
            }
            _ => panic!("expected irish-dancing"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "pdp-benchmarks",
            "all",
            "--output-dir",
            "out",
            "--dry-run",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::All));
        assert!(cli.dry_run);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn check_requires_file() {
        assert!(Cli::try_parse_from(["pdp-benchmarks", "check"]).is_err());
    }
}
