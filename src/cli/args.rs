use crate::constants::verbosity;
use clap::{CommandFactory, FromArgMatches, Parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI options shared by every template command.
///
/// These must appear before the template subcommand so that template flags
/// such as `--root` stay available to placeholders of the same name.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "infill", author, version, about, long_about = None)]
pub struct Cli {
    /// Directory searched recursively for `.TEMPLATE` files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print populated content to stdout instead of writing `.POPULATED` files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self { root: PathBuf::from("."), verbose: verbosity::OFF, dry_run: false }
    }
}

/// Reads the shared options without knowing the template subcommands yet.
///
/// Discovery needs `--root` before the full command can be built, so this
/// pass tolerates unknown subcommands and falls back to defaults on error.
/// Help and version flags are dropped so they don't cut the pass short.
pub fn pre_parse(raw_args: &[OsString]) -> Cli {
    let raw_args = raw_args
        .iter()
        .filter(|arg| !matches!(arg.to_str(), Some("-h" | "--help" | "-V" | "--version")));
    Cli::command()
        .ignore_errors(true)
        .allow_external_subcommands(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .try_get_matches_from(raw_args)
        .ok()
        .and_then(|matches| Cli::from_arg_matches(&matches).ok())
        .unwrap_or_default()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
