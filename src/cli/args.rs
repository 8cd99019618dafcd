use crate::constants::{verbosity, DEFAULT_APPLICATIONS_DIR};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for bonjour.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the application definitions to install.
    #[arg(value_name = "APPLICATIONS_DIR", default_value = DEFAULT_APPLICATIONS_DIR)]
    pub applications_dir: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory prepended to every configuration path (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Preset answers as a JSON object, or `-` to read them from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; unanswered questions take their default.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Report commands and edits without performing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the collected questions and answers to this file (JSON or YAML).
    #[arg(long = "save-answers", value_name = "FILE")]
    pub save_answers: Option<PathBuf>,
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
