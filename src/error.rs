use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot open '{path}': file not found.")]
    FileNotFound { path: String },

    #[error("Cannot open '{path}': permission denied.")]
    PermissionDenied { path: String },

    /// The input channel closed before an answer was read.
    #[error("No input left while asking '{key}'.")]
    InputExhausted { key: String },

    /// The shell command ran but finished with a non-zero status.
    #[error("Command '{command}' failed with status: {status}")]
    ShellCommandFailed { command: String, status: ExitStatus },

    #[error("No answer has been given for '{key}'.")]
    MissingAnswer { key: String },

    #[error("Unknown application kind '{kind}' in '{definition}'.")]
    UnknownApplication { kind: String, definition: String },

    #[error("Application '{name}' failed: {source}")]
    ApplicationFailed {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Invalid application definition '{definition}': {reason}.")]
    ManifestError { definition: String, reason: String },

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to build application filter. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to build line pattern. Original error: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Cannot read applications directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),
}

/// Convenience type alias for Results with this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Prints the error to stderr and exits with a failure status.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
