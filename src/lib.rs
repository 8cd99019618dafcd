/// Handles argument parsing and the provisioning run.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Questions and their collected answers.
pub mod answers;

/// User input handling.
pub mod prompt;

/// Key/value configuration file editing.
pub mod config_file;

/// Shell command execution.
pub mod shell;

/// Provisioning applications and their registry.
pub mod application;

/// Discovery of application definition files.
pub mod loader;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Run summaries written after provisioning.
pub mod metadata;
