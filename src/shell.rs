use std::borrow::Cow;
use std::io::{BufReader, Read};
use std::process::{Command, Stdio};

use crate::constants::SHELL;
use crate::error::{Error, Result};

/// Runs shell commands on behalf of applications.
pub trait CommandRunner {
    /// Runs `command` to completion and returns its stdout.
    fn run(&mut self, command: &str) -> Result<String>;
}

/// Executes commands through `sh -c`, echoing their stdout.
///
/// # Notes
/// - stdin is closed, stderr is inherited from this process
/// - Non-zero exit codes are reported as [`Error::ShellCommandFailed`]
#[derive(Debug, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<String> {
        log::debug!("Running command via {SHELL}: {command}");

        let mut child = Command::new(SHELL)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // Read stdout before waiting for the process to complete
        let stdout_output = match child.stdout.take() {
            Some(stdout) => {
                let mut reader = BufReader::new(stdout);
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                let decoded = String::from_utf8_lossy(&buffer);
                if matches!(decoded, Cow::Owned(_)) {
                    log::warn!("Command '{command}' emitted non-UTF8 stdout; performing lossy conversion");
                }
                decoded.into_owned()
            }
            None => String::new(),
        };

        let status = child.wait()?;

        if !stdout_output.is_empty() {
            print!("{stdout_output}");
        }

        if !status.success() {
            return Err(Error::ShellCommandFailed { command: command.to_string(), status });
        }

        Ok(stdout_output)
    }
}

/// Logs commands instead of running them.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    commands: Vec<String>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &str) -> Result<String> {
        log::info!("[DRY RUN] Would run: {command}");
        self.commands.push(command.to_string());
        Ok(String::new())
    }
}
