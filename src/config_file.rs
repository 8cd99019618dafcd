//! Key/value configuration file editing
//!
//! [`ConfigFile`] rewrites lines of the form `key<separator>value`, such as the
//! ones found in `sshd_config`. A line matches a key when, after optional
//! indentation and `#` comment markers, it starts with that key
//! (case-insensitively). Matching lines are replaced as a whole; lines that
//! do not match are written back untouched. Keys that never appear are left
//! alone, nothing is appended.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Character placed between a key and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Space,
    Equals,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Space => " ",
            Separator::Equals => "=",
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Separator::Space => "space",
            Separator::Equals => "equals",
        };
        write!(f, "{s}")
    }
}

/// An open configuration file
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    handle: File,
    separator: Option<Separator>,
}

impl ConfigFile {
    /// Opens `path` for reading and writing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path.as_ref(), OpenOptions::new().read(true).write(true))
    }

    /// Opens `path` for reading only. [`ConfigFile::set`] fails on such a file,
    /// [`ConfigFile::preview`] does not.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path.as_ref(), OpenOptions::new().read(true))
    }

    fn open_with(path: &Path, options: &OpenOptions) -> Result<Self> {
        let path = path.to_path_buf();
        let handle = options.open(&path).map_err(|e| {
            let path = path.display().to_string();
            match e.kind() {
                io::ErrorKind::NotFound => Error::FileNotFound { path },
                io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
                _ => Error::IoError(e),
            }
        })?;
        log::debug!("Opened config file {}", path.display());
        Ok(Self { path, handle, separator: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_separator(&mut self, separator: Separator) {
        self.separator = Some(separator);
    }

    pub fn uses_space_separator(&mut self) {
        self.set_separator(Separator::Space);
    }

    pub fn uses_equals_separator(&mut self) {
        self.set_separator(Separator::Equals);
    }

    /// Returns the file content as it would be after `set(key, value)`.
    pub fn preview(&mut self, key: &str, value: &str) -> Result<String> {
        let content = self.read_all()?;
        let replacement = self.line_for(key, value);
        let pattern = key_pattern(key)?;
        Ok(substitute(&content, &pattern, &replacement))
    }

    /// Replaces every line holding `key` with `key<separator>value`,
    /// announcing the change on stdout.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_to(key, value, &mut io::stdout())
    }

    /// Like [`ConfigFile::set`], announcing the change on `out`.
    pub fn set_to<W: Write>(&mut self, key: &str, value: &str, out: &mut W) -> Result<()> {
        announce(out, key, value)?;
        let content = self.preview(key, value)?;

        self.handle.seek(SeekFrom::Start(0))?;
        self.handle.write_all(content.as_bytes())?;
        self.handle.set_len(content.len() as u64)?;
        self.handle.flush()?;
        log::debug!("Wrote {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }

    /// Flushes and releases the file handle.
    pub fn close(self) -> Result<()> {
        self.handle.sync_all()?;
        log::debug!("Closed config file {}", self.path.display());
        Ok(())
    }

    fn read_all(&mut self) -> Result<String> {
        let mut content = String::new();
        self.handle.seek(SeekFrom::Start(0))?;
        self.handle.read_to_string(&mut content)?;
        Ok(content)
    }

    fn line_for(&self, key: &str, value: &str) -> String {
        let separator = match self.separator {
            Some(separator) => separator.as_str(),
            None => {
                log::warn!(
                    "No separator chosen for {}, writing '{key}' and its value without one",
                    self.path.display()
                );
                ""
            }
        };
        format!("{key}{separator}{value}")
    }
}

/// Writes the `Setting <key> to <value>` line shown before every edit.
pub fn announce<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "Setting {key} to {value}")?;
    out.flush()
}

/// Builds the case-insensitive pattern matching a line that holds `key`.
fn key_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(r"^[ \t]*#*[ \t]*{}", regex::escape(key));
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Applies the replacement to every matching line, keeping line terminators.
fn substitute(content: &str, pattern: &Regex, replacement: &str) -> String {
    let mut output = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        if pattern.is_match(body) {
            output.push_str(replacement);
        } else {
            output.push_str(body);
        }
        output.push_str(terminator);
    }
    output
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
