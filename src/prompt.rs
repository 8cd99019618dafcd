//! Prompting for answers
//!
//! A [`Prompter`] asks one question and returns the raw text the user gave.
//! Three implementations are provided:
//! - [`LinePrompter`]: plain line-based reading from any `BufRead` (stdin when piped, tests)
//! - [`DialoguerPrompter`]: interactive terminal input through dialoguer
//! - [`PresetPrompter`]: answers supplied up front, with an optional fallback

use crate::error::{Error, Result};
use dialoguer::Input;
use serde_json::{Map, Value};
use std::io::{self, BufRead, IsTerminal, Write};

/// Common interface for all prompt sources
pub trait Prompter {
    /// Asks `prompt` for the question stored under `key` and returns the raw answer.
    fn prompt(&mut self, key: &str, prompt: &str, default: &Value) -> Result<String>;
}

/// Renders a default value the way it is shown to, and accepted from, the user.
pub fn value_to_default_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Reads one line per question from `reader`, writing prompts to `writer`.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, key: &str, prompt: &str, default: &Value) -> Result<String> {
        let default = value_to_default_string(default);
        if default.is_empty() {
            write!(self.writer, "{prompt} ")?;
        } else {
            write!(self.writer, "{prompt} [{default}] ")?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputExhausted { key: key.to_string() });
        }

        // Only the terminator is dropped; the answer is otherwise kept verbatim.
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

/// Interactive terminal prompt. The default is pre-filled, so an empty entry accepts it.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt(&mut self, key: &str, prompt: &str, default: &Value) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(value_to_default_string(default))
            .allow_empty(true)
            .interact_text()
            .map_err(|err| match err {
                dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    Error::InputExhausted { key: key.to_string() }
                }
                other => Error::PromptError(other),
            })
    }
}

/// Answers questions from a preset map.
///
/// Keys missing from the map are delegated to `fallback`; without a fallback
/// the question's default is used.
pub struct PresetPrompter {
    answers: Map<String, Value>,
    fallback: Option<Box<dyn Prompter>>,
}

impl PresetPrompter {
    pub fn new(answers: Map<String, Value>, fallback: Option<Box<dyn Prompter>>) -> Self {
        Self { answers, fallback }
    }
}

impl Prompter for PresetPrompter {
    fn prompt(&mut self, key: &str, prompt: &str, default: &Value) -> Result<String> {
        if let Some(value) = self.answers.get(key) {
            let answer = value_to_default_string(value);
            log::info!("Using preset answer for '{key}': {answer}");
            return Ok(answer);
        }

        match self.fallback.as_mut() {
            Some(fallback) => fallback.prompt(key, prompt, default),
            None => {
                let answer = value_to_default_string(default);
                log::info!("No preset answer for '{key}', using default: {answer}");
                Ok(answer)
            }
        }
    }
}

/// Picks the prompter used when nothing is preset: dialoguer on a terminal,
/// plain line reading otherwise.
pub fn get_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(LinePrompter::stdio())
    }
}
