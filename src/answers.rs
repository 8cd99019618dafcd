//! Questions asked during a provisioning run and their answers

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A single question and, once collected, its answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub prompt: String,
    pub default: Value,
    /// Raw answer text, stored verbatim whatever the type of `default`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Insertion-ordered map of question key to [`Question`]
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct AnswerStore {
    questions: IndexMap<String, Question>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an answered question. An existing entry keeps its position.
    pub fn record(&mut self, key: &str, prompt: &str, default: Value, answer: String) {
        self.questions.insert(
            key.to_string(),
            Question { prompt: prompt.to_string(), default, answer: Some(answer) },
        );
    }

    /// Stores a question with no answer.
    pub fn register(&mut self, key: &str, prompt: &str, default: Value) {
        self.questions.insert(
            key.to_string(),
            Question { prompt: prompt.to_string(), default, answer: None },
        );
    }

    pub fn get(&self, key: &str) -> Option<&Question> {
        self.questions.get(key)
    }

    pub fn answer(&self, key: &str) -> Option<&str> {
        self.questions.get(key).and_then(|q| q.answer.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Question)> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Asks questions through a [`Prompter`] and keeps every answer in an [`AnswerStore`].
pub struct Questionnaire {
    store: AnswerStore,
    prompter: Box<dyn Prompter>,
}

impl Questionnaire {
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self { store: AnswerStore::new(), prompter }
    }

    /// Asks `prompt`, stores `{prompt, default, answer}` under `key` and returns the answer.
    pub fn ask(&mut self, key: &str, prompt: &str, default: impl Into<Value>) -> Result<String> {
        let default = default.into();
        let answer = self.prompter.prompt(key, prompt, &default)?;
        log::debug!("Answer for '{key}': {answer:?}");
        self.store.record(key, prompt, default, answer.clone());
        Ok(answer)
    }

    /// Registers a question without collecting its answer.
    pub fn prepare(&mut self, key: &str, prompt: &str, default: impl Into<Value>) {
        log::debug!("Prepared question '{key}'");
        self.store.register(key, prompt, default.into());
    }

    pub fn answer(&self, key: &str) -> Option<&str> {
        self.store.answer(key)
    }

    /// Like [`Questionnaire::answer`], failing when no answer was collected.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.answer(key).ok_or_else(|| Error::MissingAnswer { key: key.to_string() })
    }

    pub fn store(&self) -> &AnswerStore {
        &self.store
    }
}
