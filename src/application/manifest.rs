//! Application definition files

use crate::answers::Questionnaire;
use crate::config_file::Separator;
use crate::constants::DEFAULT_APPLICATION_KIND;
use crate::error::{Error, Result};
use crate::prompt::value_to_default_string;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Versioned content of a definition file
#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Manifest {
    #[serde(rename = "v1")]
    V1(ManifestV1),
}

#[derive(Debug, Deserialize)]
pub struct ManifestV1 {
    /// Registry key of the application that handles this definition
    #[serde(default = "get_default_kind")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered steps for `steps` applications
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Target configuration file for the `setup` application
    #[serde(default)]
    pub config: Option<String>,
}

/// One action of a `steps` application
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Shell command to run
    Run(String),
    /// Question to ask now
    Ask(QuestionStep),
    /// Question to register without asking
    Prepare(QuestionStep),
    /// Configuration file edits
    Edit(EditStep),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionStep {
    pub key: String,
    pub prompt: String,
    #[serde(default)]
    pub default: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditStep {
    /// Target path, appended to the provisioning root
    pub path: String,
    #[serde(default)]
    pub separator: Option<Separator>,
    #[serde(default)]
    pub set: Vec<Assignment>,
}

/// A key and where its value comes from: a literal `value` or a stored `answer`.
/// An explicit `value: null` counts as a literal and writes an empty value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Assignment {
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub value: Option<Value>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl Assignment {
    pub fn resolve(&self, questions: &Questionnaire) -> Result<String> {
        match (&self.value, &self.answer) {
            (Some(value), None) => Ok(value_to_default_string(value)),
            (None, Some(answer)) => Ok(questions.require(answer)?.to_string()),
            _ => Err(Error::ManifestError {
                definition: self.key.clone(),
                reason: "exactly one of 'value' or 'answer' must be given".to_string(),
            }),
        }
    }
}

impl ManifestV1 {
    pub fn validate(&self, definition: &str) -> Result<()> {
        let invalid = |reason: String| Error::ManifestError {
            definition: definition.to_string(),
            reason,
        };

        if self.kind.trim().is_empty() {
            return Err(invalid("kind must not be empty".into()));
        }

        for step in &self.steps {
            match step {
                Step::Run(command) if command.trim().is_empty() => {
                    return Err(invalid("run step with an empty command".into()));
                }
                Step::Ask(question) | Step::Prepare(question) if question.key.is_empty() => {
                    return Err(invalid("question with an empty key".into()));
                }
                Step::Edit(edit) => {
                    if edit.path.is_empty() {
                        return Err(invalid("edit step with an empty path".into()));
                    }
                    for assignment in &edit.set {
                        if assignment.value.is_some() == assignment.answer.is_some() {
                            return Err(invalid(format!(
                                "'{}' needs exactly one of 'value' or 'answer'",
                                assignment.key
                            )));
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// A loaded definition file
#[derive(Debug)]
pub struct Definition {
    /// File stem, used as the application name
    pub name: String,
    pub path: PathBuf,
    pub manifest: ManifestV1,
}

impl Definition {
    /// Reads and validates a YAML or JSON definition.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = std::fs::read_to_string(&path)?;

        let manifest: Manifest = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        let Manifest::V1(manifest) = manifest;
        manifest.validate(&path.display().to_string())?;

        log::debug!("Loaded definition '{name}' of kind '{}'", manifest.kind);
        Ok(Self { name, path, manifest })
    }
}

fn get_default_kind() -> String {
    DEFAULT_APPLICATION_KIND.to_string()
}

/// Keeps a field that is present but `null` apart from a missing one.
fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
