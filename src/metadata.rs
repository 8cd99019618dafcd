use crate::answers::AnswerStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Summary of a provisioning run, written by `--save-answers`.
#[derive(Serialize)]
pub struct RunMetadata<'a> {
    pub bonjour_version: &'static str,
    pub finished_at: DateTime<Utc>,
    pub applications: Vec<String>,
    pub answers: &'a AnswerStore,
}

impl<'a> RunMetadata<'a> {
    pub fn new(applications: Vec<String>, answers: &'a AnswerStore) -> Self {
        Self {
            bonjour_version: env!("CARGO_PKG_VERSION"),
            finished_at: Utc::now(),
            applications,
            answers,
        }
    }

    /// Writes the metadata as pretty JSON, or YAML for `.yaml`/`.yml` paths.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> crate::error::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)?,
            _ => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, serialized)?;
        log::info!("Saved answers to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store() -> AnswerStore {
        let mut store = AnswerStore::new();
        store.record("port_ssh", "Port SSH", json!(22), "2222".to_string());
        store.register("later", "Later", json!(null));
        store
    }

    #[test]
    fn saves_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        let store = store();
        RunMetadata::new(vec!["Setup".to_string()], &store).save_to_file(&path).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["bonjour_version"], json!(env!("CARGO_PKG_VERSION")));
        assert_eq!(saved["applications"], json!(["Setup"]));
        assert_eq!(
            saved["answers"],
            json!({
                "port_ssh": {"prompt": "Port SSH", "default": 22, "answer": "2222"},
                "later": {"prompt": "Later", "default": null}
            })
        );
    }

    #[test]
    fn saves_yaml_in_nested_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runs").join("answers.yaml");
        let store = store();
        RunMetadata::new(Vec::new(), &store).save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("port_ssh:"));
        assert!(content.contains("2222"));
    }
}
