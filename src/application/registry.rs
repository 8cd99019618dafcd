use super::{setup::SetupApplication, steps::StepsApplication, Application, Definition};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Builds an application from its definition
pub type Factory = fn(Definition) -> Result<Box<dyn Application>>;

/// Maps application kinds to the factories that build them
#[derive(Default)]
pub struct Registry {
    factories: IndexMap<String, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `kind`, replacing any previous registration.
    pub fn register(&mut self, kind: &str, factory: Factory) -> &mut Self {
        if self.factories.insert(kind.to_string(), factory).is_some() {
            log::debug!("Replaced factory for application kind '{kind}'");
        }
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Creates the application handling `definition`.
    pub fn create(&self, definition: Definition) -> Result<Box<dyn Application>> {
        let factory = self.factories.get(&definition.manifest.kind).ok_or_else(|| {
            Error::UnknownApplication {
                kind: definition.manifest.kind.clone(),
                definition: definition.path.display().to_string(),
            }
        })?;
        factory(definition)
    }
}

/// Registry holding every application kind shipped with bonjour.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register("steps", StepsApplication::from_definition)
        .register("setup", SetupApplication::from_definition);
    registry
}
