use super::{Application, Context, Definition};
use crate::constants::DEFAULT_SSHD_CONFIG;
use crate::error::Result;

/// Base system setup: checks the Debian release, then moves sshd to the
/// port the user picks.
pub struct SetupApplication {
    name: String,
    sshd_config: String,
}

impl SetupApplication {
    pub fn new(name: impl Into<String>, sshd_config: impl Into<String>) -> Self {
        Self { name: name.into(), sshd_config: sshd_config.into() }
    }

    pub fn from_definition(definition: Definition) -> Result<Box<dyn Application>> {
        if !definition.manifest.steps.is_empty() {
            log::warn!("Application '{}' is a setup application; its steps are ignored", definition.name);
        }
        let sshd_config =
            definition.manifest.config.unwrap_or_else(|| DEFAULT_SSHD_CONFIG.to_string());
        Ok(Box::new(Self::new(definition.name, sshd_config)))
    }
}

impl Application for SetupApplication {
    fn name(&self) -> &str {
        &self.name
    }

    fn install(&mut self, ctx: &mut Context) -> Result<()> {
        ctx.run("cat /etc/debian_version")?;

        let questions = ctx.questions_mut();
        questions.ask("accept", "Welcome. Use this at your own risk. Continue?", true)?;
        let port = questions.ask("port_ssh", "Port SSH", 22)?;

        let mut config = ctx.open_config(&self.sshd_config)?;
        config.uses_space_separator();
        ctx.set(&mut config, "Port", &port)?;
        config.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::context;
    use crate::error::Error;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sets_sshd_port() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("sshd_config.txt");
        fs::write(&target, "Include /etc/ssh/sshd_config.d/*.conf\n#Port 22\n").unwrap();
        let (mut ctx, runner) = context(root.path(), "y\n2222\n");

        SetupApplication::new("Setup", DEFAULT_SSHD_CONFIG).install(&mut ctx).unwrap();

        assert_eq!(*runner.commands.borrow(), ["cat /etc/debian_version"]);
        let accept = ctx.questions().store().get("accept").unwrap();
        assert_eq!(accept.default, json!(true));
        assert_eq!(accept.answer.as_deref(), Some("y"));
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "Include /etc/ssh/sshd_config.d/*.conf\nPort 2222\n"
        );
    }

    #[test]
    fn stops_when_input_runs_out() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("sshd_config.txt");
        fs::write(&target, "Port 22\n").unwrap();
        let (mut ctx, _) = context(root.path(), "y\n");

        let err = SetupApplication::new("Setup", DEFAULT_SSHD_CONFIG)
            .install(&mut ctx)
            .unwrap_err();

        assert!(matches!(err, Error::InputExhausted { ref key } if key == "port_ssh"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "Port 22\n");
    }
}
