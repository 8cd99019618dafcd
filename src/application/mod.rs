//! Provisioning applications
//!
//! An [`Application`] is one unit of provisioning work. It asks questions,
//! runs commands and edits configuration files through the [`Context`] it is
//! installed with. Applications are created from definition files by the
//! [`registry::Registry`].

use crate::{
    answers::Questionnaire,
    config_file::{announce, ConfigFile},
    error::Result,
    ioutils::resolve_target,
    shell::CommandRunner,
};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod manifest;
pub mod registry;
pub mod setup;
pub mod steps;

pub use manifest::{Definition, Manifest, ManifestV1, Step};
pub use registry::{builtin_registry, Factory, Registry};

/// Common interface for all provisioning units
pub trait Application {
    fn name(&self) -> &str;

    /// Performs the provisioning. Errors are not recovered here.
    fn install(&mut self, ctx: &mut Context) -> Result<()>;
}

/// Everything an application can act on during a run.
///
/// Answers given to one application remain visible to the ones installed
/// after it.
pub struct Context {
    questions: Questionnaire,
    runner: Box<dyn CommandRunner>,
    root: PathBuf,
    dry_run: bool,
}

impl Context {
    pub fn new(
        questions: Questionnaire,
        runner: Box<dyn CommandRunner>,
        root: PathBuf,
        dry_run: bool,
    ) -> Self {
        Self { questions, runner, root, dry_run }
    }

    pub fn questions(&self) -> &Questionnaire {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut Questionnaire {
        &mut self.questions
    }

    /// Runs a shell command, returning its stdout.
    pub fn run(&mut self, command: &str) -> Result<String> {
        self.runner.run(command)
    }

    /// Opens a configuration file named relative to the provisioning root.
    /// A dry run only ever reads it.
    pub fn open_config(&self, supplied: &str) -> Result<ConfigFile> {
        let path = resolve_target(&self.root, supplied);
        if self.dry_run {
            ConfigFile::open_read_only(path)
        } else {
            ConfigFile::open(path)
        }
    }

    /// Sets `key` in `config`, or only reports the change on a dry run.
    pub fn set(&self, config: &mut ConfigFile, key: &str, value: &str) -> Result<()> {
        self.set_to(config, key, value, &mut io::stdout())
    }

    /// Like [`Context::set`], printing the `Setting` line to `out`.
    pub fn set_to<W: Write>(
        &self,
        config: &mut ConfigFile,
        key: &str,
        value: &str,
        out: &mut W,
    ) -> Result<()> {
        if !self.dry_run {
            return config.set_to(key, value, out);
        }

        announce(out, key, value)?;
        let before = std::fs::read_to_string(config.path())?;
        let after = config.preview(key, value)?;
        let changed = before.lines().zip(after.lines()).filter(|(b, a)| b != a).count();
        log::info!(
            "[DRY RUN] Setting {key} to {value} in '{}' ({changed} line(s) would change)",
            config.path().display()
        );
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn set_prints_the_change() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("sshd_config"), "#Port 22\n").unwrap();
        let (ctx, _) = context(root.path(), "");

        let mut config = ctx.open_config("/sshd_config").unwrap();
        config.uses_space_separator();
        let mut out = Vec::new();
        ctx.set_to(&mut config, "Port", "2222", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Setting Port to 2222\n");
        assert_eq!(fs::read_to_string(root.path().join("sshd_config")).unwrap(), "Port 2222\n");
    }

    #[test]
    fn dry_run_prints_the_same_change() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("sshd_config"), "#Port 22\n").unwrap();
        let ctx = dry_run_context(root.path(), "");

        let mut config = ctx.open_config("/sshd_config").unwrap();
        config.uses_space_separator();
        let mut out = Vec::new();
        ctx.set_to(&mut config, "Port", "2222", &mut out).unwrap();
        ctx.set_to(&mut config, "Missing", "1", &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Setting Port to 2222\nSetting Missing to 1\n"
        );
        assert_eq!(fs::read_to_string(root.path().join("sshd_config")).unwrap(), "#Port 22\n");
    }

    #[cfg(unix)]
    #[test]
    fn dry_run_works_on_read_only_config() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let target = root.path().join("sshd_config");
        fs::write(&target, "Port 22\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o444)).unwrap();
        let ctx = dry_run_context(root.path(), "");

        let mut config = ctx.open_config("/sshd_config").unwrap();
        config.uses_space_separator();
        ctx.set_to(&mut config, "Port", "2222", &mut Vec::new()).unwrap();
        config.close().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "Port 22\n");
    }

    #[test]
    fn dry_run_opens_config_read_only() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("sshd_config");
        fs::write(&target, "Port 22\n").unwrap();
        let ctx = dry_run_context(root.path(), "");

        let mut config = ctx.open_config("/sshd_config").unwrap();
        config.uses_space_separator();
        assert!(config.set_to("Port", "2222", &mut Vec::new()).is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "Port 22\n");
    }

    #[test]
    fn opens_config_below_root() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("sshd_config"), "Port 22\n").unwrap();
        let (ctx, _) = context(root.path(), "");

        let mut config = ctx.open_config("/sshd_config").unwrap();
        config.uses_space_separator();
        ctx.set(&mut config, "Port", "2200").unwrap();
        config.close().unwrap();

        assert_eq!(fs::read_to_string(root.path().join("sshd_config")).unwrap(), "Port 2200\n");
    }

    #[test]
    fn dry_run_leaves_config_untouched() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("sshd_config"), "Port 22\n").unwrap();
        let ctx = dry_run_context(root.path(), "");

        let mut config = ctx.open_config("/sshd_config").unwrap();
        config.uses_space_separator();
        ctx.set(&mut config, "Port", "2200").unwrap();

        assert_eq!(fs::read_to_string(root.path().join("sshd_config")).unwrap(), "Port 22\n");
    }
}
