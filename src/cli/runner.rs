use crate::{
    answers::Questionnaire,
    application::{builtin_registry, Application, Context, Definition, Registry},
    cli::{answers::AnswerSource, Args},
    error::{Error, Result},
    ioutils::get_root_dir,
    loader::discover_definitions,
    metadata::RunMetadata,
    shell::{CommandRunner, DryRunRunner, ShellRunner},
};
use std::path::Path;

/// Main CLI runner: discovers applications and installs them one after another
pub struct Runner {
    args: Args,
    registry: Registry,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self::with_registry(args, builtin_registry())
    }

    pub fn with_registry(args: Args, registry: Registry) -> Self {
        Self { args, registry }
    }

    /// Executes the complete provisioning workflow
    pub fn run(self) -> Result<()> {
        let root = get_root_dir(self.args.root.as_deref())?;
        log::debug!("Provisioning root: {}", root.display());

        let prompter =
            AnswerSource::new(self.args.answers.clone(), self.args.non_interactive)
                .into_prompter()?;
        let command_runner: Box<dyn CommandRunner> = if self.args.dry_run {
            Box::new(DryRunRunner::new())
        } else {
            Box::new(ShellRunner::new())
        };

        let mut ctx =
            Context::new(Questionnaire::new(prompter), command_runner, root, self.args.dry_run);
        let installed = self.install_all(&self.args.applications_dir, &mut ctx)?;

        if let Some(path) = &self.args.save_answers {
            RunMetadata::new(installed.clone(), ctx.questions().store()).save_to_file(path)?;
        }

        println!("Provisioning completed: {} application(s) installed.", installed.len());
        Ok(())
    }

    /// Loads every definition in `dir`, then installs them in order.
    ///
    /// All definitions are loaded before anything is installed. The first
    /// failing application stops the run. Returns the installed application
    /// names.
    pub fn install_all(&self, dir: &Path, ctx: &mut Context) -> Result<Vec<String>> {
        let applications = self.load_applications(dir)?;
        let mut installed = Vec::with_capacity(applications.len());

        for mut application in applications {
            let name = application.name().to_string();
            log::info!("Installing {name}");
            application.install(ctx).map_err(|source| Error::ApplicationFailed {
                name: name.clone(),
                source: Box::new(source),
            })?;
            log::info!("Installed {name}");
            installed.push(name);
        }
        Ok(installed)
    }

    fn load_applications(&self, dir: &Path) -> Result<Vec<Box<dyn Application>>> {
        discover_definitions(dir)?
            .into_iter()
            .map(|path| self.registry.create(Definition::load(path)?))
            .collect()
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
