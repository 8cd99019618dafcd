use super::{
    manifest::{EditStep, Step},
    Application, Context, Definition,
};
use crate::error::Result;

/// Application whose work is listed step by step in its definition file
pub struct StepsApplication {
    name: String,
    steps: Vec<Step>,
}

impl StepsApplication {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self { name: name.into(), steps }
    }

    pub fn from_definition(definition: Definition) -> Result<Box<dyn Application>> {
        if definition.manifest.steps.is_empty() {
            log::warn!("Application '{}' defines no steps", definition.name);
        }
        if let Some(description) = &definition.manifest.description {
            log::info!("{}: {description}", definition.name);
        }
        Ok(Box::new(Self::new(definition.name, definition.manifest.steps)))
    }

    fn edit(&self, ctx: &mut Context, edit: &EditStep) -> Result<()> {
        let mut config = ctx.open_config(&edit.path)?;
        if let Some(separator) = edit.separator {
            config.set_separator(separator);
        }
        for assignment in &edit.set {
            let value = assignment.resolve(ctx.questions())?;
            ctx.set(&mut config, &assignment.key, &value)?;
        }
        config.close()
    }
}

impl Application for StepsApplication {
    fn name(&self) -> &str {
        &self.name
    }

    fn install(&mut self, ctx: &mut Context) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            log::debug!("{} step {}: {step:?}", self.name, index + 1);
            match step {
                Step::Run(command) => {
                    ctx.run(command)?;
                }
                Step::Ask(question) => {
                    ctx.questions_mut().ask(
                        &question.key,
                        &question.prompt,
                        question.default.clone(),
                    )?;
                }
                Step::Prepare(question) => {
                    ctx.questions_mut().prepare(
                        &question.key,
                        &question.prompt,
                        question.default.clone(),
                    );
                }
                Step::Edit(edit) => self.edit(ctx, edit)?,
            }
        }
        Ok(())
    }
}
