use crate::{
    constants::STDIN_INDICATOR,
    error::Result,
    ioutils::{parse_string_to_json, read_from},
    prompt::{get_prompter, PresetPrompter, Prompter},
};

/// Chooses where answers come from: `--answers` presets, the terminal, or both.
pub struct AnswerSource {
    cli_answers: Option<String>,
    non_interactive: bool,
}

impl AnswerSource {
    pub fn new(cli_answers: Option<String>, non_interactive: bool) -> Self {
        Self { cli_answers, non_interactive }
    }

    /// Builds the prompter for this run.
    ///
    /// Preset answers win; keys without one are asked interactively, or take
    /// their default when running non-interactively.
    pub fn into_prompter(self) -> Result<Box<dyn Prompter>> {
        let presets = match self.cli_answers {
            Some(answers_arg) => {
                let answers_str = if answers_arg == STDIN_INDICATOR {
                    read_from(std::io::stdin())?
                } else {
                    answers_arg
                };
                let presets = parse_string_to_json(answers_str)?;
                log::debug!("Loaded {} preset answer(s)", presets.len());
                Some(presets)
            }
            None => None,
        };

        let fallback = if self.non_interactive { None } else { Some(get_prompter()) };

        Ok(match (presets, fallback) {
            (None, Some(interactive)) => interactive,
            (presets, fallback) => {
                Box::new(PresetPrompter::new(presets.unwrap_or_default(), fallback))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_interactive_uses_presets_then_defaults() {
        let mut prompter =
            AnswerSource::new(Some(r#"{"port_ssh": "2200"}"#.to_string()), true)
                .into_prompter()
                .unwrap();
        assert_eq!(prompter.prompt("port_ssh", "Port SSH", &json!(22)).unwrap(), "2200");
        assert_eq!(prompter.prompt("accept", "Continue?", &json!(true)).unwrap(), "true");
    }

    #[test]
    fn non_interactive_without_presets_uses_defaults() {
        let mut prompter = AnswerSource::new(None, true).into_prompter().unwrap();
        assert_eq!(prompter.prompt("port_ssh", "Port SSH", &json!(22)).unwrap(), "22");
    }

    #[test]
    fn invalid_presets_are_rejected() {
        let result = AnswerSource::new(Some("{oops".to_string()), true).into_prompter();
        assert!(result.is_err());
    }
}
