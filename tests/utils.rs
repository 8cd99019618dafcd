#![allow(dead_code)]

use bonjour::answers::Questionnaire;
use bonjour::application::Context;
use bonjour::error::Result;
use bonjour::prompt::LinePrompter;
use bonjour::shell::CommandRunner;
use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;

/// Records every command and pretends it succeeded.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    pub commands: Rc<RefCell<Vec<String>>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &str) -> Result<String> {
        self.commands.borrow_mut().push(command.to_string());
        Ok(String::new())
    }
}

/// Builds a context answering questions from `input`, one line per answer.
pub fn scripted_context(root: &Path, input: &'static str) -> (Context, RecordingRunner) {
    let runner = RecordingRunner::default();
    let questions =
        Questionnaire::new(Box::new(LinePrompter::new(Cursor::new(input), Vec::new())));
    let ctx = Context::new(questions, Box::new(runner.clone()), root.to_path_buf(), false);
    (ctx, runner)
}

/// Copies the sample sshd configuration to `<root>/<name>`.
pub fn install_fixture(root: &Path, name: &str) -> String {
    let fixture = fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sshd_config.txt"),
    )
    .unwrap();
    fs::write(root.join(name), &fixture).unwrap();
    fixture
}
