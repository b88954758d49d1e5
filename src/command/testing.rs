//! Recording [`CommandRunner`] for tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use super::runner::{CommandLine, CommandOutput, CommandRunner};

/// Succeeds for every command unless a failure prefix matches.
///
/// Clones share the call record, so a test can keep one clone after handing
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeRunner {
    calls: Rc<RefCell<Vec<CommandLine>>>,
    failures: Vec<(String, String)>,
    outputs: Vec<(String, String)>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Commands whose display form starts with `prefix` exit 1 with `stderr`.
    pub(crate) fn fail_on(mut self, prefix: &str, stderr: &str) -> Self {
        self.failures.push((prefix.to_string(), stderr.to_string()));
        self
    }

    /// Commands whose display form starts with `prefix` print `stdout`.
    pub(crate) fn output_for(mut self, prefix: &str, stdout: &str) -> Self {
        self.outputs.push((prefix.to_string(), stdout.to_string()));
        self
    }

    /// Every command executed so far, in order.
    pub(crate) fn calls(&self) -> Vec<CommandLine> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn execute(&self, command: &CommandLine) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        let rendered = command.to_string();
        let matching = |table: &[(String, String)]| {
            table
                .iter()
                .find(|(prefix, _)| rendered.starts_with(prefix.as_str()))
                .map(|(_, text)| text.clone())
        };

        if let Some(stderr) = matching(&self.failures) {
            return Ok(CommandOutput {
                status: Some(1),
                stdout: String::new(),
                stderr,
            });
        }
        Ok(CommandOutput {
            status: Some(0),
            stdout: matching(&self.outputs).unwrap_or_default(),
            stderr: String::new(),
        })
    }
}
