use std::fmt;
use std::io;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::{debug, warn};

use super::error::{CommandError, CommandLineError};

/// A program and its arguments, executed without a shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Creates a command line with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the program name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the argument vector, excluding the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = CommandLineError;

    fn try_from(argv: Vec<String>) -> Result<Self, Self::Error> {
        let mut parts = argv.into_iter();
        match parts.next() {
            Some(program) if !program.is_empty() => Ok(Self::new(program).args(parts)),
            _ => Err(CommandLineError::Empty),
        }
    }
}

#[mutants::skip]
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status and captured streams of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Returns `true` if the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Trimmed stdout on success, trimmed stderr as [`CommandError::Failed`] otherwise.
    pub fn into_result(self) -> Result<String, CommandError> {
        if self.success() {
            Ok(self.stdout.trim().to_string())
        } else {
            Err(CommandError::Failed {
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Executes a command line to completion.
pub trait CommandRunner {
    /// Runs `command`, blocking until it exits.
    ///
    /// Returns `Err` only when the process could not be started.
    fn execute(&self, command: &CommandLine) -> io::Result<CommandOutput>;
}

/// Spawns real processes with stdin detached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &CommandLine) -> io::Result<CommandOutput> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs a command and returns its trimmed stdout.
///
/// A spawn failure is reported as [`CommandError::Failed`] carrying the OS
/// error text.
pub fn run(runner: &dyn CommandRunner, command: &CommandLine) -> Result<String, CommandError> {
    debug!(%command, "running command");
    let output = runner.execute(command).map_err(|e| {
        warn!(%command, error = %e, "command could not be started");
        CommandError::Failed {
            stderr: e.to_string(),
        }
    })?;
    if !output.success() {
        warn!(%command, status = ?output.status, "command failed");
    }
    output.into_result()
}

/// The `dpkg -s <package>` status query.
pub fn package_status(package: &str) -> CommandLine {
    CommandLine::new("dpkg").arg("-s").arg(package)
}

/// Fails with dpkg's own error text unless `package` is installed.
pub fn require_installed(runner: &dyn CommandRunner, package: &str) -> Result<(), CommandError> {
    run(runner, &package_status(package)).map(drop)
}
