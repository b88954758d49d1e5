//! Command execution: the blocking runner, and the catalog that maps menu
//! tasks to command sequences.

mod catalog;
mod error;
mod runner;
#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{TaskCatalog, TaskPlan};
pub use error::{CommandError, CommandLineError, TaskError};
pub use runner::{
    CommandLine, CommandOutput, CommandRunner, SystemRunner, package_status, require_installed, run,
};
