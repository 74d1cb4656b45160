//! Command dispatcher
//!
//! Routes each verb to its handler. The package manager is built lazily so
//! `manifest` and `schema` never need a Python interpreter.

use crate::cli::args::{Cli, Command, GlobalFlags};
use crate::commands;
use crate::error::{PipDscError, Result};
use crate::packages::{PackageManager, PipManager};
use crate::ui;
use std::io::Write;

pub const USAGE: &str = "Usage: pip-dsc <get|set|delete|export|schema|manifest> [JSON]";

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli, out: &mut dyn Write) -> Result<()> {
    route(args.command.as_ref(), || build_manager(&args.global), out)
}

/// Run one verb against a manager produced on demand
pub fn route<F>(command: Option<&Command>, manager: F, out: &mut dyn Write) -> Result<()>
where
    F: FnOnce() -> Result<Box<dyn PackageManager>>,
{
    let Some(command) = command else {
        return Err(PipDscError::InvalidArguments(format!(
            "Must have at least one argument (get, set, delete, schema, export, manifest)!\n{}",
            USAGE
        )));
    };
    ui::verbose(&format!("Verb: {}", command.verb()));

    match command {
        Command::Manifest => commands::describe::manifest(out),
        Command::Schema => commands::describe::schema(out),
        Command::Export { .. } => commands::export::run(manager()?.as_ref(), out),
        Command::Get { input } => {
            let input = require_input(command, input)?;
            commands::get::run(manager()?.as_ref(), input, out)
        }
        Command::Set { input } => {
            let input = require_input(command, input)?;
            commands::set::run(manager()?.as_ref(), input)
        }
        Command::Delete { input } => {
            let input = require_input(command, input)?;
            commands::delete::run(manager()?.as_ref(), input)
        }
    }
}

fn require_input<'a>(command: &Command, input: &'a Option<String>) -> Result<&'a str> {
    input.as_deref().ok_or_else(|| {
        PipDscError::InvalidArguments(format!(
            "Must have at least two arguments! '{}' needs a JSON instance.\n{}",
            command.verb(),
            USAGE
        ))
    })
}

fn build_manager(flags: &GlobalFlags) -> Result<Box<dyn PackageManager>> {
    let pip = PipManager::from_options(flags.python.as_deref(), flags.pip_args.as_deref())?;
    if !pip.is_available() {
        return Err(PipDscError::DependencyMissing(format!(
            "Python interpreter not found: {}",
            pip.python().display()
        )));
    }
    ui::verbose(&format!("Using interpreter: {}", pip.python().display()));

    Ok(Box::new(pip))
}
