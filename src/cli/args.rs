use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pip-dsc",
    about = "DSC resource for Python packages managed by pip",
    long_about = "Desired State Configuration resource adapter for pip.\n\
                  Reads one JSON instance as an argument and prints JSON results on stdout.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Trace pip invocations on stderr
    #[arg(
        short = 'v',
        long,
        global = true,
        env = "PIP_DSC_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Python interpreter whose pip is managed (default: python3, then python, from PATH)
    #[arg(long, value_name = "PATH", global = true, env = "PIP_DSC_PYTHON")]
    pub python: Option<PathBuf>,

    /// Extra pip options placed before every pip sub-command (shell quoting applies)
    #[arg(
        long,
        value_name = "ARGS",
        global = true,
        allow_hyphen_values = true,
        env = "PIP_DSC_PIP_ARGS"
    )]
    pub pip_args: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the observed state of a package
    Get {
        /// Instance JSON, e.g. '{"name":"requests"}'
        input: Option<String>,
    },

    /// Install a package, optionally pinned or upgraded
    Set {
        /// Instance JSON, e.g. '{"name":"flask","version":"3.0.0"}'
        input: Option<String>,
    },

    /// Uninstall a package
    Delete {
        /// Instance JSON, e.g. '{"name":"flask"}'
        input: Option<String>,
    },

    /// Print every installed package, one JSON object per line
    Export {
        /// Accepted for engine compatibility and ignored
        #[arg(num_args = 0..)]
        ignored: Vec<String>,
    },

    /// Print the instance JSON schema
    Schema,

    /// Print the resource manifest
    Manifest,
}

impl Command {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Get { .. } => "get",
            Self::Set { .. } => "set",
            Self::Delete { .. } => "delete",
            Self::Export { .. } => "export",
            Self::Schema => "schema",
            Self::Manifest => "manifest",
        }
    }
}

#[cfg(test)]
mod tests;
