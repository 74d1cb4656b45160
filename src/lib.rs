pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod packages;
pub mod project_identity;
pub mod resource;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use error::PipDscError;
use std::io::{self, Write};
use std::process::exit;

/// Run the pip-dsc CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Parse; anything clap rejects is an argument error (exit 2, usage on stdout)
    let args = match cli::args::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", e.render());
                exit(2);
            }
        },
    };
    ui::set_verbose(args.global.verbose);

    // 2. Run
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli::dispatcher::dispatch(&args, &mut out).and_then(|()| Ok(out.flush()?));

    if let Err(e) = result {
        match &e {
            PipDscError::InvalidArguments(usage) => println!("{}", usage),
            _ => ui::error(&format!("{}", e)),
        }
        exit(e.exit_code());
    }
}
