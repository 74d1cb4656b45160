//! Diagnostic output.
//!
//! Stdout carries the resource protocol (JSON results only), so every message
//! here goes to stderr, where the configuration engine collects traces.

use colored::Colorize;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Disable colors under `NO_COLOR` or when stderr is not a terminal (the
/// engine captures it); must run before any output.
pub fn init_colors() {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    colored::control::set_override(use_colors(no_color, io::stderr().is_terminal()));
}

fn use_colors(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn verbose(msg: &str) {
    if is_verbose() {
        eprintln!("{} {}", "»".bright_black(), msg.bright_black());
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
