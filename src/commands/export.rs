use crate::error::Result;
use crate::packages::PackageManager;
use crate::ui;
use std::io::Write;

/// Every installed package as one JSON object per line, in manager order.
pub fn run(manager: &dyn PackageManager, out: &mut dyn Write) -> Result<()> {
    let installed = manager.list_installed()?;
    ui::verbose(&format!("Exporting {} packages", installed.len()));

    for package in &installed {
        writeln!(out, "{}", serde_json::to_string(package)?)?;
    }
    Ok(())
}
