use crate::core::types::{PackageRequest, PackageState};
use crate::error::Result;
use crate::packages::PackageManager;
use crate::ui;
use std::io::Write;

/// Report the observed state of one package as a single JSON line.
pub fn run(manager: &dyn PackageManager, input: &str, out: &mut dyn Write) -> Result<()> {
    // The name is only compared against pip's list, never passed to pip
    let request = PackageRequest::from_json(input)?;

    let state = observe(manager, &request.name)?;
    let observed = if state.exist {
        "is installed"
    } else {
        "is not installed"
    };
    ui::verbose(&format!("{} {}", request.name, observed));

    writeln!(out, "{}", serde_json::to_string(&state)?)?;
    Ok(())
}

/// Exact, case-sensitive name match; first entry wins on duplicates
pub fn observe(manager: &dyn PackageManager, name: &str) -> Result<PackageState> {
    let state = manager
        .list_installed()?
        .into_iter()
        .find(|pkg| pkg.name == name)
        .map(PackageState::present)
        .unwrap_or_else(|| PackageState::absent(name));

    Ok(state)
}
