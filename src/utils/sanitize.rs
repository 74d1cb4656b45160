//! Input sanitization for package names
//!
//! Names reach pip as a single argv entry (no shell), but anything that looks
//! like a shell fragment or an option is still rejected before pip sees it.

use crate::error::{PipDscError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Characters valid in a pip requirement name, including extras (`pkg[extra]`)
static SAFE_PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._\-\[\],]*$").expect("Invalid regex pattern")
});

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\s]"#).expect("Invalid regex pattern"));

const MAX_NAME_LEN: usize = 256;

/// Validate a package name before it is handed to pip
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PipDscError::InvalidInput(
            "Package name cannot be empty".to_string(),
        ));
    }

    if name.chars().count() > MAX_NAME_LEN {
        let head: String = name.chars().take(50).collect();
        return Err(PipDscError::InvalidInput(format!(
            "Package name too long (max {} chars): {}...",
            MAX_NAME_LEN, head
        )));
    }

    if SHELL_DANGEROUS.is_match(name) {
        return Err(PipDscError::InvalidInput(format!(
            "Package name contains unsafe characters: {}",
            name
        )));
    }

    // Also rules out leading '-', which pip would read as an option
    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(PipDscError::InvalidInput(format!(
            "Package name contains invalid characters: {}",
            name
        )));
    }

    Ok(())
}

/// Validate a version pin; same shell rules, but versions may carry `+` and `!`
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(PipDscError::InvalidInput(
            "Version cannot be empty when given".to_string(),
        ));
    }

    if SHELL_DANGEROUS.is_match(version) || version.starts_with('-') || version.contains("==") {
        return Err(PipDscError::InvalidInput(format!(
            "Version contains invalid characters: {}",
            version
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests;
