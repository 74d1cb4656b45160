//! `manifest` and `schema`: static output, no package manager involved.

use crate::error::Result;
use crate::resource::{PACKAGE_SCHEMA, RESOURCE_MANIFEST};
use std::io::Write;

pub fn manifest(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(&*RESOURCE_MANIFEST)?)?;
    Ok(())
}

pub fn schema(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(&*PACKAGE_SCHEMA)?)?;
    Ok(())
}
