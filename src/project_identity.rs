//! Central project identity contract.
//!
//! Values here end up in the resource manifest, so the engine's view of the
//! resource changes whenever they do.

pub const BINARY_NAME: &str = "pip-dsc";
pub const RESOURCE_TYPE: &str = "Python.Pip/Package";
pub const RESOURCE_DESCRIPTION: &str = "Manage Python packages via pip.";

/// Interpreters probed on PATH when none is configured
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];
