use crate::core::types::PackageRequest;
use crate::error::Result;
use crate::packages::PackageManager;
use crate::utils::sanitize;

/// Uninstall the named package. Only `name` is read from the input.
pub fn run(manager: &dyn PackageManager, input: &str) -> Result<()> {
    let request = PackageRequest::from_json(input)?;
    sanitize::validate_package_name(&request.name)?;

    manager.remove(&request.name)
}
