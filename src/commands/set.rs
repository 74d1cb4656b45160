use crate::core::types::{InstallSpec, PackageRequest};
use crate::error::Result;
use crate::packages::PackageManager;
use crate::ui;
use crate::utils::sanitize;

/// Install the requested package. Success is signalled by exit status only.
pub fn run(manager: &dyn PackageManager, input: &str) -> Result<()> {
    let request = PackageRequest::from_json(input)?;
    sanitize::validate_package_name(&request.name)?;
    if let Some(version) = &request.version {
        sanitize::validate_version(version)?;
    }

    if request.exist == Some(false) {
        ui::warning(&format!(
            "'_exist: false' is ignored by set; use delete to remove {}",
            request.name
        ));
    }

    let spec = InstallSpec::from(&request);
    if spec.version.is_some() && spec.upgrade {
        ui::verbose("Both version and useLatest given; passing both to pip");
    }

    manager.install(&spec)
}
