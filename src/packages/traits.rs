use crate::core::types::{InstallSpec, InstalledPackage};
use crate::error::Result;

/// Narrow client over the wrapped package manager.
pub trait PackageManager {
    /// Installed packages in the order the manager reports them
    fn list_installed(&self) -> Result<Vec<InstalledPackage>>;
    fn install(&self, spec: &InstallSpec) -> Result<()>;
    fn remove(&self, name: &str) -> Result<()>;
    fn is_available(&self) -> bool;
}
