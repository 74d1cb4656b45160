//! In-memory package manager for command tests.

use crate::core::types::{InstallSpec, InstalledPackage};
use crate::error::{PipDscError, Result};
use crate::packages::PackageManager;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Install(InstallSpec),
    Remove(String),
}

#[derive(Default)]
pub struct FakeManager {
    pub installed: RefCell<Vec<InstalledPackage>>,
    pub calls: RefCell<Vec<Call>>,
    pub fail: bool,
}

impl FakeManager {
    pub fn with(packages: &[(&str, &str)]) -> Self {
        Self {
            installed: RefCell::new(
                packages
                    .iter()
                    .map(|(name, version)| InstalledPackage::new(*name, *version))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self, action: &str) -> Result<()> {
        if self.fail {
            return Err(PipDscError::PackageManagerError(format!("pip {} failed", action)));
        }
        Ok(())
    }
}

impl PackageManager for FakeManager {
    fn list_installed(&self) -> Result<Vec<InstalledPackage>> {
        self.calls.borrow_mut().push(Call::List);
        self.check("list")?;
        Ok(self.installed.borrow().clone())
    }

    fn install(&self, spec: &InstallSpec) -> Result<()> {
        self.calls.borrow_mut().push(Call::Install(spec.clone()));
        self.check("install")?;

        let mut installed = self.installed.borrow_mut();
        let version = spec.version.clone().unwrap_or_else(|| "1.0.0".to_string());
        match installed.iter_mut().find(|p| p.name == spec.name) {
            Some(pkg) => pkg.version = Some(version),
            None => installed.push(InstalledPackage::new(spec.name.clone(), version)),
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::Remove(name.to_string()));
        self.check("uninstall")?;

        let mut installed = self.installed.borrow_mut();
        let before = installed.len();
        installed.retain(|p| p.name != name);
        if installed.len() == before {
            return Err(PipDscError::PackageManagerError(format!("{} is not installed", name)));
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}
