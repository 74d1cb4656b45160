use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Desired state sent by the engine to `get`, `set` and `delete`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageRequest {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, rename = "useLatest")]
    pub use_latest: bool,
    /// Computed by `get`; the engine may echo it back, it is never acted on
    #[serde(default, rename = "_exist")]
    pub exist: Option<bool>,
}

impl PackageRequest {
    pub fn from_json(input: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// One entry of pip's `list --format=json` output.
///
/// Fields beyond name and version (e.g. `editable_project_location`) are kept
/// as reported so they can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledPackage {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InstalledPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
            extra: Map::new(),
        }
    }
}

/// Observed state returned by `get`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageState {
    #[serde(flatten)]
    pub package: InstalledPackage,
    #[serde(rename = "_exist")]
    pub exist: bool,
}

impl PackageState {
    pub fn present(package: InstalledPackage) -> Self {
        Self {
            package,
            exist: true,
        }
    }

    pub fn absent(name: &str) -> Self {
        Self {
            package: InstalledPackage {
                name: name.to_string(),
                version: None,
                extra: Map::new(),
            },
            exist: false,
        }
    }
}

/// What `pip install` is asked to do for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSpec {
    pub name: String,
    pub version: Option<String>,
    pub upgrade: bool,
}

impl From<&PackageRequest> for InstallSpec {
    // version and useLatest are passed through independently; a caller sending
    // both gets a pinned install with --upgrade
    fn from(req: &PackageRequest) -> Self {
        Self {
            name: req.name.clone(),
            version: req.version.clone(),
            upgrade: req.use_latest,
        }
    }
}

// Requirement string as pip expects it: "name" or "name==version"
impl fmt::Display for InstallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}=={}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
