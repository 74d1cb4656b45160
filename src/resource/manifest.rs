use crate::project_identity::{BINARY_NAME, RESOURCE_DESCRIPTION, RESOURCE_TYPE};
use crate::resource::schema::PACKAGE_SCHEMA;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const MANIFEST_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/PowerShell/DSC/main/schemas/v3/bundled/resource/manifest.json";

#[derive(Debug, Serialize)]
pub struct ResourceManifest {
    #[serde(rename = "$schema")]
    pub schema_url: &'static str,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub tags: Vec<&'static str>,
    #[serde(rename = "exitCodes")]
    pub exit_codes: BTreeMap<&'static str, &'static str>,
    pub schema: EmbeddedSchema,
    pub get: CommandTemplate,
    pub set: CommandTemplate,
    pub delete: CommandTemplate,
    pub export: CommandTemplate,
}

/// Embedded rather than a `schema` command reference: the engine would
/// otherwise invoke the schema command once per exported instance.
#[derive(Debug, Serialize)]
pub struct EmbeddedSchema {
    pub embedded: Value,
}

#[derive(Debug, Serialize)]
pub struct CommandTemplate {
    pub executable: &'static str,
    pub args: Vec<ManifestArg>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ManifestArg {
    Literal(&'static str),
    JsonInput {
        #[serde(rename = "jsonInputArg")]
        json_input_arg: &'static str,
        mandatory: bool,
    },
}

impl CommandTemplate {
    /// `<binary> <verb> <json>`, JSON required
    fn verb(verb: &'static str) -> Self {
        Self {
            executable: BINARY_NAME,
            args: vec![ManifestArg::JsonInput {
                json_input_arg: verb,
                mandatory: true,
            }],
        }
    }

    fn export() -> Self {
        Self {
            executable: BINARY_NAME,
            args: vec![
                ManifestArg::Literal("export"),
                ManifestArg::JsonInput {
                    json_input_arg: "ignored",
                    mandatory: false,
                },
            ],
        }
    }
}

pub static RESOURCE_MANIFEST: LazyLock<ResourceManifest> = LazyLock::new(|| ResourceManifest {
    schema_url: MANIFEST_SCHEMA_URL,
    resource_type: RESOURCE_TYPE,
    version: env!("CARGO_PKG_VERSION"),
    description: RESOURCE_DESCRIPTION,
    kind: "resource",
    tags: vec!["windows", "python", "pip"],
    exit_codes: BTreeMap::from([
        ("0", "Success"),
        ("1", "Generic error"),
        ("2", "Argument(s) Invalid"),
    ]),
    schema: EmbeddedSchema {
        embedded: PACKAGE_SCHEMA.clone(),
    },
    get: CommandTemplate::verb("get"),
    set: CommandTemplate::verb("set"),
    delete: CommandTemplate::verb("delete"),
    export: CommandTemplate::export(),
});
