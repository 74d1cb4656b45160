use serde_json::{Value, json};
use std::sync::LazyLock;

pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// JSON Schema of a package instance, embedded in the manifest and printed
/// by the `schema` verb.
pub static PACKAGE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": JSON_SCHEMA_DIALECT,
        "title": "pip_package",
        "type": "object",
        "additionalProperties": false,
        "required": ["name"],
        "properties": {
            "_exist": {
                "description": "Indicates whether an instance should or does exist.",
                "type": "boolean"
            },
            "name": {
                "type": "string"
            },
            "version": {
                "type": "string"
            },
            "useLatest": {
                "default": false,
                "description": "Indicate that the latest available version of the package should be installed.",
                "type": "boolean"
            }
        }
    })
});
