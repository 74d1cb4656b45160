//! Static resource description: the manifest the engine registers and the
//! instance schema. Built once, never mutated.

pub mod manifest;
pub mod schema;

pub use manifest::RESOURCE_MANIFEST;
pub use schema::PACKAGE_SCHEMA;
