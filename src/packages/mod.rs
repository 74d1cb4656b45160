//! # Package Manager Client
//!
//! The adapter only ever talks to the wrapped package manager through the
//! [`PackageManager`] trait: list what is installed, install one
//! requirement, remove one package. [`pip::PipManager`] is the real
//! implementation; tests substitute an in-memory fake.

pub mod pip;
pub mod traits;

pub use pip::PipManager;
pub use traits::PackageManager;
