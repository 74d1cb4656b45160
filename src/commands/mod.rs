pub mod delete;
pub mod describe;
pub mod export;
pub mod get;
pub mod set;

#[cfg(test)]
pub(crate) mod fake;
