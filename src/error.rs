use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipDscError {
    /// Wrong number of arguments or an unknown verb
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl PipDscError {
    /// Process exit code advertised in the resource manifest.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipDscError>;
