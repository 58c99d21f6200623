use navprice::NavError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Setup failure or incomplete run.
    #[error(transparent)]
    Navprice(#[from] NavError),

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Navprice(NavError::Incomplete { .. }) => 3,
            Self::Navprice(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
