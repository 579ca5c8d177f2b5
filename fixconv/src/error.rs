use std::process::ExitCode;

use fixed_codec::FixedPointError;
use thiserror::Error;

/// Errors surfaced to the user by either tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Codec(#[from] FixedPointError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status: 1 for a bad format, 2 for overflow, 3 for an
    /// out-of-range literal.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Codec(FixedPointError::Overflow { .. }) => 2,
            CliError::Codec(FixedPointError::OutOfRange { .. }) => 3,
            CliError::Codec(_) | CliError::Io(_) => 1,
        }
    }
}

/// Prints the error, if any, and turns the outcome into an exit status.
pub fn finish(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
