//! Errors the CLI reports with a dedicated exit code.
//!
//! Anything else travelling through `anyhow` exits with `FAILURE`.

use std::fmt;

use chrono::Duration;

use crate::ui::format_remaining;

/// User-facing failures, each tied to one exit code.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input (missing arguments, bad dates, weak passphrase)
    InvalidInput(String),

    /// Sealed data could not be processed. The message never says why.
    InvalidData(String),

    /// The unlock date has not been reached
    Locked { remaining: Duration },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::InvalidData(message) => write!(f, "{}", message),
            CliError::Locked { remaining } => write!(
                f,
                "Unlock date not reached. Remaining {}",
                format_remaining(*remaining)
            ),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        CliError::InvalidData(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        use crate::constants::exit_codes;
        match self {
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::InvalidData(_) => exit_codes::INVALID_DATA,
            CliError::Locked { .. } => exit_codes::LOCKED,
        }
    }
}
