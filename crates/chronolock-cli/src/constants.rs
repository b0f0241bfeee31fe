//! Constants used throughout the CLI.

/// Environment variable holding the passphrase.
pub const PASSPHRASE_ENV: &str = "CHRONOLOCK_PASSPHRASE";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "CHRONOLOCK_CONFIG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (I/O, config).
    pub const FAILURE: i32 = 1;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Sealed data could not be opened (wrong passphrase, corrupted file).
    pub const INVALID_DATA: i32 = 5;

    /// The unlock date has not been reached.
    pub const LOCKED: i32 = 6;
}
