//! Error types for ChronoLock core operations.
//!
//! Cryptographic failures are collapsed into `InvalidData` at the coordinator
//! boundary so callers cannot tell a wrong passphrase from a corrupted blob.
//! The CLI layer maps these to user-facing messages and exit codes.

use chrono::Duration;
use thiserror::Error;

use crate::crypto::CodecError;

/// Result type alias for ChronoLock operations.
pub type Result<T> = std::result::Result<T, ChronoLockError>;

/// Core error type for ChronoLock operations.
#[derive(Debug, Error)]
pub enum ChronoLockError {
    /// Encryption was requested with an unlock time that is not in the future
    #[error("Unlock time has already elapsed")]
    AlreadyElapsed,

    /// Decryption was requested before the unlock time
    #[error("Unlock time not reached ({} seconds remaining)", whole_seconds_ceil(.remaining))]
    GateNotOpen {
        /// Time left until the blob may be opened
        remaining: Duration,
    },

    /// The blob failed verification or could not be parsed
    #[error("Invalid data")]
    InvalidData,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sealing failed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Reading or writing bytes failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChronoLockError {
    /// Remaining time until unlock, if this is a gate error.
    pub fn remaining(&self) -> Option<Duration> {
        match self {
            ChronoLockError::GateNotOpen { remaining } => Some(*remaining),
            _ => None,
        }
    }
}

/// Seconds in `duration`, rounded up. Negative durations count as zero.
fn whole_seconds_ceil(duration: &Duration) -> i64 {
    let millis = duration.num_milliseconds().max(0);
    (millis + 999) / 1000
}
