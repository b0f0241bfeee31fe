//! Passphrase policy for sealing.
//!
//! Only sealing enforces the policy. Opening accepts whatever passphrase the
//! blob was sealed with.

use crate::error::{ChronoLockError, Result};

/// Shortest passphrase accepted for sealing, in characters.
pub const MIN_SEALING_PASSPHRASE_CHARS: usize = 8;

/// Check that `passphrase` is acceptable for sealing new content.
///
/// Length is counted in `char`s, so multi-byte characters count once.
///
/// ```
/// use chronolock_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("correct horse battery").is_ok());
/// assert!(validate_passphrase("tiny").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.trim().is_empty() {
        return Err(ChronoLockError::InvalidInput(
            "Passphrase is blank".to_string(),
        ));
    }

    let chars = passphrase.chars().count();
    if chars < MIN_SEALING_PASSPHRASE_CHARS {
        return Err(ChronoLockError::InvalidInput(format!(
            "Passphrase needs at least {} characters, got {}",
            MIN_SEALING_PASSPHRASE_CHARS, chars
        )));
    }

    Ok(())
}
