//! Passphrase input.

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::constants::PASSPHRASE_ENV;
use crate::errors::CliError;

/// Read the passphrase from CHRONOLOCK_PASSPHRASE, or prompt for it.
///
/// When `confirm` is set the prompt asks twice (used when sealing, where a
/// typo would make the output unrecoverable).
pub fn prompt_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var(PASSPHRASE_ENV) {
        if !value.trim().is_empty() {
            tracing::debug!("using passphrase from {}", PASSPHRASE_ENV);
            return Ok(Zeroizing::new(value));
        }
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ))
        .into());
    }

    let mut prompt = Password::new().with_prompt("Passphrase");
    if confirm {
        prompt = prompt.with_confirmation("Confirm passphrase", "Passphrases do not match");
    }
    prompt
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}
