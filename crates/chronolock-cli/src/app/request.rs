//! Argument validation.
//!
//! Every required-argument check happens here, before a passphrase is read or
//! any cryptography runs.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::cli::{LockArgs, Mode};
use crate::config::ChronoLockConfig;
use crate::errors::CliError;
use crate::helpers::parse_unlock_date;

/// A fully validated encrypt or decrypt request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encrypt { unlock_at: DateTime<Utc> },
    Decrypt,
}

impl LockRequest {
    pub fn from_args(args: &LockArgs, config: &ChronoLockConfig) -> anyhow::Result<Self> {
        let output = args
            .output
            .clone()
            .ok_or_else(|| CliError::invalid_input("Missing output path"))?;
        let input = args
            .input
            .clone()
            .ok_or_else(|| CliError::invalid_input("Missing input file"))?;
        let mode = args.mode.ok_or_else(|| {
            CliError::invalid_input("Missing mode. Use --mode encrypt or --mode decrypt")
        })?;

        let action = match mode {
            Mode::Encrypt => {
                let unlock_date = args
                    .unlock_date
                    .as_deref()
                    .ok_or_else(|| CliError::invalid_input("Missing unlock date"))?;
                let unlock_at =
                    parse_unlock_date(unlock_date, config.timezone()?, config.time.unlock_hour)?;
                Action::Encrypt { unlock_at }
            }
            Mode::Decrypt => Action::Decrypt,
        };

        Ok(Self {
            input,
            output,
            action,
        })
    }

    pub fn is_encrypt(&self) -> bool {
        matches!(self.action, Action::Encrypt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Option<&str>, output: Option<&str>, mode: Option<Mode>) -> LockArgs {
        LockArgs {
            input: input.map(PathBuf::from),
            output: output.map(PathBuf::from),
            mode,
            unlock_date: None,
            no_input: true,
        }
    }

    fn message(err: anyhow::Error) -> String {
        match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidInput(message)) => message.clone(),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_output_reported_first() {
        let err = LockRequest::from_args(&args(None, None, None), &ChronoLockConfig::default())
            .unwrap_err();
        assert_eq!(message(err), "Missing output path");
    }

    #[test]
    fn test_missing_input() {
        let err = LockRequest::from_args(
            &args(None, Some("out"), Some(Mode::Decrypt)),
            &ChronoLockConfig::default(),
        )
        .unwrap_err();
        assert_eq!(message(err), "Missing input file");
    }

    #[test]
    fn test_missing_mode() {
        let err = LockRequest::from_args(
            &args(Some("in"), Some("out"), None),
            &ChronoLockConfig::default(),
        )
        .unwrap_err();
        assert!(message(err).starts_with("Missing mode"));
    }

    #[test]
    fn test_encrypt_requires_unlock_date() {
        let err = LockRequest::from_args(
            &args(Some("in"), Some("out"), Some(Mode::Encrypt)),
            &ChronoLockConfig::default(),
        )
        .unwrap_err();
        assert_eq!(message(err), "Missing unlock date");
    }

    #[test]
    fn test_encrypt_resolves_unlock_date() {
        let mut lock_args = args(Some("in"), Some("out"), Some(Mode::Encrypt));
        lock_args.unlock_date = Some("2025-06-01".to_string());

        let request = LockRequest::from_args(&lock_args, &ChronoLockConfig::default()).unwrap();

        let expected = DateTime::parse_from_rfc3339("2025-06-01T12:00:00+02:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            request.action,
            Action::Encrypt {
                unlock_at: expected
            }
        );
        assert!(request.is_encrypt());
    }

    #[test]
    fn test_decrypt_ignores_unlock_date() {
        let request = LockRequest::from_args(
            &args(Some("in"), Some("out"), Some(Mode::Decrypt)),
            &ChronoLockConfig::default(),
        )
        .unwrap();
        assert_eq!(request.action, Action::Decrypt);
        assert_eq!(request.input, PathBuf::from("in"));
        assert_eq!(request.output, PathBuf::from("out"));
    }
}
