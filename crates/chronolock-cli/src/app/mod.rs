//! Application flow for the ChronoLock CLI.
//!
//! This module provides:
//! - Argument validation (`request`)
//! - Passphrase resolution and the encrypt/decrypt round trip
//! - Mapping of core errors to CLI errors
//!
//! The clock is a parameter so the whole flow can run against a fixed instant.

mod request;

use std::io::IsTerminal;

use chronolock_core::crypto::validate_passphrase;
use chronolock_core::{ChronoLock, ChronoLockError, Clock};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Commands};
use crate::config::{load_config, resolve_config_path};
use crate::errors::CliError;
use crate::helpers::prompt_passphrase;
use crate::ui::{self, UiContext};

pub use request::{Action, LockRequest};

/// Run the command described by `cli`, reading the current time from `clock`.
pub fn run<C: Clock + 'static>(cli: &Cli, clock: C) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut command = Cli::command();
        generate(*shell, &mut command, "chronolock", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = resolve_config_path()?;
    let config = load_config(&config_path)?;
    let request = LockRequest::from_args(&cli.lock, &config)?;
    tracing::debug!(?request, "validated request");

    let interactive = std::io::stdin().is_terminal() && !cli.lock.no_input;
    let passphrase = prompt_passphrase(interactive, request.is_encrypt())?;

    execute(&request, &passphrase, clock)?;

    let ctx = UiContext::from_env(cli.no_color, cli.ascii, cli.quiet);
    match request.action {
        Action::Encrypt { unlock_at } => ui::success(
            &ctx,
            &format!(
                "Encrypted until {} at {}",
                ui::format_datetime(&unlock_at, config.timezone()?),
                request.output.display()
            ),
        ),
        Action::Decrypt => ui::success(
            &ctx,
            &format!("Decrypted to {}", request.output.display()),
        ),
    }
    Ok(())
}

/// Perform a validated request with the given passphrase.
pub fn execute<C: Clock + 'static>(
    request: &LockRequest,
    passphrase: &str,
    clock: C,
) -> anyhow::Result<()> {
    match request.action {
        Action::Encrypt { unlock_at } => {
            validate_passphrase(passphrase).map_err(input_error)?;
            let lock = ChronoLock::new(passphrase).with_clock(clock);
            lock.encrypt_and_save(&request.input, unlock_at, &request.output)
                .map_err(encryption_error)?;
            tracing::info!(
                input = %request.input.display(),
                output = %request.output.display(),
                %unlock_at,
                "encrypted"
            );
        }
        Action::Decrypt => {
            let lock = ChronoLock::new(passphrase).with_clock(clock);
            lock.decrypt_and_save(&request.input, &request.output)
                .map_err(decryption_error)?;
            tracing::info!(
                input = %request.input.display(),
                output = %request.output.display(),
                "decrypted"
            );
        }
    }
    Ok(())
}

/// Print an error to stderr and return the exit code for it.
///
/// `ctx` should be built with [`UiContext::for_stderr`].
pub fn report(ctx: &UiContext, err: &anyhow::Error) -> i32 {
    use crate::constants::exit_codes;

    match err.downcast_ref::<CliError>() {
        Some(cli_err @ CliError::Locked { .. }) => {
            eprintln!("{}", ui::badge(ctx, ui::Badge::Locked, &cli_err.to_string()));
            cli_err.exit_code()
        }
        Some(cli_err @ CliError::InvalidData(_)) => {
            eprintln!("{}", ui::badge(ctx, ui::Badge::Err, &cli_err.to_string()));
            eprintln!(
                "{}",
                ui::hint(
                    ctx,
                    "Check the passphrase and that the file was sealed by chronolock."
                )
            );
            cli_err.exit_code()
        }
        Some(cli_err) => {
            eprintln!("{}", ui::badge(ctx, ui::Badge::Err, &cli_err.to_string()));
            cli_err.exit_code()
        }
        None => {
            eprintln!("{}", ui::badge(ctx, ui::Badge::Err, &format!("{:#}", err)));
            exit_codes::FAILURE
        }
    }
}

fn input_error(err: ChronoLockError) -> anyhow::Error {
    match err {
        ChronoLockError::InvalidInput(message) => CliError::invalid_input(message).into(),
        other => other.into(),
    }
}

fn encryption_error(err: ChronoLockError) -> anyhow::Error {
    tracing::debug!(error = %err, "encryption failed");
    match err {
        ChronoLockError::AlreadyElapsed => {
            CliError::invalid_input("Unlock date must be in the future").into()
        }
        ChronoLockError::InvalidData => {
            CliError::invalid_input("Input file is not valid UTF-8 text").into()
        }
        ChronoLockError::Io(io) => anyhow::Error::new(io).context("Encryption failed"),
        _ => CliError::invalid_data("Encryption failed").into(),
    }
}

fn decryption_error(err: ChronoLockError) -> anyhow::Error {
    tracing::debug!(error = %err, "decryption failed");
    match err {
        ChronoLockError::GateNotOpen { remaining } => CliError::Locked { remaining }.into(),
        ChronoLockError::Io(io) => anyhow::Error::new(io).context("Decryption failed"),
        _ => CliError::invalid_data("Decryption failed").into(),
    }
}
