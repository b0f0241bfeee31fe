//! ChronoLock CLI - encrypt files that cannot be decrypted before a given date
//!
//! This is the command-line interface for ChronoLock. It validates arguments,
//! resolves the passphrase and unlock date, and delegates to the core library.

use clap::Parser;

use chronolock_core::SystemClock;

mod app;
mod cli;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use cli::Cli;
use ui::UiContext;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = app::run(&cli, SystemClock) {
        let ctx = UiContext::for_stderr(cli.no_color, cli.ascii, cli.quiet);
        std::process::exit(app::report(&ctx, &err));
    }
}
