use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use chronolock_core::VERSION;

/// ChronoLock - encrypt a file so it cannot be decrypted before a given date
#[derive(Parser, Debug)]
#[command(name = "chronolock")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub lock: LockArgs,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for encrypting or decrypting a file
#[derive(Args, Debug, Default)]
pub struct LockArgs {
    /// Path to the input file
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to the output file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Whether to encrypt or decrypt the input
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Unlock date (YYYY-MM-DD, or an RFC 3339 timestamp)
    #[arg(short, long, value_name = "DATE")]
    pub unlock_date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encrypt_arguments() {
        let cli = Cli::try_parse_from([
            "chronolock",
            "--input",
            "in.txt",
            "--output",
            "out.bin",
            "--mode",
            "encrypt",
            "--unlock-date",
            "2025-06-01",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.lock.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.lock.output, Some(PathBuf::from("out.bin")));
        assert_eq!(cli.lock.mode, Some(Mode::Encrypt));
        assert_eq!(cli.lock.unlock_date.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn test_parse_short_flags() {
        let cli =
            Cli::try_parse_from(["chronolock", "-i", "a", "-o", "b", "-m", "decrypt", "-vv"])
                .unwrap();
        assert_eq!(cli.lock.mode, Some(Mode::Decrypt));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = Cli::try_parse_from(["chronolock", "--mode", "shred"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["chronolock", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Bash })
        ));
    }
}
