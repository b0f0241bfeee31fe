//! Output settings resolved from flags and the environment.

use std::io::IsTerminal;

/// How status lines are rendered.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Skip `[OK]` lines. Errors are always printed.
    pub quiet: bool,
}

impl UiContext {
    /// Context for lines printed on stdout.
    pub fn from_env(no_color: bool, ascii: bool, quiet: bool) -> Self {
        Self::resolve(no_color, ascii, quiet, std::io::stdout().is_terminal())
    }

    /// Context for lines printed on stderr.
    pub fn for_stderr(no_color: bool, ascii: bool, quiet: bool) -> Self {
        Self::resolve(no_color, ascii, quiet, std::io::stderr().is_terminal())
    }

    /// Color needs `is_tty` and is vetoed by `--no-color`, `NO_COLOR` or
    /// `TERM=dumb`. Unicode badges are vetoed by `--ascii` or `TERM=dumb`.
    fn resolve(no_color: bool, ascii: bool, quiet: bool, is_tty: bool) -> Self {
        let dumb_term = matches!(std::env::var("TERM").as_deref(), Ok("dumb"));
        let color_vetoed = no_color || dumb_term || std::env::var_os("NO_COLOR").is_some();

        Self {
            color: !color_vetoed && is_tty,
            unicode: !(ascii || dumb_term),
            quiet,
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            quiet: false,
        }
    }
}
