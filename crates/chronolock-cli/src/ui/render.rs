//! Status lines.

use super::context::UiContext;
use super::theme::{muted, paint, Badge};

/// `<badge> <message>`, or the bare badge when `message` is empty.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let label = paint(kind.label(ctx.unicode), kind.style(), ctx.color);
    match message {
        "" => label,
        _ => format!("{} {}", label, message),
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    format!("{} {}", paint("Hint:", muted(), ctx.color), text)
}

/// Print an `[OK]` line on stdout. Suppressed by `--quiet`.
pub fn success(ctx: &UiContext, message: &str) {
    if ctx.quiet {
        return;
    }
    println!("{}", badge(ctx, Badge::Ok, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_lines_without_color() {
        let ctx = UiContext::plain();
        assert_eq!(
            badge(&ctx, Badge::Locked, "Unlock date not reached"),
            "[LOCKED] Unlock date not reached"
        );
        assert_eq!(badge(&ctx, Badge::Err, ""), "[ERR]");
    }

    #[test]
    fn test_hint_line() {
        let ctx = UiContext::plain();
        assert_eq!(
            hint(&ctx, "Check the passphrase"),
            "Hint: Check the passphrase"
        );
    }
}
