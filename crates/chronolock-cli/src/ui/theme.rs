//! Status badges and their colors.

use owo_colors::{OwoColorize, Style};

/// Outcome shown in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Locked,
    Err,
}

impl Badge {
    /// Bracketed label, e.g. `[LOCKED]`.
    pub fn label(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, false) => "[OK]",
            (Self::Locked, false) => "[LOCKED]",
            (Self::Err, false) => "[ERR]",
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Locked, true) => "[\u{23F3}]",
            (Self::Err, true) => "[\u{2717}]",
        }
    }

    pub fn style(self) -> Style {
        let base = Style::new().bold();
        match self {
            Self::Ok => base.green(),
            Self::Locked => base.yellow(),
            Self::Err => base.red(),
        }
    }
}

/// Style used for secondary text such as hints.
pub fn muted() -> Style {
    Style::new().dimmed()
}

/// Paint `text` with `style`, or return it untouched when color is off.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_labels() {
        assert_eq!(Badge::Ok.label(false), "[OK]");
        assert_eq!(Badge::Locked.label(false), "[LOCKED]");
        assert_eq!(Badge::Err.label(false), "[ERR]");
    }

    #[test]
    fn test_unicode_labels_differ_from_ascii() {
        for badge in [Badge::Ok, Badge::Locked, Badge::Err] {
            assert_ne!(badge.label(true), badge.label(false));
        }
    }

    #[test]
    fn test_paint_respects_color_flag() {
        assert_eq!(paint("sealed", Badge::Err.style(), false), "sealed");

        let colored = paint("sealed", Badge::Ok.style(), true);
        assert!(colored.contains("sealed"));
        assert!(colored.starts_with('\u{1b}'));
    }
}
