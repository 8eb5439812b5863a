//! ANSI styling for terminal output.

use std::ffi::OsStr;

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const BOLD: &str = "\x1b[1m";
}

/// Applies colours, or passes text through untouched when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that emits ANSI codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    /// A palette that never emits ANSI codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Colour only when stdout is a terminal and neither `NO_COLOR` nor `no_color` asks otherwise.
    #[must_use]
    pub fn for_stdout(no_color: bool) -> Self {
        use std::io::IsTerminal;

        let env_no_color = std::env::var_os("NO_COLOR");
        Self::resolve(no_color, env_no_color.as_deref(), std::io::stdout().is_terminal())
    }

    /// `NO_COLOR` counts only when set to a non-empty value.
    fn resolve(no_color: bool, env_no_color: Option<&OsStr>, is_terminal: bool) -> Self {
        let env_disables = env_no_color.is_some_and(|value| !value.is_empty());
        if no_color || env_disables || !is_terminal {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    /// Green text.
    #[must_use]
    pub fn success(self, text: &str) -> String {
        self.paint(codes::GREEN, text)
    }

    /// Red text.
    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(codes::RED, text)
    }

    /// Bold text.
    #[must_use]
    pub fn bold(self, text: &str) -> String {
        self.paint(codes::BOLD, text)
    }

    /// Bold magenta text.
    #[must_use]
    pub fn heading(self, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}{}", codes::BOLD, codes::MAGENTA, text, codes::RESET)
        } else {
            text.to_string()
        }
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", codes::RESET)
        } else {
            text.to_string()
        }
    }
}
