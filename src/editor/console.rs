// src/editor/console.rs

use std::fmt;

use super::Theme;

pub const PLACEHOLDER: &str = "Run your code to see the output here.";

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Palette { background: "#1e1e1e", foreground: "#d4d4d4", muted: "#808080" }
        } else {
            Palette { background: "#ffffff", foreground: "#1f2937", muted: "#6b7280" }
        }
    }
}

/// Output console render model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConsole {
    pub text: String,
    /// True when nothing has run yet and the placeholder is shown.
    pub is_placeholder: bool,
    pub is_error: bool,
    pub palette: Palette,
}

impl OutputConsole {
    pub fn render(output: &str, theme: Theme) -> Self {
        let is_placeholder = output.is_empty();
        Self {
            text: if is_placeholder { PLACEHOLDER.to_string() } else { output.to_string() },
            is_placeholder,
            is_error: output.starts_with("Error:"),
            palette: Palette::for_theme(theme),
        }
    }
}

impl fmt::Display for OutputConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Output -----")?;
        writeln!(f, "{}", self.text)?;
        write!(f, "------------------")
    }
}
