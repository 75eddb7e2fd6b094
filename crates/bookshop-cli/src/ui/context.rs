//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode borders and symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// # Arguments
    /// * `json_flag` - Whether `--json` was passed
    /// * `ascii_flag` - Whether `--ascii` was passed or set in config
    pub fn from_env(json_flag: bool, ascii_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Resolve color: disabled if NO_COLOR env or TERM=dumb
        let color = is_tty && !no_color_env && !term_is_dumb;

        Self {
            color,
            unicode: !ascii_flag && !term_is_dumb,
            mode: OutputMode::resolve(json_flag, is_tty, term_is_dumb),
        }
    }

    /// Context with no color and ASCII output, for tests and logs.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }
}
