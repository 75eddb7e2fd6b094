//! How command output is shaped.

/// Shape of stdout for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `--json`: one JSON document, nothing else
    Json,
    /// Tab-separated rows and `key=value` status lines
    #[default]
    Plain,
    /// Grids, badges and colour for a terminal
    Pretty,
}

impl OutputMode {
    /// Pick the mode: `--json` wins, then `TERM=dumb` or a pipe gives plain.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        match (json_flag, is_tty && !term_is_dumb) {
            (true, _) => Self::Json,
            (false, true) => Self::Pretty,
            (false, false) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
