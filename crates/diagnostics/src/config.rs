//! Log settings

use std::env;
use std::path::PathBuf;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn,onlinecity_domain=info,onlinecity_diagnostics=info";

/// Where and what to log, loaded once at process start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Directory receiving the daily `Log <date>.txt` files (None = stderr only)
    pub directory: Option<PathBuf>,
    /// `EnvFilter` directives
    pub filter: String,
    /// Mirror every line to stderr
    pub console: bool,
}

impl LogSettings {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            filter: DEFAULT_FILTER.to_string(),
            console: true,
        }
    }

    /// Load settings from environment variables
    ///
    /// - `ONLINECITY_LOG_DIR`: log directory
    /// - `RUST_LOG`: filter directives
    /// - `ONLINECITY_LOG_CONSOLE`: `0` or `false` silences stderr
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            directory: var("ONLINECITY_LOG_DIR")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            filter: var("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            console: console_enabled(var("ONLINECITY_LOG_CONSOLE")),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }
}

fn console_enabled(flag: Option<String>) -> bool {
    match flag {
        Some(flag) => {
            let flag = flag.trim().to_ascii_lowercase();
            !matches!(flag.as_str(), "0" | "false" | "no")
        }
        None => true,
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: None,
            filter: DEFAULT_FILTER.to_string(),
            console: true,
        }
    }
}
