//! OnlineCity diagnostics: a process-wide log that writes timestamped lines
//! to stderr and to one file per day.
//!
//! Most code should emit `tracing` events and let [`init_tracing`] route them
//! here. [`log`] writes a line directly.

pub mod clock;
pub mod config;
pub mod error;
pub mod layer;
pub mod log;

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;

pub use clock::{ClockPort, SystemClock};
pub use config::{LogSettings, DEFAULT_FILTER};
pub use error::DiagnosticsError;
pub use layer::{init_tracing, DiagnosticLayer};
pub use log::{elapsed_millis, format_bytes, log_file_name, DiagnosticLog, ELAPSED_RESET_MILLIS};

static GLOBAL: Lazy<Arc<DiagnosticLog>> = Lazy::new(|| {
    let clock = Arc::new(SystemClock::new());
    Arc::new(DiagnosticLog::new(clock))
});

/// The process-wide log
pub fn global() -> &'static Arc<DiagnosticLog> {
    &GLOBAL
}

/// Set the directory of the process-wide log
pub fn set_log_directory(directory: impl Into<PathBuf>) {
    global().set_log_directory(directory);
}

/// Write one line to the process-wide log
pub fn log(message: &str) -> String {
    global().log(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(global(), global()));
    }

    #[test]
    fn test_global_log_writes_to_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        global().set_console(false);
        set_log_directory(dir.path());

        let line = log("global line");
        assert!(line.ends_with("| global line"));

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .map(|e| e.expect("entry").path())
            .collect();
        assert_eq!(files.len(), 1);
        let content = std::fs::read_to_string(&files[0]).expect("read");
        assert!(content.contains("| global line"));
    }
}
