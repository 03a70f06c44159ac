//! Diagnostic log sink
//!
//! Every line looks like
//!
//! ```text
//! 2024-03-15 10:00:01.500 |   1500 | Trade accepted
//! ```
//!
//! where the middle column is the milliseconds since the previous line
//! (0 after a gap of 1,000,000 ms or more). Lines go to stderr and are
//! appended to `Log <yyyy-MM-dd>.txt` in the configured directory.
//!
//! One mutex covers reading and updating the previous timestamp and writing
//! the line, so concurrent callers get whole lines and consistent deltas.
//! Write failures are dropped: the next line simply tries again.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, Utc};

use crate::clock::ClockPort;

/// Deltas at or above this are reported as 0
pub const ELAPSED_RESET_MILLIS: i64 = 1_000_000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct DiagnosticLog {
    clock: Arc<dyn ClockPort>,
    state: Mutex<LogState>,
}

struct LogState {
    last_message_at: DateTime<Local>,
    directory: Option<PathBuf>,
    console: bool,
}

impl DiagnosticLog {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            state: Mutex::new(LogState {
                last_message_at: DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local),
                directory: None,
                console: true,
            }),
        }
    }

    /// Stop mirroring lines to stderr
    pub fn without_console(self) -> Self {
        self.set_console(false);
        self
    }

    pub fn set_log_directory(&self, directory: impl Into<PathBuf>) {
        self.lock().directory = Some(directory.into());
    }

    pub fn log_directory(&self) -> Option<PathBuf> {
        self.lock().directory.clone()
    }

    pub fn set_console(&self, console: bool) {
        self.lock().console = console;
    }

    /// Write one line and return it as written (without the newline).
    pub fn log(&self, message: &str) -> String {
        let mut state = self.lock();

        let now = self.clock.now();
        let elapsed = elapsed_millis(state.last_message_at, now);
        state.last_message_at = now;

        let line = format!(
            "{} | {:>6} | {}",
            now.format(TIMESTAMP_FORMAT),
            elapsed,
            message
        );

        if state.console {
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
        if let Some(directory) = &state.directory {
            let _ = append_line(&directory.join(log_file_name(now)), &line);
        }
        line
    }

    /// Log a message followed by a byte payload rendered as hex pairs
    pub fn log_bytes(&self, message: &str, bytes: &[u8]) -> String {
        self.log(&format!("{} {}", message, format_bytes(bytes)))
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        // A panic elsewhere must not silence logging for the rest of the process.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Milliseconds between two lines, 0 when the clock went backwards or the
/// gap reached [`ELAPSED_RESET_MILLIS`].
pub fn elapsed_millis(previous: DateTime<Local>, now: DateTime<Local>) -> i64 {
    let elapsed = (now - previous).num_milliseconds();
    if !(0..ELAPSED_RESET_MILLIS).contains(&elapsed) {
        0
    } else {
        elapsed
    }
}

/// Name of the file receiving lines written at `at`
pub fn log_file_name(at: DateTime<Local>) -> String {
    format!("Log {}.txt", at.format("%Y-%m-%d"))
}

/// Upper-case hex pairs separated by spaces, e.g. `0A FF 10`
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{}\n", line).as_bytes())
}
