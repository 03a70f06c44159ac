//! Bridge from `tracing` events to the diagnostic log.
//!
//! Crates emit events with the usual `tracing` macros; this layer renders
//! each one as `LEVEL target: message key=value ...` and hands it to a
//! [`DiagnosticLog`].

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::error::DiagnosticsError;
use crate::log::DiagnosticLog;

pub struct DiagnosticLayer {
    log: Arc<DiagnosticLog>,
}

impl DiagnosticLayer {
    pub fn new(log: Arc<DiagnosticLog>) -> Self {
        Self { log }
    }
}

impl<S: Subscriber> Layer<S> for DiagnosticLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let mut line = format!(
            "{} {}: {}",
            metadata.level(),
            metadata.target(),
            visitor.message
        );
        for (name, value) in &visitor.fields {
            let _ = write!(line, " {}={}", name, value);
        }
        self.log.log(&line);
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push((field.name(), format!("{:?}", value)));
        }
    }
}

/// Install the process-wide log as the global tracing subscriber and point it
/// at `settings`.
///
/// On error the process-wide log is left as it was.
///
/// # Errors
///
/// Returns `DiagnosticsError::InvalidFilter` for unparsable directives and
/// `DiagnosticsError::AlreadyInitialized` if a global subscriber exists.
pub fn init_tracing(settings: &LogSettings) -> Result<(), DiagnosticsError> {
    let filter = EnvFilter::try_new(&settings.filter)
        .map_err(|e| DiagnosticsError::InvalidFilter(e.to_string()))?;

    let log = crate::global();
    tracing_subscriber::registry()
        .with(filter)
        .with(DiagnosticLayer::new(Arc::clone(log)))
        .try_init()
        .map_err(|_| DiagnosticsError::AlreadyInitialized)?;

    if let Some(directory) = &settings.directory {
        log.set_log_directory(directory);
    }
    log.set_console(settings.console);

    tracing::info!(directory = ?settings.directory, "Diagnostic log initialized");
    Ok(())
}
