//! `tracing` subscriber that writes to the browser console
//!
//! The fmt layer formats each event into a [`ConsoleWriter`]; the line is
//! emitted on drop through the console method matching the event level.
//! Timestamps are disabled because `SystemTime` is unavailable on
//! `wasm32-unknown-unknown`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }
}

/// Buffers one formatted event.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = self.line();
        if line.is_empty() {
            return;
        }
        let message = JsValue::from(line);
        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&message),
            ConsoleMethod::Warn => web_sys::console::warn_1(&message),
            ConsoleMethod::Info => web_sys::console::info_1(&message),
            ConsoleMethod::Debug => web_sys::console::debug_1(&message),
        }
    }
}

/// [`MakeWriter`] handing out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()))
    }
}

/// Filter for `directive`, falling back to `info` when it does not parse.
#[must_use]
pub fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the console subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(directive: &str) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false);

    let installed = tracing_subscriber::registry()
        .with(filter_for(directive))
        .with(layer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Log subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_mapping() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_buffers_line() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Info);
        let written = writer.write(b" INFO Progress updated\n");
        assert!(written.is_ok());
        assert_eq!(writer.line(), " INFO Progress updated");
        // Empty buffer so drop does not reach the console on native targets
        writer.buffer.clear();
    }

    #[test]
    fn test_invalid_directive_falls_back() {
        let filter = filter_for("learn_ui=loud");
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }
}
