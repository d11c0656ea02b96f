//! `tracing` setup.
//!
//! Formatted events go to the browser console, with the console method
//! chosen by level so that warnings and errors stand out in devtools.
//! Native builds (tests) write to stderr instead.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LOG_LEVEL;

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
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
        if self.buffer.is_empty() {
            return;
        }
        let message = String::from_utf8_lossy(&self.buffer);
        emit(self.level, message.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, message: &str) {
    eprintln!("{}", message);
}

/// [`MakeWriter`] producing a [`ConsoleWriter`] per event.
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_LEVEL))
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        // SystemTime is unavailable on wasm32-unknown-unknown
        .without_time()
        .with_target(true)
        .try_init();

    if result.is_ok() {
        tracing::info!(level = LOG_LEVEL, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_writer_buffers_until_drop() {
        let mut writer = MakeConsoleWriter.make_writer();
        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world\n").unwrap();
        assert_eq!(writer.buffer, b"hello world\n");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init();
    }
}
