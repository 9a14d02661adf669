use std::io;

use discord_components_playground::page::DiagnosticLog;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLog;

impl DiagnosticLog for ConsoleLog {
    fn info(&self, message: &str, detail: &str) {
        console::info_2(&JsValue::from_str(message), &JsValue::from_str(detail));
    }
}

/// Buffers one formatted event, and writes it to the console when
/// dropped.
#[derive(Default)]
struct ConsoleWriter(Vec<u8>);

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.0.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.0);
        console::log_1(&JsValue::from_str(line.trim_end()));
    }
}

/// Send `tracing` events to the browser console.
pub fn init_logging(filter: &str) {
    // Fails if a subscriber is already installed, e.g. `start` was
    // called twice. Keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .with_env_filter(EnvFilter::new(filter))
        .try_init();
}
