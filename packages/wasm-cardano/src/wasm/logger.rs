//! `log` sink that writes to the browser console

use crate::WasmCardanoError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Route crate logs to `console.*`
///
/// # Arguments
/// * `level` - "off", "error", "warn", "info" (default), "debug" or "trace"
///
/// May be called again to change the level.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), WasmCardanoError> {
    let filter = match level.as_deref() {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| WasmCardanoError::InvalidInput(format!("Unknown log level: {}", level)))?,
        None => LevelFilter::Info,
    };
    // Fails only when a logger is already installed, in which case only the level changes
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    Ok(())
}
