//! WASM bindings for wasm-cardano
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod address;
pub mod logger;
pub mod session;
pub mod try_into_js_value;

// Re-export WASM types
pub use address::{AddressNamespace, KeyNamespace};
pub use logger::init_logging;
pub use session::WasmWalletSession;
