//! wasm-cardano: WASM module backing a CIP-30 Cardano wallet payload signer
//!
//! This crate provides:
//! - Address decoding and bech32 display encoding
//! - Public key hashing (Blake2b-224) for the signing identity
//! - A wallet session state machine for the enable/address/stake key/sign flow
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod address;
pub mod error;
pub mod key_hash;
pub mod provider;
pub mod session;
pub mod types;
pub mod wasm;

// Re-export main types for convenience
pub use address::{
    decode_address, decode_address_hex, decode_address_with, display_address_from_hex,
    encode_address, parse_bech32_address, AddressKind, DecodedAddress, NetworkIdConvention,
    NetworkTag,
};
pub use error::WasmCardanoError;
pub use key_hash::{hash_public_key, Blake2b224, KeyHashFunction, KeyHasher};
pub use provider::{ProviderScript, ScriptedProvider, SessionDriver, WalletProvider};
pub use session::{
    Effect, SessionInput, SessionSnapshot, SessionState, Settlement, WalletCall, WalletSession,
};
pub use types::{EnableRequest, Extension, SessionConfig};
