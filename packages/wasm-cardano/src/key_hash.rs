//! Public key hashing
//!
//! Cardano identifies a key by its Blake2b-224 hash. The hash function is a
//! type parameter so callers (and tests) can substitute their own.

use crate::error::WasmCardanoError;
use blake2::digest::consts::U28;
use blake2::{Blake2b, Digest};

/// Blake2b-224 digest length in bytes
pub const KEY_HASH_LEN: usize = 28;

/// One-way hash applied to raw public key bytes
pub trait KeyHashFunction {
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

/// Blake2b with a 224-bit output, the ledger's key hash
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2b224;

impl KeyHashFunction for Blake2b224 {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Blake2b::<U28>::digest(data).to_vec()
    }
}

/// Turns hex public keys into hex key hashes
#[derive(Debug, Clone, Default)]
pub struct KeyHasher<H = Blake2b224> {
    hash_fn: H,
}

impl<H: KeyHashFunction> KeyHasher<H> {
    pub fn new(hash_fn: H) -> Self {
        KeyHasher { hash_fn }
    }

    /// Hash a hex-encoded public key, returning the digest as lowercase hex
    pub fn digest(&self, pub_key_hex: &str) -> Result<String, WasmCardanoError> {
        let key = parse_public_key_hex(pub_key_hex)?;
        Ok(hex::encode(self.hash_fn.hash(&key)))
    }
}

/// Hash a hex-encoded public key with Blake2b-224
pub fn hash_public_key(pub_key_hex: &str) -> Result<String, WasmCardanoError> {
    KeyHasher::new(Blake2b224).digest(pub_key_hex)
}

/// Validate and decode a public key given as hex
///
/// The key must be non-empty, of even length and use only hex digits.
pub fn parse_public_key_hex(pub_key_hex: &str) -> Result<Vec<u8>, WasmCardanoError> {
    if pub_key_hex.is_empty() {
        return Err(WasmCardanoError::InvalidKeyEncoding(
            "Public key is empty".to_string(),
        ));
    }
    if pub_key_hex.len() % 2 != 0 {
        return Err(WasmCardanoError::InvalidKeyEncoding(format!(
            "Odd number of hex digits: {}",
            pub_key_hex.len()
        )));
    }
    hex::decode(pub_key_hex)
        .map_err(|e| WasmCardanoError::InvalidKeyEncoding(format!("Invalid hex: {}", e)))
}
