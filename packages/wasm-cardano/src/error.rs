//! Error types for wasm-cardano

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-cardano operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmCardanoError {
    /// Address buffer too short to hold the header, or not valid hex/bech32
    MalformedAddress(String),
    /// Public key is not non-empty, even-length hex
    InvalidKeyEncoding(String),
    /// Wallet declined enablement or failed while connecting
    ProviderRejected(String),
    /// Wallet returned an empty registered stake key set
    NoRegisteredKeys,
    /// Wallet rejected or failed the signData call
    SigningFailed(String),
    /// Input does not fit the current session state
    InvalidState(String),
    /// Invalid input
    InvalidInput(String),
    /// Generic string error
    StringError(String),
}

impl WasmCardanoError {
    /// Stable machine-readable code, exposed to the UI in session snapshots
    pub fn code(&self) -> &'static str {
        match self {
            WasmCardanoError::MalformedAddress(_) => "malformed_address",
            WasmCardanoError::InvalidKeyEncoding(_) => "invalid_key_encoding",
            WasmCardanoError::ProviderRejected(_) => "provider_rejected",
            WasmCardanoError::NoRegisteredKeys => "no_registered_keys",
            WasmCardanoError::SigningFailed(_) => "signing_failed",
            WasmCardanoError::InvalidState(_) => "invalid_state",
            WasmCardanoError::InvalidInput(_) => "invalid_input",
            WasmCardanoError::StringError(_) => "error",
        }
    }
}

impl std::error::Error for WasmCardanoError {}

impl fmt::Display for WasmCardanoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmCardanoError::MalformedAddress(s) => write!(f, "Malformed address: {}", s),
            WasmCardanoError::InvalidKeyEncoding(s) => write!(f, "Invalid key encoding: {}", s),
            WasmCardanoError::ProviderRejected(s) => write!(f, "Wallet provider rejected: {}", s),
            WasmCardanoError::NoRegisteredKeys => write!(f, "No public stake keys registered"),
            WasmCardanoError::SigningFailed(s) => write!(f, "Signing failed: {}", s),
            WasmCardanoError::InvalidState(s) => write!(f, "Invalid session state: {}", s),
            WasmCardanoError::InvalidInput(s) => write!(f, "Invalid input: {}", s),
            WasmCardanoError::StringError(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for WasmCardanoError {
    fn from(s: &str) -> Self {
        WasmCardanoError::StringError(s.to_string())
    }
}

impl From<String> for WasmCardanoError {
    fn from(s: String) -> Self {
        WasmCardanoError::StringError(s)
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmCardanoError> for JsValue {
    fn from(err: WasmCardanoError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WasmCardanoError::MalformedAddress("empty buffer".to_string());
        assert_eq!(err.to_string(), "Malformed address: empty buffer");
        assert_eq!(
            WasmCardanoError::NoRegisteredKeys.to_string(),
            "No public stake keys registered"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WasmCardanoError::NoRegisteredKeys.code(), "no_registered_keys");
        assert_eq!(
            WasmCardanoError::SigningFailed("user declined".into()).code(),
            "signing_failed"
        );
    }

    #[test]
    fn test_from_str() {
        let err: WasmCardanoError = "test error".into();
        assert_eq!(err.to_string(), "test error");
    }
}
