//! Rust to JavaScript value conversion
//!
//! `TryIntoJsValue` covers the address fields handed to JS as a typed
//! object; anything serde-shaped goes through [`to_js_value`].

use crate::address::{AddressKind, DecodedAddress, NetworkTag};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Error type for JS conversion failures
#[derive(Debug, Clone)]
pub struct JsConversionError(String);

impl JsConversionError {
    pub fn new(msg: &str) -> Self {
        JsConversionError(msg.to_string())
    }
}

impl std::fmt::Display for JsConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<JsConversionError> for JsValue {
    fn from(err: JsConversionError) -> Self {
        js_sys::Error::new(&err.0).into()
    }
}

/// Trait for converting Rust types to JavaScript values
pub trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError>;
}

impl TryIntoJsValue for u8 {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        Ok(JsValue::from_f64(*self as f64))
    }
}

impl TryIntoJsValue for NetworkTag {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        Ok(JsValue::from_str(self.as_str()))
    }
}

impl TryIntoJsValue for AddressKind {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        Ok(JsValue::from_str(self.as_str()))
    }
}

impl TryIntoJsValue for DecodedAddress {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        crate::js_obj!(
            "header" => self.header(),
            "networkId" => self.network_id(),
            "networkTag" => self.network_tag(),
            "kind" => self.kind(),
            "payload" => js_sys::Uint8Array::from(self.payload())
        )
    }
}

impl TryIntoJsValue for js_sys::Uint8Array {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        Ok(self.clone().into())
    }
}

/// Convert a serde value to a plain JS object
///
/// Maps become objects rather than `Map`s, so wallet responses round-trip
/// unchanged.
pub fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsConversionError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsConversionError::new(&format!("Serialization error: {}", e)))
}

/// Macro for building JavaScript objects
#[macro_export]
macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        use $crate::wasm::try_into_js_value::{TryIntoJsValue, JsConversionError};
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(
                &obj,
                &wasm_bindgen::JsValue::from_str($key),
                &TryIntoJsValue::try_to_js_value(&$value)?
            ).map_err(|_| JsConversionError::new(&format!("Failed to set property: {}", $key)))?;
        )*
        Ok::<wasm_bindgen::JsValue, JsConversionError>(obj.into())
    }};
}
