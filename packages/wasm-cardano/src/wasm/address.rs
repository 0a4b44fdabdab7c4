//! WASM bindings for address and key codecs

use crate::address::{
    decode_address_hex, decode_address_with, display_address_from_hex, parse_bech32_address,
    NetworkIdConvention,
};
use crate::key_hash::hash_public_key;
use crate::wasm::try_into_js_value::TryIntoJsValue;
use crate::WasmCardanoError;
use wasm_bindgen::prelude::*;

/// Namespace for address operations
#[wasm_bindgen]
pub struct AddressNamespace;

#[wasm_bindgen]
impl AddressNamespace {
    /// Decode raw address bytes into `{ header, networkId, networkTag, kind, payload }`
    ///
    /// # Arguments
    /// * `bytes` - Raw address bytes
    /// * `cip19` - Map network id 1 to mainnet (default maps 0 to mainnet)
    #[wasm_bindgen(js_name = decodeAddress)]
    pub fn decode_address(bytes: &[u8], cip19: Option<bool>) -> Result<JsValue, JsValue> {
        let decoded = decode_address_with(bytes, convention(cip19))?;
        Ok(decoded.try_to_js_value()?)
    }

    /// Decode a hex address, as returned by `getChangeAddress`
    #[wasm_bindgen(js_name = decodeAddressHex)]
    pub fn decode_address_hex(hex: &str, cip19: Option<bool>) -> Result<JsValue, JsValue> {
        let decoded = decode_address_hex(hex, convention(cip19))?;
        Ok(decoded.try_to_js_value()?)
    }

    /// Hex address to bech32 display string (`addr1...` / `addr_test1...`)
    #[wasm_bindgen(js_name = toDisplayAddress)]
    pub fn to_display_address(hex: &str, cip19: Option<bool>) -> Result<String, WasmCardanoError> {
        display_address_from_hex(hex, convention(cip19))
    }

    /// Parse a bech32 display address back to hex bytes
    #[wasm_bindgen(js_name = parseAddress)]
    pub fn parse_address(address: &str, cip19: Option<bool>) -> Result<String, WasmCardanoError> {
        let decoded = parse_bech32_address(address, convention(cip19))?;
        Ok(hex::encode(decoded.to_bytes()))
    }
}

/// Namespace for public key operations
#[wasm_bindgen]
pub struct KeyNamespace;

#[wasm_bindgen]
impl KeyNamespace {
    /// Blake2b-224 hash of a hex public key, as lowercase hex
    #[wasm_bindgen(js_name = hashPublicKey)]
    pub fn hash_public_key(pub_key_hex: &str) -> Result<String, WasmCardanoError> {
        hash_public_key(pub_key_hex)
    }
}

fn convention(cip19: Option<bool>) -> NetworkIdConvention {
    if cip19.unwrap_or(false) {
        NetworkIdConvention::Cip19
    } else {
        NetworkIdConvention::ZeroIsMainnet
    }
}
