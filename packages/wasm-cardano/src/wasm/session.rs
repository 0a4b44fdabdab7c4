//! WASM bindings for the wallet session
//!
//! JS owns the wallet object. Every method that can start a wallet call
//! returns an array of effects such as
//! `{ generation, type: "enable", walletName, request }`; the caller performs
//! them (`await window.cardano[walletName].enable(request)`) and reports the
//! outcome through the matching `on*` method, passing the effect's
//! `generation` back. Outcomes from a generation that has since been
//! disconnected are ignored.

use crate::session::{SessionInput, Settlement, WalletSession};
use crate::types::SessionConfig;
use crate::wasm::try_into_js_value::to_js_value;
use crate::WasmCardanoError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmWalletSession {
    inner: WalletSession,
}

#[wasm_bindgen]
impl WasmWalletSession {
    /// Create a disconnected session
    ///
    /// # Arguments
    /// * `config` - Optional `{ extensions: [{ cip: 95 }], networkConvention: "zeroIsMainnet" | "cip19" }`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmWalletSession, WasmCardanoError> {
        let config = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| WasmCardanoError::InvalidInput(format!("Invalid config: {}", e)))?
        };
        Ok(WasmWalletSession {
            inner: WalletSession::new(config),
        })
    }

    /// Begin connecting to `window.cardano[walletName]`
    pub fn connect(&mut self, wallet_name: &str) -> Result<JsValue, JsValue> {
        self.apply(SessionInput::Connect {
            wallet_name: wallet_name.to_string(),
        })
    }

    pub fn disconnect(&mut self) -> Result<JsValue, JsValue> {
        self.apply(SessionInput::Disconnect)
    }

    #[wasm_bindgen(js_name = setPayload)]
    pub fn set_payload(&mut self, payload: &str) -> Result<JsValue, JsValue> {
        self.apply(SessionInput::SetPayload(payload.to_string()))
    }

    /// Request a signature over the current payload
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        self.apply(SessionInput::Submit)
    }

    #[wasm_bindgen(js_name = onEnabled)]
    pub fn on_enabled(&mut self, generation: u32) -> Result<JsValue, JsValue> {
        self.settle(generation, Settlement::Enabled)
    }

    #[wasm_bindgen(js_name = onChangeAddress)]
    pub fn on_change_address(
        &mut self,
        generation: u32,
        address_hex: &str,
    ) -> Result<JsValue, JsValue> {
        self.settle(
            generation,
            Settlement::ChangeAddress(address_hex.to_string()),
        )
    }

    #[wasm_bindgen(js_name = onRegisteredPubStakeKeys)]
    pub fn on_registered_pub_stake_keys(
        &mut self,
        generation: u32,
        keys: Vec<String>,
    ) -> Result<JsValue, JsValue> {
        self.settle(generation, Settlement::RegisteredPubStakeKeys(keys))
    }

    /// Store the `signData` response as-is
    #[wasm_bindgen(js_name = onSigned)]
    pub fn on_signed(&mut self, generation: u32, signature: JsValue) -> Result<JsValue, JsValue> {
        let signature: serde_json::Value = serde_wasm_bindgen::from_value(signature)
            .map_err(|e| WasmCardanoError::InvalidInput(format!("Invalid signature: {}", e)))?;
        self.settle(generation, Settlement::Signed(signature))
    }

    /// Report a rejected wallet call (a CIP-30 `APIError`, `Error` or string)
    #[wasm_bindgen(js_name = onProviderError)]
    pub fn on_provider_error(&mut self, generation: u32, error: JsValue) -> Result<JsValue, JsValue> {
        self.settle(
            generation,
            Settlement::ProviderFailed(describe_js_error(&error)),
        )
    }

    /// Generation the next effects will carry
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 {
        self.inner.generation()
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.inner.state().name().to_string()
    }

    /// True while a wallet call is outstanding
    #[wasm_bindgen(getter, js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.state().is_pending()
    }

    #[wasm_bindgen(getter, js_name = displayAddress)]
    pub fn display_address(&self) -> Option<String> {
        self.inner.display_address().map(str::to_string)
    }

    #[wasm_bindgen(getter, js_name = signingIdentity)]
    pub fn signing_identity(&self) -> Option<String> {
        self.inner.signing_identity().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn signature(&self) -> Result<JsValue, JsValue> {
        match self.inner.signature() {
            Some(signature) => Ok(to_js_value(signature)?),
            None => Ok(JsValue::undefined()),
        }
    }

    /// `{ state, walletName, displayAddress, signingIdentity, signature, payload, error }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.snapshot())?)
    }
}

impl WasmWalletSession {
    fn apply(&mut self, input: SessionInput) -> Result<JsValue, JsValue> {
        let effects = self.inner.apply(input)?;
        Ok(to_js_value(&effects)?)
    }

    fn settle(&mut self, generation: u32, settlement: Settlement) -> Result<JsValue, JsValue> {
        self.apply(SessionInput::Settled {
            generation,
            settlement,
        })
    }
}

/// Best-effort message for a rejected wallet promise
fn describe_js_error(error: &JsValue) -> String {
    if let Some(s) = error.as_string() {
        return s;
    }
    // CIP-30 APIError is `{ code, info }`, Error has `message`
    for key in ["info", "message"] {
        if let Ok(value) = js_sys::Reflect::get(error, &JsValue::from_str(key)) {
            if let Some(s) = value.as_string() {
                return s;
            }
        }
    }
    js_sys::JSON::stringify(error)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| "unknown wallet error".to_string())
}
