//! Wallet provider capability and the synchronous effect driver
//!
//! [`WalletProvider`] is the subset of CIP-30 (plus the CIP-95 stake key
//! call) a session needs. [`SessionDriver`] performs the effects a
//! [`WalletSession`] emits against a provider until the session settles.

use crate::error::WasmCardanoError;
use crate::key_hash::{Blake2b224, KeyHashFunction};
use crate::session::{Effect, SessionInput, Settlement, WalletCall, WalletSession};
use crate::types::EnableRequest;
use serde::Deserialize;

/// Rejection reason reported by a wallet
pub type ProviderError = String;

/// CIP-30 wallet operations used by a session
pub trait WalletProvider {
    /// `cardano[walletName].enable({ extensions })`
    fn enable(&mut self, wallet_name: &str, request: &EnableRequest) -> Result<(), ProviderError>;

    /// `api.getChangeAddress()`, hex-encoded address bytes
    fn get_change_address(&mut self) -> Result<String, ProviderError>;

    /// `api.cip95.getRegisteredPubStakeKeys()`, hex-encoded keys
    fn get_registered_pub_stake_keys(&mut self) -> Result<Vec<String>, ProviderError>;

    /// `api.cip95.signData(identity, payloadHex)`
    fn sign_data(
        &mut self,
        identity: &str,
        payload_hex: &str,
    ) -> Result<serde_json::Value, ProviderError>;
}

/// Perform one effect, returning the settlement to feed back into the session
pub fn perform<P: WalletProvider + ?Sized>(provider: &mut P, effect: &Effect) -> SessionInput {
    let settled = match &effect.call {
        WalletCall::Enable {
            wallet_name,
            request,
        } => provider
            .enable(wallet_name, request)
            .map(|()| Settlement::Enabled),
        WalletCall::GetChangeAddress => provider
            .get_change_address()
            .map(Settlement::ChangeAddress),
        WalletCall::GetRegisteredPubStakeKeys => provider
            .get_registered_pub_stake_keys()
            .map(Settlement::RegisteredPubStakeKeys),
        WalletCall::SignData {
            identity,
            payload_hex,
        } => provider
            .sign_data(identity, payload_hex)
            .map(Settlement::Signed),
    };
    effect.settle(settled.unwrap_or_else(Settlement::ProviderFailed))
}

/// Runs a session against a provider, one call at a time
pub struct SessionDriver<P, H = Blake2b224> {
    session: WalletSession<H>,
    provider: P,
}

impl<P: WalletProvider> SessionDriver<P> {
    pub fn new(provider: P) -> Self {
        SessionDriver::with_session(WalletSession::default(), provider)
    }
}

impl<P: WalletProvider, H: KeyHashFunction + Clone> SessionDriver<P, H> {
    pub fn with_session(session: WalletSession<H>, provider: P) -> Self {
        SessionDriver { session, provider }
    }

    pub fn session(&self) -> &WalletSession<H> {
        &self.session
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_parts(self) -> (WalletSession<H>, P) {
        (self.session, self.provider)
    }

    /// Enable the wallet and derive the display address and signing identity
    pub fn connect(&mut self, wallet_name: &str) -> Result<(), WasmCardanoError> {
        self.run(SessionInput::Connect {
            wallet_name: wallet_name.to_string(),
        })
    }

    pub fn set_payload(&mut self, payload: &str) -> Result<(), WasmCardanoError> {
        self.run(SessionInput::SetPayload(payload.to_string()))
    }

    /// Ask the wallet to sign the current payload, returning its response
    pub fn submit(&mut self) -> Result<serde_json::Value, WasmCardanoError> {
        self.run(SessionInput::Submit)?;
        self.session.signature().cloned().ok_or_else(|| {
            WasmCardanoError::InvalidState("signing finished without a signature".into())
        })
    }

    pub fn disconnect(&mut self) {
        // Disconnect is accepted in every state and emits no effects
        let _ = self.session.apply(SessionInput::Disconnect);
    }

    /// Feed `input`, then every settlement, until no effects remain
    fn run(&mut self, input: SessionInput) -> Result<(), WasmCardanoError> {
        let mut pending = self.session.apply(input)?;
        while let Some(effect) = pending.pop() {
            let settlement = perform(&mut self.provider, &effect);
            pending.extend(self.session.apply(settlement)?);
        }
        Ok(())
    }
}

/// Responses for a [`ScriptedProvider`], usually read from a JSON fixture
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderScript {
    /// Reason to reject `enable` with; accepts when absent
    #[serde(default)]
    pub reject_enable: Option<String>,
    pub change_address: String,
    #[serde(default)]
    pub registered_pub_stake_keys: Vec<String>,
    /// Response to `signData`; rejects when absent
    #[serde(default)]
    pub signature: Option<serde_json::Value>,
}

/// A call recorded by [`ScriptedProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Enable {
        wallet_name: String,
        request: EnableRequest,
    },
    GetChangeAddress,
    GetRegisteredPubStakeKeys,
    SignData {
        identity: String,
        payload_hex: String,
    },
}

/// Provider that replays canned responses and records every call
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: ProviderScript,
    calls: Vec<ProviderCall>,
}

impl ScriptedProvider {
    pub fn new(script: ProviderScript) -> Self {
        ScriptedProvider {
            script,
            calls: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, WasmCardanoError> {
        let script = serde_json::from_str(json)
            .map_err(|e| WasmCardanoError::InvalidInput(format!("Invalid provider script: {}", e)))?;
        Ok(ScriptedProvider::new(script))
    }

    pub fn calls(&self) -> &[ProviderCall] {
        &self.calls
    }
}

impl WalletProvider for ScriptedProvider {
    fn enable(&mut self, wallet_name: &str, request: &EnableRequest) -> Result<(), ProviderError> {
        self.calls.push(ProviderCall::Enable {
            wallet_name: wallet_name.to_string(),
            request: request.clone(),
        });
        match &self.script.reject_enable {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }

    fn get_change_address(&mut self) -> Result<String, ProviderError> {
        self.calls.push(ProviderCall::GetChangeAddress);
        Ok(self.script.change_address.clone())
    }

    fn get_registered_pub_stake_keys(&mut self) -> Result<Vec<String>, ProviderError> {
        self.calls.push(ProviderCall::GetRegisteredPubStakeKeys);
        Ok(self.script.registered_pub_stake_keys.clone())
    }

    fn sign_data(
        &mut self,
        identity: &str,
        payload_hex: &str,
    ) -> Result<serde_json::Value, ProviderError> {
        self.calls.push(ProviderCall::SignData {
            identity: identity.to_string(),
            payload_hex: payload_hex.to_string(),
        });
        self.script
            .signature
            .clone()
            .ok_or_else(|| "user declined to sign".to_string())
    }
}
