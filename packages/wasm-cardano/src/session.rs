//! CIP-30 wallet session state machine
//!
//! The session never talks to a wallet itself. Each input (a user intent or
//! the settlement of a wallet call) produces the next session and the wallet
//! calls to perform, so the same machine can be driven from JS promises or
//! from a synchronous [`crate::provider::WalletProvider`].
//!
//! ```text
//! Disconnected -> Connecting(Enabling -> FetchingAddress -> FetchingStakeKeys) -> Connected
//! Connected -> Signing -> Connected
//! any -> Disconnected (disconnect)
//! ```
//!
//! Every reset starts a new generation. Effects carry the generation that
//! issued them and settlements must echo it back, so a wallet reply that
//! outlives its connection cannot be taken for a reply to a newer one.

use crate::address::display_address_from_hex;
use crate::error::WasmCardanoError;
use crate::key_hash::{Blake2b224, KeyHashFunction, KeyHasher};
use crate::types::{EnableRequest, SessionConfig};
use log::{debug, info, warn};
use serde::Serialize;

/// Progress through the connect sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStep {
    /// Waiting for `enable`
    Enabling,
    /// Waiting for `getChangeAddress`
    FetchingAddress,
    /// Waiting for `cip95.getRegisteredPubStakeKeys`
    FetchingStakeKeys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting(ConnectStep),
    Connected,
    Signing,
}

impl SessionState {
    pub fn name(self) -> &'static str {
        match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connecting(_) => "connecting",
            SessionState::Connected => "connected",
            SessionState::Signing => "signing",
        }
    }

    /// Whether a wallet call is outstanding
    pub fn is_pending(self) -> bool {
        matches!(self, SessionState::Connecting(_) | SessionState::Signing)
    }
}

/// Inputs accepted by [`WalletSession::step`]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    /// User asked to connect the named wallet
    Connect { wallet_name: String },
    /// User asked to disconnect
    Disconnect,
    /// User edited the payload to sign
    SetPayload(String),
    /// User asked to sign the current payload
    Submit,
    /// A wallet call issued in `generation` settled
    Settled {
        generation: u32,
        settlement: Settlement,
    },
}

/// Outcome of a wallet call
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// `enable` resolved
    Enabled,
    /// `getChangeAddress` resolved with a hex address
    ChangeAddress(String),
    /// `getRegisteredPubStakeKeys` resolved with hex keys
    RegisteredPubStakeKeys(Vec<String>),
    /// `signData` resolved
    Signed(serde_json::Value),
    /// The call rejected
    ProviderFailed(String),
}

/// Wallet call to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WalletCall {
    #[serde(rename_all = "camelCase")]
    Enable {
        wallet_name: String,
        request: EnableRequest,
    },
    GetChangeAddress,
    GetRegisteredPubStakeKeys,
    /// Sign `payload_hex` on behalf of `identity`
    #[serde(rename_all = "camelCase")]
    SignData {
        identity: String,
        payload_hex: String,
    },
}

/// Wallet call the driver must perform next, tagged with the issuing generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Effect {
    pub generation: u32,
    #[serde(flatten)]
    pub call: WalletCall,
}

impl Effect {
    /// Input reporting how this call settled
    pub fn settle(&self, settlement: Settlement) -> SessionInput {
        SessionInput::Settled {
            generation: self.generation,
            settlement,
        }
    }
}

/// Error shown to the user, in plain data form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCondition {
    pub code: &'static str,
    pub message: String,
}

impl From<&WasmCardanoError> for ErrorCondition {
    fn from(err: &WasmCardanoError) -> Self {
        ErrorCondition {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Everything the rendering layer needs to draw the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: &'static str,
    pub wallet_name: Option<String>,
    pub display_address: Option<String>,
    pub signing_identity: Option<String>,
    pub signature: Option<serde_json::Value>,
    pub payload: String,
    pub error: Option<ErrorCondition>,
}

/// Hex of the payload's UTF-8 bytes, the form `signData` expects
pub fn encode_payload_hex(payload: &str) -> String {
    hex::encode(payload.as_bytes())
}

#[derive(Debug, Clone)]
pub struct WalletSession<H = Blake2b224> {
    config: SessionConfig,
    hasher: KeyHasher<H>,
    state: SessionState,
    wallet_name: Option<String>,
    display_address: Option<String>,
    signing_identity: Option<String>,
    signature: Option<serde_json::Value>,
    payload: String,
    error: Option<WasmCardanoError>,
    generation: u32,
}

impl WalletSession {
    pub fn new(config: SessionConfig) -> Self {
        WalletSession::with_hasher(config, KeyHasher::new(Blake2b224))
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        WalletSession::new(SessionConfig::default())
    }
}

impl<H: KeyHashFunction + Clone> WalletSession<H> {
    /// Create a session that derives signing identities with a custom hash
    pub fn with_hasher(config: SessionConfig, hasher: KeyHasher<H>) -> Self {
        WalletSession {
            config,
            hasher,
            state: SessionState::Disconnected,
            wallet_name: None,
            display_address: None,
            signing_identity: None,
            signature: None,
            payload: String::new(),
            error: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn wallet_name(&self) -> Option<&str> {
        self.wallet_name.as_deref()
    }

    /// Bech32 change address of the connected wallet
    pub fn display_address(&self) -> Option<&str> {
        self.display_address.as_deref()
    }

    /// Hash of the first registered stake key
    pub fn signing_identity(&self) -> Option<&str> {
        self.signing_identity.as_deref()
    }

    /// Last `signData` response, unvalidated
    pub fn signature(&self) -> Option<&serde_json::Value> {
        self.signature.as_ref()
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Error recorded by the most recent failed input
    pub fn error(&self) -> Option<&WasmCardanoError> {
        self.error.as_ref()
    }

    /// Generation that settlements must carry to be accepted
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.name(),
            wallet_name: self.wallet_name.clone(),
            display_address: self.display_address.clone(),
            signing_identity: self.signing_identity.clone(),
            signature: self.signature.clone(),
            payload: self.payload.clone(),
            error: self.error.as_ref().map(ErrorCondition::from),
        }
    }

    /// Compute the session that follows `input`, and the wallet calls to make
    ///
    /// Failures do not escape: they are recorded in the returned session's
    /// [`error`](Self::error) and no effects are produced.
    pub fn step(&self, input: SessionInput) -> (Self, Vec<Effect>) {
        let (next, result) = self.advance(input);
        (next, result.unwrap_or_default())
    }

    /// Advance in place, returning the effects or the error this input caused
    pub fn apply(&mut self, input: SessionInput) -> Result<Vec<Effect>, WasmCardanoError> {
        let (next, result) = self.advance(input);
        *self = next;
        result
    }

    fn advance(&self, input: SessionInput) -> (Self, Result<Vec<Effect>, WasmCardanoError>) {
        let mut next = self.clone();
        let result = next.transition(input);
        if let Err(err) = &result {
            warn!("wallet session: {}", err);
            next.error = Some(err.clone());
        }
        (next, result)
    }

    fn transition(&mut self, input: SessionInput) -> Result<Vec<Effect>, WasmCardanoError> {
        debug!("wallet session {:?} <- {:?}", self.state, input);

        if let SessionInput::Settled { generation, .. } = &input {
            if *generation != self.generation {
                // Reply to a call issued before the last reset
                debug!(
                    "dropping wallet response from generation {} (current {})",
                    generation, self.generation
                );
                return Ok(Vec::new());
            }
        }

        match (self.state, input) {
            (_, SessionInput::Disconnect) => {
                if let Some(name) = &self.wallet_name {
                    info!("{} disconnected", name);
                }
                self.reset();
                Ok(Vec::new())
            }

            (SessionState::Disconnected, SessionInput::Connect { wallet_name }) => {
                self.error = None;
                self.wallet_name = Some(wallet_name.clone());
                self.state = SessionState::Connecting(ConnectStep::Enabling);
                Ok(vec![self.effect(WalletCall::Enable {
                    wallet_name,
                    request: self.config.enable_request(),
                })])
            }

            (SessionState::Connected | SessionState::Signing, SessionInput::SetPayload(text)) => {
                self.payload = text;
                Ok(Vec::new())
            }

            (SessionState::Connected, SessionInput::Submit) => {
                let identity = self.signing_identity.clone().ok_or_else(|| {
                    WasmCardanoError::InvalidState("connected without a signing identity".into())
                })?;
                self.error = None;
                self.signature = None;
                self.state = SessionState::Signing;
                Ok(vec![self.effect(WalletCall::SignData {
                    identity,
                    payload_hex: encode_payload_hex(&self.payload),
                })])
            }

            (state, SessionInput::Settled { settlement, .. }) => self.settle(state, settlement),

            (state, input) => Err(WasmCardanoError::InvalidState(format!(
                "{:?} is not accepted while {}",
                input,
                state.name()
            ))),
        }
    }

    /// Apply the outcome of a call from the current generation
    fn settle(
        &mut self,
        state: SessionState,
        settlement: Settlement,
    ) -> Result<Vec<Effect>, WasmCardanoError> {
        match (state, settlement) {
            (SessionState::Connecting(ConnectStep::Enabling), Settlement::Enabled) => {
                self.state = SessionState::Connecting(ConnectStep::FetchingAddress);
                Ok(vec![self.effect(WalletCall::GetChangeAddress)])
            }

            (
                SessionState::Connecting(ConnectStep::FetchingAddress),
                Settlement::ChangeAddress(hex),
            ) => {
                let address = display_address_from_hex(&hex, self.config.network_convention)
                    .inspect_err(|_| self.reset())?;
                self.display_address = Some(address);
                self.state = SessionState::Connecting(ConnectStep::FetchingStakeKeys);
                Ok(vec![self.effect(WalletCall::GetRegisteredPubStakeKeys)])
            }

            (
                SessionState::Connecting(ConnectStep::FetchingStakeKeys),
                Settlement::RegisteredPubStakeKeys(keys),
            ) => {
                // Provider order is kept: the first key is the identity
                let Some(first) = keys.first() else {
                    self.reset();
                    return Err(WasmCardanoError::NoRegisteredKeys);
                };
                let identity = self.hasher.digest(first).inspect_err(|_| self.reset())?;
                self.signing_identity = Some(identity);
                self.state = SessionState::Connected;
                if let Some(name) = &self.wallet_name {
                    info!("{} enabled", name);
                }
                Ok(Vec::new())
            }

            (SessionState::Signing, Settlement::Signed(signature)) => {
                info!("payload signed");
                self.signature = Some(signature);
                self.state = SessionState::Connected;
                Ok(Vec::new())
            }

            (SessionState::Connecting(_), Settlement::ProviderFailed(reason)) => {
                self.reset();
                Err(WasmCardanoError::ProviderRejected(reason))
            }

            (SessionState::Signing, Settlement::ProviderFailed(reason)) => {
                self.state = SessionState::Connected;
                Err(WasmCardanoError::SigningFailed(reason))
            }

            (state, settlement) => Err(WasmCardanoError::InvalidState(format!(
                "{:?} is not accepted while {}",
                settlement,
                state.name()
            ))),
        }
    }

    fn effect(&self, call: WalletCall) -> Effect {
        Effect {
            generation: self.generation,
            call,
        }
    }

    /// Back to a fresh disconnected session, keeping only configuration
    ///
    /// Starts a new generation, orphaning any call still in flight.
    fn reset(&mut self) {
        self.state = SessionState::Disconnected;
        self.wallet_name = None;
        self.display_address = None;
        self.signing_identity = None;
        self.signature = None;
        self.payload.clear();
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::NetworkIdConvention;
    use serde_json::json;

    const CHANGE_ADDRESS: &str = "00abcd";
    const STAKE_KEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const STAKE_KEY_HASH: &str = "35dedd2982a03cf39e7dce03c839994ffdec2ec6b04f1cf2d40e61a3";

    fn settled(session: &WalletSession, settlement: Settlement) -> SessionInput {
        SessionInput::Settled {
            generation: session.generation(),
            settlement,
        }
    }

    fn connect(session: &mut WalletSession, wallet_name: &str) -> Vec<Effect> {
        session
            .apply(SessionInput::Connect {
                wallet_name: wallet_name.into(),
            })
            .unwrap()
    }

    /// Connect and settle `enable` and `getChangeAddress`
    fn fetching_stake_keys() -> WalletSession {
        let mut session = WalletSession::default();
        connect(&mut session, "nami");
        session
            .apply(settled(&session, Settlement::Enabled))
            .unwrap();
        session
            .apply(settled(
                &session,
                Settlement::ChangeAddress(CHANGE_ADDRESS.into()),
            ))
            .unwrap();
        session
    }

    fn connected_session() -> WalletSession {
        let mut session = fetching_stake_keys();
        session
            .apply(settled(
                &session,
                Settlement::RegisteredPubStakeKeys(vec![STAKE_KEY.into()]),
            ))
            .unwrap();
        session
    }

    #[test]
    fn test_connect_sequence() {
        let session = WalletSession::default();

        let (session, effects) = session.step(SessionInput::Connect {
            wallet_name: "nami".into(),
        });
        assert_eq!(
            session.state(),
            SessionState::Connecting(ConnectStep::Enabling)
        );
        assert_eq!(
            effects,
            vec![Effect {
                generation: 0,
                call: WalletCall::Enable {
                    wallet_name: "nami".into(),
                    request: SessionConfig::default().enable_request(),
                },
            }]
        );

        let (session, effects) = session.step(effects[0].settle(Settlement::Enabled));
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].call, WalletCall::GetChangeAddress);

        let (session, effects) =
            session.step(effects[0].settle(Settlement::ChangeAddress(CHANGE_ADDRESS.into())));
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].call, WalletCall::GetRegisteredPubStakeKeys);
        assert_eq!(session.display_address(), Some("addr1qz4u6054jzp"));

        let (session, effects) = session.step(effects[0].settle(
            Settlement::RegisteredPubStakeKeys(vec![STAKE_KEY.into(), "00".repeat(32)]),
        ));
        assert!(effects.is_empty());
        assert_eq!(session.state(), SessionState::Connected);
        assert_eq!(session.signing_identity(), Some(STAKE_KEY_HASH));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_step_leaves_session_untouched() {
        let session = WalletSession::default();
        let (next, _) = session.step(SessionInput::Connect {
            wallet_name: "eternl".into(),
        });
        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(next.wallet_name(), Some("eternl"));
    }

    #[test]
    fn test_no_registered_keys() {
        let mut session = fetching_stake_keys();

        let err = session
            .apply(settled(
                &session,
                Settlement::RegisteredPubStakeKeys(vec![]),
            ))
            .unwrap_err();
        assert_eq!(err, WasmCardanoError::NoRegisteredKeys);
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(session.signing_identity().is_none());
        assert_eq!(session.error(), Some(&WasmCardanoError::NoRegisteredKeys));

        // Signing is impossible from here
        assert!(matches!(
            session.apply(SessionInput::Submit),
            Err(WasmCardanoError::InvalidState(_))
        ));
    }

    #[test]
    fn test_enable_rejected() {
        let session = WalletSession::default();
        let (session, _) = session.step(SessionInput::Connect {
            wallet_name: "nami".into(),
        });
        let (session, effects) = session.step(settled(
            &session,
            Settlement::ProviderFailed("user declined access".into()),
        ));
        assert!(effects.is_empty());
        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(
            session.error(),
            Some(&WasmCardanoError::ProviderRejected(
                "user declined access".into()
            ))
        );

        // Recoverable: a new connect clears the error
        let (session, effects) = session.step(SessionInput::Connect {
            wallet_name: "nami".into(),
        });
        assert_eq!(effects.len(), 1);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_malformed_change_address() {
        let mut session = WalletSession::default();
        connect(&mut session, "nami");
        session
            .apply(settled(&session, Settlement::Enabled))
            .unwrap();
        let err = session
            .apply(settled(&session, Settlement::ChangeAddress(String::new())))
            .unwrap_err();
        assert!(matches!(err, WasmCardanoError::MalformedAddress(_)));
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(session.display_address().is_none());
    }

    #[test]
    fn test_invalid_stake_key() {
        let mut session = fetching_stake_keys();
        let err = session
            .apply(settled(
                &session,
                Settlement::RegisteredPubStakeKeys(vec!["abc".into()]),
            ))
            .unwrap_err();
        assert!(matches!(err, WasmCardanoError::InvalidKeyEncoding(_)));
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_sign_payload() {
        let mut session = connected_session();
        session
            .apply(SessionInput::SetPayload("hello".into()))
            .unwrap();

        let effects = session.apply(SessionInput::Submit).unwrap();
        assert_eq!(
            effects,
            vec![Effect {
                generation: session.generation(),
                call: WalletCall::SignData {
                    identity: STAKE_KEY_HASH.into(),
                    payload_hex: "68656c6c6f".into(),
                },
            }]
        );
        assert_eq!(session.state(), SessionState::Signing);

        let signature = json!({ "signature": "84582aa201276761", "key": "a4010103272006" });
        session
            .apply(effects[0].settle(Settlement::Signed(signature.clone())))
            .unwrap();
        assert_eq!(session.state(), SessionState::Connected);
        assert_eq!(session.signature(), Some(&signature));
    }

    #[test]
    fn test_signing_failure_is_not_fatal() {
        let mut session = connected_session();
        let effects = session.apply(SessionInput::Submit).unwrap();
        let err = session
            .apply(effects[0].settle(Settlement::ProviderFailed("user declined".into())))
            .unwrap_err();
        assert_eq!(err, WasmCardanoError::SigningFailed("user declined".into()));
        assert_eq!(session.state(), SessionState::Connected);
        assert_eq!(session.signing_identity(), Some(STAKE_KEY_HASH));

        // Can retry
        assert_eq!(session.apply(SessionInput::Submit).unwrap().len(), 1);
    }

    #[test]
    fn test_one_outstanding_call() {
        let mut session = connected_session();
        session.apply(SessionInput::Submit).unwrap();
        assert!(matches!(
            session.apply(SessionInput::Submit),
            Err(WasmCardanoError::InvalidState(_))
        ));
        assert!(matches!(
            session.apply(SessionInput::Connect {
                wallet_name: "nami".into()
            }),
            Err(WasmCardanoError::InvalidState(_))
        ));
        assert_eq!(session.state(), SessionState::Signing);
    }

    #[test]
    fn test_out_of_order_settlement() {
        let mut session = WalletSession::default();
        connect(&mut session, "nami");
        let err = session
            .apply(settled(
                &session,
                Settlement::ChangeAddress(CHANGE_ADDRESS.into()),
            ))
            .unwrap_err();
        assert!(matches!(err, WasmCardanoError::InvalidState(_)));
        assert_eq!(
            session.state(),
            SessionState::Connecting(ConnectStep::Enabling)
        );
    }

    #[test]
    fn test_disconnect_clears_everything() {
        let mut session = connected_session();
        session
            .apply(SessionInput::SetPayload("hello".into()))
            .unwrap();
        let effects = session.apply(SessionInput::Submit).unwrap();
        session
            .apply(effects[0].settle(Settlement::Signed(json!("signature"))))
            .unwrap();

        session.apply(SessionInput::Disconnect).unwrap();
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(session.wallet_name().is_none());
        assert!(session.display_address().is_none());
        assert!(session.signing_identity().is_none());
        assert!(session.signature().is_none());
        assert_eq!(session.payload(), "");
        assert!(session.error().is_none());
    }

    #[test]
    fn test_disconnect_starts_new_generation() {
        let mut session = WalletSession::default();
        assert_eq!(session.generation(), 0);
        connect(&mut session, "nami");
        session.apply(SessionInput::Disconnect).unwrap();
        assert_eq!(session.generation(), 1);
        assert_eq!(connect(&mut session, "nami")[0].generation, 1);
    }

    #[test]
    fn test_stale_settlement_after_disconnect() {
        let mut session = WalletSession::default();
        let effects = connect(&mut session, "nami");
        session.apply(SessionInput::Disconnect).unwrap();

        let effects = session
            .apply(effects[0].settle(Settlement::Enabled))
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_stale_settlement_after_reconnect() {
        let mut session = connected_session();
        let sign = session.apply(SessionInput::Submit).unwrap().remove(0);
        session.apply(SessionInput::Disconnect).unwrap();
        let enable = connect(&mut session, "eternl").remove(0);
        let pending = SessionState::Connecting(ConnectStep::Enabling);

        // The old signData reply lands while the new wallet is enabling
        for late in [
            Settlement::Signed(json!("signature")),
            Settlement::ProviderFailed("user declined".into()),
            Settlement::Enabled,
        ] {
            let effects = session.apply(sign.settle(late)).unwrap();
            assert!(effects.is_empty());
            assert_eq!(session.state(), pending);
            assert_eq!(session.wallet_name(), Some("eternl"));
            assert!(session.signature().is_none());
            assert!(session.error().is_none());
        }

        // The new connection still completes
        let effects = session
            .apply(enable.settle(Settlement::Enabled))
            .unwrap();
        assert_eq!(effects[0].call, WalletCall::GetChangeAddress);
    }

    #[test]
    fn test_configured_network_convention() {
        let config = SessionConfig {
            network_convention: NetworkIdConvention::Cip19,
            ..SessionConfig::default()
        };
        let mut session = WalletSession::new(config);
        connect(&mut session, "nami");
        session
            .apply(settled(&session, Settlement::Enabled))
            .unwrap();
        session
            .apply(settled(&session, Settlement::ChangeAddress("01abcd".into())))
            .unwrap();
        assert!(session.display_address().unwrap().starts_with("addr1"));
    }

    #[test]
    fn test_snapshot_shape() {
        let session = connected_session();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["state"], "connected");
        assert_eq!(json["walletName"], "nami");
        assert_eq!(json["displayAddress"], "addr1qz4u6054jzp");
        assert_eq!(json["signingIdentity"], STAKE_KEY_HASH);
        assert!(json["error"].is_null());
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect {
            generation: 3,
            call: WalletCall::SignData {
                identity: "ab".into(),
                payload_hex: "cd".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&effect).unwrap(),
            json!({ "generation": 3, "type": "signData", "identity": "ab", "payloadHex": "cd" })
        );
        let effect = Effect {
            generation: 0,
            call: WalletCall::GetChangeAddress,
        };
        assert_eq!(
            serde_json::to_value(&effect).unwrap(),
            json!({ "generation": 0, "type": "getChangeAddress" })
        );
    }
}
