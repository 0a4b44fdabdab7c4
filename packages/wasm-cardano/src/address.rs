//! Shelley address decoding and bech32 display encoding
//!
//! A raw address is a one-byte header followed by an opaque payload. The low
//! nibble of the header is the network id, the high nibble the address type
//! (CIP-19). Only the network id influences the encoded form, and only through
//! the human-readable prefix: both networks share the same bech32 data encoding.
//! See: https://cips.cardano.org/cip/CIP-19

use crate::error::WasmCardanoError;
use bech32::{Bech32, Hrp};
use serde::{Deserialize, Serialize};

/// Human-readable prefix for mainnet addresses
pub const MAINNET_PREFIX: &str = "addr";
/// Human-readable prefix for every other network
pub const TESTNET_PREFIX: &str = "addr_test";

/// Mandatory header length in bytes
const HEADER_LEN: usize = 1;

/// Network an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkTag {
    Mainnet,
    Testnet,
    Unknown,
}

impl NetworkTag {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkTag::Mainnet => "mainnet",
            NetworkTag::Testnet => "testnet",
            NetworkTag::Unknown => "unknown",
        }
    }

    /// Human-readable bech32 prefix for this network
    pub fn prefix(self) -> &'static str {
        match self {
            NetworkTag::Mainnet => MAINNET_PREFIX,
            NetworkTag::Testnet | NetworkTag::Unknown => TESTNET_PREFIX,
        }
    }
}

/// How the header's network id maps to a [`NetworkTag`]
///
/// `ZeroIsMainnet` matches the wallet front-end this crate backs; `Cip19`
/// follows the ledger, where network id 1 is mainnet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkIdConvention {
    #[default]
    ZeroIsMainnet,
    Cip19,
}

impl NetworkIdConvention {
    pub fn network_tag(self, network_id: u8) -> NetworkTag {
        match (self, network_id) {
            (NetworkIdConvention::ZeroIsMainnet, 0) | (NetworkIdConvention::Cip19, 1) => {
                NetworkTag::Mainnet
            }
            (NetworkIdConvention::ZeroIsMainnet, 1) | (NetworkIdConvention::Cip19, 0) => {
                NetworkTag::Testnet
            }
            _ => NetworkTag::Unknown,
        }
    }
}

/// Address type from the header's high nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressKind {
    Base,
    Pointer,
    Enterprise,
    Byron,
    Reward,
    Unknown,
}

impl AddressKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressKind::Base => "base",
            AddressKind::Pointer => "pointer",
            AddressKind::Enterprise => "enterprise",
            AddressKind::Byron => "byron",
            AddressKind::Reward => "reward",
            AddressKind::Unknown => "unknown",
        }
    }

    pub fn from_header(header: u8) -> Self {
        match header >> 4 {
            0..=3 => AddressKind::Base,
            4 | 5 => AddressKind::Pointer,
            6 | 7 => AddressKind::Enterprise,
            8 => AddressKind::Byron,
            14 | 15 => AddressKind::Reward,
            _ => AddressKind::Unknown,
        }
    }
}

/// A raw address split into header fields and payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedAddress {
    header: u8,
    network_tag: NetworkTag,
    kind: AddressKind,
    #[serde(with = "hex_bytes")]
    payload: Vec<u8>,
}

impl DecodedAddress {
    pub fn header(&self) -> u8 {
        self.header
    }

    /// Network id carried in the low nibble of the header
    pub fn network_id(&self) -> u8 {
        self.header & 0x0f
    }

    pub fn network_tag(&self) -> NetworkTag {
        self.network_tag
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Bytes following the header
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Header followed by payload, as supplied by the wallet
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.payload.len());
        bytes.push(self.header);
        bytes.extend_from_slice(&self.payload);
        bytes
    }
}

/// Decode a raw address using the default network id convention
pub fn decode_address(raw: &[u8]) -> Result<DecodedAddress, WasmCardanoError> {
    decode_address_with(raw, NetworkIdConvention::default())
}

/// Decode a raw address
///
/// Fails only when the buffer cannot hold the header. Unrecognised network ids
/// decode to [`NetworkTag::Unknown`].
pub fn decode_address_with(
    raw: &[u8],
    convention: NetworkIdConvention,
) -> Result<DecodedAddress, WasmCardanoError> {
    let (&header, payload) = raw.split_first().ok_or_else(|| {
        WasmCardanoError::MalformedAddress(format!(
            "expected at least {} header byte, got {}",
            HEADER_LEN,
            raw.len()
        ))
    })?;

    Ok(DecodedAddress {
        header,
        network_tag: convention.network_tag(header & 0x0f),
        kind: AddressKind::from_header(header),
        payload: payload.to_vec(),
    })
}

/// Decode a hex-encoded raw address (the form CIP-30 wallets return)
pub fn decode_address_hex(
    hex: &str,
    convention: NetworkIdConvention,
) -> Result<DecodedAddress, WasmCardanoError> {
    let bytes = hex::decode(hex)
        .map_err(|e| WasmCardanoError::MalformedAddress(format!("Invalid hex: {}", e)))?;
    decode_address_with(&bytes, convention)
}

/// Encode a decoded address as bech32 with its network prefix
///
/// The only failure is bech32's overall length limit, which no ledger address
/// comes near.
pub fn encode_address(address: &DecodedAddress) -> Result<String, WasmCardanoError> {
    let hrp = Hrp::parse(address.network_tag.prefix())
        .map_err(|e| WasmCardanoError::StringError(format!("Invalid prefix: {}", e)))?;
    bech32::encode::<Bech32>(hrp, &address.to_bytes())
        .map_err(|e| WasmCardanoError::MalformedAddress(format!("Bech32 encoding failed: {}", e)))
}

/// Hex change address to display string, as done when a session connects
pub fn display_address_from_hex(
    hex: &str,
    convention: NetworkIdConvention,
) -> Result<String, WasmCardanoError> {
    let decoded = decode_address_hex(hex, convention)?;
    encode_address(&decoded)
}

/// Parse a bech32 display address back into its decoded form
pub fn parse_bech32_address(
    address: &str,
    convention: NetworkIdConvention,
) -> Result<DecodedAddress, WasmCardanoError> {
    let (hrp, data) = bech32::decode(address)
        .map_err(|e| WasmCardanoError::MalformedAddress(format!("Invalid bech32: {}", e)))?;

    let prefix = hrp.as_str().to_ascii_lowercase();
    if prefix != MAINNET_PREFIX && prefix != TESTNET_PREFIX {
        return Err(WasmCardanoError::MalformedAddress(format!(
            "Unexpected prefix: {}",
            prefix
        )));
    }

    let decoded = decode_address_with(&data, convention)?;
    if decoded.network_tag.prefix() != prefix {
        return Err(WasmCardanoError::MalformedAddress(format!(
            "Prefix {} does not match network id {}",
            prefix,
            decoded.network_id()
        )));
    }
    Ok(decoded)
}

mod hex_bytes {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }
}
