//! Shared types for CIP-30 wallet sessions

use crate::address::NetworkIdConvention;
use serde::{Deserialize, Serialize};

/// CIP number of the governance extension (exposes registered stake keys)
pub const CIP95: u16 = 95;

/// CIP-30 extension identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub cip: u16,
}

/// Payload passed to `wallet.enable(...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableRequest {
    pub extensions: Vec<Extension>,
}

impl EnableRequest {
    /// Whether the request asks for the given CIP extension
    pub fn requires(&self, cip: u16) -> bool {
        self.extensions.iter().any(|ext| ext.cip == cip)
    }
}

/// Session configuration, supplied from JS as a plain object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Extensions declared during capability negotiation
    #[serde(default = "default_extensions")]
    pub extensions: Vec<Extension>,
    /// Mapping from header network id to display prefix
    #[serde(default)]
    pub network_convention: NetworkIdConvention,
}

fn default_extensions() -> Vec<Extension> {
    vec![Extension { cip: CIP95 }]
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            network_convention: NetworkIdConvention::default(),
        }
    }
}

impl SessionConfig {
    pub fn enable_request(&self) -> EnableRequest {
        EnableRequest {
            extensions: self.extensions.clone(),
        }
    }
}
