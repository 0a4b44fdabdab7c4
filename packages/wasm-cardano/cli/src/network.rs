//! Network convention argument type for CLI commands

use clap::ValueEnum;
use wasm_cardano::NetworkIdConvention;

/// How the header network id maps to the `addr`/`addr_test` prefix
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConventionArg {
    /// Network id 0 is mainnet (wallet front-end behaviour)
    #[default]
    Zero,
    /// Network id 1 is mainnet (CIP-19)
    Cip19,
}

impl From<ConventionArg> for NetworkIdConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Zero => NetworkIdConvention::ZeroIsMainnet,
            ConventionArg::Cip19 => NetworkIdConvention::Cip19,
        }
    }
}
