use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_cardano::{decode_address_hex, encode_address, parse_bech32_address, NetworkIdConvention};

use crate::network::ConventionArg;

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Decode a hex address and print its fields and bech32 form
    Decode {
        /// Raw address bytes as hex
        address: String,
        #[arg(short, long, value_enum, default_value_t)]
        convention: ConventionArg,
    },
    /// Parse a bech32 address back to hex bytes
    Parse {
        /// Bech32 address (addr1... or addr_test1...)
        address: String,
        #[arg(short, long, value_enum, default_value_t)]
        convention: ConventionArg,
    },
}

pub fn handle_command(command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Decode {
            address,
            convention,
        } => {
            let convention: NetworkIdConvention = convention.into();
            let decoded =
                decode_address_hex(&address, convention).context("Failed to decode address")?;
            let bech32 = encode_address(&decoded).context("Failed to encode address")?;
            println!("kind:    {}", decoded.kind().as_str());
            println!("network: {} (id {})", decoded.network_tag().as_str(), decoded.network_id());
            println!("payload: {}", hex::encode(decoded.payload()));
            println!("address: {}", bech32);
            Ok(())
        }
        AddressCommand::Parse {
            address,
            convention,
        } => {
            let decoded = parse_bech32_address(&address, convention.into())
                .context("Failed to parse bech32 address")?;
            println!("{}", hex::encode(decoded.to_bytes()));
            Ok(())
        }
    }
}
