use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_cardano::hash_public_key;
use wasm_cardano::session::encode_payload_hex;

#[derive(Subcommand)]
pub enum KeyCommand {
    /// Blake2b-224 hash of a hex public key (the signing identity)
    Hash {
        /// Public key as hex
        public_key: String,
    },
}

#[derive(Subcommand)]
pub enum PayloadCommand {
    /// Hex of the payload's UTF-8 bytes, as passed to signData
    Hex {
        /// Text to sign
        text: String,
    },
}

pub fn handle_key_command(command: KeyCommand) -> Result<()> {
    match command {
        KeyCommand::Hash { public_key } => {
            let digest = hash_public_key(&public_key).context("Failed to hash public key")?;
            println!("{}", digest);
            Ok(())
        }
    }
}

pub fn handle_payload_command(command: PayloadCommand) -> Result<()> {
    match command {
        PayloadCommand::Hex { text } => {
            println!("{}", encode_payload_hex(&text));
            Ok(())
        }
    }
}
