use anyhow::Result;
use clap::{Parser, Subcommand};

mod address;
mod key;
mod network;
mod session;

#[derive(Parser)]
#[command(name = "wasm-cardano-cli")]
#[command(about = "Inspect Cardano addresses, key hashes and wallet sessions")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Address decoding and encoding
    #[command(subcommand)]
    Address(address::AddressCommand),
    /// Public key operations
    #[command(subcommand)]
    Key(key::KeyCommand),
    /// Signing payload encoding
    #[command(subcommand)]
    Payload(key::PayloadCommand),
    /// Wallet session replay
    #[command(subcommand)]
    Session(session::SessionCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Address(cmd) => address::handle_command(cmd),
        Commands::Key(cmd) => key::handle_key_command(cmd),
        Commands::Payload(cmd) => key::handle_payload_command(cmd),
        Commands::Session(cmd) => session::handle_command(cmd),
    }
}
