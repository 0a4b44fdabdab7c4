//! Replay a wallet session against canned provider responses

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_cardano::{ScriptedProvider, SessionConfig, SessionDriver, SessionSnapshot, WalletSession};

use crate::network::ConventionArg;

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Connect to a scripted wallet and optionally sign a payload
    Run {
        /// JSON file with changeAddress, registeredPubStakeKeys, signature, rejectEnable
        #[arg(short, long)]
        fixture: PathBuf,
        /// Wallet name passed to enable
        #[arg(short, long, default_value = "fixture")]
        wallet: String,
        /// Text to sign once connected
        #[arg(short, long)]
        payload: Option<String>,
        #[arg(short, long, value_enum, default_value_t)]
        convention: ConventionArg,
    },
}

pub fn handle_command(command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Run {
            fixture,
            wallet,
            payload,
            convention,
        } => {
            let config = SessionConfig {
                network_convention: convention.into(),
                ..SessionConfig::default()
            };
            let snapshot = run_fixture(&fixture, &wallet, payload.as_deref(), config)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
    }
}

/// Drive a session against the fixture, returning its final snapshot
///
/// Session errors are reported in the snapshot; only I/O and fixture
/// problems fail the command.
pub fn run_fixture(
    fixture: &Path,
    wallet: &str,
    payload: Option<&str>,
    config: SessionConfig,
) -> Result<SessionSnapshot> {
    let json = std::fs::read_to_string(fixture)
        .with_context(|| format!("Failed to read fixture {}", fixture.display()))?;
    let provider = ScriptedProvider::from_json(&json).context("Failed to load fixture")?;
    let mut driver = SessionDriver::with_session(WalletSession::new(config), provider);

    if let Err(err) = driver.connect(wallet) {
        log::warn!("connect failed: {}", err);
        return Ok(driver.session().snapshot());
    }

    if let Some(payload) = payload {
        driver.set_payload(payload)?;
        if let Err(err) = driver.submit() {
            log::warn!("signing failed: {}", err);
        }
    }
    Ok(driver.session().snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_run_signing_fixture() -> Result<(), Box<dyn std::error::Error>> {
        let snapshot = run_fixture(
            &fixture("signing_wallet.json"),
            "nami",
            Some("hello"),
            SessionConfig::default(),
        )?;
        assert_eq!(snapshot.state, "connected");
        assert_eq!(snapshot.display_address.as_deref(), Some("addr1qz4u6054jzp"));
        assert_eq!(
            snapshot.signing_identity.as_deref(),
            Some("35dedd2982a03cf39e7dce03c839994ffdec2ec6b04f1cf2d40e61a3")
        );
        assert!(snapshot.signature.is_some());
        assert!(snapshot.error.is_none());
        Ok(())
    }

    #[test]
    fn test_run_fixture_without_keys() -> Result<(), Box<dyn std::error::Error>> {
        let snapshot = run_fixture(
            &fixture("no_stake_keys.json"),
            "nami",
            Some("hello"),
            SessionConfig::default(),
        )?;
        assert_eq!(snapshot.state, "disconnected");
        assert!(snapshot.signing_identity.is_none());
        assert_eq!(
            snapshot.error.map(|e| e.code),
            Some("no_registered_keys")
        );
        Ok(())
    }

    #[test]
    fn test_missing_fixture_fails() {
        let result = run_fixture(
            &fixture("does_not_exist.json"),
            "nami",
            None,
            SessionConfig::default(),
        );
        assert!(result.is_err());
    }
}
