// Copyright (c) 2026 BCO Contributors. MIT License.
// See LICENSE for details.

//! # BCO Ledger Node
//!
//! Entry point for the `bco-node` binary — the host-ledger stand-in for
//! the offset registry. Each invocation plays one signed transaction:
//! the caller's address comes from `--caller` (where a real substrate
//! would resolve it from a signature), the operation runs against the
//! JSON state file, and the file is rewritten only when the operation
//! succeeds.
//!
//! Subcommands:
//!
//! - `init`    — create the data directory and the admin's holder
//! - `mint`    — mint credits to an account (admin only)
//! - `burn`    — retire credits from the caller's balance
//! - `balance` / `supply` / `events` — read-only queries
//! - `version` — print build version information

mod cli;
mod logging;
mod state;

use anyhow::{bail, Context, Result};
use clap::Parser;

use bco_ledger::config::{ADDRESS_BYTE_LENGTH, ADDRESS_PREFIX, LEDGER_VERSION};

use cli::{BcoNodeCli, Commands};
use logging::LogFormat;
use state::NodeState;

fn main() -> Result<()> {
    let cli = BcoNodeCli::parse();
    logging::init_logging(
        "bco_node=info,bco_ledger=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Init(args) => init_ledger(args),
        Commands::Mint(args) => mint(args),
        Commands::Burn(args) => burn(args),
        Commands::Balance(args) => query_balance(args),
        Commands::Supply(args) => query_supply(args),
        Commands::Events(args) => query_events(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Creates the data directory and state file and publishes the admin's
/// holder resource with the initial supply.
fn init_ledger(args: cli::InitArgs) -> Result<()> {
    let path = NodeState::file_path(&args.data_dir);
    if path.exists() {
        bail!("ledger already initialized: state file exists at {}", path.display());
    }

    let admin = args.admin.unwrap_or_else(generate_address);
    tracing::info!(data_dir = %args.data_dir.display(), admin = %admin, "initializing ledger");

    let mut state = NodeState::new();
    let balance = state
        .ledger
        .initialize(&admin, args.supply)
        .context("initialize failed")?;
    state.save(&args.data_dir)?;

    println!("Ledger initialized.");
    println!("  Data directory : {}", args.data_dir.display());
    println!("  Admin address  : {}", admin);
    println!("  Initial supply : {}", balance);
    Ok(())
}

/// Runs one mint transaction and persists the state on success.
fn mint(args: cli::MintArgs) -> Result<()> {
    let mut state = NodeState::load(&args.data_dir)?;

    let new_balance = state
        .ledger
        .mint(&args.caller, &args.to, args.amount, &mut state.events)
        .context("mint failed")?;
    state.save(&args.data_dir)?;

    println!("Minted {} credits to {}", args.amount, args.to);
    println!("  Recipient balance : {}", new_balance);
    println!("  Total supply      : {}", state.ledger.total_supply());
    Ok(())
}

/// Runs one burn transaction and persists the state on success.
fn burn(args: cli::BurnArgs) -> Result<()> {
    let mut state = NodeState::load(&args.data_dir)?;

    let remaining = state
        .ledger
        .burn(&args.caller, args.amount, &mut state.events)
        .context("burn failed")?;
    state.save(&args.data_dir)?;

    println!("Retired {} credits from {}", args.amount, args.caller);
    println!("  Remaining balance : {}", remaining);
    println!("  Total supply      : {}", state.ledger.total_supply());
    Ok(())
}

/// Prints the balance of an account, or a note when it holds no resource.
fn query_balance(args: cli::BalanceArgs) -> Result<()> {
    let state = NodeState::load(&args.data_dir)?;
    match state.ledger.balance_of(&args.address) {
        Some(balance) => println!("{}", balance),
        None => println!("no holder resource published for {}", args.address),
    }
    Ok(())
}

/// Prints the global credit supply.
fn query_supply(args: cli::SupplyArgs) -> Result<()> {
    let state = NodeState::load(&args.data_dir)?;
    println!("{}", state.ledger.total_supply());
    Ok(())
}

/// Prints the recorded event log as pretty JSON.
fn query_events(args: cli::EventsArgs) -> Result<()> {
    let state = NodeState::load(&args.data_dir)?;
    let json = serde_json::to_string_pretty(state.events.events())
        .context("failed to serialize event log")?;
    println!("{}", json);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("bco-node {}", env!("CARGO_PKG_VERSION"));
    println!("ledger   {}", LEDGER_VERSION);
}

/// Generates a fresh account address: random bytes, hex-encoded behind
/// the protocol prefix. Only a stand-in — real addresses come from the
/// host ledger's key material.
fn generate_address() -> String {
    let bytes: [u8; ADDRESS_BYTE_LENGTH] = rand::random();
    format!("{}{}", ADDRESS_PREFIX, hex::encode(bytes))
}
