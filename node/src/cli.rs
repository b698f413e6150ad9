//! # CLI Interface
//!
//! Defines the command-line argument structure for `bco-node` using
//! `clap` derive. One subcommand per ledger operation plus read queries
//! and `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BCO ledger node.
///
/// Stands in for the host ledger's transaction boundary: each invocation
/// resolves the signed caller from `--caller`, runs exactly one operation
/// against the state file, and persists it only on success.
#[derive(Parser, Debug)]
#[command(
    name = "bco-node",
    about = "BCO carbon offset ledger node",
    version,
    propagate_version = true
)]
pub struct BcoNodeCli {
    /// Log output format: "pretty" or "json".
    #[arg(long, env = "BCO_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the BCO node binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a ledger — creates the data directory and state file,
    /// publishes the admin's holder resource with the initial supply.
    Init(InitArgs),
    /// Mint credits to an account (admin only).
    Mint(MintArgs),
    /// Retire credits from the caller's own balance.
    Burn(BurnArgs),
    /// Print the balance of an account.
    Balance(BalanceArgs),
    /// Print the global credit supply.
    Supply(SupplyArgs),
    /// Print the recorded event log as JSON.
    Events(EventsArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Path to the node data directory where the ledger state file lives.
    ///
    /// Created on first run if it does not exist.
    #[arg(long, short = 'd', env = "BCO_DATA_DIR", default_value = "~/.bco")]
    pub data_dir: PathBuf,

    /// Admin account address. A fresh address is generated when omitted.
    #[arg(long)]
    pub admin: Option<String>,

    /// Initial credit supply minted to the admin's own balance.
    #[arg(long)]
    pub supply: u64,
}

/// Arguments for the `mint` subcommand.
#[derive(Parser, Debug)]
pub struct MintArgs {
    /// Path to the node data directory.
    #[arg(long, short = 'd', env = "BCO_DATA_DIR", default_value = "~/.bco")]
    pub data_dir: PathBuf,

    /// The calling account — must be the recorded admin.
    #[arg(long, env = "BCO_CALLER")]
    pub caller: String,

    /// The account to deposit the minted credits to.
    #[arg(long)]
    pub to: String,

    /// Number of credits to mint.
    #[arg(long)]
    pub amount: u64,
}

/// Arguments for the `burn` subcommand.
#[derive(Parser, Debug)]
pub struct BurnArgs {
    /// Path to the node data directory.
    #[arg(long, short = 'd', env = "BCO_DATA_DIR", default_value = "~/.bco")]
    pub data_dir: PathBuf,

    /// The calling account — credits are retired from its own balance.
    #[arg(long, env = "BCO_CALLER")]
    pub caller: String,

    /// Number of credits to retire.
    #[arg(long)]
    pub amount: u64,
}

/// Arguments for the `balance` subcommand.
#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Path to the node data directory.
    #[arg(long, short = 'd', env = "BCO_DATA_DIR", default_value = "~/.bco")]
    pub data_dir: PathBuf,

    /// The account to query.
    pub address: String,
}

/// Arguments for the `supply` subcommand.
#[derive(Parser, Debug)]
pub struct SupplyArgs {
    /// Path to the node data directory.
    #[arg(long, short = 'd', env = "BCO_DATA_DIR", default_value = "~/.bco")]
    pub data_dir: PathBuf,
}

/// Arguments for the `events` subcommand.
#[derive(Parser, Debug)]
pub struct EventsArgs {
    /// Path to the node data directory.
    #[arg(long, short = 'd', env = "BCO_DATA_DIR", default_value = "~/.bco")]
    pub data_dir: PathBuf,
}
