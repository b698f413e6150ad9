//! # Protocol Constants
//!
//! Every magic number in BCO lives here. Constants are consensus-adjacent:
//! the node binary and any future substrate integration must agree on all
//! of them, so they are defined once and imported everywhere else.

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// Ledger library version, reported by `bco-node version` and recorded in
/// persisted state files. Bump on any change to persisted state layout.
pub const LEDGER_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Human-readable prefix for BCO account addresses.
///
/// The library treats addresses as opaque keys — address derivation and
/// signature verification belong to the host ledger. The prefix exists so
/// that generated addresses are recognizable in logs and state files.
pub const ADDRESS_PREFIX: &str = "bco:";

/// Length in bytes of the random account identifier behind an address.
/// Rendered as hex after the prefix: `bco:<64 hex chars>`.
pub const ADDRESS_BYTE_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// File name of the JSON state file inside a node data directory.
pub const STATE_FILE_NAME: &str = "ledger.json";
