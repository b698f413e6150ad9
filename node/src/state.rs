//! # State File
//!
//! The node persists the whole ledger — holder resources, supply, and the
//! event log — as one human-readable JSON file in the data directory.
//! Commands load it, run exactly one operation, and save only on success,
//! so a failed operation leaves the file untouched: the same
//! all-or-nothing contract the real substrate would provide per
//! transaction.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use bco_ledger::config::{LEDGER_VERSION, STATE_FILE_NAME};
use bco_ledger::registry::{MemoryEventLog, OffsetLedger};

/// Everything the node persists between invocations.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeState {
    /// Ledger library version that wrote this file.
    pub version: String,

    /// The offset ledger itself.
    pub ledger: OffsetLedger,

    /// Append-only event log, fed to mint/burn as their sink.
    pub events: MemoryEventLog,

    /// When the file was last written.
    pub updated_at: DateTime<Utc>,
}

impl NodeState {
    /// A fresh, empty state.
    pub fn new() -> Self {
        Self {
            version: LEDGER_VERSION.to_string(),
            ledger: OffsetLedger::new(),
            events: MemoryEventLog::new(),
            updated_at: Utc::now(),
        }
    }

    /// The state file path inside `data_dir`.
    pub fn file_path(data_dir: &Path) -> PathBuf {
        data_dir.join(STATE_FILE_NAME)
    }

    /// Loads the state file from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = Self::file_path(data_dir);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read state file at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("state file at {} is not valid JSON", path.display()))
    }

    /// Writes the state file into `data_dir`, stamping `updated_at`.
    pub fn save(&mut self, data_dir: &Path) -> Result<()> {
        self.updated_at = Utc::now();

        fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let path = Self::file_path(data_dir);
        let raw = serde_json::to_string_pretty(self).context("failed to serialize ledger state")?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write state file at {}", path.display()))?;

        tracing::debug!(path = %path.display(), "state file written");
        Ok(())
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
