//! # Shared Ledger Handle
//!
//! The substrate serializes transactions touching the same resource. In
//! process, that discipline is an `Arc<RwLock<..>>`: writers (the three
//! entry points) take the write lock and run one at a time; read queries
//! share the read lock. Cheap to clone, safe to hand to as many threads
//! as the host cares to run.

use parking_lot::RwLock;
use std::sync::Arc;

use super::events::EventSink;
use super::ledger::{LedgerError, OffsetLedger};

/// A cloneable, lock-coordinated handle to an [`OffsetLedger`].
#[derive(Clone, Debug, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<OffsetLedger>>,
}

impl SharedLedger {
    /// Wraps a ledger for shared use.
    pub fn new(ledger: OffsetLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// See [`OffsetLedger::initialize`]. Takes the write lock.
    pub fn initialize(&self, caller: &str, initial_supply: u64) -> Result<u64, LedgerError> {
        self.inner.write().initialize(caller, initial_supply)
    }

    /// See [`OffsetLedger::mint`]. Takes the write lock.
    pub fn mint(
        &self,
        caller: &str,
        to: &str,
        amount: u64,
        events: &mut dyn EventSink,
    ) -> Result<u64, LedgerError> {
        self.inner.write().mint(caller, to, amount, events)
    }

    /// See [`OffsetLedger::burn`]. Takes the write lock.
    pub fn burn(
        &self,
        caller: &str,
        amount: u64,
        events: &mut dyn EventSink,
    ) -> Result<u64, LedgerError> {
        self.inner.write().burn(caller, amount, events)
    }

    /// See [`OffsetLedger::balance_of`]. Takes the read lock.
    pub fn balance_of(&self, address: &str) -> Option<u64> {
        self.inner.read().balance_of(address)
    }

    /// See [`OffsetLedger::total_supply`]. Takes the read lock.
    pub fn total_supply(&self) -> u64 {
        self.inner.read().total_supply()
    }

    /// See [`OffsetLedger::is_initialized`]. Takes the read lock.
    pub fn is_initialized(&self, address: &str) -> bool {
        self.inner.read().is_initialized(address)
    }

    /// Clones the current ledger state, e.g. for persistence.
    pub fn snapshot(&self) -> OffsetLedger {
        self.inner.read().clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
