//! # Event Log
//!
//! Mint and burn each append one record to an event log; nothing else
//! does, and `initialize` deliberately emits nothing. The log is a
//! capability injected into each operation as an [`EventSink`], so the
//! core stays decoupled from whatever the host ledger does with events —
//! tests assert exact emitted sequences against [`MemoryEventLog`], the
//! node binary persists the same type alongside ledger state.
//!
//! The core writes to the sink and never reads it.

use serde::{Deserialize, Serialize};

use super::store::Address;

// ---------------------------------------------------------------------------
// Event Records
// ---------------------------------------------------------------------------

/// Record of a successful mint: `amount` fresh units deposited to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintEvent {
    /// Number of units created.
    pub amount: u64,
    /// The account the units were deposited to.
    pub to: Address,
}

/// Record of a successful burn: `amount` units retired from `from`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnEvent {
    /// Number of units destroyed.
    pub amount: u64,
    /// The account the units were withdrawn from.
    pub from: Address,
}

/// A single entry in the append-only ledger event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerEvent {
    /// Units were created and deposited.
    #[serde(rename = "mint")]
    Mint(MintEvent),
    /// Units were withdrawn and destroyed.
    #[serde(rename = "burn")]
    Burn(BurnEvent),
}

// ---------------------------------------------------------------------------
// EventSink
// ---------------------------------------------------------------------------

/// Append-only event capability handed to each mint/burn call.
pub trait EventSink {
    /// Appends one event. Must not fail — the operation has already
    /// committed by the time its event is recorded.
    fn record(&mut self, event: LedgerEvent);
}

// ---------------------------------------------------------------------------
// MemoryEventLog
// ---------------------------------------------------------------------------

/// In-memory, serializable event log — the sink used by tests and by the
/// node binary's state file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryEventLog {
    events: Vec<LedgerEvent>,
}

impl MemoryEventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events, in emission order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Only the mint events, in emission order.
    pub fn mints(&self) -> Vec<&MintEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                LedgerEvent::Mint(m) => Some(m),
                LedgerEvent::Burn(_) => None,
            })
            .collect()
    }

    /// Only the burn events, in emission order.
    pub fn burns(&self) -> Vec<&BurnEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                LedgerEvent::Burn(b) => Some(b),
                LedgerEvent::Mint(_) => None,
            })
            .collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for MemoryEventLog {
    fn record(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
