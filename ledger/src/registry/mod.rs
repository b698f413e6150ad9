//! # Registry Module — Holders, Units & the Offset Ledger
//!
//! The registry is where credits live. Every balance, every mint, every
//! retirement passes through this module.
//!
//! ## Architecture
//!
//! ```text
//! units.rs   — Fungible unit primitive: linear Units values, global Supply
//! holder.rs  — TokenHolder: the per-account balance-holding resource
//! store.rs   — HolderStore: keyed resource storage, one resource per account
//! events.rs  — MintEvent / BurnEvent, the EventSink capability, memory log
//! ledger.rs  — OffsetLedger: initialize / mint / burn entry points
//! shared.rs  — SharedLedger: lock-coordinated handle for concurrent callers
//! ```
//!
//! ## Design Principles
//!
//! 1. **Units are linear.** A [`Units`] value is not `Clone` and not
//!    `Copy`; it is created by [`Supply::mint`] or a holder withdrawal and
//!    consumed by a deposit or [`Supply::burn`]. Credits cannot be
//!    duplicated by construction.
//!
//! 2. **One resource per account.** [`HolderStore`] keys resources by
//!    account address; the duplicate-resource check makes a second
//!    `initialize` fail instead of silently overwriting.
//!
//! 3. **Events are write-only here.** Operations record into an injected
//!    [`EventSink`]; nothing in this module ever reads the log back.
//!
//! 4. **Fail closed.** Any violated precondition aborts the whole
//!    operation before state is touched.

pub mod events;
pub mod holder;
pub mod ledger;
pub mod shared;
pub mod store;
pub mod units;

pub use events::{BurnEvent, EventSink, LedgerEvent, MemoryEventLog, MintEvent};
pub use holder::TokenHolder;
pub use ledger::{LedgerError, OffsetLedger};
pub use shared::SharedLedger;
pub use store::{Address, HolderStore};
pub use units::{Supply, Units, UnitsError};
