//! # Offset Ledger — Entry Points
//!
//! [`OffsetLedger`] is what a transaction runs against once the substrate
//! has resolved the caller's address: `initialize` publishes a holder
//! resource, `mint` creates units under admin authority, `burn` retires
//! units from the caller's own balance. Read queries (`balance_of`,
//! `total_supply`, ...) are non-mutating and take `&self`.
//!
//! ## Authorization Model
//!
//! Mint is checked against the *caller's own* resource's admin field.
//! There is no separate admin registry: whoever published a holder with
//! themselves recorded as admin — i.e. whoever called `initialize` — can
//! mint; nobody else can. Burn has no admin check at all: any holder may
//! retire their own balance.
//!
//! ## Atomicity
//!
//! Every operation validates all preconditions before touching state, so
//! a failed call leaves the ledger exactly as it found it. The host
//! substrate adds the outer all-or-nothing transaction guarantee.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::events::{BurnEvent, EventSink, LedgerEvent, MintEvent};
use super::holder::TokenHolder;
use super::store::{Address, HolderStore};
use super::units::{Supply, UnitsError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// `initialize` was called by an account that already holds a resource.
    #[error("holder resource already published for {address}")]
    AlreadyInitialized {
        /// The account whose resource already exists.
        address: Address,
    },

    /// The caller owns no holder resource.
    #[error("no holder resource published for {address}")]
    NoSuchHolder {
        /// The account with no resource.
        address: Address,
    },

    /// The caller is not the admin recorded on their own resource.
    #[error("not authorized: {caller} is not the recorded admin")]
    NotAuthorized {
        /// The rejected caller.
        caller: Address,
    },

    /// Unit arithmetic failed (supply overflow, insufficient balance).
    #[error("unit accounting error: {0}")]
    Units(#[from] UnitsError),
}

// ---------------------------------------------------------------------------
// OffsetLedger
// ---------------------------------------------------------------------------

/// The carbon offset credit ledger: holder resources plus the global
/// supply counter.
///
/// # Thread Safety
///
/// `OffsetLedger` is `Send` but mutation requires `&mut self` — one
/// in-flight operation at a time, matching the substrate's per-resource
/// exclusive-access discipline. Shared use goes through
/// [`SharedLedger`](super::shared::SharedLedger).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OffsetLedger {
    /// Holder resources keyed by account address.
    holders: HolderStore,

    /// Global unit total across all balances.
    supply: Supply,
}

impl OffsetLedger {
    /// Creates an empty ledger: no holders, zero supply.
    pub fn new() -> Self {
        Self {
            holders: HolderStore::new(),
            supply: Supply::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Entry Points
    // -----------------------------------------------------------------------

    /// Publishes a holder resource for `caller` with `initial_supply`
    /// freshly minted units and `caller` recorded as admin.
    ///
    /// Emits no event — only mint and burn write to the log.
    ///
    /// # Returns
    ///
    /// The new holder's balance (equal to `initial_supply`).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AlreadyInitialized`] if `caller` already
    /// holds a resource — including one published implicitly by a mint
    /// deposit. Returns [`LedgerError::Units`] on supply overflow.
    pub fn initialize(&mut self, caller: &str, initial_supply: u64) -> Result<u64, LedgerError> {
        if self.holders.contains(caller) {
            return Err(LedgerError::AlreadyInitialized {
                address: caller.to_string(),
            });
        }

        let units = self.supply.mint(initial_supply)?;
        self.holders
            .publish(caller.to_string(), TokenHolder::with_units(caller.to_string(), units));

        tracing::info!(account = caller, initial_supply, "holder initialized");
        Ok(initial_supply)
    }

    /// Mints `amount` new units and deposits them into `to`'s balance.
    ///
    /// Authorization is checked against the caller's own resource: the
    /// call succeeds only when `caller` is the admin recorded there. When
    /// `to` holds no resource yet, the deposit publishes one for it with
    /// the minting admin recorded — the recipient can burn what it
    /// received but cannot mint.
    ///
    /// # Returns
    ///
    /// `to`'s balance after the deposit.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoSuchHolder`] when `caller` owns no
    /// resource, [`LedgerError::NotAuthorized`] when `caller` is not the
    /// recorded admin, and [`LedgerError::Units`] on supply overflow.
    /// No event is emitted and no state is retained on failure.
    pub fn mint(
        &mut self,
        caller: &str,
        to: &str,
        amount: u64,
        events: &mut dyn EventSink,
    ) -> Result<u64, LedgerError> {
        let holder = self
            .holders
            .get(caller)
            .ok_or_else(|| LedgerError::NoSuchHolder {
                address: caller.to_string(),
            })?;

        if !holder.is_admin(caller) {
            return Err(LedgerError::NotAuthorized {
                caller: caller.to_string(),
            });
        }

        let units = self.supply.mint(amount)?;
        let recipient = self
            .holders
            .get_or_publish(to, || TokenHolder::new(caller.to_string()));
        let new_balance = recipient.deposit(units);

        events.record(LedgerEvent::Mint(MintEvent {
            amount,
            to: to.to_string(),
        }));
        tracing::info!(admin = caller, to, amount, new_balance, "units minted");
        Ok(new_balance)
    }

    /// Withdraws `amount` from the caller's own balance and destroys it.
    ///
    /// No admin check — any holder may retire their own credits.
    ///
    /// # Returns
    ///
    /// The caller's remaining balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoSuchHolder`] when `caller` owns no
    /// resource and [`LedgerError::Units`] (insufficient balance) when
    /// `amount` exceeds the current balance. No event is emitted and no
    /// state is retained on failure.
    pub fn burn(
        &mut self,
        caller: &str,
        amount: u64,
        events: &mut dyn EventSink,
    ) -> Result<u64, LedgerError> {
        let holder = self
            .holders
            .get_mut(caller)
            .ok_or_else(|| LedgerError::NoSuchHolder {
                address: caller.to_string(),
            })?;

        let units = holder.withdraw(amount)?;
        let remaining = holder.balance();
        self.supply.burn(units);

        events.record(LedgerEvent::Burn(BurnEvent {
            amount,
            from: caller.to_string(),
        }));
        tracing::info!(from = caller, amount, remaining, "units burned");
        Ok(remaining)
    }

    // -----------------------------------------------------------------------
    // Read Queries
    // -----------------------------------------------------------------------

    /// The balance of `address`, or `None` if it holds no resource.
    pub fn balance_of(&self, address: &str) -> Option<u64> {
        self.holders.get(address).map(|h| h.balance())
    }

    /// The admin recorded on `address`'s resource, or `None`.
    pub fn admin_of(&self, address: &str) -> Option<&str> {
        self.holders.get(address).map(|h| h.admin())
    }

    /// Whether `address` holds a resource.
    pub fn is_initialized(&self, address: &str) -> bool {
        self.holders.contains(address)
    }

    /// The global unit total across all balances.
    pub fn total_supply(&self) -> u64 {
        self.supply.total()
    }

    /// Number of published holder resources.
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    /// Read access to the resource store, for reporting and audits.
    pub fn holders(&self) -> &HolderStore {
        &self.holders
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
