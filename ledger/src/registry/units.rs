//! # Fungible Unit Primitive
//!
//! The conserved-quantity core of the ledger. A [`Units`] value represents
//! credits in flight between a mint, a balance, and a burn. [`Supply`]
//! tracks the global total with checked arithmetic.
//!
//! ## Conservation by Ownership
//!
//! `Units` is deliberately neither `Clone` nor `Copy`, and its constructor
//! is crate-private. The only ways to obtain one are [`Supply::mint`]
//! (which grows the recorded total, failing rather than wrapping) and
//! [`TokenHolder::withdraw`](super::holder::TokenHolder::withdraw) (which
//! fails rather than underflowing a balance). The only ways to dispose of
//! one are a deposit into a holder or [`Supply::burn`]. Between those
//! points the value sits on the stack of exactly one owner. Units in
//! flight plus units at rest therefore always equal the recorded supply —
//! the compiler enforces what other ledgers assert at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur in unit arithmetic.
#[derive(Debug, Error)]
pub enum UnitsError {
    /// Minting would push the recorded total past `u64::MAX`.
    ///
    /// 18.4 quintillion tonnes of CO2 is several thousand times the
    /// planet's annual emissions. Hitting this is a bug or an attack.
    #[error("supply overflow: total {total}, minting {amount}")]
    Overflow {
        /// The recorded total before the failed mint.
        total: u64,
        /// The amount that caused the overflow.
        amount: u64,
    },

    /// Attempted to withdraw more than the available balance.
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// The current balance.
        available: u64,
        /// The amount that was requested.
        requested: u64,
    },
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// A quantity of credits in flight.
///
/// Linear value: see the module docs for the conservation argument.
/// Dropping a `Units` on the floor loses credits, hence the `must_use`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "units must be deposited or burned; dropping them loses credits"]
pub struct Units {
    amount: u64,
}

impl Units {
    /// Crate-private constructor. External code cannot forge units.
    pub(crate) fn new(amount: u64) -> Self {
        Self { amount }
    }

    /// The quantity carried by this value.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Consumes the value, surrendering its quantity to the caller.
    pub(crate) fn into_amount(self) -> u64 {
        self.amount
    }
}

// ---------------------------------------------------------------------------
// Supply
// ---------------------------------------------------------------------------

/// The global unit total.
///
/// Grows on mint, shrinks on burn, and changes through nothing else.
/// Serialized as part of ledger state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Supply {
    total: u64,
}

impl Supply {
    /// Creates a zero supply.
    pub fn new() -> Self {
        Self { total: 0 }
    }

    /// The recorded total across all balances and units in flight.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Creates `amount` fresh units, growing the recorded total.
    ///
    /// # Errors
    ///
    /// Returns [`UnitsError::Overflow`] if the total would exceed
    /// `u64::MAX`. The total is untouched on failure.
    pub fn mint(&mut self, amount: u64) -> Result<Units, UnitsError> {
        self.total = self.total.checked_add(amount).ok_or(UnitsError::Overflow {
            total: self.total,
            amount,
        })?;
        Ok(Units::new(amount))
    }

    /// Destroys `units`, shrinking the recorded total.
    ///
    /// Returns the remaining total. Conservation guarantees the subtraction
    /// cannot underflow for units minted from this supply.
    pub fn burn(&mut self, units: Units) -> u64 {
        self.total = self.total.saturating_sub(units.into_amount());
        self.total
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
