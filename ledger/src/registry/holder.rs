//! # Token Holder Resource
//!
//! The per-account record created when an account first touches the
//! ledger. Holds the account's credit balance and the address authorized
//! to mint through it. The balance is owned exclusively by this resource:
//! the only mutation paths are [`deposit`](TokenHolder::deposit) and
//! [`withdraw`](TokenHolder::withdraw), both phrased in terms of the
//! linear [`Units`] value.
//!
//! The `admin` field is fixed at creation. There is no admin-transfer or
//! revocation operation in this design — the address recorded at publish
//! time is the address for the life of the resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::store::Address;
use super::units::{Units, UnitsError};

/// A balance-holding resource owned by a single account.
///
/// Published either explicitly by `initialize` (admin = the account
/// itself) or implicitly by a mint deposit to an account with no resource
/// yet (admin = the minting admin). At most one exists per account —
/// [`HolderStore`](super::store::HolderStore) enforces that.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenHolder {
    /// Credit balance in whole units. Mutated only through deposit/withdraw.
    balance: u64,

    /// The address authorized to mint through this resource. Immutable.
    admin: Address,

    /// When the resource was published. Operational visibility only — no
    /// precondition consults it.
    created_at: DateTime<Utc>,
}

impl TokenHolder {
    /// Creates an empty holder with the given admin recorded.
    pub fn new(admin: Address) -> Self {
        Self {
            balance: 0,
            admin,
            created_at: Utc::now(),
        }
    }

    /// Creates a holder born holding `units`, as `initialize` does.
    pub fn with_units(admin: Address, units: Units) -> Self {
        Self {
            balance: units.into_amount(),
            admin,
            created_at: Utc::now(),
        }
    }

    /// Current balance in whole units.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// The recorded admin address.
    pub fn admin(&self) -> &str {
        &self.admin
    }

    /// When the resource was published.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether `address` is the recorded admin.
    pub fn is_admin(&self, address: &str) -> bool {
        self.admin == address
    }

    /// Absorbs `units` into the balance and returns the new balance.
    ///
    /// Infallible: a balance is bounded by the minted total, and
    /// [`Supply::mint`](super::units::Supply::mint) already refused any
    /// total past `u64::MAX`.
    pub fn deposit(&mut self, units: Units) -> u64 {
        self.balance += units.into_amount();
        self.balance
    }

    /// Withdraws `amount` from the balance as a [`Units`] value.
    ///
    /// # Errors
    ///
    /// Returns [`UnitsError::InsufficientBalance`] if `amount` exceeds the
    /// current balance. The balance is untouched on failure.
    pub fn withdraw(&mut self, amount: u64) -> Result<Units, UnitsError> {
        if self.balance < amount {
            return Err(UnitsError::InsufficientBalance {
                available: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(Units::new(amount))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::units::Supply;

    const ADMIN: &str = "bco:aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn new_holder_is_empty() {
        let holder = TokenHolder::new(ADMIN.to_string());
        assert_eq!(holder.balance(), 0);
        assert_eq!(holder.admin(), ADMIN);
        assert!(holder.is_admin(ADMIN));
        assert!(!holder.is_admin("bco:somebody-else"));
    }

    #[test]
    fn with_units_records_initial_balance() {
        let mut supply = Supply::new();
        let units = supply.mint(1000).unwrap();
        let holder = TokenHolder::with_units(ADMIN.to_string(), units);
        assert_eq!(holder.balance(), 1000);
    }

    #[test]
    fn deposit_accumulates() {
        let mut supply = Supply::new();
        let mut holder = TokenHolder::new(ADMIN.to_string());

        assert_eq!(holder.deposit(supply.mint(500).unwrap()), 500);
        assert_eq!(holder.deposit(supply.mint(300).unwrap()), 800);
        assert_eq!(holder.balance(), 800);
    }

    #[test]
    fn withdraw_reduces_balance() {
        let mut supply = Supply::new();
        let mut holder = TokenHolder::with_units(ADMIN.to_string(), supply.mint(1000).unwrap());

        let units = holder.withdraw(400).unwrap();
        assert_eq!(units.amount(), 400);
        assert_eq!(holder.balance(), 600);
        supply.burn(units);
    }

    #[test]
    fn withdraw_to_zero() {
        let mut supply = Supply::new();
        let mut holder = TokenHolder::with_units(ADMIN.to_string(), supply.mint(500).unwrap());

        let units = holder.withdraw(500).unwrap();
        assert_eq!(holder.balance(), 0);
        supply.burn(units);
    }

    #[test]
    fn withdraw_beyond_balance_rejected() {
        let mut supply = Supply::new();
        let mut holder = TokenHolder::with_units(ADMIN.to_string(), supply.mint(100).unwrap());

        let result = holder.withdraw(200);
        assert!(matches!(
            result,
            Err(UnitsError::InsufficientBalance {
                available: 100,
                requested: 200,
            })
        ));
        assert_eq!(holder.balance(), 100);
    }

    #[test]
    fn holder_serialization_round_trip() {
        let mut supply = Supply::new();
        let holder = TokenHolder::with_units(ADMIN.to_string(), supply.mint(42).unwrap());

        let json = serde_json::to_string(&holder).expect("serialize");
        let recovered: TokenHolder = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(recovered.balance(), 42);
        assert_eq!(recovered.admin(), ADMIN);
    }
}
