//! # Keyed Resource Storage
//!
//! [`HolderStore`] maps account addresses to their [`TokenHolder`]
//! resources — the in-process rendering of the substrate's global resource
//! store. A flat `HashMap` is sufficient here: exclusive mutation per
//! operation is expressed through `&mut` access, and shared use is
//! coordinated one level up by [`SharedLedger`](super::shared::SharedLedger).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::holder::TokenHolder;

/// A BCO account address.
///
/// Opaque to this crate — derivation and signature verification belong to
/// the host ledger. Conventionally `bco:`-prefixed hex.
pub type Address = String;

/// Account-keyed storage for holder resources, one per account.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HolderStore {
    holders: HashMap<Address, TokenHolder>,
}

impl HolderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            holders: HashMap::new(),
        }
    }

    /// The resource published under `address`, if any.
    pub fn get(&self, address: &str) -> Option<&TokenHolder> {
        self.holders.get(address)
    }

    /// Mutable access to the resource published under `address`.
    pub fn get_mut(&mut self, address: &str) -> Option<&mut TokenHolder> {
        self.holders.get_mut(address)
    }

    /// Whether `address` already holds a resource — the duplicate-resource
    /// check consulted before publishing.
    pub fn contains(&self, address: &str) -> bool {
        self.holders.contains_key(address)
    }

    /// Publishes `holder` under `address`. Callers check [`contains`]
    /// first; publishing over an existing resource is a caller bug.
    ///
    /// [`contains`]: Self::contains
    pub fn publish(&mut self, address: Address, holder: TokenHolder) {
        self.holders.insert(address, holder);
    }

    /// The resource under `address`, publishing one from `default` first
    /// when the address holds none yet.
    pub fn get_or_publish(
        &mut self,
        address: &str,
        default: impl FnOnce() -> TokenHolder,
    ) -> &mut TokenHolder {
        self.holders
            .entry(address.to_string())
            .or_insert_with(default)
    }

    /// Number of published resources.
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    /// `true` if no resource has been published.
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Iterates over all `(address, holder)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &TokenHolder)> {
        self.holders.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
