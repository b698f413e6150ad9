// Copyright (c) 2026 BCO Contributors. MIT License.
// See LICENSE for details.

//! # BCO — Basic Carbon Offsets, Core Library
//!
//! An administrator-controlled fungible credit on a resource-oriented
//! ledger. One account publishes a balance-holding resource and becomes
//! the admin; the admin mints credits to arbitrary accounts; any holder
//! retires (burns) credits from their own balance. Nothing else — no
//! transfers, no role hierarchy, no metadata. Carbon accounting rewards
//! small, auditable surfaces.
//!
//! ## Architecture
//!
//! The host ledger — account creation, signature verification, transaction
//! execution — is an external collaborator. This crate is the part that
//! runs *inside* a transaction, after the substrate has resolved the
//! caller's address:
//!
//! - **config** — protocol constants and version identifiers.
//! - **registry** — everything that holds or moves value: the fungible
//!   unit primitive, the per-account holder resource, the keyed resource
//!   store, the event log, and the three entry points
//!   (`initialize`/`mint`/`burn`).
//!
//! ## Design Philosophy
//!
//! 1. All amounts are `u64` in whole credit units. No floating point,
//!    ever — offsets are retired one tonne at a time.
//! 2. Units are linear values: created only by the supply primitive,
//!    retired only by it. Conservation is an ownership property, not a
//!    convention.
//! 3. Every operation validates before it mutates. A failed call leaves
//!    the ledger exactly as it found it.
//! 4. Every stateful struct derives `Serialize`/`Deserialize` so ledger
//!    state can be persisted, transmitted, or snapshotted for recovery.

pub mod config;
pub mod registry;
