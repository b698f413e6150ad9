//! Integration tests for the offset ledger.
//!
//! These exercise full mint/burn lifecycles across module boundaries:
//! the registry scenario end to end, conservation across arbitrary
//! operation sequences, and exact event-log contents.

use bco_ledger::registry::{
    BurnEvent, LedgerError, LedgerEvent, MemoryEventLog, MintEvent, OffsetLedger, UnitsError,
};

const ADMIN: &str = "bco:admin";
const USER_B: &str = "bco:userb";

/// Helper: asserts the ledger's books balance — the recorded supply must
/// equal the sum of every holder's balance.
fn assert_conserved(ledger: &OffsetLedger) {
    let balance_sum: u64 = ledger.holders().iter().map(|(_, h)| h.balance()).sum();
    assert_eq!(
        ledger.total_supply(),
        balance_sum,
        "supply and balances diverged"
    );
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn registry_scenario_end_to_end() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();

    // The registry operator brings up the ledger with 1000 credits.
    ledger.initialize(ADMIN, 1000).unwrap();
    assert_eq!(ledger.balance_of(ADMIN), Some(1000));

    // 250 credits issued to a project developer.
    ledger.mint(ADMIN, USER_B, 250, &mut log).unwrap();
    assert_eq!(ledger.balance_of(USER_B), Some(250));
    assert_eq!(ledger.balance_of(ADMIN), Some(1000));
    assert_eq!(log.mints().len(), 1);

    // The developer retires 100 of them.
    ledger.burn(USER_B, 100, &mut log).unwrap();
    assert_eq!(ledger.balance_of(USER_B), Some(150));
    assert_eq!(log.burns().len(), 1);

    // Over-retirement is refused and changes nothing.
    let result = ledger.burn(USER_B, 1000, &mut log);
    assert!(matches!(
        result,
        Err(LedgerError::Units(UnitsError::InsufficientBalance { .. }))
    ));
    assert_eq!(ledger.balance_of(USER_B), Some(150));
    assert_eq!(log.len(), 2);

    assert_conserved(&ledger);
}

#[test]
fn mint_then_burn_restores_pre_mint_balance() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();
    ledger.initialize(ADMIN, 1000).unwrap();
    ledger.mint(ADMIN, USER_B, 40, &mut log).unwrap();
    let before = ledger.balance_of(USER_B).unwrap();

    ledger.mint(ADMIN, USER_B, 7, &mut log).unwrap();
    assert_eq!(ledger.balance_of(USER_B), Some(before + 7));

    ledger.burn(USER_B, 7, &mut log).unwrap();
    assert_eq!(ledger.balance_of(USER_B), Some(before));

    // Exactly one MintEvent{7, USER_B} and one BurnEvent{7, USER_B}.
    assert_eq!(
        log.mints()
            .iter()
            .filter(|m| m.amount == 7 && m.to == USER_B)
            .count(),
        1
    );
    assert_eq!(
        log.burns()
            .iter()
            .filter(|b| b.amount == 7 && b.from == USER_B)
            .count(),
        1
    );
    assert_conserved(&ledger);
}

#[test]
fn conservation_holds_at_every_step() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();

    ledger.initialize(ADMIN, 500).unwrap();
    assert_conserved(&ledger);

    let script: &[(&str, &str, u64)] = &[
        ("mint", "bco:p1", 120),
        ("mint", "bco:p2", 300),
        ("burn", ADMIN, 50),
        ("mint", "bco:p1", 1),
        ("burn", "bco:p2", 299),
        ("burn", "bco:p1", 121),
    ];

    for &(op, account, amount) in script {
        match op {
            "mint" => {
                ledger.mint(ADMIN, account, amount, &mut log).unwrap();
            }
            "burn" => {
                ledger.burn(account, amount, &mut log).unwrap();
            }
            _ => unreachable!(),
        }
        assert_conserved(&ledger);
    }

    // initial 500 + mints (120 + 300 + 1) - burns (50 + 299 + 121)
    assert_eq!(ledger.total_supply(), 451);
    assert_eq!(log.len(), script.len());
}

// ---------------------------------------------------------------------------
// Event Log
// ---------------------------------------------------------------------------

#[test]
fn event_log_matches_operation_order_exactly() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();
    ledger.initialize(ADMIN, 100).unwrap();

    ledger.mint(ADMIN, USER_B, 10, &mut log).unwrap();
    ledger.burn(ADMIN, 5, &mut log).unwrap();
    ledger.mint(ADMIN, ADMIN, 20, &mut log).unwrap();
    ledger.burn(USER_B, 10, &mut log).unwrap();

    let expected = [
        LedgerEvent::Mint(MintEvent {
            amount: 10,
            to: USER_B.to_string(),
        }),
        LedgerEvent::Burn(BurnEvent {
            amount: 5,
            from: ADMIN.to_string(),
        }),
        LedgerEvent::Mint(MintEvent {
            amount: 20,
            to: ADMIN.to_string(),
        }),
        LedgerEvent::Burn(BurnEvent {
            amount: 10,
            from: USER_B.to_string(),
        }),
    ];
    assert_eq!(log.events(), expected);
}

#[test]
fn initialize_emits_no_event() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();

    ledger.initialize(ADMIN, 1000).unwrap();
    assert!(log.is_empty());

    // The asymmetry is deliberate: the first logged event is the first mint.
    ledger.mint(ADMIN, USER_B, 1, &mut log).unwrap();
    assert_eq!(log.len(), 1);
    assert!(matches!(log.events()[0], LedgerEvent::Mint(_)));
}

#[test]
fn failed_operations_leave_no_trace_in_the_log() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();
    ledger.initialize(ADMIN, 100).unwrap();
    ledger.mint(ADMIN, USER_B, 10, &mut log).unwrap();

    ledger.mint(USER_B, ADMIN, 1, &mut log).unwrap_err();
    ledger.mint("bco:ghost", USER_B, 1, &mut log).unwrap_err();
    ledger.burn(USER_B, 999, &mut log).unwrap_err();
    ledger.burn("bco:ghost", 1, &mut log).unwrap_err();
    ledger.initialize(ADMIN, 100).unwrap_err();

    assert_eq!(log.len(), 1);
    assert_conserved(&ledger);
}

// ---------------------------------------------------------------------------
// Implicit Holders
// ---------------------------------------------------------------------------

#[test]
fn minted_to_account_gets_holder_with_admin_recorded() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();
    ledger.initialize(ADMIN, 0).unwrap();
    ledger.mint(ADMIN, USER_B, 60, &mut log).unwrap();

    // The implicit resource records the minting admin, so the recipient
    // can retire credits but can never mint or re-initialize.
    assert_eq!(ledger.admin_of(USER_B), Some(ADMIN));
    assert!(matches!(
        ledger.mint(USER_B, USER_B, 1, &mut log),
        Err(LedgerError::NotAuthorized { .. })
    ));
    assert!(matches!(
        ledger.initialize(USER_B, 1),
        Err(LedgerError::AlreadyInitialized { .. })
    ));
    assert_eq!(ledger.burn(USER_B, 60, &mut log).unwrap(), 0);
    assert_conserved(&ledger);
}

#[test]
fn two_admins_mint_into_disjoint_accounts() {
    let mut ledger = OffsetLedger::new();
    let mut log = MemoryEventLog::new();
    ledger.initialize("bco:reg1", 100).unwrap();
    ledger.initialize("bco:reg2", 200).unwrap();

    ledger.mint("bco:reg1", "bco:p1", 10, &mut log).unwrap();
    ledger.mint("bco:reg2", "bco:p2", 20, &mut log).unwrap();

    assert_eq!(ledger.admin_of("bco:p1"), Some("bco:reg1"));
    assert_eq!(ledger.admin_of("bco:p2"), Some("bco:reg2"));
    assert_eq!(ledger.total_supply(), 330);
    assert_conserved(&ledger);
}
