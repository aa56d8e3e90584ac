// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_store, create_test_worker};
use crate::{PersistenceError, check_snapshot};
use rota::StoreSnapshot;
use rota_domain::{Assignment, Day, Name, Role, Shift, Slot, Time};

fn expect_invalid(snapshot: &StoreSnapshot) -> String {
    match check_snapshot(snapshot) {
        Err(PersistenceError::InvalidData(message)) => message,
        other => panic!("expected invalid data, got {other:?}"),
    }
}

fn mon_am() -> Slot {
    Slot::new(Day::Mon, Time::Am)
}

#[test]
fn test_consistent_snapshot_passes() {
    assert!(check_snapshot(&create_test_store().snapshot()).is_ok());
}

#[test]
fn test_reserved_role_in_role_list() {
    let mut snapshot: StoreSnapshot = create_test_store().snapshot();
    snapshot.roles.push(Role::leave());

    assert_eq!(
        expect_invalid(&snapshot),
        "the reserved role 'Leave' is listed"
    );
}

#[test]
fn test_duplicate_worker_by_name_identity() {
    let mut snapshot: StoreSnapshot = create_test_store().snapshot();
    snapshot.workers.push(create_test_worker("ALICE", &[]));

    assert_eq!(expect_invalid(&snapshot), "duplicate worker 'ALICE'");
}

#[test]
fn test_duplicate_shift_by_slot() {
    let mut snapshot: StoreSnapshot = create_test_store().snapshot();
    snapshot.shifts.push(Shift::empty(mon_am()));

    assert_eq!(expect_invalid(&snapshot), "duplicate shift on MON AM");
}

#[test]
fn test_duplicate_assignment_by_pair() {
    let mut snapshot: StoreSnapshot = create_test_store().snapshot();
    snapshot
        .assignments
        .push(Assignment::leave(mon_am(), Name::new("alice").unwrap()));

    assert!(expect_invalid(&snapshot).starts_with("duplicate assignment"));
}

#[test]
fn test_dangling_references() {
    let mut missing_worker: StoreSnapshot = create_test_store().snapshot();
    missing_worker
        .assignments
        .push(Assignment::leave(mon_am(), Name::new("Carol").unwrap()));

    let mut missing_shift: StoreSnapshot = create_test_store().snapshot();
    missing_shift.assignments.push(Assignment::leave(
        Slot::new(Day::Fri, Time::Pm),
        Name::new("Alice").unwrap(),
    ));

    let mut unknown_role: StoreSnapshot = create_test_store().snapshot();
    unknown_role.roles.clear();

    assert!(expect_invalid(&missing_worker).ends_with("names a missing worker"));
    assert!(expect_invalid(&missing_shift).ends_with("names a missing shift"));
    assert_eq!(
        expect_invalid(&unknown_role),
        "worker 'Alice' holds unknown role 'Cashier'"
    );
}
