// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, Store, StoreSnapshot, Transition, View, apply};
use rota_domain::{
    Address, Day, DomainError, Index, Name, Pay, Phone, Role, RoleRequirement, Shift, Slot, Time,
    Worker,
};
use std::collections::{BTreeSet, HashSet};

pub fn role(label: &str) -> Role {
    Role::new(label).unwrap()
}

pub fn name(value: &str) -> Name {
    Name::new(value).unwrap()
}

pub fn idx(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

pub fn slot(day: Day, time: Time) -> Slot {
    Slot::new(day, time)
}

pub fn mon_am() -> Slot {
    slot(Day::Mon, Time::Am)
}

pub fn tue_pm() -> Slot {
    slot(Day::Tue, Time::Pm)
}

pub fn create_test_worker(worker_name: &str, roles: &[&str]) -> Worker {
    Worker::new(
        name(worker_name),
        Phone::new("98765432").unwrap(),
        Pay::new("15.50").unwrap(),
        Address::new("1 Main Street").unwrap(),
        roles.iter().map(|r| role(r)).collect(),
        BTreeSet::new(),
    )
}

pub fn create_test_shift(day: Day, time: Time, requirements: &[(&str, u32)]) -> Shift {
    Shift::new(
        day,
        time,
        requirements
            .iter()
            .map(|(label, quantity)| RoleRequirement::new(role(label), *quantity))
            .collect(),
    )
}

/// Roles `Cashier` and `Cook`.
///
/// Workers, in listing order: 1 `Alice` (Cashier, Cook), 2 `Bob` (Cashier),
/// 3 `Carol` (Cook).
///
/// Shifts, in listing order: 1 `MON AM` (Cashier x2, Cook x1), 2 `TUE PM`
/// (Cashier x1).
pub fn create_test_store() -> Store {
    Store::from_snapshot(StoreSnapshot {
        roles: vec![role("Cashier"), role("Cook")],
        workers: vec![
            create_test_worker("Alice", &["Cashier", "Cook"]),
            create_test_worker("Bob", &["Cashier"]),
            create_test_worker("Carol", &["Cook"]),
        ],
        shifts: vec![
            create_test_shift(Day::Tue, Time::Pm, &[("Cashier", 1)]),
            create_test_shift(Day::Mon, Time::Am, &[("Cashier", 2), ("Cook", 1)]),
        ],
        assignments: Vec::new(),
    })
}

pub fn run(store: &Store, command: Command) -> Result<Transition, CoreError> {
    apply(store, &View::all(), command)
}

pub fn run_ok(store: &Store, command: Command) -> Store {
    let transition: Transition = run(store, command).unwrap();
    assert_invariants(&transition.new_store);
    transition.new_store
}

pub fn domain_error(result: Result<Transition, CoreError>) -> DomainError {
    match result {
        Err(CoreError::DomainViolation(err)) => err,
        other => panic!("expected a domain violation, got {other:?}"),
    }
}

pub fn assign_one(shift: usize, worker: usize, label: &str) -> Command {
    Command::Assign {
        shift: idx(shift),
        assignees: vec![crate::Assignee::new(idx(worker), role(label))],
    }
}

/// Checks the store invariants that every reachable state must hold.
pub fn assert_invariants(store: &Store) {
    let mut pairs: HashSet<(Slot, String)> = HashSet::new();
    for assignment in store.assignments() {
        assert!(
            pairs.insert((assignment.slot, assignment.worker.value().to_lowercase())),
            "duplicate assignment {assignment}"
        );

        let worker: &Worker = store
            .find_worker(&assignment.worker)
            .unwrap_or_else(|| panic!("dangling worker in {assignment}"));
        let shift: &Shift = store
            .find_shift(assignment.slot)
            .unwrap_or_else(|| panic!("dangling shift in {assignment}"));

        if !assignment.is_leave() {
            assert!(store.has_role(&assignment.role));
            assert!(shift.requires(&assignment.role));
            assert!(worker.has_role(&assignment.role));
            assert!(!worker.is_unavailable_at(assignment.slot));
        }
    }

    for shift in store.shifts() {
        for requirement in &shift.requirements {
            let filled: u32 = store.filled(shift.slot(), &requirement.role);
            assert_eq!(requirement.quantity_filled, filled);
            assert!(filled <= requirement.quantity_required);
        }
    }
}
