// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    assign_one, create_test_store, create_test_worker, domain_error, idx, mon_am, name, role,
    run, run_ok, slot,
};
use crate::{Command, CoreError, ListKind, Store, Transition, WorkerEdit};
use rota_domain::{Day, DomainError, Phone, Role, RoleRequirement, Slot, Time};

fn add_shift(day: Day, time: Time, requirements: Vec<RoleRequirement>) -> Command {
    Command::AddShift {
        day,
        time,
        requirements,
    }
}

#[test]
fn test_add_role() {
    let transition: Transition = run(
        &create_test_store(),
        Command::AddRole {
            role: role("Baker"),
        },
    )
    .unwrap();

    assert_eq!(transition.new_store.roles().len(), 3);
    assert_eq!(transition.message, "New role added: Baker");
}

#[test]
fn test_add_role_rejects_duplicates_and_leave() {
    let store: Store = create_test_store();

    let duplicate: DomainError = domain_error(run(
        &store,
        Command::AddRole {
            role: role("COOK"),
        },
    ));
    let leave: DomainError = domain_error(run(
        &store,
        Command::AddRole {
            role: Role::leave(),
        },
    ));

    assert_eq!(duplicate, DomainError::DuplicateRole(role("Cook")));
    assert_eq!(leave, DomainError::CannotModifyLeaveRole);
}

#[test]
fn test_delete_role_index_out_of_range() {
    let err: CoreError = run(&create_test_store(), Command::DeleteRole { index: idx(5) })
        .unwrap_err();

    assert_eq!(
        err,
        CoreError::IndexOutOfRange {
            list: ListKind::Roles,
            index: 5,
            size: 2,
        }
    );
}

#[test]
fn test_add_shift_keeps_week_order_and_resets_fill() {
    let mut requirement: RoleRequirement = RoleRequirement::new(role("Cook"), 2);
    requirement.quantity_filled = 2;

    let store: Store = run_ok(
        &create_test_store(),
        add_shift(Day::Mon, Time::Pm, vec![requirement]),
    );

    let slots: Vec<Slot> = store.shifts().iter().map(rota_domain::Shift::slot).collect();
    assert_eq!(
        slots,
        vec![
            mon_am(),
            slot(Day::Mon, Time::Pm),
            slot(Day::Tue, Time::Pm),
        ]
    );
    assert_eq!(store.shifts()[1].requirements[0].quantity_filled, 0);
}

#[test]
fn test_add_shift_rejections() {
    let store: Store = create_test_store();
    let cases: Vec<(Command, DomainError)> = vec![
        (
            add_shift(Day::Mon, Time::Am, Vec::new()),
            DomainError::DuplicateShift(mon_am()),
        ),
        (
            add_shift(Day::Fri, Time::Am, vec![RoleRequirement::new(role("Baker"), 1)]),
            DomainError::RoleNotFound(role("Baker")),
        ),
        (
            add_shift(Day::Fri, Time::Am, vec![RoleRequirement::new(role("Cook"), 0)]),
            DomainError::InvalidQuantity { role: role("Cook") },
        ),
        (
            add_shift(
                Day::Fri,
                Time::Am,
                vec![
                    RoleRequirement::new(role("Cook"), 1),
                    RoleRequirement::new(role("cook"), 2),
                ],
            ),
            DomainError::DuplicateRole(role("Cook")),
        ),
        (
            add_shift(Day::Fri, Time::Am, vec![RoleRequirement::new(Role::leave(), 1)]),
            DomainError::CannotModifyLeaveRole,
        ),
    ];

    for (command, expected) in cases {
        assert_eq!(domain_error(run(&store, command)), expected);
    }
}

#[test]
fn test_add_worker() {
    let store: Store = run_ok(
        &create_test_store(),
        Command::AddWorker {
            worker: create_test_worker("Dave", &["Cook"]),
        },
    );

    assert_eq!(store.workers().len(), 4);
    assert_eq!(store.workers()[3].name, name("Dave"));
}

#[test]
fn test_add_worker_rejections() {
    let store: Store = create_test_store();

    let duplicate: DomainError = domain_error(run(
        &store,
        Command::AddWorker {
            worker: create_test_worker("ALICE", &[]),
        },
    ));
    let unknown_role: DomainError = domain_error(run(
        &store,
        Command::AddWorker {
            worker: create_test_worker("Dave", &["Baker"]),
        },
    ));

    assert_eq!(duplicate, DomainError::DuplicateWorker(name("ALICE")));
    assert_eq!(unknown_role, DomainError::RoleNotFound(role("Baker")));
}

#[test]
fn test_edit_worker_contact_details_keeps_assignments() {
    let store: Store = run_ok(&create_test_store(), assign_one(1, 1, "Cashier"));

    let store: Store = run_ok(
        &store,
        Command::EditWorker {
            index: idx(1),
            edit: WorkerEdit {
                phone: Some(Phone::new("11112222").unwrap()),
                ..WorkerEdit::default()
            },
        },
    );

    assert_eq!(store.workers()[0].phone.value(), "11112222");
    assert_eq!(store.filled(mon_am(), &role("Cashier")), 1);
}
