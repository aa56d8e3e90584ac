// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota::{Assignee, Command, Store, View, apply};
use rota_domain::{
    Address, Day, Index, Name, Pay, Phone, Role, RoleRequirement, Time, Worker,
};
use std::collections::BTreeSet;

pub fn role(label: &str) -> Role {
    Role::new(label).unwrap()
}

pub fn create_test_worker(name: &str, roles: &[&str]) -> Worker {
    Worker::new(
        Name::new(name).unwrap(),
        Phone::new("98765432").unwrap(),
        Pay::new("15.50").unwrap(),
        Address::new("1 Main Street").unwrap(),
        roles.iter().map(|r| role(r)).collect(),
        BTreeSet::new(),
    )
}

fn step(store: &Store, command: Command) -> Store {
    apply(store, &View::all(), command).unwrap().new_store
}

/// One role, two workers, one shift with one worker assigned and the other
/// on leave.
pub fn create_test_store() -> Store {
    let first: Index = Index::from_one_based(1).unwrap();
    let second: Index = Index::from_one_based(2).unwrap();

    let store: Store = step(
        &Store::new(),
        Command::AddRole {
            role: role("Cashier"),
        },
    );
    let store: Store = step(
        &store,
        Command::AddWorker {
            worker: create_test_worker("Alice", &["Cashier"]),
        },
    );
    let store: Store = step(
        &store,
        Command::AddWorker {
            worker: create_test_worker("Bob", &[]),
        },
    );
    let store: Store = step(
        &store,
        Command::AddShift {
            day: Day::Mon,
            time: Time::Am,
            requirements: vec![RoleRequirement::new(role("Cashier"), 2)],
        },
    );
    let store: Store = step(
        &store,
        Command::Assign {
            shift: first,
            assignees: vec![Assignee::new(first, role("Cashier"))],
        },
    );
    step(
        &store,
        Command::TakeLeave {
            shift: first,
            workers: vec![second],
        },
    )
}
