// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Address, Day, Name, Pay, Phone, Role, RoleRequirement, Shift, Slot, Time, Worker};
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

pub fn mon_am() -> Slot {
    Slot::new(Day::Mon, Time::Am)
}
