// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_shift, create_test_worker, mon_am, role};
use crate::{
    Address, Assignment, Day, DomainError, Index, Name, Pay, Phone, Role, RoleRequirement, Shift,
    Slot, Time, Worker,
};
use std::collections::BTreeSet;

#[test]
fn test_role_is_normalized_and_case_preserved() {
    let role: Role = Role::new("  Floor   Manager ").unwrap();
    assert_eq!(role.label(), "Floor Manager");
}

#[test]
fn test_role_equality_ignores_case() {
    assert_eq!(role("cashier"), role("Cashier"));
    assert_ne!(role("Cashier"), role("Cook"));
}

#[test]
fn test_leave_label_parses_to_sentinel() {
    assert_eq!(Role::new("leave").unwrap(), Role::Leave);
    assert_eq!(Role::new("LEAVE").unwrap(), Role::Leave);
    assert!(Role::new("Leave").unwrap().is_leave());
    assert!(!role("Cashier").is_leave());
}

#[test]
fn test_role_rejects_symbols_and_blanks() {
    assert!(matches!(Role::new(""), Err(DomainError::InvalidRole(_))));
    assert!(matches!(Role::new("   "), Err(DomainError::InvalidRole(_))));
    assert!(matches!(Role::new("Cook!"), Err(DomainError::InvalidRole(_))));
}

#[test]
fn test_leave_sorts_after_named_roles() {
    let mut roles: Vec<Role> = vec![Role::Leave, role("Zebra"), role("apple")];
    roles.sort();
    assert_eq!(roles, vec![role("apple"), role("Zebra"), Role::Leave]);
}

#[test]
fn test_role_serializes_as_label() {
    let json: String = serde_json::to_string(&role("Cashier")).unwrap();
    assert_eq!(json, "\"Cashier\"");
    let leave: Role = serde_json::from_str("\"leave\"").unwrap();
    assert_eq!(leave, Role::Leave);
}

#[test]
fn test_day_and_time_parse_case_insensitively() {
    assert_eq!("mon".parse::<Day>().unwrap(), Day::Mon);
    assert_eq!("Sunday".parse::<Day>().unwrap(), Day::Sun);
    assert_eq!("pm".parse::<Time>().unwrap(), Time::Pm);
    assert!(matches!("noon".parse::<Time>(), Err(DomainError::InvalidTime(_))));
    assert!(matches!("someday".parse::<Day>(), Err(DomainError::InvalidDay(_))));
}

#[test]
fn test_slot_parses_with_any_separator() {
    let expected: Slot = Slot::new(Day::Sat, Time::Pm);
    assert_eq!("SAT:PM".parse::<Slot>().unwrap(), expected);
    assert_eq!("sat-pm".parse::<Slot>().unwrap(), expected);
    assert_eq!("Sat PM".parse::<Slot>().unwrap(), expected);
    assert!(matches!("SAT".parse::<Slot>(), Err(DomainError::InvalidSlot(_))));
    assert!(matches!(
        "SAT:PM:AM".parse::<Slot>(),
        Err(DomainError::InvalidSlot(_))
    ));
}

#[test]
fn test_slot_index_round_trips_over_the_week() {
    assert_eq!(mon_am().index(), 0);
    assert_eq!(Slot::new(Day::Sun, Time::Pm).index(), 13);
    assert_eq!(Slot::from_index(14), mon_am());
    assert_eq!(Slot::from_index(11), Slot::new(Day::Sat, Time::Pm));
}

#[test]
fn test_index_is_one_based_for_users() {
    let index: Index = "3".parse().unwrap();
    assert_eq!(index.zero_based(), 2);
    assert_eq!(index.one_based(), 3);
    assert!(matches!("0".parse::<Index>(), Err(DomainError::InvalidIndex(_))));
    assert!(matches!("x".parse::<Index>(), Err(DomainError::InvalidIndex(_))));
}

#[test]
fn test_pay_parsing() {
    assert_eq!(Pay::new("15").unwrap().cents(), 1500);
    assert_eq!(Pay::new("15.5").unwrap().cents(), 1550);
    assert_eq!(Pay::new("15.05").unwrap().to_string(), "15.05");
    assert!(matches!(Pay::new("15.555"), Err(DomainError::InvalidPay(_))));
    assert!(matches!(Pay::new("-1"), Err(DomainError::InvalidPay(_))));
    assert!(matches!(Pay::new(".5"), Err(DomainError::InvalidPay(_))));
}

#[test]
fn test_phone_and_address_validation() {
    assert!(Phone::new("123").is_ok());
    assert!(matches!(Phone::new("12"), Err(DomainError::InvalidPhone(_))));
    assert!(matches!(Phone::new("12a4"), Err(DomainError::InvalidPhone(_))));
    assert!(matches!(Address::new("  "), Err(DomainError::InvalidAddress(_))));
}

#[test]
fn test_worker_identity_is_case_insensitive_name() {
    let alice: Worker = create_test_worker("Alice Tan", &["Cashier"]);
    let mut other: Worker = create_test_worker("alice tan", &[]);
    other.phone = Phone::new("11111111").unwrap();

    assert!(alice.is_same_worker(&other));
    assert_ne!(alice, other);
}

#[test]
fn test_worker_unavailability() {
    let mut worker: Worker = create_test_worker("Alice", &[]);
    worker.unavailabilities = BTreeSet::from([mon_am()]);
    let shift: Shift = create_test_shift(Day::Mon, Time::Am, &[]);

    assert!(worker.is_unavailable_for(&shift));
    assert!(!worker.is_unavailable_at(Slot::new(Day::Mon, Time::Pm)));
}

#[test]
fn test_requirement_parsing() {
    let requirement: RoleRequirement = "Cashier=2".parse().unwrap();
    assert_eq!(requirement.role, role("Cashier"));
    assert_eq!(requirement.quantity_required, 2);
    assert_eq!(requirement.quantity_filled, 0);

    let bare: RoleRequirement = "Cook".parse().unwrap();
    assert_eq!(bare.quantity_required, 1);

    assert!(matches!(
        "Cook=many".parse::<RoleRequirement>(),
        Err(DomainError::InvalidRequirement(_))
    ));
}

#[test]
fn test_shift_fill_counters() {
    let mut shift: Shift = create_test_shift(Day::Mon, Time::Am, &[("Cashier", 1)]);

    assert!(shift.increment_filled(&role("cashier")));
    assert!(!shift.requirement(&role("Cashier")).unwrap().has_room());
    assert!(!shift.increment_filled(&role("Cook")));
    assert!(shift.decrement_filled(&role("Cashier")));
    assert!(shift.decrement_filled(&role("Cashier")));
    assert_eq!(shift.requirement(&role("Cashier")).unwrap().quantity_filled, 0);
}

#[test]
fn test_assignment_identity_ignores_role() {
    let alice: Name = Name::new("Alice").unwrap();
    let working: Assignment = Assignment::new(mon_am(), alice.clone(), role("Cashier"));
    let leave: Assignment = Assignment::leave(mon_am(), Name::new("ALICE").unwrap());
    let elsewhere: Assignment = Assignment::leave(Slot::new(Day::Tue, Time::Am), alice);

    assert!(working.is_same_assignment(&leave));
    assert!(!working.is_same_assignment(&elsewhere));
    assert!(leave.is_leave());
}
