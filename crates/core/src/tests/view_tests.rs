// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{assign_one, create_test_store, idx, name, role, tue_pm};
use crate::{CoreError, ListKind, Store, View, apply};
use rota_domain::{Day, Role, Worker};

#[test]
fn test_worker_filter_changes_index_resolution() {
    let store: Store = create_test_store();
    let cook: Role = role("Cook");
    let view: View = View::all().with_worker_filter(move |w: &Worker| w.has_role(&cook));

    let listed: Vec<&Worker> = view.workers(&store);
    assert_eq!(listed.len(), 2);
    assert_eq!(view.worker_at(&store, idx(2)).unwrap().name, name("Carol"));

    let store: Store = apply(&store, &view, assign_one(1, 2, "Cook"))
        .unwrap()
        .new_store;
    assert_eq!(store.assignments()[0].worker, name("Carol"));
}

#[test]
fn test_shift_filter_bounds_indices() {
    let store: Store = create_test_store();
    let view: View = View::all().with_shift_filter(|s| s.day == Day::Tue);

    assert_eq!(view.shift_at(&store, idx(1)).unwrap().slot(), tue_pm());
    assert_eq!(
        apply(&store, &view, assign_one(2, 1, "Cashier")).unwrap_err(),
        CoreError::IndexOutOfRange {
            list: ListKind::Shifts,
            index: 2,
            size: 1,
        }
    );
}

#[test]
fn test_roles_are_never_filtered() {
    let store: Store = create_test_store();
    let view: View = View::all()
        .with_worker_filter(|_| false)
        .with_shift_filter(|_| false);

    assert!(view.workers(&store).is_empty());
    assert!(view.shifts(&store).is_empty());
    assert_eq!(view.role_at(&store, idx(2)).unwrap(), &role("Cook"));
}
