// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::args::Listing;
use rota::{Store, View};
use rota_domain::{Assignment, Shift, Worker};
use std::fmt::Write;

/// Renders a listing with the one-based indices commands expect.
#[must_use]
pub fn render(listing: Listing, store: &Store, view: &View) -> String {
    let rows: Vec<String> = match listing {
        Listing::Roles => store.roles().iter().map(ToString::to_string).collect(),
        Listing::Workers => view
            .workers(store)
            .into_iter()
            .map(Worker::to_string)
            .collect(),
        Listing::Shifts => view
            .shifts(store)
            .into_iter()
            .map(|shift| shift_row(store, shift))
            .collect(),
        Listing::Assignments => {
            let mut assignments: Vec<&Assignment> = store.assignments().iter().collect();
            assignments.sort_by_key(|a| a.slot);
            return if assignments.is_empty() {
                String::from("No assignments\n")
            } else {
                assignments.iter().fold(String::new(), |mut out, a| {
                    let _ = writeln!(out, "- {a}");
                    out
                })
            };
        }
    };

    if rows.is_empty() {
        return format!("No {} listed\n", noun(listing));
    }

    rows.iter()
        .enumerate()
        .fold(String::new(), |mut out, (i, row)| {
            let _ = writeln!(out, "{}. {row}", i + 1);
            out
        })
}

fn shift_row(store: &Store, shift: &Shift) -> String {
    let on_leave: Vec<String> = store
        .assignments_on(shift.slot())
        .filter(|a| a.is_leave())
        .map(|a| a.worker.to_string())
        .collect();

    if on_leave.is_empty() {
        shift.to_string()
    } else {
        format!("{shift}; On leave: {}", on_leave.join(", "))
    }
}

const fn noun(listing: Listing) -> &'static str {
    match listing {
        Listing::Roles => "roles",
        Listing::Workers => "workers",
        Listing::Shifts => "shifts",
        Listing::Assignments => "assignments",
    }
}
