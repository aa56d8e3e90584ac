// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consistency checks run on a snapshot before it becomes a store.
//!
//! The store trusts what it is given, so anything a hand-edited or stale data
//! file could get wrong is caught here: duplicate identities first, then
//! references that point at nothing.

use crate::error::PersistenceError;
use rota::StoreSnapshot;
use rota_domain::{Assignment, Role, Shift, Slot, Worker};
use std::collections::HashSet;

/// Checks a snapshot for duplicate entities and dangling references.
///
/// # Errors
///
/// Returns `InvalidData` describing the first problem found.
pub fn check_snapshot(snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
    check_roles(&snapshot.roles)?;
    check_workers(&snapshot.workers)?;
    check_shifts(&snapshot.shifts)?;
    check_assignments(&snapshot.assignments)?;
    check_references(snapshot)
}

fn check_roles(roles: &[Role]) -> Result<(), PersistenceError> {
    let mut seen: HashSet<&Role> = HashSet::new();
    for role in roles {
        if role.is_leave() {
            return Err(invalid(format!("the reserved role '{role}' is listed")));
        }
        if !seen.insert(role) {
            return Err(invalid(format!("duplicate role '{role}'")));
        }
    }
    Ok(())
}

fn check_workers(workers: &[Worker]) -> Result<(), PersistenceError> {
    let mut seen: HashSet<String> = HashSet::new();
    for worker in workers {
        if !seen.insert(worker.name.value().to_lowercase()) {
            return Err(invalid(format!("duplicate worker '{}'", worker.name)));
        }
    }
    Ok(())
}

fn check_shifts(shifts: &[Shift]) -> Result<(), PersistenceError> {
    let mut seen: HashSet<Slot> = HashSet::new();
    for shift in shifts {
        if !seen.insert(shift.slot()) {
            return Err(invalid(format!("duplicate shift on {}", shift.slot())));
        }
    }
    Ok(())
}

fn check_assignments(assignments: &[Assignment]) -> Result<(), PersistenceError> {
    let mut seen: HashSet<(Slot, String)> = HashSet::new();
    for assignment in assignments {
        if !seen.insert((assignment.slot, assignment.worker.value().to_lowercase())) {
            return Err(invalid(format!("duplicate assignment '{assignment}'")));
        }
    }
    Ok(())
}

fn check_references(snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
    for worker in &snapshot.workers {
        if let Some(role) = worker.roles.iter().find(|r| !snapshot.roles.contains(*r)) {
            return Err(invalid(format!(
                "worker '{}' holds unknown role '{role}'",
                worker.name
            )));
        }
    }

    for shift in &snapshot.shifts {
        if let Some(requirement) = shift
            .requirements
            .iter()
            .find(|r| !snapshot.roles.contains(&r.role))
        {
            return Err(invalid(format!(
                "shift on {} requires unknown role '{}'",
                shift.slot(),
                requirement.role
            )));
        }
    }

    for assignment in &snapshot.assignments {
        if !snapshot
            .workers
            .iter()
            .any(|w| w.name.matches(&assignment.worker))
        {
            return Err(invalid(format!(
                "assignment '{assignment}' names a missing worker"
            )));
        }
        let Some(shift) = snapshot
            .shifts
            .iter()
            .find(|s| s.slot() == assignment.slot)
        else {
            return Err(invalid(format!(
                "assignment '{assignment}' names a missing shift"
            )));
        };
        if !assignment.is_leave() && !shift.requires(&assignment.role) {
            return Err(invalid(format!(
                "assignment '{assignment}' fills a role the shift does not require"
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> PersistenceError {
    PersistenceError::InvalidData(message)
}
