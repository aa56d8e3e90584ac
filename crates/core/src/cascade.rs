// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Propagation of role, shift and worker edits into assignments.
//!
//! Every cascade runs in two phases. A plan is computed from the unmodified
//! store: which assignments are dropped, which are re-pointed, or that the
//! edit must be rejected. The plan is then applied to a copy of the store by
//! detaching every affected assignment, changing the entity, and reattaching
//! the re-pointed assignments so fill counts are rebuilt against the edited
//! entity.

use crate::error::CoreError;
use crate::store::Store;
use rota_domain::{Assignment, DomainError, Name, Role, Shift, Slot, Worker};
use tracing::debug;

/// Assignment rewrites computed from a pre-edit snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CascadePlan {
    removed: Vec<Assignment>,
    repointed: Vec<(Assignment, Assignment)>,
}

impl CascadePlan {
    fn remove(&mut self, assignment: &Assignment) {
        self.removed.push(assignment.clone());
    }

    fn repoint(&mut self, from: &Assignment, to: Assignment) {
        self.repointed.push((from.clone(), to));
    }

    /// Assignments the cascade deletes.
    pub(crate) fn removed(&self) -> &[Assignment] {
        &self.removed
    }

    /// Removes every assignment the plan touches from `store`.
    pub(crate) fn detach(&self, store: &mut Store) -> Result<(), CoreError> {
        let touched = self
            .removed
            .iter()
            .chain(self.repointed.iter().map(|(from, _)| from));

        for assignment in touched {
            store
                .remove_assignment(assignment.slot, &assignment.worker)
                .ok_or_else(|| {
                    CoreError::Internal(format!("planned assignment vanished: {assignment}"))
                })?;
        }
        Ok(())
    }

    /// Inserts the re-pointed assignments into `store`.
    pub(crate) fn reattach(self, store: &mut Store) -> Result<(), CoreError> {
        for (_, to) in self.repointed {
            store.insert_assignment(to)?;
        }
        Ok(())
    }

    fn log(&self, trigger: &str) {
        debug!(
            trigger,
            removed = self.removed.len(),
            repointed = self.repointed.len(),
            "Planned cascade"
        );
    }
}

/// Plans the deletion of a role: every assignment filling it goes.
pub(crate) fn plan_role_delete(store: &Store, role: &Role) -> CascadePlan {
    let mut plan: CascadePlan = CascadePlan::default();
    for assignment in store.assignments_with_role(role) {
        plan.remove(assignment);
    }
    plan.log("role delete");
    plan
}

/// Plans a role rename: every assignment filling it is relabelled.
pub(crate) fn plan_role_rename(store: &Store, old: &Role, new: &Role) -> CascadePlan {
    let mut plan: CascadePlan = CascadePlan::default();
    for assignment in store.assignments_with_role(old) {
        plan.repoint(assignment, assignment.with_role(new.clone()));
    }
    plan.log("role rename");
    plan
}

/// Plans a shift edit.
///
/// For each assignment on the shift:
/// - a non-leave assignment whose role the edited shift no longer requires,
///   or whose worker is unavailable at the edited slot, is dropped;
/// - otherwise, if the edited shift requires fewer workers in the role than
///   currently fill it, the whole edit is rejected;
/// - otherwise the assignment moves to the edited slot.
///
/// Leave assignments always move with the shift.
///
/// # Errors
///
/// Returns `MustUnassignWorkersFirst` if a requirement would shrink below the
/// number of workers filling it.
pub(crate) fn plan_shift_edit(
    store: &Store,
    old: &Shift,
    edited: &Shift,
) -> Result<CascadePlan, CoreError> {
    let mut plan: CascadePlan = CascadePlan::default();
    let new_slot: Slot = edited.slot();

    for assignment in store.assignments_on(old.slot()) {
        if assignment.is_leave() {
            plan.repoint(assignment, assignment.moved_to(new_slot));
            continue;
        }

        let worker: &Worker = store.find_worker(&assignment.worker).ok_or_else(|| {
            CoreError::Internal(format!("assignment without worker: {assignment}"))
        })?;

        if !edited.requires(&assignment.role) || worker.is_unavailable_at(new_slot) {
            plan.remove(assignment);
            continue;
        }

        let required: u32 = edited.quantity_required(&assignment.role);
        let filled: u32 = store.filled(old.slot(), &assignment.role);
        if required < filled {
            return Err(CoreError::DomainViolation(
                DomainError::MustUnassignWorkersFirst {
                    role: assignment.role.clone(),
                    slot: new_slot,
                    required,
                    filled,
                },
            ));
        }

        plan.repoint(assignment, assignment.moved_to(new_slot));
    }

    plan.log("shift edit");
    Ok(plan)
}

/// Plans a worker edit.
///
/// A non-leave assignment is dropped when the edited worker no longer holds
/// its role or is unavailable for its shift; everything else is re-pointed to
/// the edited worker's name.
pub(crate) fn plan_worker_edit(store: &Store, old: &Worker, edited: &Worker) -> CascadePlan {
    let mut plan: CascadePlan = CascadePlan::default();

    for assignment in store.assignments_of(&old.name) {
        let still_fits: bool = assignment.is_leave()
            || (edited.has_role(&assignment.role) && !edited.is_unavailable_at(assignment.slot));

        if still_fits {
            plan.repoint(assignment, assignment.renamed_to(edited.name.clone()));
        } else {
            plan.remove(assignment);
        }
    }

    plan.log("worker edit");
    plan
}

/// Plans the deletion of a shift: all its assignments go.
pub(crate) fn plan_shift_delete(store: &Store, slot: Slot) -> CascadePlan {
    let mut plan: CascadePlan = CascadePlan::default();
    for assignment in store.assignments_on(slot) {
        plan.remove(assignment);
    }
    plan.log("shift delete");
    plan
}

/// Plans the deletion of a worker: all their assignments go.
pub(crate) fn plan_worker_delete(store: &Store, name: &Name) -> CascadePlan {
    let mut plan: CascadePlan = CascadePlan::default();
    for assignment in store.assignments_of(name) {
        plan.remove(assignment);
    }
    plan.log("worker delete");
    plan
}
