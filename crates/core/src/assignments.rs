// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assign, unassign and reassign.

use crate::command::Assignee;
use crate::error::CoreError;
use crate::store::{Store, Transition};
use crate::view::View;
use rota_domain::{
    Assignment, DomainError, Index, Name, Role, Shift, Slot, Worker, validate_assignment,
};

/// Resolves worker indices, dropping repeats of the same worker.
pub(crate) fn resolve_workers(
    store: &Store,
    view: &View,
    indices: &[Index],
) -> Result<Vec<Worker>, CoreError> {
    let mut workers: Vec<Worker> = Vec::with_capacity(indices.len());
    for index in indices {
        let worker: &Worker = view.worker_at(store, *index)?;
        if !workers.iter().any(|w| w.is_same_worker(worker)) {
            workers.push(worker.clone());
        }
    }
    Ok(workers)
}

/// Validates `role` for `worker` on the shift at `slot` against the current
/// contents of `store`, then inserts the assignment.
pub(crate) fn validate_and_insert(
    store: &mut Store,
    slot: Slot,
    worker: &Worker,
    role: Role,
) -> Result<Assignment, CoreError> {
    let shift: &Shift = store
        .find_shift(slot)
        .ok_or_else(|| CoreError::Internal(format!("shift on {slot} vanished")))?;
    validate_assignment(store.roles(), store.assignments(), shift, worker, &role)?;

    let assignment: Assignment = Assignment::new(slot, worker.name.clone(), role);
    store.insert_assignment(assignment.clone())?;
    Ok(assignment)
}

/// Assigns every worker in the batch, or none of them.
///
/// Pairs are validated one after another against a working copy, so capacity
/// and duplicate checks see the earlier pairs of the same batch.
pub(crate) fn assign(
    store: &Store,
    view: &View,
    shift: Index,
    assignees: &[Assignee],
) -> Result<Transition, CoreError> {
    let slot: Slot = view.shift_at(store, shift)?.slot();

    let mut pairs: Vec<(Worker, Role)> = Vec::with_capacity(assignees.len());
    for assignee in assignees {
        if assignee.role.is_leave() {
            return Err(CoreError::DomainViolation(DomainError::CannotModifyLeaveRole));
        }
        let worker: Worker = view.worker_at(store, assignee.worker)?.clone();
        pairs.push((worker, assignee.role.clone()));
    }

    let mut new_store: Store = store.clone();
    let mut added: Vec<Assignment> = Vec::with_capacity(pairs.len());
    for (worker, role) in pairs {
        added.push(validate_and_insert(&mut new_store, slot, &worker, role)?);
    }

    Ok(Transition::new(
        new_store,
        format!("New assignment(s) added:\n{}", lines(&added)),
    ))
}

/// Removes every listed worker from the shift, or none of them.
pub(crate) fn unassign(
    store: &Store,
    view: &View,
    shift: Index,
    workers: &[Index],
) -> Result<Transition, CoreError> {
    let slot: Slot = view.shift_at(store, shift)?.slot();
    let workers: Vec<Worker> = resolve_workers(store, view, workers)?;

    for worker in &workers {
        let assignment: &Assignment =
            store
                .find_assignment(slot, &worker.name)
                .ok_or_else(|| DomainError::AssignmentNotFound {
                    worker: worker.name.clone(),
                    slot,
                })?;
        if assignment.is_leave() {
            return Err(CoreError::DomainViolation(
                DomainError::CannotUnassignLeave {
                    worker: worker.name.clone(),
                    slot,
                },
            ));
        }
    }

    let mut new_store: Store = store.clone();
    let mut removed: Vec<Assignment> = Vec::with_capacity(workers.len());
    for worker in &workers {
        let assignment: Assignment = new_store
            .remove_assignment(slot, &worker.name)
            .ok_or_else(|| {
                CoreError::Internal(format!("assignment of '{}' on {slot} vanished", worker.name))
            })?;
        removed.push(assignment);
    }

    Ok(Transition::new(
        new_store,
        format!("Assignment(s) removed:\n{}", lines(&removed)),
    ))
}

/// Replaces one assignment with another for a possibly different worker,
/// shift and role.
pub(crate) fn reassign(
    store: &Store,
    view: &View,
    old_worker: Index,
    new_worker: Index,
    old_shift: Index,
    new_shift: Index,
    role: Role,
) -> Result<Transition, CoreError> {
    let old_name: Name = view.worker_at(store, old_worker)?.name.clone();
    let worker: Worker = view.worker_at(store, new_worker)?.clone();
    let old_slot: Slot = view.shift_at(store, old_shift)?.slot();
    let new_slot: Slot = view.shift_at(store, new_shift)?.slot();

    let old: Assignment = store
        .find_assignment(old_slot, &old_name)
        .cloned()
        .ok_or_else(|| DomainError::AssignmentNotFound {
            worker: old_name.clone(),
            slot: old_slot,
        })?;

    if old.is_leave() {
        return Err(CoreError::DomainViolation(
            DomainError::CannotUnassignLeave {
                worker: old_name,
                slot: old_slot,
            },
        ));
    }
    if role.is_leave() {
        return Err(CoreError::DomainViolation(DomainError::CannotModifyLeaveRole));
    }

    let same_pair: bool = old.involves(new_slot, &worker.name);
    if same_pair && old.role == role {
        return Err(CoreError::DomainViolation(DomainError::DuplicateAssignment(
            old,
        )));
    }
    let occupant: Option<&Assignment> = if same_pair {
        None
    } else {
        store.find_assignment(new_slot, &worker.name)
    };
    if let Some(existing) = occupant {
        return Err(CoreError::DomainViolation(DomainError::ExistingAssignment(
            existing.clone(),
        )));
    }

    let mut new_store: Store = store.clone();
    new_store
        .remove_assignment(old_slot, &old_name)
        .ok_or_else(|| CoreError::Internal(format!("assignment vanished: {old}")))?;
    let new: Assignment = validate_and_insert(&mut new_store, new_slot, &worker, role)?;

    Ok(Transition::new(
        new_store,
        format!("Reassigned: {old} -> {new}"),
    ))
}

pub(crate) fn lines(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}
