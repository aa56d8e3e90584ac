// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Taking and cancelling leave.
//!
//! Leave is exempt from role-fit, availability and requirement checks. A
//! worker on leave for a shift holds no other assignment on it, so taking
//! leave over an existing assignment replaces that assignment and reports it
//! back as a reassignment.

use crate::assignments::{lines, resolve_workers, validate_and_insert};
use crate::error::CoreError;
use crate::store::{Store, Transition};
use crate::view::View;
use rota_domain::{Assignment, DomainError, Index, Role, Shift, Slot, Worker, generate_range};
use tracing::debug;

/// Puts every listed worker on leave for one shift.
///
/// # Errors
///
/// Fails without changes if any worker is already on leave for the shift.
pub(crate) fn take_leave(
    store: &Store,
    view: &View,
    shift: Index,
    workers: &[Index],
) -> Result<Transition, CoreError> {
    let slot: Slot = view.shift_at(store, shift)?.slot();
    let workers: Vec<Worker> = resolve_workers(store, view, workers)?;

    for worker in &workers {
        if store
            .find_assignment(slot, &worker.name)
            .is_some_and(Assignment::is_leave)
        {
            return Err(CoreError::DomainViolation(
                DomainError::WorkerAlreadyOnLeave {
                    worker: worker.name.clone(),
                    slot,
                },
            ));
        }
    }

    let mut new_store: Store = store.clone();
    let mut added: Vec<Assignment> = Vec::with_capacity(workers.len());
    let mut reassignments: Vec<Assignment> = Vec::new();
    for worker in &workers {
        if let Some(replaced) = new_store.remove_assignment(slot, &worker.name) {
            reassignments.push(replaced);
        }
        added.push(validate_and_insert(
            &mut new_store,
            slot,
            worker,
            Role::leave(),
        )?);
    }

    let mut message: String = format!("Leave taken:\n{}", lines(&added));
    append_reassignments(&mut message, &reassignments);

    let mut transition: Transition = Transition::new(new_store, message);
    transition.reassignments = reassignments;
    Ok(transition)
}

/// Cancels every listed worker's leave for one shift.
///
/// # Errors
///
/// Fails without changes if any worker is not on leave for the shift.
pub(crate) fn cancel_leave(
    store: &Store,
    view: &View,
    shift: Index,
    workers: &[Index],
) -> Result<Transition, CoreError> {
    let slot: Slot = view.shift_at(store, shift)?.slot();
    let workers: Vec<Worker> = resolve_workers(store, view, workers)?;

    for worker in &workers {
        if !store
            .find_assignment(slot, &worker.name)
            .is_some_and(Assignment::is_leave)
        {
            return Err(CoreError::DomainViolation(DomainError::WorkerNotOnLeave {
                worker: worker.name.clone(),
                slot,
            }));
        }
    }

    let mut new_store: Store = store.clone();
    let mut removed: Vec<Assignment> = Vec::with_capacity(workers.len());
    for worker in &workers {
        let assignment: Assignment = new_store
            .remove_assignment(slot, &worker.name)
            .ok_or_else(|| {
                CoreError::Internal(format!("leave of '{}' on {slot} vanished", worker.name))
            })?;
        removed.push(assignment);
    }

    Ok(Transition::new(
        new_store,
        format!("Leave cancelled:\n{}", lines(&removed)),
    ))
}

/// Puts one worker on leave for every slot from `start` to `end`.
///
/// Each slot is handled on its own: an existing assignment is replaced,
/// existing leave or an unavailable slot is skipped, and a missing shift is
/// created with no requirements.
pub(crate) fn mass_take_leave(
    store: &Store,
    view: &View,
    worker: Index,
    start: Slot,
    end: Slot,
) -> Result<Transition, CoreError> {
    let worker: Worker = view.worker_at(store, worker)?.clone();

    let mut new_store: Store = store.clone();
    let mut added: Vec<Assignment> = Vec::new();
    let mut covered: usize = 0;
    let mut reassignments: Vec<Assignment> = Vec::new();

    for slot in generate_range(start, end) {
        let existing: Option<Assignment> = new_store.find_assignment(slot, &worker.name).cloned();

        match existing {
            Some(assignment) if assignment.is_leave() => {
                debug!(%slot, worker = %worker.name, "Slot already on leave");
                covered += 1;
                continue;
            }
            Some(assignment) => {
                debug!(%slot, replaced = %assignment, "Replacing assignment with leave");
                new_store
                    .remove_assignment(slot, &worker.name)
                    .ok_or_else(|| CoreError::Internal(format!("assignment vanished: {assignment}")))?;
                reassignments.push(assignment);
            }
            None if worker.is_unavailable_at(slot) => {
                debug!(%slot, worker = %worker.name, "Worker unavailable, skipping slot");
                covered += 1;
                continue;
            }
            None => {
                if new_store.find_shift(slot).is_none() {
                    debug!(%slot, "Creating empty shift for leave");
                    new_store.add_shift(Shift::empty(slot));
                }
            }
        }

        added.push(validate_and_insert(
            &mut new_store,
            slot,
            &worker,
            Role::leave(),
        )?);
    }

    let mut message: String = format!(
        "Leave taken for {} from {start} to {end}: {} slot(s) added, {covered} already covered",
        worker.name,
        added.len()
    );
    append_reassignments(&mut message, &reassignments);

    let mut transition: Transition = Transition::new(new_store, message);
    transition.reassignments = reassignments;
    Ok(transition)
}

/// Cancels every leave one worker holds from `start` to `end`.
///
/// # Errors
///
/// Returns `NoLeaveFoundInRange` if the range holds none of the worker's
/// leave.
pub(crate) fn mass_cancel_leave(
    store: &Store,
    view: &View,
    worker: Index,
    start: Slot,
    end: Slot,
) -> Result<Transition, CoreError> {
    let worker: Worker = view.worker_at(store, worker)?.clone();

    let slots: Vec<Slot> = generate_range(start, end)
        .into_iter()
        .filter(|slot| {
            store
                .find_assignment(*slot, &worker.name)
                .is_some_and(Assignment::is_leave)
        })
        .collect();

    if slots.is_empty() {
        return Err(CoreError::DomainViolation(
            DomainError::NoLeaveFoundInRange {
                worker: worker.name,
                start,
                end,
            },
        ));
    }

    let mut new_store: Store = store.clone();
    for slot in &slots {
        new_store
            .remove_assignment(*slot, &worker.name)
            .ok_or_else(|| {
                CoreError::Internal(format!("leave of '{}' on {slot} vanished", worker.name))
            })?;
    }

    Ok(Transition::new(
        new_store,
        format!(
            "Leave cancelled for {} from {start} to {end}: {} slot(s)",
            worker.name,
            slots.len()
        ),
    ))
}

fn append_reassignments(message: &mut String, reassignments: &[Assignment]) {
    if !reassignments.is_empty() {
        message.push_str("\nReassignment(s) made:\n");
        message.push_str(&lines(reassignments));
    }
}
