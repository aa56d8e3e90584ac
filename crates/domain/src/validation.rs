// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::Assignment;
use crate::error::DomainError;
use crate::role::Role;
use crate::shift::{RoleRequirement, Shift};
use crate::types::Slot;
use crate::worker::Worker;
use std::collections::HashSet;

/// Returns whether the worker is marked unavailable for the shift.
#[must_use]
pub fn is_unavailable(worker: &Worker, shift: &Shift) -> bool {
    worker.is_unavailable_for(shift)
}

/// Returns whether the worker holds the role.
#[must_use]
pub fn is_fit_for_role(worker: &Worker, role: &Role) -> bool {
    worker.has_role(role)
}

/// Counts the live assignments filling `role` on the shift at `slot`.
#[must_use]
pub fn count_filled(slot: Slot, role: &Role, assignments: &[Assignment]) -> u32 {
    let count: usize = assignments
        .iter()
        .filter(|a| a.slot == slot && &a.role == role)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Returns whether the shift requires `role` and still has an open position
/// for it, counting the given live assignments.
#[must_use]
pub fn has_open_position(shift: &Shift, role: &Role, assignments: &[Assignment]) -> bool {
    shift
        .requirement(role)
        .is_some_and(|r| count_filled(shift.slot(), role, assignments) < r.quantity_required)
}

/// Decides whether a prospective assignment may be added.
///
/// Checks run in a fixed order so the reported reason is predictable:
///
/// 1. the role exists
/// 2. the worker holds the role
/// 3. the worker is available for the shift
/// 4. the shift requires the role and has an open position
/// 5. the worker has no assignment on the shift yet
///
/// Checks 2–4 are skipped for `Leave`.
///
/// # Arguments
///
/// * `roles` - The role list
/// * `assignments` - Every live assignment
/// * `shift` - The shift to assign to
/// * `worker` - The worker to assign
/// * `role` - The role to fill
///
/// # Errors
///
/// Returns the first failed check.
pub fn validate_assignment(
    roles: &[Role],
    assignments: &[Assignment],
    shift: &Shift,
    worker: &Worker,
    role: &Role,
) -> Result<(), DomainError> {
    if !role.is_leave() && !roles.contains(role) {
        return Err(DomainError::RoleNotFound(role.clone()));
    }

    if !role.is_leave() {
        if !is_fit_for_role(worker, role) {
            return Err(DomainError::WorkerNotFitForRole {
                worker: worker.name.clone(),
                role: role.clone(),
            });
        }

        if is_unavailable(worker, shift) {
            return Err(DomainError::WorkerUnavailable {
                worker: worker.name.clone(),
                slot: shift.slot(),
            });
        }

        if !has_open_position(shift, role, assignments) {
            return Err(DomainError::RoleNotRequiredByShift {
                role: role.clone(),
                slot: shift.slot(),
            });
        }
    }

    if let Some(existing) = assignments
        .iter()
        .find(|a| a.involves(shift.slot(), &worker.name))
    {
        return Err(DomainError::DuplicateAssignment(existing.clone()));
    }

    Ok(())
}

/// Validates a role that is about to join the role list.
///
/// # Errors
///
/// Returns an error if the role is `Leave` or already listed.
pub fn validate_new_role(role: &Role, roles: &[Role]) -> Result<(), DomainError> {
    if role.is_leave() {
        return Err(DomainError::CannotModifyLeaveRole);
    }
    if roles.contains(role) {
        return Err(DomainError::DuplicateRole(role.clone()));
    }
    Ok(())
}

/// Validates a shift's requirement list against the role list.
///
/// # Errors
///
/// Returns an error if a requirement names `Leave`, names an unknown role,
/// repeats a role, or asks for zero workers.
pub fn validate_requirements(
    requirements: &[RoleRequirement],
    roles: &[Role],
) -> Result<(), DomainError> {
    let mut seen: HashSet<&Role> = HashSet::new();

    for requirement in requirements {
        if requirement.role.is_leave() {
            return Err(DomainError::CannotModifyLeaveRole);
        }
        if !roles.contains(&requirement.role) {
            return Err(DomainError::RoleNotFound(requirement.role.clone()));
        }
        if !seen.insert(&requirement.role) {
            return Err(DomainError::DuplicateRole(requirement.role.clone()));
        }
        if requirement.quantity_required == 0 {
            return Err(DomainError::InvalidQuantity {
                role: requirement.role.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a worker's role set against the role list.
///
/// Field formats are enforced when the fields are constructed; this checks
/// only what needs context.
///
/// # Errors
///
/// Returns an error if the worker holds `Leave` or an unknown role.
pub fn validate_worker_roles(worker: &Worker, roles: &[Role]) -> Result<(), DomainError> {
    for role in &worker.roles {
        if role.is_leave() {
            return Err(DomainError::CannotModifyLeaveRole);
        }
        if !roles.contains(role) {
            return Err(DomainError::RoleNotFound(role.clone()));
        }
    }
    Ok(())
}

/// Validates that no other worker already uses this worker's name.
///
/// `replacing` names the worker being edited, which may keep its own name.
///
/// # Errors
///
/// Returns an error if another worker has the same identity.
pub fn validate_worker_unique(
    worker: &Worker,
    existing: &[Worker],
    replacing: Option<&Worker>,
) -> Result<(), DomainError> {
    let clash: bool = existing
        .iter()
        .filter(|w| replacing.is_none_or(|r| !r.is_same_worker(w)))
        .any(|w| w.is_same_worker(worker));

    if clash {
        return Err(DomainError::DuplicateWorker(worker.name.clone()));
    }
    Ok(())
}

/// Validates that no other shift already occupies this shift's slot.
///
/// `replacing` is the slot of the shift being edited.
///
/// # Errors
///
/// Returns an error if another shift occupies the slot.
pub fn validate_shift_unique(
    shift: &Shift,
    existing: &[Shift],
    replacing: Option<Slot>,
) -> Result<(), DomainError> {
    let clash: bool = existing
        .iter()
        .filter(|s| replacing != Some(s.slot()))
        .any(|s| s.is_same_shift(shift));

    if clash {
        return Err(DomainError::DuplicateShift(shift.slot()));
    }
    Ok(())
}
