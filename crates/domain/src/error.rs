// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::Assignment;
use crate::role::Role;
use crate::types::Slot;
use crate::worker::Name;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The role is not in the role list.
    RoleNotFound(Role),
    /// The role is already in the role list, or listed twice.
    DuplicateRole(Role),
    /// A shift already occupies the slot.
    DuplicateShift(Slot),
    /// A worker with the same name already exists.
    DuplicateWorker(Name),
    /// The worker already holds an assignment on the shift.
    DuplicateAssignment(Assignment),
    /// The worker does not hold the role.
    WorkerNotFitForRole {
        /// The worker's name.
        worker: Name,
        /// The role the worker lacks.
        role: Role,
    },
    /// The worker is marked unavailable for the shift.
    WorkerUnavailable {
        /// The worker's name.
        worker: Name,
        /// The shift's slot.
        slot: Slot,
    },
    /// The shift does not require the role, or every position is filled.
    RoleNotRequiredByShift {
        /// The role.
        role: Role,
        /// The shift's slot.
        slot: Slot,
    },
    /// The worker holds no assignment on the shift.
    AssignmentNotFound {
        /// The worker's name.
        worker: Name,
        /// The shift's slot.
        slot: Slot,
    },
    /// The reassignment target already holds a different assignment.
    ExistingAssignment(Assignment),
    /// Leave must be cancelled, not unassigned.
    CannotUnassignLeave {
        /// The worker's name.
        worker: Name,
        /// The shift's slot.
        slot: Slot,
    },
    /// The worker's assignment on the shift is not leave.
    WorkerNotOnLeave {
        /// The worker's name.
        worker: Name,
        /// The shift's slot.
        slot: Slot,
    },
    /// The worker is already on leave for the shift.
    WorkerAlreadyOnLeave {
        /// The worker's name.
        worker: Name,
        /// The shift's slot.
        slot: Slot,
    },
    /// No leave exists for the worker between the two slots.
    NoLeaveFoundInRange {
        /// The worker's name.
        worker: Name,
        /// First slot of the range.
        start: Slot,
        /// Last slot of the range.
        end: Slot,
    },
    /// A shift edit would leave more workers assigned than required.
    MustUnassignWorkersFirst {
        /// The role whose requirement shrank.
        role: Role,
        /// The shift's slot.
        slot: Slot,
        /// The new required quantity.
        required: u32,
        /// The number of workers currently filling the role.
        filled: u32,
    },
    /// The reserved leave role cannot be added, edited, required or held.
    CannotModifyLeaveRole,
    /// Worker name is empty or invalid.
    InvalidName(String),
    /// Phone number is invalid.
    InvalidPhone(String),
    /// Pay rate is invalid.
    InvalidPay(String),
    /// Address is empty.
    InvalidAddress(String),
    /// Role label is empty or invalid.
    InvalidRole(String),
    /// A required quantity must be positive.
    InvalidQuantity {
        /// The role the quantity was given for.
        role: Role,
    },
    /// Role requirement could not be parsed.
    InvalidRequirement(String),
    /// Day could not be parsed.
    InvalidDay(String),
    /// Time could not be parsed.
    InvalidTime(String),
    /// Slot could not be parsed.
    InvalidSlot(String),
    /// Index could not be parsed.
    InvalidIndex(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoleNotFound(role) => write!(f, "Role '{role}' does not exist"),
            Self::DuplicateRole(role) => write!(f, "Role '{role}' already exists"),
            Self::DuplicateShift(slot) => write!(f, "A shift on {slot} already exists"),
            Self::DuplicateWorker(name) => write!(f, "Worker '{name}' already exists"),
            Self::DuplicateAssignment(assignment) => {
                write!(f, "Assignment already exists: {assignment}")
            }
            Self::WorkerNotFitForRole { worker, role } => {
                write!(f, "Worker '{worker}' is not fit for role '{role}'")
            }
            Self::WorkerUnavailable { worker, slot } => {
                write!(f, "Worker '{worker}' is unavailable on {slot}")
            }
            Self::RoleNotRequiredByShift { role, slot } => {
                write!(
                    f,
                    "Role '{role}' is not required by the shift on {slot} or is already fully filled"
                )
            }
            Self::AssignmentNotFound { worker, slot } => {
                write!(f, "Worker '{worker}' is not assigned to the shift on {slot}")
            }
            Self::ExistingAssignment(assignment) => {
                write!(
                    f,
                    "Target worker already has an assignment on that shift: {assignment}"
                )
            }
            Self::CannotUnassignLeave { worker, slot } => {
                write!(
                    f,
                    "Worker '{worker}' is on leave on {slot}; cancel the leave instead"
                )
            }
            Self::WorkerNotOnLeave { worker, slot } => {
                write!(f, "Worker '{worker}' is not on leave on {slot}")
            }
            Self::WorkerAlreadyOnLeave { worker, slot } => {
                write!(f, "Worker '{worker}' is already on leave on {slot}")
            }
            Self::NoLeaveFoundInRange { worker, start, end } => {
                write!(
                    f,
                    "Worker '{worker}' has no leave between {start} and {end}"
                )
            }
            Self::MustUnassignWorkersFirst {
                role,
                slot,
                required,
                filled,
            } => {
                write!(
                    f,
                    "Shift on {slot} has {filled} worker(s) in role '{role}' but would only require {required}; unassign workers first"
                )
            }
            Self::CannotModifyLeaveRole => {
                write!(f, "The '{}' role is reserved and cannot be modified", Role::Leave)
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidPay(msg) => write!(f, "Invalid pay: {msg}"),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidQuantity { role } => {
                write!(f, "Required quantity for role '{role}' must be positive")
            }
            Self::InvalidRequirement(msg) => write!(f, "Invalid role requirement: {msg}"),
            Self::InvalidDay(value) => write!(f, "Invalid day: '{value}'"),
            Self::InvalidTime(value) => write!(f, "Invalid time: '{value}'. Expected AM or PM"),
            Self::InvalidSlot(value) => {
                write!(f, "Invalid slot: '{value}'. Expected DAY:TIME, e.g. MON:AM")
            }
            Self::InvalidIndex(value) => write!(f, "Invalid index: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
