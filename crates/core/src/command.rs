// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_domain::{Address, Day, Index, Name, Pay, Phone, Role, RoleRequirement, Slot, Time, Worker};
use std::collections::BTreeSet;

/// A worker index paired with the role to assign them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    /// Index into the displayed worker list.
    pub worker: Index,
    /// The role to fill.
    pub role: Role,
}

impl Assignee {
    /// Creates a new `Assignee`.
    #[must_use]
    pub const fn new(worker: Index, role: Role) -> Self {
        Self { worker, role }
    }
}

/// Fields to change on a shift. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftEdit {
    /// New day.
    pub day: Option<Day>,
    /// New time.
    pub time: Option<Time>,
    /// New requirement list, replacing the old one entirely.
    pub requirements: Option<Vec<RoleRequirement>>,
}

impl ShiftEdit {
    /// Returns whether the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.day.is_none() && self.time.is_none() && self.requirements.is_none()
    }
}

/// Fields to change on a worker. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkerEdit {
    /// New name.
    pub name: Option<Name>,
    /// New phone number.
    pub phone: Option<Phone>,
    /// New hourly pay.
    pub pay: Option<Pay>,
    /// New address.
    pub address: Option<Address>,
    /// New role set, replacing the old one entirely.
    pub roles: Option<BTreeSet<Role>>,
    /// New unavailability set, replacing the old one entirely.
    pub unavailabilities: Option<BTreeSet<Slot>>,
}

impl WorkerEdit {
    /// Returns whether the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.pay.is_none()
            && self.address.is_none()
            && self.roles.is_none()
            && self.unavailabilities.is_none()
    }

    /// Applies the edit to a copy of `worker`.
    #[must_use]
    pub fn apply_to(&self, worker: &Worker) -> Worker {
        Worker::new(
            self.name.clone().unwrap_or_else(|| worker.name.clone()),
            self.phone.clone().unwrap_or_else(|| worker.phone.clone()),
            self.pay.unwrap_or(worker.pay),
            self.address.clone().unwrap_or_else(|| worker.address.clone()),
            self.roles.clone().unwrap_or_else(|| worker.roles.clone()),
            self.unavailabilities
                .clone()
                .unwrap_or_else(|| worker.unavailabilities.clone()),
        )
    }
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Indices are resolved
/// against the [`crate::View`] the command is applied with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a role to the role list.
    AddRole {
        /// The new role.
        role: Role,
    },
    /// Rename a role everywhere it is used.
    EditRole {
        /// Index into the role list.
        index: Index,
        /// The new label.
        role: Role,
    },
    /// Delete a role and everything that uses it.
    DeleteRole {
        /// Index into the role list.
        index: Index,
    },
    /// Add a shift.
    AddShift {
        /// The day of the shift.
        day: Day,
        /// The time of the shift.
        time: Time,
        /// Staffing requirements.
        requirements: Vec<RoleRequirement>,
    },
    /// Edit a shift, dropping assignments that no longer fit.
    EditShift {
        /// Index into the displayed shift list.
        index: Index,
        /// The fields to change.
        edit: ShiftEdit,
    },
    /// Delete a shift and its assignments.
    DeleteShift {
        /// Index into the displayed shift list.
        index: Index,
    },
    /// Add a worker.
    AddWorker {
        /// The new worker.
        worker: Worker,
    },
    /// Edit a worker, dropping assignments that no longer fit.
    EditWorker {
        /// Index into the displayed worker list.
        index: Index,
        /// The fields to change.
        edit: WorkerEdit,
    },
    /// Delete a worker and their assignments.
    DeleteWorker {
        /// Index into the displayed worker list.
        index: Index,
    },
    /// Mark a worker unavailable for some slots.
    MarkUnavailable {
        /// Index into the displayed worker list.
        worker: Index,
        /// Slots to add to the worker's unavailability.
        slots: Vec<Slot>,
    },
    /// Mark a worker available again for some slots.
    MarkAvailable {
        /// Index into the displayed worker list.
        worker: Index,
        /// Slots to remove from the worker's unavailability.
        slots: Vec<Slot>,
    },
    /// Assign workers to a shift, all or nothing.
    Assign {
        /// Index into the displayed shift list.
        shift: Index,
        /// Workers and the roles they fill.
        assignees: Vec<Assignee>,
    },
    /// Remove workers from a shift, all or nothing.
    Unassign {
        /// Index into the displayed shift list.
        shift: Index,
        /// Indices into the displayed worker list.
        workers: Vec<Index>,
    },
    /// Move an assignment to another worker, shift or role.
    Reassign {
        /// The currently assigned worker.
        old_worker: Index,
        /// The worker to assign instead.
        new_worker: Index,
        /// The currently assigned shift.
        old_shift: Index,
        /// The shift to assign instead.
        new_shift: Index,
        /// The role for the new assignment.
        role: Role,
    },
    /// Put workers on leave for a shift.
    TakeLeave {
        /// Index into the displayed shift list.
        shift: Index,
        /// Indices into the displayed worker list.
        workers: Vec<Index>,
    },
    /// Cancel workers' leave for a shift.
    CancelLeave {
        /// Index into the displayed shift list.
        shift: Index,
        /// Indices into the displayed worker list.
        workers: Vec<Index>,
    },
    /// Put one worker on leave for every slot in a range.
    MassTakeLeave {
        /// Index into the displayed worker list.
        worker: Index,
        /// First slot of the range.
        start: Slot,
        /// Last slot of the range.
        end: Slot,
    },
    /// Cancel one worker's leave for every slot in a range.
    MassCancelLeave {
        /// Index into the displayed worker list.
        worker: Index,
        /// First slot of the range.
        start: Slot,
        /// Last slot of the range.
        end: Slot,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddRole { .. } => "AddRole",
            Self::EditRole { .. } => "EditRole",
            Self::DeleteRole { .. } => "DeleteRole",
            Self::AddShift { .. } => "AddShift",
            Self::EditShift { .. } => "EditShift",
            Self::DeleteShift { .. } => "DeleteShift",
            Self::AddWorker { .. } => "AddWorker",
            Self::EditWorker { .. } => "EditWorker",
            Self::DeleteWorker { .. } => "DeleteWorker",
            Self::MarkUnavailable { .. } => "MarkUnavailable",
            Self::MarkAvailable { .. } => "MarkAvailable",
            Self::Assign { .. } => "Assign",
            Self::Unassign { .. } => "Unassign",
            Self::Reassign { .. } => "Reassign",
            Self::TakeLeave { .. } => "TakeLeave",
            Self::CancelLeave { .. } => "CancelLeave",
            Self::MassTakeLeave { .. } => "MassTakeLeave",
            Self::MassCancelLeave { .. } => "MassCancelLeave",
        }
    }
}
