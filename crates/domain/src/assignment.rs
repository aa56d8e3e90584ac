// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::role::Role;
use crate::types::Slot;
use crate::worker::Name;
use serde::{Deserialize, Serialize};

/// A worker bound to a shift under one role, or on leave for it.
///
/// The shift is referenced by its slot and the worker by name, so an edit to
/// either entity re-points an assignment by rewriting the key.
///
/// Identity is `(slot, worker)`: a worker holds at most one assignment per
/// shift whatever the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The slot of the assigned shift.
    pub slot: Slot,
    /// The name of the assigned worker.
    pub worker: Name,
    /// The role filled, or `Leave`.
    pub role: Role,
}

impl Assignment {
    /// Creates a new `Assignment`.
    #[must_use]
    pub const fn new(slot: Slot, worker: Name, role: Role) -> Self {
        Self { slot, worker, role }
    }

    /// Creates a leave assignment.
    #[must_use]
    pub const fn leave(slot: Slot, worker: Name) -> Self {
        Self::new(slot, worker, Role::Leave)
    }

    /// Returns whether this assignment marks leave.
    #[must_use]
    pub const fn is_leave(&self) -> bool {
        self.role.is_leave()
    }

    /// Returns whether `other` binds the same worker to the same shift.
    #[must_use]
    pub fn is_same_assignment(&self, other: &Self) -> bool {
        self.involves(other.slot, &other.worker)
    }

    /// Returns whether this assignment binds `worker` to the shift at `slot`.
    #[must_use]
    pub fn involves(&self, slot: Slot, worker: &Name) -> bool {
        self.slot == slot && self.worker.matches(worker)
    }

    /// Returns a copy bound to another slot.
    #[must_use]
    pub fn moved_to(&self, slot: Slot) -> Self {
        Self::new(slot, self.worker.clone(), self.role.clone())
    }

    /// Returns a copy bound to another worker name.
    #[must_use]
    pub fn renamed_to(&self, worker: Name) -> Self {
        Self::new(self.slot, worker, self.role.clone())
    }

    /// Returns a copy filling another role.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Self {
        Self::new(self.slot, self.worker.clone(), role)
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.slot, self.worker, self.role)
    }
}
