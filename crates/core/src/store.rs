// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use rota_domain::{Assignment, Name, Role, Shift, Slot, Worker, count_filled};
use serde::{Deserialize, Serialize};

/// A full, unfiltered copy of the store contents.
///
/// This is the persistence boundary: serializers write it verbatim and
/// loaders hand a checked one back through [`Store::from_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Every role, excluding `Leave`.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Every worker.
    #[serde(default)]
    pub workers: Vec<Worker>,
    /// Every shift.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Every assignment.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// The canonical sets of roles, workers, shifts and assignments.
///
/// Shifts are kept in week order; every other list keeps insertion order.
/// Fill counts on shift requirements always equal the number of live
/// assignments filling them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Store {
    roles: Vec<Role>,
    workers: Vec<Worker>,
    shifts: Vec<Shift>,
    assignments: Vec<Assignment>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            roles: Vec::new(),
            workers: Vec::new(),
            shifts: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Builds a store from a snapshot without re-validating it.
    ///
    /// Duplicate and reference checks are the loader's job. Shifts are
    /// re-sorted and fill counts are re-derived from the assignments.
    #[must_use]
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut store: Self = Self {
            roles: snapshot.roles,
            workers: snapshot.workers,
            shifts: snapshot.shifts,
            assignments: snapshot.assignments,
        };
        store.shifts.sort_by_key(Shift::slot);
        store.recount_fills();
        store
    }

    /// Returns a full copy of the store contents.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            roles: self.roles.clone(),
            workers: self.workers.clone(),
            shifts: self.shifts.clone(),
            assignments: self.assignments.clone(),
        }
    }

    /// Returns a one-line count summary for logging.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "roles={},workers={},shifts={},assignments={}",
            self.roles.len(),
            self.workers.len(),
            self.shifts.len(),
            self.assignments.len()
        )
    }

    /// Returns every role.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns every worker.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Returns every shift in week order.
    #[must_use]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns every assignment.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Checks if a role exists.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Finds the worker with the given identity.
    #[must_use]
    pub fn find_worker(&self, name: &Name) -> Option<&Worker> {
        self.workers.iter().find(|w| w.name.matches(name))
    }

    /// Finds the shift occupying a slot.
    #[must_use]
    pub fn find_shift(&self, slot: Slot) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.slot() == slot)
    }

    /// Finds the assignment binding a worker to the shift at a slot.
    #[must_use]
    pub fn find_assignment(&self, slot: Slot, worker: &Name) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.involves(slot, worker))
    }

    /// Returns the assignments on the shift at a slot.
    pub fn assignments_on(&self, slot: Slot) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(move |a| a.slot == slot)
    }

    /// Returns the assignments held by a worker.
    pub fn assignments_of<'a>(&'a self, worker: &'a Name) -> impl Iterator<Item = &'a Assignment> {
        self.assignments.iter().filter(move |a| a.worker.matches(worker))
    }

    /// Returns the assignments filling a role.
    pub fn assignments_with_role<'a>(
        &'a self,
        role: &'a Role,
    ) -> impl Iterator<Item = &'a Assignment> {
        self.assignments.iter().filter(move |a| &a.role == role)
    }

    /// Counts the live assignments filling `role` on the shift at `slot`.
    #[must_use]
    pub fn filled(&self, slot: Slot, role: &Role) -> u32 {
        count_filled(slot, role, &self.assignments)
    }

    /// Adds a role.
    pub(crate) fn add_role(&mut self, role: Role) {
        self.roles.push(role);
    }

    /// Renames a role in the role list, shift requirements and worker role
    /// sets. Assignments are rewritten separately.
    pub(crate) fn rename_role(&mut self, old: &Role, new: &Role) {
        for role in self.roles.iter_mut().filter(|r| **r == *old) {
            *role = new.clone();
        }
        for requirement in self
            .shifts
            .iter_mut()
            .flat_map(|s| s.requirements.iter_mut())
            .filter(|r| &r.role == old)
        {
            requirement.role = new.clone();
        }
        for worker in &mut self.workers {
            if worker.roles.remove(old) {
                worker.roles.insert(new.clone());
            }
        }
    }

    /// Removes a role from the role list, shift requirements and worker role
    /// sets. Assignments are removed separately.
    pub(crate) fn purge_role(&mut self, role: &Role) {
        self.roles.retain(|r| r != role);
        for shift in &mut self.shifts {
            shift.requirements.retain(|r| &r.role != role);
        }
        for worker in &mut self.workers {
            worker.roles.remove(role);
        }
    }

    /// Adds a worker at the end of the list.
    pub(crate) fn add_worker(&mut self, worker: Worker) {
        self.workers.push(worker);
    }

    /// Replaces the worker identified by `old`, keeping its position.
    pub(crate) fn replace_worker(&mut self, old: &Name, worker: Worker) -> Result<(), CoreError> {
        let entry: &mut Worker = self
            .workers
            .iter_mut()
            .find(|w| w.name.matches(old))
            .ok_or_else(|| CoreError::Internal(format!("worker '{old}' vanished")))?;
        *entry = worker;
        Ok(())
    }

    /// Removes the worker identified by `name`.
    pub(crate) fn remove_worker(&mut self, name: &Name) -> Option<Worker> {
        let position: usize = self.workers.iter().position(|w| w.name.matches(name))?;
        Some(self.workers.remove(position))
    }

    /// Adds a shift in week order.
    pub(crate) fn add_shift(&mut self, shift: Shift) {
        let position: usize = self.shifts.partition_point(|s| s.slot() < shift.slot());
        self.shifts.insert(position, shift);
    }

    /// Replaces the shift at `old`, re-sorting if its slot changed.
    pub(crate) fn replace_shift(&mut self, old: Slot, shift: Shift) -> Result<(), CoreError> {
        self.remove_shift(old)
            .ok_or_else(|| CoreError::Internal(format!("shift on {old} vanished")))?;
        self.add_shift(shift);
        Ok(())
    }

    /// Removes the shift at a slot.
    pub(crate) fn remove_shift(&mut self, slot: Slot) -> Option<Shift> {
        let position: usize = self.shifts.iter().position(|s| s.slot() == slot)?;
        Some(self.shifts.remove(position))
    }

    /// Inserts an assignment and updates the shift's fill count.
    ///
    /// Callers validate first; a missing shift or requirement here means the
    /// store changed underneath the command.
    pub(crate) fn insert_assignment(&mut self, assignment: Assignment) -> Result<(), CoreError> {
        let shift: &mut Shift = self
            .shifts
            .iter_mut()
            .find(|s| s.slot() == assignment.slot)
            .ok_or_else(|| {
                CoreError::Internal(format!("no shift on {} for {assignment}", assignment.slot))
            })?;

        if !assignment.is_leave() && !shift.increment_filled(&assignment.role) {
            return Err(CoreError::Internal(format!(
                "shift on {} does not require '{}'",
                assignment.slot, assignment.role
            )));
        }

        self.assignments.push(assignment);
        Ok(())
    }

    /// Removes the assignment binding `worker` to the shift at `slot` and
    /// updates the shift's fill count.
    pub(crate) fn remove_assignment(&mut self, slot: Slot, worker: &Name) -> Option<Assignment> {
        let position: usize = self
            .assignments
            .iter()
            .position(|a| a.involves(slot, worker))?;
        let removed: Assignment = self.assignments.remove(position);

        if let Some(shift) = self
            .shifts
            .iter_mut()
            .find(|s| s.slot() == slot && !removed.is_leave())
        {
            shift.decrement_filled(&removed.role);
        }

        Some(removed)
    }

    fn recount_fills(&mut self) {
        for shift in &mut self.shifts {
            let slot: Slot = shift.slot();
            for requirement in &mut shift.requirements {
                requirement.quantity_filled =
                    count_filled(slot, &requirement.role, &self.assignments);
            }
        }
    }
}

/// The result of a successful command.
///
/// Transitions are atomic: they either succeed completely or fail without side
/// effects on the store they were applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The store after the command.
    pub new_store: Store,
    /// Human-readable description of what changed.
    pub message: String,
    /// Assignments replaced by leave during this command.
    pub reassignments: Vec<Assignment>,
}

impl Transition {
    /// Creates a transition with no reassignments.
    #[must_use]
    pub const fn new(new_store: Store, message: String) -> Self {
        Self {
            new_store,
            message,
            reassignments: Vec::new(),
        }
    }
}
