// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::role::Role;
use crate::types::{Day, Slot, Time};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How many workers a shift needs in one role, and how many it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// The required role. Never `Leave`.
    pub role: Role,
    /// Number of workers needed in this role.
    pub quantity_required: u32,
    /// Number of live assignments currently filling this role.
    #[serde(default)]
    pub quantity_filled: u32,
}

impl RoleRequirement {
    /// Creates an unfilled requirement.
    #[must_use]
    pub const fn new(role: Role, quantity_required: u32) -> Self {
        Self {
            role,
            quantity_required,
            quantity_filled: 0,
        }
    }

    /// Returns whether another assignment may fill this requirement.
    #[must_use]
    pub const fn has_room(&self) -> bool {
        self.quantity_filled < self.quantity_required
    }
}

impl FromStr for RoleRequirement {
    type Err = DomainError;

    /// Parses `Cashier=2`; a bare role means a quantity of one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (role, quantity): (&str, Option<&str>) = match s.split_once('=') {
            Some((role, quantity)) => (role, Some(quantity)),
            None => (s, None),
        };

        let quantity: u32 = match quantity {
            Some(q) => q.trim().parse().map_err(|_| {
                DomainError::InvalidRequirement(format!("'{s}' has an invalid quantity"))
            })?,
            None => 1,
        };

        Ok(Self::new(Role::new(role)?, quantity))
    }
}

impl std::fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.role, self.quantity_filled, self.quantity_required
        )
    }
}

/// A shift: one half-day with its staffing requirements.
///
/// Identity is the slot. Shifts with empty requirements are valid and are
/// created on demand to hold leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The day of the week.
    pub day: Day,
    /// The half of the day.
    pub time: Time,
    /// Staffing requirements, at most one per role.
    #[serde(default)]
    pub requirements: Vec<RoleRequirement>,
}

impl Shift {
    /// Creates a new `Shift`.
    #[must_use]
    pub const fn new(day: Day, time: Time, requirements: Vec<RoleRequirement>) -> Self {
        Self {
            day,
            time,
            requirements,
        }
    }

    /// Creates a shift with no requirements.
    #[must_use]
    pub const fn empty(slot: Slot) -> Self {
        Self::new(slot.day, slot.time, Vec::new())
    }

    /// Returns the slot identifying this shift.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        Slot::new(self.day, self.time)
    }

    /// Returns whether `other` occupies the same slot.
    #[must_use]
    pub fn is_same_shift(&self, other: &Self) -> bool {
        self.slot() == other.slot()
    }

    /// Returns the requirement for a role, if any.
    #[must_use]
    pub fn requirement(&self, role: &Role) -> Option<&RoleRequirement> {
        self.requirements.iter().find(|r| &r.role == role)
    }

    /// Returns whether the shift requires the role at all.
    #[must_use]
    pub fn requires(&self, role: &Role) -> bool {
        self.requirement(role).is_some()
    }

    /// Returns the required quantity for a role; zero when not required.
    #[must_use]
    pub fn quantity_required(&self, role: &Role) -> u32 {
        self.requirement(role).map_or(0, |r| r.quantity_required)
    }

    /// Records one more assignment filling `role`.
    ///
    /// Returns `false` if the shift does not require the role.
    pub fn increment_filled(&mut self, role: &Role) -> bool {
        self.requirements
            .iter_mut()
            .find(|r| &r.role == role)
            .map(|r| r.quantity_filled = r.quantity_filled.saturating_add(1))
            .is_some()
    }

    /// Records one fewer assignment filling `role`.
    ///
    /// Returns `false` if the shift does not require the role.
    pub fn decrement_filled(&mut self, role: &Role) -> bool {
        self.requirements
            .iter_mut()
            .find(|r| &r.role == role)
            .map(|r| r.quantity_filled = r.quantity_filled.saturating_sub(1))
            .is_some()
    }

    /// Returns a copy of the requirements with every fill count reset.
    #[must_use]
    pub fn unfilled_requirements(&self) -> Vec<RoleRequirement> {
        self.requirements
            .iter()
            .map(|r| RoleRequirement::new(r.role.clone(), r.quantity_required))
            .collect()
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slot())?;
        if !self.requirements.is_empty() {
            let requirements: Vec<String> =
                self.requirements.iter().map(ToString::to_string).collect();
            write!(f, "; Requires: {}", requirements.join(", "))?;
        }
        Ok(())
    }
}
