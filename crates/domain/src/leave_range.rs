// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Circular day/time range walk used by mass leave operations.
//!
//! The week is treated as a ring of 14 slots (`MON AM` .. `SUN PM`). A range
//! starts at its first slot, walks forward, and ends right after yielding its
//! last slot, wrapping from `SUN PM` back to `MON AM` as needed.

use crate::types::{SLOTS_PER_WEEK, Slot};

/// Upper bound on slots a single walk may yield.
///
/// With a 14-slot ring the end slot is always reached within one lap; this
/// bound only guarantees termination.
pub const MAX_RANGE_STEPS: usize = 3 * SLOTS_PER_WEEK;

/// Iterator over the slots from `start` to `end` inclusive.
///
/// The iterator is stateless beyond its cursor; build a new one to restart.
#[derive(Debug, Clone)]
pub struct SlotRange {
    cursor: usize,
    end: Slot,
    steps: usize,
    finished: bool,
}

impl SlotRange {
    /// Creates a walk from `start` to `end`, both inclusive.
    #[must_use]
    pub const fn new(start: Slot, end: Slot) -> Self {
        Self {
            cursor: start.index(),
            end,
            steps: 0,
            finished: false,
        }
    }
}

impl Iterator for SlotRange {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.steps >= MAX_RANGE_STEPS {
            return None;
        }

        let slot: Slot = Slot::from_index(self.cursor % SLOTS_PER_WEEK);
        self.cursor = (self.cursor + 1) % SLOTS_PER_WEEK;
        self.steps += 1;

        if slot == self.end {
            self.finished = true;
        }

        Some(slot)
    }
}

/// Returns every slot from `start` to `end` inclusive, wrapping forward
/// through the week.
///
/// # Arguments
///
/// * `start` - The first slot
/// * `end` - The last slot
#[must_use]
pub fn generate_range(start: Slot, end: Slot) -> Vec<Slot> {
    SlotRange::new(start, end).collect()
}
