// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rule validation for the Rota scheduling system.
//!
//! Everything here is pure: entities, value types, the assignment validation
//! pipeline and the circular leave range walk. Mutation and cascades live in
//! the `rota` core crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assignment;
mod error;
mod leave_range;
mod role;
mod shift;
mod types;
mod validation;
mod worker;

#[cfg(test)]
mod tests;

pub use assignment::Assignment;
pub use error::DomainError;
pub use leave_range::{MAX_RANGE_STEPS, SlotRange, generate_range};
pub use role::{LEAVE_LABEL, Role};
pub use shift::{RoleRequirement, Shift};
pub use types::{Day, Index, SLOTS_PER_WEEK, Slot, Time};
pub use validation::{
    count_filled, has_open_position, is_fit_for_role, is_unavailable, validate_assignment,
    validate_new_role, validate_requirements, validate_shift_unique, validate_worker_roles,
    validate_worker_unique,
};
pub use worker::{Address, Name, Pay, Phone, Worker};
