// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Rota command executor.
//!
//! A [`Store`] holds roles, workers, shifts and assignments. Every change is
//! requested as a [`Command`] and run through [`apply`], which either returns
//! a [`Transition`] carrying the new store or rejects the command with no
//! effect on the store it was given.

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

mod apply;
mod assignments;
mod cascade;
mod command;
mod entities;
mod error;
mod leave;
mod store;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Assignee, Command, ShiftEdit, WorkerEdit};
pub use error::{CoreError, ListKind};
pub use store::{Store, StoreSnapshot, Transition};
pub use view::View;
