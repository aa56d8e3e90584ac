// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Rota shift scheduler.
//!
//! The whole store is kept in one JSON file holding a [`rota::StoreSnapshot`].
//! Loading checks the snapshot for duplicate identities and dangling
//! references before building a store from it, since the store itself does
//! not re-validate bulk data.

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
#![allow(clippy::multiple_crate_versions)]

mod check;
mod error;
mod storage;

#[cfg(test)]
mod tests;

pub use check::check_snapshot;
pub use error::PersistenceError;
pub use storage::JsonStorage;
