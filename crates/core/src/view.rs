// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filtered listings used to resolve user-facing indices.
//!
//! The predicates are supplied by the caller; the view only applies them to
//! the store in its stable order (workers by insertion, shifts by slot).

use crate::error::{CoreError, ListKind};
use crate::store::Store;
use rota_domain::{Index, Role, Shift, Worker};
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The worker and shift filters currently in effect.
#[derive(Clone, Default)]
pub struct View {
    worker_filter: Option<Predicate<Worker>>,
    shift_filter: Option<Predicate<Shift>>,
}

impl View {
    /// A view listing everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the worker listing to workers matching `filter`.
    #[must_use]
    pub fn with_worker_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Worker) -> bool + Send + Sync + 'static,
    {
        self.worker_filter = Some(Arc::new(filter));
        self
    }

    /// Restricts the shift listing to shifts matching `filter`.
    #[must_use]
    pub fn with_shift_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Shift) -> bool + Send + Sync + 'static,
    {
        self.shift_filter = Some(Arc::new(filter));
        self
    }

    /// Lists the workers visible through this view.
    #[must_use]
    pub fn workers<'a>(&self, store: &'a Store) -> Vec<&'a Worker> {
        store
            .workers()
            .iter()
            .filter(|w| self.worker_filter.as_ref().is_none_or(|f| f(w)))
            .collect()
    }

    /// Lists the shifts visible through this view.
    #[must_use]
    pub fn shifts<'a>(&self, store: &'a Store) -> Vec<&'a Shift> {
        store
            .shifts()
            .iter()
            .filter(|s| self.shift_filter.as_ref().is_none_or(|f| f(s)))
            .collect()
    }

    /// Resolves an index against the worker listing.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the listing is shorter than the index.
    pub fn worker_at<'a>(&self, store: &'a Store, index: Index) -> Result<&'a Worker, CoreError> {
        resolve(self.workers(store), index, ListKind::Workers)
    }

    /// Resolves an index against the shift listing.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the listing is shorter than the index.
    pub fn shift_at<'a>(&self, store: &'a Store, index: Index) -> Result<&'a Shift, CoreError> {
        resolve(self.shifts(store), index, ListKind::Shifts)
    }

    /// Resolves an index against the role list, which is never filtered.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if there are fewer roles than the index.
    pub fn role_at<'a>(&self, store: &'a Store, index: Index) -> Result<&'a Role, CoreError> {
        resolve(store.roles().iter().collect(), index, ListKind::Roles)
    }
}

fn resolve<T>(listing: Vec<&T>, index: Index, list: ListKind) -> Result<&T, CoreError> {
    let size: usize = listing.len();
    listing
        .into_iter()
        .nth(index.zero_based())
        .ok_or(CoreError::IndexOutOfRange {
            list,
            index: index.one_based(),
            size,
        })
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("worker_filter", &self.worker_filter.is_some())
            .field("shift_filter", &self.shift_filter.is_some())
            .finish()
    }
}
