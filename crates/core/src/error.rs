// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_domain::DomainError;

/// The list an index was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// The displayed worker list.
    Workers,
    /// The displayed shift list.
    Shifts,
    /// The role list.
    Roles,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Workers => write!(f, "worker"),
            Self::Shifts => write!(f, "shift"),
            Self::Roles => write!(f, "role"),
        }
    }
}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// An index does not name an entry of the displayed list.
    IndexOutOfRange {
        /// The list the index was resolved against.
        list: ListKind,
        /// The one-based index given.
        index: usize,
        /// The number of entries displayed.
        size: usize,
    },
    /// The store disagreed with a check made earlier in the same command.
    Internal(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { list, index, size } => {
                write!(
                    f,
                    "The {list} index {index} is invalid: {size} {list}(s) listed"
                )
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
