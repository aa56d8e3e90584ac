// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roles a worker can fill on a shift.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// The label of the reserved leave role.
pub const LEAVE_LABEL: &str = "Leave";

/// A role a worker may fill on a shift.
///
/// `Leave` is a reserved sentinel rather than a real role. It can never be
/// required by a shift, held by a worker, or added to the role list, and it
/// bypasses role-fit, availability and requirement checks when assigned.
///
/// Named roles keep the case they were created with, but compare
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// A real role, e.g. `Cashier`.
    Named(String),
    /// The reserved leave marker.
    Leave,
}

impl Role {
    /// Creates a role from a user-supplied label.
    ///
    /// Surrounding whitespace is trimmed and inner runs of whitespace are
    /// collapsed. A label spelling `leave` in any case yields [`Role::Leave`].
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or contains characters other
    /// than letters, digits and spaces.
    pub fn new(label: &str) -> Result<Self, DomainError> {
        let normalized: String = label.split_whitespace().collect::<Vec<&str>>().join(" ");

        if normalized.is_empty() {
            return Err(DomainError::InvalidRole(String::from(
                "Role cannot be empty",
            )));
        }

        if !normalized
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ')
        {
            return Err(DomainError::InvalidRole(format!(
                "Role '{normalized}' may only contain letters, digits and spaces"
            )));
        }

        if normalized.eq_ignore_ascii_case(LEAVE_LABEL) {
            return Ok(Self::Leave);
        }

        Ok(Self::Named(normalized))
    }

    /// Returns the leave sentinel.
    #[must_use]
    pub const fn leave() -> Self {
        Self::Leave
    }

    /// Returns whether this is the leave sentinel.
    #[must_use]
    pub const fn is_leave(&self) -> bool {
        matches!(self, Self::Leave)
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Named(label) => label,
            Self::Leave => LEAVE_LABEL,
        }
    }

    fn key(&self) -> Option<String> {
        match self {
            Self::Named(label) => Some(label.to_lowercase()),
            Self::Leave => None,
        }
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Role {}

impl std::hash::Hash for Role {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Leave sorts after every named role.
impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.key(), other.key()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.label().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
