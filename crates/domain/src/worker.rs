// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::role::Role;
use crate::shift::Shift;
use crate::types::Slot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A worker's name.
///
/// Names identify workers: two names naming the same worker differ at most in
/// letter case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    /// Creates a new `Name`.
    ///
    /// Whitespace is trimmed and collapsed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains characters other than
    /// letters, digits and spaces.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.split_whitespace().collect::<Vec<&str>>().join(" ");

        if normalized.is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Name cannot be empty",
            )));
        }

        if !normalized.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(DomainError::InvalidName(format!(
                "Name '{normalized}' may only contain letters, digits and spaces"
            )));
        }

        Ok(Self { value: normalized })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether both names identify the same worker.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.value.to_lowercase() == other.value.to_lowercase()
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A phone number: at least three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Creates a new `Phone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is shorter than three digits or
    /// contains anything but digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.len() < 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone(format!(
                "Phone '{trimmed}' must be at least 3 digits"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the phone value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Phone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.value
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An hourly pay rate, held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pay {
    cents: u32,
}

impl Pay {
    /// Creates a pay rate from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    /// Parses a pay rate such as `15`, `15.5` or `15.50`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a non-negative amount with at most
    /// two decimal places.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let invalid = || {
            DomainError::InvalidPay(format!(
                "Pay '{trimmed}' must be a non-negative amount with at most 2 decimal places"
            ))
        };

        let (whole, fraction): (&str, &str) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if whole.is_empty()
            || fraction.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole_cents: u32 = whole
            .parse::<u32>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .ok_or_else(invalid)?;
        let fraction_cents: u32 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u32>().map_err(|_| invalid())? * 10,
            _ => fraction.parse::<u32>().map_err(|_| invalid())?,
        };

        whole_cents
            .checked_add(fraction_cents)
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }

    /// Returns the rate in cents.
    #[must_use]
    pub const fn cents(self) -> u32 {
        self.cents
    }
}

impl FromStr for Pay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Pay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Pay> for String {
    fn from(pay: Pay) -> Self {
        pay.to_string()
    }
}

impl std::fmt::Display for Pay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A postal address. Any non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    value: String,
}

impl Address {
    /// Creates a new `Address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress(String::from(
                "Address cannot be empty",
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the address value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.value
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A worker who can be assigned to shifts.
///
/// Structural equality compares every field; [`Worker::is_same_worker`]
/// compares identity (the name, ignoring case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// The worker's name.
    pub name: Name,
    /// The worker's phone number.
    pub phone: Phone,
    /// The worker's hourly pay rate.
    pub pay: Pay,
    /// The worker's address.
    pub address: Address,
    /// Roles the worker is qualified for. Never contains `Leave`.
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    /// Slots the worker cannot work.
    #[serde(default)]
    pub unavailabilities: BTreeSet<Slot>,
}

impl Worker {
    /// Creates a new `Worker`.
    ///
    /// # Arguments
    ///
    /// * `name` - The worker's name
    /// * `phone` - The worker's phone number
    /// * `pay` - The worker's hourly pay
    /// * `address` - The worker's address
    /// * `roles` - Roles the worker is qualified for
    /// * `unavailabilities` - Slots the worker cannot work
    #[must_use]
    pub const fn new(
        name: Name,
        phone: Phone,
        pay: Pay,
        address: Address,
        roles: BTreeSet<Role>,
        unavailabilities: BTreeSet<Slot>,
    ) -> Self {
        Self {
            name,
            phone,
            pay,
            address,
            roles,
            unavailabilities,
        }
    }

    /// Returns whether `other` identifies the same worker.
    #[must_use]
    pub fn is_same_worker(&self, other: &Self) -> bool {
        self.name.matches(&other.name)
    }

    /// Returns whether the worker holds the given role.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Returns whether the worker is marked unavailable for the slot.
    #[must_use]
    pub fn is_unavailable_at(&self, slot: Slot) -> bool {
        self.unavailabilities.contains(&slot)
    }

    /// Returns whether the worker is marked unavailable for the shift.
    #[must_use]
    pub fn is_unavailable_for(&self, shift: &Shift) -> bool {
        self.is_unavailable_at(shift.slot())
    }
}

impl std::fmt::Display for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Pay: {}; Address: {}",
            self.name, self.phone, self.pay, self.address
        )?;
        if !self.roles.is_empty() {
            let roles: Vec<&str> = self.roles.iter().map(Role::label).collect();
            write!(f, "; Roles: {}", roles.join(", "))?;
        }
        if !self.unavailabilities.is_empty() {
            let slots: Vec<String> = self.unavailabilities.iter().map(ToString::to_string).collect();
            write!(f, "; Unavailable: {}", slots.join(", "))?;
        }
        Ok(())
    }
}
