// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of distinct `(day, time)` slots in one week.
pub const SLOTS_PER_WEEK: usize = 14;

/// A day of the week.
///
/// Days are ordered Monday first; the ordering drives both shift listing
/// order and the circular leave range walk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Returns the zero-based position of this day in the week.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Mon => 0,
            Self::Tue => 1,
            Self::Wed => 2,
            Self::Thu => 3,
            Self::Fri => 4,
            Self::Sat => 5,
            Self::Sun => 6,
        }
    }

    /// Returns the day at the given position, wrapping past Sunday.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Converts this day to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mon => "MON",
            Self::Tue => "TUE",
            Self::Wed => "WED",
            Self::Thu => "THU",
            Self::Fri => "FRI",
            Self::Sat => "SAT",
            Self::Sun => "SUN",
        }
    }
}

impl FromStr for Day {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Self::Mon),
            "tue" | "tuesday" => Ok(Self::Tue),
            "wed" | "wednesday" => Ok(Self::Wed),
            "thu" | "thursday" => Ok(Self::Thu),
            "fri" | "friday" => Ok(Self::Fri),
            "sat" | "saturday" => Ok(Self::Sat),
            "sun" | "sunday" => Ok(Self::Sun),
            _ => Err(DomainError::InvalidDay(s.to_string())),
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half of a working day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Time {
    /// Morning shift.
    Am,
    /// Afternoon/evening shift.
    Pm,
}

impl Time {
    /// Both times in day order.
    pub const ALL: [Self; 2] = [Self::Am, Self::Pm];

    /// Returns the zero-based position of this time within a day.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Am => 0,
            Self::Pm => 1,
        }
    }

    /// Returns the time at the given position, wrapping past PM.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Converts this time to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl FromStr for Time {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" => Ok(Self::Am),
            "pm" => Ok(Self::Pm),
            _ => Err(DomainError::InvalidTime(s.to_string())),
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `(day, time)` pair.
///
/// A slot is the identity of a shift and the unit of worker unavailability.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Slot {
    /// The day of the week.
    pub day: Day,
    /// The half of the day.
    pub time: Time,
}

impl Slot {
    /// Creates a new `Slot`.
    #[must_use]
    pub const fn new(day: Day, time: Time) -> Self {
        Self { day, time }
    }

    /// Returns the position of this slot in the 14-slot week.
    #[must_use]
    pub const fn index(self) -> usize {
        self.day.index() * Time::ALL.len() + self.time.index()
    }

    /// Returns the slot at the given position, wrapping around the week.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        let wrapped: usize = index % SLOTS_PER_WEEK;
        Self {
            day: Day::from_index(wrapped / Time::ALL.len()),
            time: Time::from_index(wrapped % Time::ALL.len()),
        }
    }
}

impl FromStr for Slot {
    type Err = DomainError;

    /// Parses `MON:AM`, `mon-am`, `Mon/PM` or `MON AM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ':' || c == '-' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let (Some(day), Some(time), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::InvalidSlot(s.to_string()));
        };

        Ok(Self::new(day.parse()?, time.parse()?))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// A position in a displayed list.
///
/// Indices are shown to users one-based and stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Creates an index from a zero-based position.
    #[must_use]
    pub const fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Creates an index from a one-based position.
    ///
    /// # Errors
    ///
    /// Returns an error if `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Result<Self, DomainError> {
        one_based
            .checked_sub(1)
            .map(Self::from_zero_based)
            .ok_or_else(|| DomainError::InvalidIndex(String::from("Index must be positive")))
    }

    /// Returns the zero-based position.
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.zero_based
    }

    /// Returns the one-based position.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.zero_based + 1
    }
}

impl FromStr for Index {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let one_based: usize = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIndex(s.to_string()))?;
        Self::from_one_based(one_based)
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
