//! The fixed, totally ordered set of semesters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::CursusError;

/// One of the nine semesters of a curriculum.
///
/// The derived ordering is the chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Semester {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
}

impl Semester {
    /// All semesters in chronological order.
    pub const ALL: [Semester; 9] = [
        Semester::S1,
        Semester::S2,
        Semester::S3,
        Semester::S4,
        Semester::S5,
        Semester::S6,
        Semester::S7,
        Semester::S8,
        Semester::S9,
    ];

    /// Zero-based position in the chronological order.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Semesters strictly before this one, nearest first.
    ///
    /// For `S4` this yields `S3`, `S2`, `S1`.
    pub fn preceding(self) -> impl Iterator<Item = Semester> {
        Self::ALL.into_iter().take(self.ordinal()).rev()
    }

    /// Canonical token, as written in curriculum documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Semester::S1 => "S1",
            Semester::S2 => "S2",
            Semester::S3 => "S3",
            Semester::S4 => "S4",
            Semester::S5 => "S5",
            Semester::S6 => "S6",
            Semester::S7 => "S7",
            Semester::S8 => "S8",
            Semester::S9 => "S9",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Semester {
    type Err = CursusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|semester| semester.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| CursusError::InvalidSemester {
                token: token.to_string(),
            })
    }
}
