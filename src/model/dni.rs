use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// National identity document number, the natural key of a [`Cliente`](crate::model::Cliente).
///
/// Any `u32` can be wrapped so lookups by an arbitrary number are possible;
/// only the validator decides whether a number is acceptable for a new client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dni(u32);

impl Dni {
    /// Smallest 8-digit number.
    pub const MIN: i64 = 10_000_000;
    /// Largest 8-digit number.
    pub const MAX: i64 = 99_999_999;

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Dni {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for Dni {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
