//! Week calendar utilities
//!
//! Fixed Monday-first week with wrapping day arithmetic. Plan slots are
//! addressed relative to the match day ("3 days before", "1 day after"),
//! so offsets must wrap across the week boundary in both directions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// Canonical week order, Monday first. Plans are always emitted in
    /// this order regardless of how their slots were filled.
    pub const WEEK: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Position in the canonical week, Monday = 0 .. Sunday = 6
    pub fn index(self) -> usize {
        match self {
            WeekDay::Monday => 0,
            WeekDay::Tuesday => 1,
            WeekDay::Wednesday => 2,
            WeekDay::Thursday => 3,
            WeekDay::Friday => 4,
            WeekDay::Saturday => 5,
            WeekDay::Sunday => 6,
        }
    }

    /// Day `offset` positions after `self`, wrapping modulo 7.
    /// Negative offsets count backwards and wrap into the previous week's
    /// tail (e.g. Monday.offset(-1) == Sunday).
    pub fn offset(self, offset: i64) -> WeekDay {
        let idx = (self.index() as i64 + offset).rem_euclid(7) as usize;
        WeekDay::WEEK[idx]
    }
}

impl std::fmt::Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for WeekDay {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(WeekDay::Monday),
            "Tuesday" => Ok(WeekDay::Tuesday),
            "Wednesday" => Ok(WeekDay::Wednesday),
            "Thursday" => Ok(WeekDay::Thursday),
            "Friday" => Ok(WeekDay::Friday),
            "Saturday" => Ok(WeekDay::Saturday),
            "Sunday" => Ok(WeekDay::Sunday),
            _ => Err(format!("Unknown week day: {}", s)),
        }
    }
}
