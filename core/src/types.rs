//! Shared categorical types used across the whole generator.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elapsed time in whole seconds.
pub type Seconds = i64;

/// Responding agency for a call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Agency {
    Law,
    Ems,
    Fire,
}

impl Agency {
    pub const ALL: [Agency; 3] = [Agency::Law, Agency::Ems, Agency::Fire];

    /// Single-letter prefix used inside call ids.
    pub fn prefix(&self) -> char {
        match self {
            Self::Law  => 'L',
            Self::Ems  => 'M',
            Self::Fire => 'F',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Law  => "LAW",
            Self::Ems  => "EMS",
            Self::Fire => "FIRE",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four rotating 12-hour crews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shift {
    A,
    B,
    C,
    D,
}

impl Shift {
    pub const ALL: [Shift; 4] = [Shift::A, Shift::B, Shift::C, Shift::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thirds of a 12-hour shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftPart {
    Early,
    Mids,
    Late,
}

impl ShiftPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Early => "EARLY",
            Self::Mids  => "MIDS",
            Self::Late  => "LATE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayNight {
    Day,
    Night,
}

impl DayNight {
    /// DAY covers 06:00 through 17:59.
    pub fn from_hour(hour: u32) -> Self {
        if (6..=17).contains(&hour) {
            Self::Day
        } else {
            Self::Night
        }
    }

    pub fn is_day(&self) -> bool {
        matches!(self, Self::Day)
    }
}

/// Three-letter upper-case day of week, as written to the table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dow {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Dow {
    pub const ALL: [Dow; 7] = [
        Dow::Mon, Dow::Tue, Dow::Wed, Dow::Thu, Dow::Fri, Dow::Sat, Dow::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
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

impl From<Weekday> for Dow {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => Self::Mon,
            Weekday::Tue => Self::Tue,
            Weekday::Wed => Self::Wed,
            Weekday::Thu => Self::Thu,
            Weekday::Fri => Self::Fri,
            Weekday::Sat => Self::Sat,
            Weekday::Sun => Self::Sun,
        }
    }
}

/// How the call reached the center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CallReception {
    #[serde(rename = "E-911")]
    E911,
    #[serde(rename = "PHONE")]
    Phone,
    #[serde(rename = "OFFICER")]
    Officer,
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "C2C")]
    C2c,
}

impl CallReception {
    pub const ALL: [CallReception; 5] = [
        CallReception::E911,
        CallReception::Phone,
        CallReception::Officer,
        CallReception::Text,
        CallReception::C2c,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E911    => "E-911",
            Self::Phone   => "PHONE",
            Self::Officer => "OFFICER",
            Self::Text    => "TEXT",
            Self::C2c     => "C2C",
        }
    }
}
