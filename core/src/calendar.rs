// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar enumerations used by recurrence rules.
//!
//! Every enumeration carries explicit discriminants. Those discriminants are the zero-based
//! ordinals used for encoding, so reordering variants for display never changes the wire format.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr};

/// Day of the week, starting on Sunday.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[expect(missing_docs)]
pub enum DayOfWeek {
    Sun = 0,
    Mon = 1,
    Tue = 2,
    Wed = 3,
    Thu = 4,
    Fri = 5,
    Sat = 6,
}

impl DayOfWeek {
    /// Monday to Friday.
    pub const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
    ];

    /// Zero-based position, Sunday is 0.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a day by its zero-based position.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    /// Whether the day falls between Monday and Friday.
    #[must_use]
    pub const fn is_weekday(self) -> bool {
        !matches!(self, DayOfWeek::Sat | DayOfWeek::Sun)
    }
}

impl PartialOrd for DayOfWeek {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayOfWeek {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

/// Which occurrence of a weekday within a month.
///
/// `Last` is a sentinel for the final occurrence, whatever the length of the month. It is not a
/// fifth week.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[expect(missing_docs)]
pub enum WeekOfMonth {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
    Last = 4,
}

impl WeekOfMonth {
    /// Zero-based position, `First` is 0 and `Last` is 4.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a week by its zero-based position.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    /// Whether this is the `Last` sentinel.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, WeekOfMonth::Last)
    }
}

/// Month of the year, starting on January.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[expect(missing_docs)]
pub enum MonthOfYear {
    Jan = 0,
    Feb = 1,
    Mar = 2,
    Apr = 3,
    May = 4,
    Jun = 5,
    Jul = 6,
    Aug = 7,
    Sep = 8,
    Oct = 9,
    Nov = 10,
    Dec = 11,
}

impl MonthOfYear {
    /// Zero-based position, January is 0.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a month by its zero-based position.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }
}

/// Half of a 12-hour clock.
#[repr(u8)]
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeOfDay {
    /// Before noon
    #[default]
    #[strum(serialize = "AM")]
    Am = 0,

    /// Noon and after
    #[strum(serialize = "PM")]
    Pm = 1,
}

impl TimeOfDay {
    /// Zero-based position, AM is 0.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a period by its zero-based position.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn ordinals_follow_discriminants() {
        for (i, day) in DayOfWeek::iter().enumerate() {
            assert_eq!(usize::from(day.ordinal()), i);
            assert_eq!(DayOfWeek::from_ordinal(day.ordinal()), Some(day));
        }
        assert_eq!(DayOfWeek::Mon.ordinal(), 1);
        assert_eq!(WeekOfMonth::Last.ordinal(), 4);
        assert_eq!(MonthOfYear::Dec.ordinal(), 11);
        assert_eq!(TimeOfDay::Pm.ordinal(), 1);
    }

    #[test]
    fn from_ordinal_rejects_out_of_range() {
        assert_eq!(DayOfWeek::from_ordinal(7), None);
        assert_eq!(WeekOfMonth::from_ordinal(5), None);
        assert_eq!(MonthOfYear::from_ordinal(12), None);
        assert_eq!(TimeOfDay::from_ordinal(2), None);
    }

    #[test]
    fn days_sort_by_ordinal() {
        let days: BTreeSet<_> = [DayOfWeek::Fri, DayOfWeek::Sun, DayOfWeek::Wed]
            .into_iter()
            .collect();
        let sorted: Vec<_> = days.into_iter().collect();
        assert_eq!(sorted, vec![DayOfWeek::Sun, DayOfWeek::Wed, DayOfWeek::Fri]);
    }

    #[test]
    fn weekdays_exclude_weekend() {
        assert!(DayOfWeek::WEEKDAYS.iter().all(|d| d.is_weekday()));
        assert!(!DayOfWeek::Sat.is_weekday());
        assert!(!DayOfWeek::Sun.is_weekday());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("mon".parse::<DayOfWeek>().unwrap(), DayOfWeek::Mon);
        assert_eq!("LAST".parse::<WeekOfMonth>().unwrap(), WeekOfMonth::Last);
        assert_eq!("Sep".parse::<MonthOfYear>().unwrap(), MonthOfYear::Sep);
        assert_eq!("pm".parse::<TimeOfDay>().unwrap(), TimeOfDay::Pm);
        assert_eq!(TimeOfDay::Am.to_string(), "AM");
        assert_eq!(DayOfWeek::Thu.to_string(), "Thu");
    }
}
