// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The recurrence rule model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::calendar::{DayOfWeek, MonthOfYear, WeekOfMonth};

/// Granularity of a recurrence. Exactly one is active at a time.
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
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[expect(missing_docs)]
pub enum TemporalUnit {
    Seconds,
    Minutes,
    Hours,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Units of a sub-daily fixed interval.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[expect(missing_docs)]
pub enum IntervalUnit {
    Seconds,
    Minutes,
    Hours,
}

impl From<IntervalUnit> for TemporalUnit {
    fn from(unit: IntervalUnit) -> Self {
        match unit {
            IntervalUnit::Seconds => TemporalUnit::Seconds,
            IntervalUnit::Minutes => TemporalUnit::Minutes,
            IntervalUnit::Hours => TemporalUnit::Hours,
        }
    }
}

/// What recurs and how.
///
/// Each variant holds only the fields that are meaningful for it. Free-form integers such as the
/// day of the month or the interval count are not range checked, that is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Fire every `count` seconds, minutes or hours.
    Interval {
        /// Unit of the interval
        unit: IntervalUnit,
        /// Number of units between two runs
        count: u64,
    },

    /// Fire every `days` days.
    DailyEveryNDays {
        /// Number of days between two runs
        days: u64,
        /// Keep a fixed 24-hour spacing across daylight saving transitions
        #[serde(default)]
        ignore_dst: bool,
    },

    /// Fire Monday to Friday.
    DailyEveryWeekday,

    /// Fire every week on each listed day.
    WeeklyOn {
        /// Days of the week, kept in ascending order
        #[serde(default)]
        days: BTreeSet<DayOfWeek>,
    },

    /// Fire on calendar day `day` of every month.
    MonthlyDayN {
        /// Day of the month, `1..=31` by convention
        day: u32,
    },

    /// Fire on the `week`-th `day` of every month.
    MonthlyNthWeekday {
        /// Which occurrence in the month
        week: WeekOfMonth,
        /// Day of the week
        day: DayOfWeek,
    },

    /// Fire every year on `month`/`day`.
    YearlyOnDate {
        /// Month of the year
        month: MonthOfYear,
        /// Day of the month, `1..=31` by convention
        day: u32,
    },

    /// Fire on the `week`-th `day` of `month`, every year.
    YearlyNthWeekday {
        /// Which occurrence in the month
        week: WeekOfMonth,
        /// Day of the week
        day: DayOfWeek,
        /// Month of the year
        month: MonthOfYear,
    },
}

impl RecurrenceRule {
    /// The rule a freshly selected unit starts with.
    #[must_use]
    pub fn default_for(unit: TemporalUnit) -> Self {
        match unit {
            TemporalUnit::Seconds => Self::interval(IntervalUnit::Seconds, 1),
            TemporalUnit::Minutes => Self::interval(IntervalUnit::Minutes, 1),
            TemporalUnit::Hours => Self::interval(IntervalUnit::Hours, 1),
            TemporalUnit::Daily => Self::DailyEveryNDays {
                days: 1,
                ignore_dst: false,
            },
            TemporalUnit::Weekly => Self::WeeklyOn {
                days: BTreeSet::new(),
            },
            TemporalUnit::Monthly => Self::MonthlyDayN { day: 1 },
            TemporalUnit::Yearly => Self::YearlyOnDate {
                month: MonthOfYear::Jan,
                day: 1,
            },
        }
    }

    /// Shorthand for [`RecurrenceRule::Interval`].
    #[must_use]
    pub const fn interval(unit: IntervalUnit, count: u64) -> Self {
        Self::Interval { unit, count }
    }

    /// Shorthand for [`RecurrenceRule::WeeklyOn`], duplicates are merged.
    pub fn weekly_on(days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        Self::WeeklyOn {
            days: days.into_iter().collect(),
        }
    }

    /// The unit this rule belongs to.
    #[must_use]
    pub fn temporal_unit(&self) -> TemporalUnit {
        match self {
            Self::Interval { unit, .. } => (*unit).into(),
            Self::DailyEveryNDays { .. } | Self::DailyEveryWeekday => TemporalUnit::Daily,
            Self::WeeklyOn { .. } => TemporalUnit::Weekly,
            Self::MonthlyDayN { .. } | Self::MonthlyNthWeekday { .. } => TemporalUnit::Monthly,
            Self::YearlyOnDate { .. } | Self::YearlyNthWeekday { .. } => TemporalUnit::Yearly,
        }
    }

    /// Whether the rule is a plain fixed interval, with no calendar structure.
    ///
    /// Such rules have an interval-seconds form and no token string.
    #[must_use]
    pub const fn is_interval(&self) -> bool {
        matches!(self, Self::Interval { .. } | Self::DailyEveryNDays { .. })
    }

    /// Whether the rule is [`RecurrenceRule::DailyEveryNDays`].
    #[must_use]
    pub const fn is_every_n_days(&self) -> bool {
        matches!(self, Self::DailyEveryNDays { .. })
    }

    /// The daylight saving flag. Only every-N-days rules can carry it.
    #[must_use]
    pub const fn should_ignore_dst(&self) -> bool {
        match self {
            Self::DailyEveryNDays { ignore_dst, .. } => *ignore_dst,
            _ => false,
        }
    }

    /// Days of the week the rule fires on, in ascending order.
    #[must_use]
    pub fn selected_days_of_week(&self) -> Vec<DayOfWeek> {
        match self {
            Self::DailyEveryWeekday => DayOfWeek::WEEKDAYS.to_vec(),
            Self::WeeklyOn { days } => days.iter().copied().collect(),
            Self::MonthlyNthWeekday { day, .. } | Self::YearlyNthWeekday { day, .. } => vec![*day],
            Self::Interval { .. }
            | Self::DailyEveryNDays { .. }
            | Self::MonthlyDayN { .. }
            | Self::YearlyOnDate { .. } => Vec::new(),
        }
    }

    /// Week of the month, for the nth-weekday rules.
    #[must_use]
    pub const fn selected_week_of_month(&self) -> Option<WeekOfMonth> {
        match self {
            Self::MonthlyNthWeekday { week, .. } | Self::YearlyNthWeekday { week, .. } => {
                Some(*week)
            }
            _ => None,
        }
    }

    /// Calendar day of the month, for the day-number rules.
    #[must_use]
    pub const fn selected_day_of_month(&self) -> Option<u32> {
        match self {
            Self::MonthlyDayN { day } | Self::YearlyOnDate { day, .. } => Some(*day),
            _ => None,
        }
    }

    /// Month, for the yearly rules.
    #[must_use]
    pub const fn selected_month(&self) -> Option<MonthOfYear> {
        match self {
            Self::YearlyOnDate { month, .. } | Self::YearlyNthWeekday { month, .. } => {
                Some(*month)
            }
            _ => None,
        }
    }
}
