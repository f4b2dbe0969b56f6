// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval form of a rule, independent of the token grammar.

use crate::rule::{IntervalUnit, RecurrenceRule};
use crate::time::{
    SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, days_to_secs, hours_to_secs,
    is_seconds_whole_day, is_seconds_whole_hour, is_seconds_whole_minute, minutes_to_secs,
};

/// Seconds between two runs of an interval rule.
///
/// Returns `None` for calendar-shaped rules, which have no fixed spacing. Results that do not
/// fit in a `u64` saturate.
///
/// ## Examples
///
/// ```
/// # use cadence_core::{DayOfWeek, IntervalUnit, RecurrenceRule, to_interval_seconds};
/// let rule = RecurrenceRule::interval(IntervalUnit::Minutes, 15);
/// assert_eq!(to_interval_seconds(&rule), Some(900));
///
/// let rule = RecurrenceRule::weekly_on([DayOfWeek::Mon]);
/// assert_eq!(to_interval_seconds(&rule), None);
/// ```
#[must_use]
pub fn to_interval_seconds(rule: &RecurrenceRule) -> Option<u64> {
    match rule {
        RecurrenceRule::Interval { unit, count } => Some(match unit {
            IntervalUnit::Seconds => *count,
            IntervalUnit::Minutes => minutes_to_secs(*count),
            IntervalUnit::Hours => hours_to_secs(*count),
        }),
        RecurrenceRule::DailyEveryNDays { days, .. } => Some(days_to_secs(*days)),
        RecurrenceRule::DailyEveryWeekday
        | RecurrenceRule::WeeklyOn { .. }
        | RecurrenceRule::MonthlyDayN { .. }
        | RecurrenceRule::MonthlyNthWeekday { .. }
        | RecurrenceRule::YearlyOnDate { .. }
        | RecurrenceRule::YearlyNthWeekday { .. } => None,
    }
}

/// Build the interval rule for a spacing in seconds.
///
/// The largest unit that divides `seconds` evenly wins, in the order days, hours, minutes,
/// seconds: 7200 becomes 2 hours rather than 120 minutes.
#[must_use]
pub fn from_interval_seconds(seconds: u64) -> RecurrenceRule {
    let rule = if is_seconds_whole_day(seconds) {
        RecurrenceRule::DailyEveryNDays {
            days: seconds / SECS_PER_DAY,
            ignore_dst: false,
        }
    } else if is_seconds_whole_hour(seconds) {
        RecurrenceRule::interval(IntervalUnit::Hours, seconds / SECS_PER_HOUR)
    } else if is_seconds_whole_minute(seconds) {
        RecurrenceRule::interval(IntervalUnit::Minutes, seconds / SECS_PER_MINUTE)
    } else {
        RecurrenceRule::interval(IntervalUnit::Seconds, seconds)
    };

    tracing::debug!(seconds, unit = %rule.temporal_unit(), "selected interval unit");
    rule
}
