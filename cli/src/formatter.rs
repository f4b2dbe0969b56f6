// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_core::{IntervalUnit, RecurrenceRule, StartTime, WeekOfMonth};
use colored::Colorize;

/// A short English phrase for a rule, e.g. `monthly on the second Tue`.
pub fn describe_rule(rule: &RecurrenceRule) -> String {
    match rule {
        RecurrenceRule::Interval { unit, count } => {
            let unit = match unit {
                IntervalUnit::Seconds => "second",
                IntervalUnit::Minutes => "minute",
                IntervalUnit::Hours => "hour",
            };
            every(*count, unit)
        }
        RecurrenceRule::DailyEveryNDays { days, ignore_dst } => {
            let mut s = every(*days, "day");
            if *ignore_dst {
                s.push_str(", ignoring DST");
            }
            s
        }
        RecurrenceRule::DailyEveryWeekday => "every weekday".to_string(),
        RecurrenceRule::WeeklyOn { days } if days.is_empty() => "weekly, no day selected".to_string(),
        RecurrenceRule::WeeklyOn { days } => {
            let days: Vec<_> = days.iter().map(ToString::to_string).collect();
            format!("weekly on {}", days.join(", "))
        }
        RecurrenceRule::MonthlyDayN { day } => format!("monthly on day {day}"),
        RecurrenceRule::MonthlyNthWeekday { week, day } => {
            format!("monthly on the {} {day}", week_name(*week))
        }
        RecurrenceRule::YearlyOnDate { month, day } => format!("yearly on {month} {day}"),
        RecurrenceRule::YearlyNthWeekday { week, day, month } => {
            format!("yearly on the {} {day} of {month}", week_name(*week))
        }
    }
}

/// The text form of a decoded token string.
pub fn format_schedule(rule: &RecurrenceRule, start: StartTime) -> String {
    format!(
        "{} {}\n{} {}\n{} {start}",
        "Unit: ".bold(),
        rule.temporal_unit(),
        "Rule: ".bold(),
        describe_rule(rule),
        "Start:".bold(),
    )
}

fn every(count: u64, unit: &str) -> String {
    match count {
        1 => format!("every {unit}"),
        n => format!("every {n} {unit}s"),
    }
}

fn week_name(week: WeekOfMonth) -> &'static str {
    match week {
        WeekOfMonth::First => "first",
        WeekOfMonth::Second => "second",
        WeekOfMonth::Third => "third",
        WeekOfMonth::Fourth => "fourth",
        WeekOfMonth::Last => "last",
    }
}
