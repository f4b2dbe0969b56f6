// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The state a recurrence editor keeps between edits: a rule, its start time and the range of
//! dates it applies to.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::codec::{decode, encode};
use crate::cron::{CronTranslator, cron_expression};
use crate::error::RecurrenceError;
use crate::interval::{from_interval_seconds, to_interval_seconds};
use crate::rule::{RecurrenceRule, TemporalUnit};
use crate::time::StartTime;

/// Dates a schedule is active on, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRaw")]
pub struct DateRange {
    start: Date,
    end: Option<Date>,
}

#[derive(Deserialize)]
struct DateRangeRaw {
    start: Date,
    #[serde(default)]
    end: Option<Date>,
}

impl TryFrom<DateRangeRaw> for DateRange {
    type Error = RecurrenceError;

    fn try_from(raw: DateRangeRaw) -> Result<Self, Self::Error> {
        match raw.end {
            Some(end) => Self::ending_by(raw.start, end),
            None => Ok(Self::open_ended(raw.start)),
        }
    }
}

impl DateRange {
    /// A range with no end date.
    #[must_use]
    pub const fn open_ended(start: Date) -> Self {
        Self { start, end: None }
    }

    /// A range that ends by `end`.
    ///
    /// ## Errors
    ///
    /// Returns [`RecurrenceError::InvalidDateRange`] if `end` is before `start`.
    pub fn ending_by(start: Date, end: Date) -> Result<Self, RecurrenceError> {
        if end < start {
            return Err(RecurrenceError::InvalidDateRange { start, end });
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range, if any.
    #[must_use]
    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    /// Whether the range has no end date.
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }
}

/// How a scheduler should fire a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Fire every `seconds` seconds.
    Interval {
        /// Spacing between two runs
        seconds: u64,
        /// Keep the spacing fixed across daylight saving transitions
        ignore_dst: bool,
    },

    /// Fire on a cron expression.
    Cron {
        /// The token string the expression was translated from
        recurrence: String,
        /// The translated expression
        expression: String,
    },
}

/// A rule together with its start time and date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// What recurs and how
    pub rule: RecurrenceRule,
    /// Time of day the rule fires at
    pub start_time: StartTime,
    /// Dates the rule applies to
    pub range: DateRange,
}

impl Schedule {
    /// A schedule in its reset state: daily, every day, at midnight.
    #[must_use]
    pub fn new(range: DateRange) -> Self {
        Self {
            rule: RecurrenceRule::default_for(TemporalUnit::Daily),
            start_time: StartTime::default(),
            range,
        }
    }

    /// The active unit.
    #[must_use]
    pub fn temporal_unit(&self) -> TemporalUnit {
        self.rule.temporal_unit()
    }

    /// Switch to `unit`.
    ///
    /// Selecting another unit starts over from its default rule; selecting the active unit again
    /// keeps the current rule.
    pub fn select_unit(&mut self, unit: TemporalUnit) {
        if self.temporal_unit() != unit {
            self.rule = RecurrenceRule::default_for(unit);
        }
    }

    /// Back to midnight, open-ended from `date`, with the default rule of the active unit.
    pub fn reset(&mut self, date: Date) {
        self.start_time = StartTime::default();
        self.range = DateRange::open_ended(date);
        self.rule = RecurrenceRule::default_for(self.temporal_unit());
    }

    /// Replace rule and start time with the ones a token string describes.
    ///
    /// ## Errors
    ///
    /// See [`decode`]. On error the schedule is left untouched.
    pub fn load_recurrence(&mut self, recurrence: &str) -> Result<(), RecurrenceError> {
        let (rule, start_time) = decode(recurrence)?;
        self.rule = rule;
        self.start_time = start_time;
        Ok(())
    }

    /// Replace the rule with the interval rule for `seconds`.
    pub fn load_interval_seconds(&mut self, seconds: u64) {
        self.rule = from_interval_seconds(seconds);
    }

    /// The token string of a calendar-shaped schedule.
    ///
    /// ## Errors
    ///
    /// See [`encode`].
    pub fn recurrence(&self) -> Result<String, RecurrenceError> {
        encode(&self.rule, self.start_time)
    }

    /// Interval spacing for interval rules, a translated cron expression otherwise.
    ///
    /// ## Errors
    ///
    /// Returns [`RecurrenceError::CronParse`] if the translator rejects the token string.
    pub fn trigger<T>(&self, translator: &T) -> Result<Trigger, RecurrenceError>
    where
        T: CronTranslator + ?Sized,
    {
        if let Some(seconds) = to_interval_seconds(&self.rule) {
            return Ok(Trigger::Interval {
                seconds,
                ignore_dst: self.rule.should_ignore_dst(),
            });
        }

        Ok(Trigger::Cron {
            recurrence: self.recurrence()?,
            expression: cron_expression(translator, &self.rule, self.start_time)?,
        })
    }
}
