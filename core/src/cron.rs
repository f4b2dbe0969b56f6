// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Seam to the external cron translator.
//!
//! The translator owns the cron grammar. This crate only promises to hand it a well-formed token
//! string, and passes its failures through untouched.

use crate::codec::encode;
use crate::error::RecurrenceError;
use crate::rule::RecurrenceRule;
use crate::time::StartTime;

/// The translator rejected a token string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot translate '{input}' to a cron expression: {message}")]
pub struct CronParseError {
    /// The token string that was handed to the translator
    pub input: String,
    /// What the translator reported
    pub message: String,
}

impl CronParseError {
    /// Create an error for the given token string.
    pub fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Converts a recurrence token string into a cron expression.
pub trait CronTranslator {
    /// Translate one token string.
    ///
    /// ## Errors
    ///
    /// Returns [`CronParseError`] carrying `recurrence` when the translator cannot read it.
    fn to_cron(&self, recurrence: &str) -> Result<String, CronParseError>;
}

impl<F> CronTranslator for F
where
    F: Fn(&str) -> Result<String, CronParseError>,
{
    fn to_cron(&self, recurrence: &str) -> Result<String, CronParseError> {
        self(recurrence)
    }
}

/// Encode a rule and pass it to the translator.
///
/// ## Errors
///
/// - [`RecurrenceError::UnsupportedConversion`] for interval rules; the translator is not called.
/// - [`RecurrenceError::CronParse`] with the translator's own error when it fails.
pub fn cron_expression<T>(
    translator: &T,
    rule: &RecurrenceRule,
    start: StartTime,
) -> Result<String, RecurrenceError>
where
    T: CronTranslator + ?Sized,
{
    if rule.is_interval() {
        return Err(RecurrenceError::UnsupportedConversion {
            rule: rule.temporal_unit().into(),
            target: "cron",
        });
    }

    let recurrence = encode(rule, start)?;
    Ok(translator.to_cron(&recurrence)?)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::calendar::{DayOfWeek, TimeOfDay};
    use crate::rule::IntervalUnit;

    fn echo(recurrence: &str) -> Result<String, CronParseError> {
        Ok(format!("cron({recurrence})"))
    }

    #[test]
    fn hands_encoded_string_to_translator() {
        let rule = RecurrenceRule::weekly_on([DayOfWeek::Sun]);
        let start = StartTime::new(6, 15, TimeOfDay::Pm).unwrap();
        let cron = cron_expression(&echo, &rule, start).unwrap();
        assert_eq!(cron, "cron(WeeklyOn 00 15 18 1)");
    }

    #[test]
    fn surfaces_translator_errors_unchanged() {
        let reject = |s: &str| -> Result<String, CronParseError> {
            Err(CronParseError::new(s, "unsupported"))
        };
        let rule = RecurrenceRule::DailyEveryWeekday;
        let err = cron_expression(&reject, &rule, StartTime::default()).unwrap_err();
        assert_eq!(
            err,
            RecurrenceError::CronParse(CronParseError::new("EveryWeekday 00 0 0", "unsupported"))
        );
    }

    #[test]
    fn interval_rules_skip_the_translator() {
        let calls = Cell::new(0);
        let counting = |s: &str| {
            calls.set(calls.get() + 1);
            echo(s)
        };
        let rule = RecurrenceRule::interval(IntervalUnit::Minutes, 5);
        let err = cron_expression(&counting, &rule, StartTime::default()).unwrap_err();
        assert!(matches!(
            err,
            RecurrenceError::UnsupportedConversion { target: "cron", .. }
        ));
        assert_eq!(calls.get(), 0);
    }
}
