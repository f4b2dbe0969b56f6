// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::cron::CronParseError;

/// Errors produced while building, encoding or decoding recurrence rules.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecurrenceError {
    /// The token string does not follow the recurrence grammar.
    #[error("Malformed recurrence '{input}': {reason}")]
    MalformedRecurrence {
        /// The offending token string
        input: String,
        /// What is wrong with it
        reason: String,
    },

    /// A numeric field is outside of its domain.
    #[error("Invalid value {value} for {field}")]
    InvalidNumericField {
        /// Name of the field
        field: &'static str,
        /// The rejected value
        value: u64,
    },

    /// The requested form does not exist for this kind of rule.
    ///
    /// This is a "not applicable" answer rather than a failure of the input.
    #[error("A {rule} rule has no {target} form")]
    UnsupportedConversion {
        /// The unit of the rule that was asked for the conversion
        rule: &'static str,
        /// The form that was requested
        target: &'static str,
    },

    /// The cron translator rejected the token string.
    #[error(transparent)]
    CronParse(#[from] CronParseError),

    /// The end of a date range lies before its start.
    #[error("Date range ends on {end}, before it starts on {start}")]
    InvalidDateRange {
        /// First day of the range
        start: Date,
        /// Requested last day of the range
        end: Date,
    },
}

impl RecurrenceError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecurrence {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<u64>) -> Self {
        Self::InvalidNumericField {
            field,
            value: value.into(),
        }
    }
}
