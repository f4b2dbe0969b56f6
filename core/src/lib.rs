// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Describe when a job recurs, and encode that description for a scheduler.
//!
//! A [`RecurrenceRule`] plus a [`StartTime`] encodes to a positional token string with
//! [`encode`] and back with [`decode`]. Rules without calendar structure skip the token string
//! and use [`to_interval_seconds`] / [`from_interval_seconds`] instead. Turning a token string
//! into a cron expression is left to a [`CronTranslator`].

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod calendar;
mod codec;
mod cron;
mod error;
mod interval;
#[allow(missing_docs)]
pub mod keyword;
mod rule;
mod schedule;
#[allow(missing_docs)]
pub mod time;

pub use crate::calendar::{DayOfWeek, MonthOfYear, TimeOfDay, WeekOfMonth};
pub use crate::codec::{RecurrenceKind, decode, encode};
pub use crate::cron::{CronParseError, CronTranslator, cron_expression};
pub use crate::error::RecurrenceError;
pub use crate::interval::{from_interval_seconds, to_interval_seconds};
pub use crate::rule::{IntervalUnit, RecurrenceRule, TemporalUnit};
pub use crate::schedule::{DateRange, Schedule, Trigger};
pub use crate::time::StartTime;

/// The name of the application.
pub const APP_NAME: &str = "cadence";
