// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Start time of a recurrence, and the clock and unit arithmetic shared by the codecs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::calendar::TimeOfDay;
use crate::error::RecurrenceError;

pub const SECS_PER_MINUTE: u64 = 60;
pub const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Time of day at which a recurrence fires, on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartTime {
    hour: u8,
    minute: u8,
    period: TimeOfDay,
}

impl StartTime {
    /// Create a start time from a 12-hour clock reading.
    ///
    /// ## Errors
    ///
    /// Returns [`RecurrenceError::InvalidNumericField`] if `hour` is not in `1..=12` or `minute`
    /// is not in `0..=59`.
    pub fn new(hour: u8, minute: u8, period: TimeOfDay) -> Result<Self, RecurrenceError> {
        if !(1..=12).contains(&hour) {
            return Err(RecurrenceError::invalid("hour", hour));
        }
        if minute > 59 {
            return Err(RecurrenceError::invalid("minute", minute));
        }
        Ok(Self {
            hour,
            minute,
            period,
        })
    }

    /// Create a start time from a 24-hour clock reading.
    ///
    /// ## Errors
    ///
    /// Returns [`RecurrenceError::InvalidNumericField`] if `hour` is not in `0..=23` or `minute`
    /// is not in `0..=59`.
    pub fn from_24_hour(hour: u8, minute: u8) -> Result<Self, RecurrenceError> {
        if hour > 23 {
            return Err(RecurrenceError::invalid("hour", hour));
        }
        Self::new(
            map_0_through_11_to_12_through_11(to_12_hour_clock(hour)),
            minute,
            time_of_day_by_24_hour(hour),
        )
    }

    /// Hour on the 12-hour clock, `1..=12`.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour, `0..=59`.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// AM or PM.
    #[must_use]
    pub const fn period(&self) -> TimeOfDay {
        self.period
    }

    /// Hour on the 24-hour clock, `0..=23`.
    #[must_use]
    pub const fn hour_24(&self) -> u8 {
        match (self.period, self.hour) {
            (TimeOfDay::Am, 12) => 0,
            (TimeOfDay::Am, h) | (TimeOfDay::Pm, h @ 12) => h,
            (TimeOfDay::Pm, h) => h + 12,
        }
    }
}

/// Midnight, the value the editor resets to.
impl Default for StartTime {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            period: TimeOfDay::Am,
        }
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}

/// Accepts `H:MM AM`, `H:MM PM` (any case) and 24-hour `HH:MM`.
impl FromStr for StartTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (clock, period) = match s.rsplit_once(char::is_whitespace) {
            Some((clock, period)) => {
                let period = period
                    .parse::<TimeOfDay>()
                    .map_err(|_| format!("Invalid time period '{period}', expected AM or PM"))?;
                (clock.trim(), Some(period))
            }
            None => (s, None),
        };

        let (hour, minute) = clock
            .split_once(':')
            .ok_or_else(|| format!("Invalid time '{s}', expected H:MM AM/PM or HH:MM"))?;
        let hour: u8 = hour
            .parse()
            .map_err(|e| format!("Invalid hour '{hour}': {e}"))?;
        let minute: u8 = minute
            .parse()
            .map_err(|e| format!("Invalid minute '{minute}': {e}"))?;

        match period {
            Some(period) => Self::new(hour, minute, period),
            None => Self::from_24_hour(hour, minute),
        }
        .map_err(|e| e.to_string())
    }
}

impl Serialize for StartTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StartTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StartTimeVisitor;

        impl de::Visitor<'_> for StartTimeVisitor {
            type Value = StartTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a time string like "9:30 AM" or "21:30""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(StartTimeVisitor)
    }
}

/// AM for hours before noon on a 24-hour clock.
#[must_use]
pub const fn time_of_day_by_24_hour(hour: u8) -> TimeOfDay {
    if hour < 12 {
        TimeOfDay::Am
    } else {
        TimeOfDay::Pm
    }
}

/// Fold a 24-hour reading into `0..=11`.
#[must_use]
pub const fn to_12_hour_clock(hour: u8) -> u8 {
    hour % 12
}

/// Clock faces show 12 where the arithmetic says 0.
#[must_use]
pub const fn map_0_through_11_to_12_through_11(hour: u8) -> u8 {
    if hour == 0 { 12 } else { hour }
}

#[must_use]
pub const fn minutes_to_secs(minutes: u64) -> u64 {
    minutes.saturating_mul(SECS_PER_MINUTE)
}

#[must_use]
pub const fn hours_to_secs(hours: u64) -> u64 {
    hours.saturating_mul(SECS_PER_HOUR)
}

#[must_use]
pub const fn days_to_secs(days: u64) -> u64 {
    days.saturating_mul(SECS_PER_DAY)
}

/// Zero is not a whole number of any unit.
#[must_use]
pub const fn is_seconds_whole_day(secs: u64) -> bool {
    secs != 0 && secs % SECS_PER_DAY == 0
}

#[must_use]
pub const fn is_seconds_whole_hour(secs: u64) -> bool {
    secs != 0 && secs % SECS_PER_HOUR == 0
}

#[must_use]
pub const fn is_seconds_whole_minute(secs: u64) -> bool {
    secs != 0 && secs % SECS_PER_MINUTE == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_12_hour_clock_to_24_hour() {
        let cases = [
            (12, TimeOfDay::Am, 0),
            (1, TimeOfDay::Am, 1),
            (11, TimeOfDay::Am, 11),
            (12, TimeOfDay::Pm, 12),
            (1, TimeOfDay::Pm, 13),
            (11, TimeOfDay::Pm, 23),
        ];
        for (hour, period, expected) in cases {
            let time = StartTime::new(hour, 0, period).unwrap();
            assert_eq!(time.hour_24(), expected, "{time}");
        }
    }

    #[test]
    fn converts_24_hour_clock_to_12_hour() {
        let midnight = StartTime::from_24_hour(0, 0).unwrap();
        assert_eq!((midnight.hour(), midnight.period()), (12, TimeOfDay::Am));

        let noon = StartTime::from_24_hour(12, 0).unwrap();
        assert_eq!((noon.hour(), noon.period()), (12, TimeOfDay::Pm));

        let evening = StartTime::from_24_hour(21, 45).unwrap();
        assert_eq!(evening.hour(), 9);
        assert_eq!(evening.minute(), 45);
        assert_eq!(evening.period(), TimeOfDay::Pm);
    }

    #[test]
    fn every_24_hour_value_round_trips() {
        for hour in 0..24 {
            let time = StartTime::from_24_hour(hour, 7).unwrap();
            assert_eq!(time.hour_24(), hour);
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            StartTime::new(0, 0, TimeOfDay::Am),
            Err(RecurrenceError::invalid("hour", 0u8))
        );
        assert!(StartTime::new(13, 0, TimeOfDay::Pm).is_err());
        assert!(StartTime::new(1, 60, TimeOfDay::Pm).is_err());
        assert!(StartTime::from_24_hour(24, 0).is_err());
    }

    #[test]
    fn defaults_to_midnight() {
        let time = StartTime::default();
        assert_eq!(time.to_string(), "12:00 AM");
        assert_eq!(time.hour_24(), 0);
    }

    #[test]
    fn parses_both_clock_styles() {
        let time: StartTime = "9:05 pm".parse().unwrap();
        assert_eq!(time, StartTime::new(9, 5, TimeOfDay::Pm).unwrap());

        let time: StartTime = "07:30".parse().unwrap();
        assert_eq!(time, StartTime::new(7, 30, TimeOfDay::Am).unwrap());

        assert!("9:30 XM".parse::<StartTime>().is_err());
        assert!("930".parse::<StartTime>().is_err());
        assert!("13:00 PM".parse::<StartTime>().is_err());
    }

    #[test]
    fn detects_whole_units() {
        assert!(is_seconds_whole_day(2 * SECS_PER_DAY));
        assert!(is_seconds_whole_hour(7200));
        assert!(!is_seconds_whole_minute(90));
        assert!(!is_seconds_whole_day(0));
        assert_eq!(minutes_to_secs(2), 120);
        assert_eq!(hours_to_secs(2), 7200);
        assert_eq!(days_to_secs(u64::MAX), u64::MAX);
    }
}
