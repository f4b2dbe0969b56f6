// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Positional token string codec.
//!
//! ```txt
//! recurrence := tag SP "00" SP minute SP hour24 tail
//! tag        := "EveryWeekday" | "WeeklyOn" | "DayNOfMonth" | "NthDayNameOfMonth"
//!             | "LastDayNameOfMonth" | "EveryMonthNameN"
//!             | "NthDayNameOfMonthName" | "LastDayNameOfMonthName"
//! tail       := "" | SP int | SP int SP int | SP int SP int SP int
//! ```
//!
//! Calendar positions in the tail are 1-based: Sunday is 1, the first week is 1, the last week
//! is 5 and January is 1. The in-memory enumerations are 0-based, so the codec shifts by one in
//! both directions.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::calendar::{DayOfWeek, MonthOfYear, WeekOfMonth};
use crate::error::RecurrenceError;
use crate::keyword::{
    KW_DAY_N_OF_MONTH, KW_EVERY_MONTH_NAME_N, KW_EVERY_WEEKDAY, KW_LAST_DAY_NAME_OF_MONTH,
    KW_LAST_DAY_NAME_OF_MONTH_NAME, KW_NTH_DAY_NAME_OF_MONTH, KW_NTH_DAY_NAME_OF_MONTH_NAME,
    KW_SECONDS, KW_WEEKLY_ON, SEP_DAY_LIST, SEP_TOKEN,
};
use crate::rule::RecurrenceRule;
use crate::time::StartTime;

/// The tag of a token string, naming the shape of the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(missing_docs)]
pub enum RecurrenceKind {
    EveryWeekday,
    WeeklyOn,
    DayNOfMonth,
    NthDayNameOfMonth,
    LastDayNameOfMonth,
    EveryMonthNameN,
    NthDayNameOfMonthName,
    LastDayNameOfMonthName,
}

impl RecurrenceKind {
    /// The keyword written as token 0.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RecurrenceKind::EveryWeekday => KW_EVERY_WEEKDAY,
            RecurrenceKind::WeeklyOn => KW_WEEKLY_ON,
            RecurrenceKind::DayNOfMonth => KW_DAY_N_OF_MONTH,
            RecurrenceKind::NthDayNameOfMonth => KW_NTH_DAY_NAME_OF_MONTH,
            RecurrenceKind::LastDayNameOfMonth => KW_LAST_DAY_NAME_OF_MONTH,
            RecurrenceKind::EveryMonthNameN => KW_EVERY_MONTH_NAME_N,
            RecurrenceKind::NthDayNameOfMonthName => KW_NTH_DAY_NAME_OF_MONTH_NAME,
            RecurrenceKind::LastDayNameOfMonthName => KW_LAST_DAY_NAME_OF_MONTH_NAME,
        }
    }

    /// The tag a rule is written with, `None` for interval rules.
    #[must_use]
    pub const fn of(rule: &RecurrenceRule) -> Option<Self> {
        match rule {
            RecurrenceRule::Interval { .. } | RecurrenceRule::DailyEveryNDays { .. } => None,
            RecurrenceRule::DailyEveryWeekday => Some(RecurrenceKind::EveryWeekday),
            RecurrenceRule::WeeklyOn { .. } => Some(RecurrenceKind::WeeklyOn),
            RecurrenceRule::MonthlyDayN { .. } => Some(RecurrenceKind::DayNOfMonth),
            RecurrenceRule::MonthlyNthWeekday { week, .. } => Some(if week.is_last() {
                RecurrenceKind::LastDayNameOfMonth
            } else {
                RecurrenceKind::NthDayNameOfMonth
            }),
            RecurrenceRule::YearlyOnDate { .. } => Some(RecurrenceKind::EveryMonthNameN),
            RecurrenceRule::YearlyNthWeekday { week, .. } => Some(if week.is_last() {
                RecurrenceKind::LastDayNameOfMonthName
            } else {
                RecurrenceKind::NthDayNameOfMonthName
            }),
        }
    }
}

impl Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KW_EVERY_WEEKDAY => Ok(RecurrenceKind::EveryWeekday),
            KW_WEEKLY_ON => Ok(RecurrenceKind::WeeklyOn),
            KW_DAY_N_OF_MONTH => Ok(RecurrenceKind::DayNOfMonth),
            KW_NTH_DAY_NAME_OF_MONTH => Ok(RecurrenceKind::NthDayNameOfMonth),
            KW_LAST_DAY_NAME_OF_MONTH => Ok(RecurrenceKind::LastDayNameOfMonth),
            KW_EVERY_MONTH_NAME_N => Ok(RecurrenceKind::EveryMonthNameN),
            KW_NTH_DAY_NAME_OF_MONTH_NAME => Ok(RecurrenceKind::NthDayNameOfMonthName),
            KW_LAST_DAY_NAME_OF_MONTH_NAME => Ok(RecurrenceKind::LastDayNameOfMonthName),
            _ => Err(()),
        }
    }
}

/// Encode a calendar-shaped rule and its start time as a token string.
///
/// An empty [`RecurrenceRule::WeeklyOn`] is written with an empty day list, so the string ends
/// with a separator and still decodes to the same rule.
///
/// ## Errors
///
/// Interval rules have no token string and yield
/// [`RecurrenceError::UnsupportedConversion`]; use
/// [`to_interval_seconds`](crate::to_interval_seconds) for them.
///
/// ## Examples
///
/// ```
/// # use cadence_core::{DayOfWeek, RecurrenceRule, StartTime, TimeOfDay, encode};
/// let rule = RecurrenceRule::weekly_on([DayOfWeek::Fri, DayOfWeek::Mon, DayOfWeek::Wed]);
/// let start = StartTime::new(9, 30, TimeOfDay::Am).unwrap();
/// assert_eq!(encode(&rule, start).unwrap(), "WeeklyOn 00 30 9 2,4,6");
/// ```
pub fn encode(rule: &RecurrenceRule, start: StartTime) -> Result<String, RecurrenceError> {
    let kind = RecurrenceKind::of(rule).ok_or_else(|| RecurrenceError::UnsupportedConversion {
        rule: rule.temporal_unit().into(),
        target: "recurrence string",
    })?;

    Ok(Encoded { kind, rule, start }.to_string())
}

struct Encoded<'a> {
    kind: RecurrenceKind,
    rule: &'a RecurrenceRule,
    start: StartTime,
}

impl Display for Encoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sp = SEP_TOKEN;
        write!(
            f,
            "{}{sp}{KW_SECONDS}{sp}{}{sp}{}",
            self.kind,
            self.start.minute(),
            self.start.hour_24()
        )?;

        match self.rule {
            RecurrenceRule::Interval { .. }
            | RecurrenceRule::DailyEveryNDays { .. }
            | RecurrenceRule::DailyEveryWeekday => {}

            RecurrenceRule::WeeklyOn { days } => {
                f.write_char(sp)?;
                for (i, day) in days.iter().enumerate() {
                    if i > 0 {
                        f.write_char(SEP_DAY_LIST)?;
                    }
                    write!(f, "{}", day_to_wire(*day))?;
                }
            }

            RecurrenceRule::MonthlyDayN { day } => write!(f, "{sp}{day}")?,

            RecurrenceRule::MonthlyNthWeekday { week, day } => {
                write!(f, "{sp}{}", day_to_wire(*day))?;
                if !week.is_last() {
                    write!(f, "{sp}{}", week_to_wire(*week))?;
                }
            }

            RecurrenceRule::YearlyOnDate { month, day } => {
                write!(f, "{sp}{day}{sp}{}", month_to_wire(*month))?;
            }

            RecurrenceRule::YearlyNthWeekday { week, day, month } => {
                write!(f, "{sp}{}", day_to_wire(*day))?;
                if !week.is_last() {
                    write!(f, "{sp}{}", week_to_wire(*week))?;
                }
                write!(f, "{sp}{}", month_to_wire(*month))?;
            }
        }

        Ok(())
    }
}

/// Decode a token string into a rule and its start time.
///
/// Dispatch is on the tag. The `NthDayName...` tags are also accepted without their week field,
/// which then means the last week; the `LastDayName...` tags always mean the last week. Tokens
/// after the ones a tag needs are ignored.
///
/// ## Errors
///
/// - [`RecurrenceError::MalformedRecurrence`] for an unknown tag, a missing token or a token
///   that is not an unsigned integer.
/// - [`RecurrenceError::InvalidNumericField`] for a calendar position or clock value outside of
///   its range.
///
/// ## Examples
///
/// ```
/// # use cadence_core::{DayOfWeek, RecurrenceRule, WeekOfMonth, decode};
/// let (rule, start) = decode("LastDayNameOfMonth 00 0 17 6").unwrap();
/// assert_eq!(
///     rule,
///     RecurrenceRule::MonthlyNthWeekday { week: WeekOfMonth::Last, day: DayOfWeek::Fri }
/// );
/// assert_eq!(start.to_string(), "5:00 PM");
/// ```
pub fn decode(input: &str) -> Result<(RecurrenceRule, StartTime), RecurrenceError> {
    let mut tokens = Tokens::new(input);

    let tag = tokens.next("tag")?;
    let kind: RecurrenceKind = tag
        .parse()
        .map_err(|()| RecurrenceError::malformed(input, format!("unknown tag '{tag}'")))?;
    tracing::debug!(%kind, "decoding recurrence");

    let _seconds: u64 = tokens.next_int("seconds")?;
    let minute = tokens.next_int("minute")?;
    let hour = tokens.next_int("hour")?;
    let start = StartTime::from_24_hour(clock_field("hour", hour)?, clock_field("minute", minute)?)?;

    let rule = match kind {
        RecurrenceKind::EveryWeekday => RecurrenceRule::DailyEveryWeekday,

        RecurrenceKind::WeeklyOn => {
            let list = tokens.next("day list")?;
            // an empty token is an empty selection, an empty item is not
            let days = if list.is_empty() {
                BTreeSet::new()
            } else {
                list.split(SEP_DAY_LIST)
                    .map(|a| parse_int(input, "day of week", a).and_then(day_from_wire))
                    .collect::<Result<_, _>>()?
            };
            RecurrenceRule::WeeklyOn { days }
        }

        RecurrenceKind::DayNOfMonth => RecurrenceRule::MonthlyDayN {
            day: tokens.next_day_of_month()?,
        },

        RecurrenceKind::NthDayNameOfMonth => {
            let day = day_from_wire(tokens.next_int("day of week")?)?;
            let week = match tokens.next_optional_int("week of month")? {
                Some(week) => week_from_wire(week)?,
                None => WeekOfMonth::Last,
            };
            RecurrenceRule::MonthlyNthWeekday { week, day }
        }

        RecurrenceKind::LastDayNameOfMonth => RecurrenceRule::MonthlyNthWeekday {
            week: WeekOfMonth::Last,
            day: day_from_wire(tokens.next_int("day of week")?)?,
        },

        RecurrenceKind::EveryMonthNameN => {
            let day = tokens.next_day_of_month()?;
            let month = month_from_wire(tokens.next_int("month")?)?;
            RecurrenceRule::YearlyOnDate { month, day }
        }

        RecurrenceKind::NthDayNameOfMonthName => {
            let day = day_from_wire(tokens.next_int("day of week")?)?;
            let second = tokens.next("month")?;
            let (week, month) = match tokens.next_optional_int("month")? {
                Some(month) => {
                    let week = parse_int(input, "week of month", second)?;
                    (week_from_wire(week)?, month_from_wire(month)?)
                }
                None => (
                    WeekOfMonth::Last,
                    month_from_wire(parse_int(input, "month", second)?)?,
                ),
            };
            RecurrenceRule::YearlyNthWeekday { week, day, month }
        }

        RecurrenceKind::LastDayNameOfMonthName => {
            let day = day_from_wire(tokens.next_int("day of week")?)?;
            let month = month_from_wire(tokens.next_int("month")?)?;
            RecurrenceRule::YearlyNthWeekday {
                week: WeekOfMonth::Last,
                day,
                month,
            }
        }
    };

    Ok((rule, start))
}

/// Cursor over the space separated tokens of one input.
struct Tokens<'a> {
    input: &'a str,
    iter: std::str::Split<'a, char>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            iter: input.split(SEP_TOKEN),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, RecurrenceError> {
        self.iter
            .next()
            .ok_or_else(|| RecurrenceError::malformed(self.input, format!("missing {what}")))
    }

    fn next_int(&mut self, what: &str) -> Result<u64, RecurrenceError> {
        let token = self.next(what)?;
        parse_int(self.input, what, token)
    }

    /// Trailing fields may be absent, but a present one must be an integer.
    fn next_optional_int(&mut self, what: &str) -> Result<Option<u64>, RecurrenceError> {
        match self.iter.next() {
            Some(token) => parse_int(self.input, what, token).map(Some),
            None => Ok(None),
        }
    }

    /// Free-form, only required to fit the field.
    fn next_day_of_month(&mut self) -> Result<u32, RecurrenceError> {
        let token = self.next("day of month")?;
        parse_int(self.input, "day of month", token)
    }
}

fn parse_int<T>(input: &str, what: &str, token: &str) -> Result<T, RecurrenceError>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|e| {
        RecurrenceError::malformed(input, format!("invalid {what} '{token}': {e}"))
    })
}

fn clock_field(field: &'static str, value: u64) -> Result<u8, RecurrenceError> {
    u8::try_from(value).map_err(|_| RecurrenceError::invalid(field, value))
}

fn day_to_wire(day: DayOfWeek) -> u8 {
    day.ordinal() + 1
}

fn week_to_wire(week: WeekOfMonth) -> u8 {
    week.ordinal() + 1
}

fn month_to_wire(month: MonthOfYear) -> u8 {
    month.ordinal() + 1
}

fn day_from_wire(value: u64) -> Result<DayOfWeek, RecurrenceError> {
    from_wire(value, DayOfWeek::from_ordinal)
        .ok_or_else(|| RecurrenceError::invalid("day of week", value))
}

fn week_from_wire(value: u64) -> Result<WeekOfMonth, RecurrenceError> {
    from_wire(value, WeekOfMonth::from_ordinal)
        .ok_or_else(|| RecurrenceError::invalid("week of month", value))
}

fn month_from_wire(value: u64) -> Result<MonthOfYear, RecurrenceError> {
    from_wire(value, MonthOfYear::from_ordinal)
        .ok_or_else(|| RecurrenceError::invalid("month", value))
}

fn from_wire<T>(value: u64, lookup: impl Fn(u8) -> Option<T>) -> Option<T> {
    let ordinal = value.checked_sub(1)?;
    u8::try_from(ordinal).ok().and_then(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::TimeOfDay;
    use crate::rule::IntervalUnit;

    fn nine_thirty() -> StartTime {
        StartTime::new(9, 30, TimeOfDay::Am).unwrap()
    }

    #[test]
    fn tags_round_trip_through_keywords() {
        let kinds = [
            RecurrenceKind::EveryWeekday,
            RecurrenceKind::WeeklyOn,
            RecurrenceKind::DayNOfMonth,
            RecurrenceKind::NthDayNameOfMonth,
            RecurrenceKind::LastDayNameOfMonth,
            RecurrenceKind::EveryMonthNameN,
            RecurrenceKind::NthDayNameOfMonthName,
            RecurrenceKind::LastDayNameOfMonthName,
        ];
        for kind in kinds {
            assert_eq!(kind.as_str().parse::<RecurrenceKind>(), Ok(kind));
        }
        assert_eq!("weeklyon".parse::<RecurrenceKind>(), Err(()));
    }

    #[test]
    fn encodes_time_block_first() {
        let start = StartTime::new(12, 5, TimeOfDay::Pm).unwrap();
        let out = encode(&RecurrenceRule::DailyEveryWeekday, start).unwrap();
        assert_eq!(out, "EveryWeekday 00 5 12");
    }

    #[test]
    fn encodes_nth_weekday_with_week_field() {
        let rule = RecurrenceRule::MonthlyNthWeekday {
            week: WeekOfMonth::Second,
            day: DayOfWeek::Tue,
        };
        assert_eq!(
            encode(&rule, nine_thirty()).unwrap(),
            "NthDayNameOfMonth 00 30 9 3 2"
        );

        let rule = RecurrenceRule::YearlyNthWeekday {
            week: WeekOfMonth::Fourth,
            day: DayOfWeek::Thu,
            month: MonthOfYear::Nov,
        };
        assert_eq!(
            encode(&rule, nine_thirty()).unwrap(),
            "NthDayNameOfMonthName 00 30 9 5 4 11"
        );
    }

    #[test]
    fn encodes_last_week_without_week_field() {
        let rule = RecurrenceRule::YearlyNthWeekday {
            week: WeekOfMonth::Last,
            day: DayOfWeek::Mon,
            month: MonthOfYear::May,
        };
        assert_eq!(
            encode(&rule, nine_thirty()).unwrap(),
            "LastDayNameOfMonthName 00 30 9 2 5"
        );
    }

    #[test]
    fn encodes_day_then_month_for_yearly_date() {
        let rule = RecurrenceRule::YearlyOnDate {
            month: MonthOfYear::Dec,
            day: 25,
        };
        assert_eq!(
            encode(&rule, StartTime::default()).unwrap(),
            "EveryMonthNameN 00 0 0 25 12"
        );
    }

    #[test]
    fn empty_week_keeps_its_day_list_token() {
        let rule = RecurrenceRule::weekly_on([]);
        let out = encode(&rule, nine_thirty()).unwrap();
        assert_eq!(out, "WeeklyOn 00 30 9 ");
        assert_eq!(decode(&out).unwrap(), (rule, nine_thirty()));
    }

    #[test]
    fn refuses_interval_rules() {
        let rule = RecurrenceRule::interval(IntervalUnit::Hours, 2);
        assert_eq!(
            encode(&rule, nine_thirty()),
            Err(RecurrenceError::UnsupportedConversion {
                rule: "hours",
                target: "recurrence string",
            })
        );

        let rule = RecurrenceRule::DailyEveryNDays {
            days: 2,
            ignore_dst: false,
        };
        assert!(matches!(
            encode(&rule, nine_thirty()),
            Err(RecurrenceError::UnsupportedConversion { rule: "daily", .. })
        ));
    }

    #[test]
    fn decodes_nth_tag_without_week_as_last() {
        let (rule, _) = decode("NthDayNameOfMonth 00 30 9 6").unwrap();
        assert_eq!(
            rule,
            RecurrenceRule::MonthlyNthWeekday {
                week: WeekOfMonth::Last,
                day: DayOfWeek::Fri,
            }
        );

        let (rule, _) = decode("NthDayNameOfMonthName 00 30 9 6 3").unwrap();
        assert_eq!(
            rule,
            RecurrenceRule::YearlyNthWeekday {
                week: WeekOfMonth::Last,
                day: DayOfWeek::Fri,
                month: MonthOfYear::Mar,
            }
        );
    }

    #[test]
    fn decodes_week_five_as_last() {
        let (rule, _) = decode("NthDayNameOfMonth 00 30 9 1 5").unwrap();
        assert_eq!(rule.selected_week_of_month(), Some(WeekOfMonth::Last));
    }

    #[test]
    fn last_tag_ignores_extra_fields() {
        let (rule, _) = decode("LastDayNameOfMonth 00 30 9 6 2").unwrap();
        assert_eq!(
            rule,
            RecurrenceRule::MonthlyNthWeekday {
                week: WeekOfMonth::Last,
                day: DayOfWeek::Fri,
            }
        );
    }

    #[test]
    fn rejects_malformed_input() {
        let cases = [
            "",
            "BogusTag 00 30 9",
            "WeeklyOn 00 30 9",
            "WeeklyOn 00 30",
            "WeeklyOn 00 x 9 2",
            "WeeklyOn 00 30 9 2,x",
            "DayNOfMonth 00 30 9",
            "DayNOfMonth 00 30 9 -1",
            "EveryMonthNameN 00 30 9 25",
            "LastDayNameOfMonthName 00 30 9 2",
            "NthDayNameOfMonth 00 30 9 2 x",
            "EveryWeekday  00 30 9",
            "WeeklyOn 00 30 9 ,",
            "WeeklyOn 00 30 9 2,,4",
            "WeeklyOn 00 30 9 2,",
            "DayNOfMonth 00 30 9 4294967296",
        ];
        for input in cases {
            assert!(
                matches!(
                    decode(input),
                    Err(RecurrenceError::MalformedRecurrence { .. })
                ),
                "expected malformed: {input:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_positions() {
        let cases = [
            ("WeeklyOn 00 30 9 0", "day of week"),
            ("WeeklyOn 00 30 9 8", "day of week"),
            ("NthDayNameOfMonth 00 30 9 2 6", "week of month"),
            ("EveryMonthNameN 00 30 9 1 13", "month"),
            ("EveryWeekday 00 60 9", "minute"),
            ("EveryWeekday 00 30 24", "hour"),
        ];
        for (input, expected) in cases {
            match decode(input) {
                Err(RecurrenceError::InvalidNumericField { field, .. }) => {
                    assert_eq!(field, expected, "{input}");
                }
                other => panic!("expected invalid {expected} for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn names_the_field_that_failed_to_parse() {
        let cases = [
            ("NthDayNameOfMonthName 00 30 9 2 x 3", "week of month"),
            ("NthDayNameOfMonthName 00 30 9 2 x", "month"),
            ("NthDayNameOfMonthName 00 30 9 2 3 x", "month"),
        ];
        for (input, expected) in cases {
            match decode(input) {
                Err(RecurrenceError::MalformedRecurrence { reason, .. }) => {
                    assert!(
                        reason.starts_with(&format!("invalid {expected} 'x'")),
                        "{input}: {reason}"
                    );
                }
                other => panic!("expected malformed for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn does_not_validate_day_of_month() {
        let (rule, _) = decode("DayNOfMonth 00 30 9 32").unwrap();
        assert_eq!(rule, RecurrenceRule::MonthlyDayN { day: 32 });
    }
}
