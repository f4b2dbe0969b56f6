// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cadence_core::{RecurrenceRule, StartTime, TemporalUnit, decode};
use clap::{ArgMatches, Command, arg};
use serde::Serialize;

use crate::formatter::format_schedule;
use crate::util::{OutputFormat, print_output};

#[derive(Debug, Clone)]
pub struct CmdDecode {
    pub recurrence: String,
}

impl CmdDecode {
    pub const NAME: &str = "decode";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Decode a recurrence token string")
            .arg(arg!(recurrence: <RECURRENCE> "The token string, e.g. \"WeeklyOn 00 30 9 2,4\""))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("recurrence") {
            Some(recurrence) => Self {
                recurrence: recurrence.clone(),
            },
            None => unreachable!(),
        }
    }

    pub fn run(self, output_format: OutputFormat) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "decoding recurrence...");
        let decoded = Decoded::new(&self.recurrence)?;
        print_output(output_format, &decoded, |a| {
            format_schedule(&a.rule, a.start_time)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub unit: TemporalUnit,
    pub rule: RecurrenceRule,
    pub start_time: StartTime,
}

impl Decoded {
    pub fn new(recurrence: &str) -> Result<Self, Box<dyn Error>> {
        let (rule, start_time) = decode(recurrence)?;
        Ok(Self {
            unit: rule.temporal_unit(),
            rule,
            start_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use cadence_core::{DayOfWeek, TimeOfDay};

    use super::*;

    #[test]
    fn test_parse_decode() {
        let cmd = Command::new("test").subcommand(CmdDecode::command());
        let matches = cmd
            .try_get_matches_from(["test", "decode", "EveryWeekday 00 0 8"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("decode").unwrap();
        let parsed = CmdDecode::from(sub_matches);
        assert_eq!(parsed.recurrence, "EveryWeekday 00 0 8");
    }

    #[test]
    fn test_decoded_calendar_rule() {
        let decoded = Decoded::new("WeeklyOn 00 30 21 2,4").unwrap();
        assert_eq!(
            decoded,
            Decoded {
                unit: TemporalUnit::Weekly,
                rule: RecurrenceRule::weekly_on([DayOfWeek::Mon, DayOfWeek::Wed]),
                start_time: StartTime::new(9, 30, TimeOfDay::Pm).unwrap(),
            }
        );

        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(json["start_time"], "9:30 PM");
        assert_eq!(json["rule"]["kind"], "weekly_on");
        assert_eq!(json["unit"], "weekly");
    }

    #[test]
    fn test_decode_failure_is_reported() {
        let err = Decoded::new("BogusTag 00 30 9").unwrap_err();
        assert!(err.to_string().contains("BogusTag"));
    }
}
