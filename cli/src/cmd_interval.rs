// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cadence_core::{RecurrenceRule, TemporalUnit, from_interval_seconds};
use clap::{ArgMatches, Command, arg, value_parser};
use serde::Serialize;

use crate::formatter::describe_rule;
use crate::util::{OutputFormat, print_output};

#[derive(Debug, Clone, Copy)]
pub struct CmdInterval {
    pub seconds: u64,
}

impl CmdInterval {
    pub const NAME: &str = "interval";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the rule for a fixed interval given in seconds")
            .arg(arg!(seconds: <SECONDS> "Seconds between two runs").value_parser(value_parser!(u64)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<u64>("seconds") {
            Some(seconds) => Self { seconds: *seconds },
            None => unreachable!(),
        }
    }

    pub fn run(self, output_format: OutputFormat) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting interval...");
        let interval = Interval::new(self.seconds);
        print_output(output_format, &interval, |a| describe_rule(&a.rule))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Interval {
    seconds: u64,
    unit: TemporalUnit,
    rule: RecurrenceRule,
}

impl Interval {
    fn new(seconds: u64) -> Self {
        let rule = from_interval_seconds(seconds);
        Self {
            seconds,
            unit: rule.temporal_unit(),
            rule,
        }
    }
}
