// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cadence_core::{RecurrenceRule, StartTime, encode};
use clap::{ArgMatches, Command, arg, value_parser};
use serde::Serialize;

use crate::config::Config;
use crate::util::{OutputFormat, print_output};

#[derive(Debug, Clone)]
pub struct CmdEncode {
    pub rule: String,
    pub at: Option<StartTime>,
}

impl CmdEncode {
    pub const NAME: &str = "encode";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Encode a rule given as JSON into a recurrence token string")
            .arg(arg!(rule: <RULE_JSON> "The rule, e.g. '{\"kind\":\"weekly_on\",\"days\":[\"mon\"]}'"))
            .arg(
                arg!(--at <TIME> "Start time as H:MM AM/PM or HH:MM, defaults to the configured one")
                    .value_parser(value_parser!(StartTime)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let rule = match matches.get_one::<String>("rule") {
            Some(rule) => rule.clone(),
            None => unreachable!(),
        };
        Self {
            rule,
            at: matches.get_one("at").copied(),
        }
    }

    pub fn run(self, config: &Config, output_format: OutputFormat) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "encoding rule...");
        let encoded = self.encode(config)?;
        print_output(output_format, &encoded, |a| a.recurrence.clone())
    }

    fn encode(&self, config: &Config) -> Result<Encoded, Box<dyn Error>> {
        let rule: RecurrenceRule = serde_json::from_str(&self.rule)
            .map_err(|e| format!("Invalid rule '{}': {e}", self.rule))?;
        let start_time = self.at.unwrap_or(config.default_start);
        let recurrence = encode(&rule, start_time)?;
        Ok(Encoded {
            recurrence,
            start_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Encoded {
    recurrence: String,
    start_time: StartTime,
}
