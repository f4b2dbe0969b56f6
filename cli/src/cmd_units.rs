// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cadence_core::{RecurrenceRule, TemporalUnit};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::formatter::describe_rule;
use crate::util::{OutputFormat, print_output};

#[derive(Debug, Clone, Copy)]
pub struct CmdUnits {
    pub unit: Option<TemporalUnit>,
}

impl CmdUnits {
    pub const NAME: &str = "units";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List temporal units and the rule each one starts with")
            .arg(
                arg!(unit: [UNIT] "Only show this unit")
                    .value_parser(value_parser!(TemporalUnit)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            unit: matches.get_one::<TemporalUnit>("unit").copied(),
        }
    }

    pub fn run(self, output_format: OutputFormat) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing units...");
        let units = units(self.unit);
        print_output(output_format, units.as_slice(), |units| {
            units
                .iter()
                .map(|a| {
                    let unit = format!("{:<8}", a.unit.to_string());
                    format!("{} {}", unit.bold(), describe_rule(&a.default_rule))
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Unit {
    unit: TemporalUnit,
    default_rule: RecurrenceRule,
}

fn units(only: Option<TemporalUnit>) -> Vec<Unit> {
    TemporalUnit::iter()
        .filter(|unit| only.is_none_or(|a| a == *unit))
        .map(|unit| Unit {
            unit,
            default_rule: RecurrenceRule::default_for(unit),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_unit_once() {
        let units = units(None);
        assert_eq!(units.len(), 7);
        for unit in &units {
            assert_eq!(unit.default_rule.temporal_unit(), unit.unit);
        }
    }

    #[test]
    fn test_default_rules_describe_the_reset_state() {
        let units = units(None);
        let described: Vec<_> = units
            .iter()
            .map(|a| (a.unit.to_string(), describe_rule(&a.default_rule)))
            .collect();
        assert_eq!(described[0], ("seconds".to_string(), "every second".to_string()));
        assert_eq!(described[3], ("daily".to_string(), "every day".to_string()));
        assert_eq!(
            described[4],
            ("weekly".to_string(), "weekly, no day selected".to_string())
        );
        assert_eq!(described[6], ("yearly".to_string(), "yearly on Jan 1".to_string()));
    }

    #[test]
    fn test_filters_by_unit() {
        let units = units(Some(TemporalUnit::Monthly));
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].unit, TemporalUnit::Monthly);
        assert_eq!(describe_rule(&units[0].default_rule), "monthly on day 1");
    }

    #[test]
    fn test_parse_unit() {
        let cmd = Command::new("test").subcommand(CmdUnits::command());

        let matches = cmd.clone().try_get_matches_from(["test", "units", "weekly"]).unwrap();
        let sub_matches = matches.subcommand_matches(CmdUnits::NAME).unwrap();
        assert_eq!(CmdUnits::from(sub_matches).unit, Some(TemporalUnit::Weekly));

        let matches = cmd.clone().try_get_matches_from(["test", "units"]).unwrap();
        let sub_matches = matches.subcommand_matches(CmdUnits::NAME).unwrap();
        assert_eq!(CmdUnits::from(sub_matches).unit, None);

        assert!(cmd.try_get_matches_from(["test", "units", "fortnightly"]).is_err());
    }
}
