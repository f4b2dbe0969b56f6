// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use cadence_core::APP_NAME;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_decode::CmdDecode;
use crate::cmd_encode::CmdEncode;
use crate::cmd_interval::CmdInterval;
use crate::cmd_units::CmdUnits;
use crate::config::{Config, parse_config};
use crate::util::OutputFormat;

const CADENCE_LOG_ENV: &str = "CADENCE_LOG";

/// Run the Cadence command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(CADENCE_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Output format given on the command line
    pub output_format: Option<OutputFormat>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Describe when a job recurs, and encode it for a scheduler.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/cadence/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/cadence/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(OutputFormat::arg())
            .subcommand(CmdDecode::command())
            .subcommand(CmdEncode::command())
            .subcommand(CmdInterval::command())
            .subcommand(CmdUnits::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;

        // global args are propagated down to the subcommand
        let (command, sub_matches) = match matches.subcommand() {
            Some((CmdDecode::NAME, m)) => (Decode(CmdDecode::from(m)), m),
            Some((CmdEncode::NAME, m)) => (Encode(CmdEncode::from(m)), m),
            Some((CmdInterval::NAME, m)) => (Interval(CmdInterval::from(m)), m),
            Some((CmdUnits::NAME, m)) => (Units(CmdUnits::from(m)), m),
            _ => return Err("No command given".into()),
        };

        Ok(Cli {
            config: sub_matches.get_one("config").cloned(),
            output_format: OutputFormat::from(sub_matches),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        self.command.run(&config, self.output_format)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Decode a recurrence token string
    Decode(CmdDecode),

    /// Encode a rule into a recurrence token string
    Encode(CmdEncode),

    /// Show the rule for a fixed interval
    Interval(CmdInterval),

    /// List temporal units
    Units(CmdUnits),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: &Config, output_format: Option<OutputFormat>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        let output_format = output_format.unwrap_or(config.output_format);
        match self {
            Decode(a)   => a.run(output_format),
            Encode(a)   => a.run(config, output_format),
            Interval(a) => a.run(output_format),
            Units(a)    => a.run(output_format),
        }
    }
}
