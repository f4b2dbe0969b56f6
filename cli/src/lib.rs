// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for `cadence-core`.

mod cli;
mod cmd_decode;
mod cmd_encode;
mod cmd_interval;
mod cmd_units;
mod config;
mod formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
pub use crate::util::OutputFormat;
