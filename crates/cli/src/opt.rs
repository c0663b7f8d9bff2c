// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Main CLI structure for parsing command-line arguments and options.
///
/// This is the entry point for the `tally` command-line interface, providing exact decimal
/// money calculations with currency-consistency checking.
#[derive(Debug, Parser)]
#[clap(version, about, author)]
pub struct TallyCli {
    /// Path to a JSON file of custom currencies to register before running the command.
    #[arg(long, global = true, env = "TALLY_CURRENCIES")]
    pub currencies: Option<PathBuf>,
    /// Log level filter (off, error, warn, info, debug, trace).
    #[arg(long, global = true, env = "TALLY_LOG_LEVEL", default_value = "warn")]
    pub log_level: LevelFilter,
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available top-level commands for the `tally` CLI.
#[derive(Parser, Debug, Clone)]
pub enum Commands {
    /// Sums values into a single amount, rejecting mixed currencies.
    Sum(SumOpt),
    /// Formats a value with optional digit bounds.
    Format(FormatOpt),
    /// Converts a value into its minor-unit count.
    SubUnits(ConvertOpt),
    /// Converts a minor-unit count into a value.
    FromSubUnits(ConvertOpt),
}

/// Options for the `sum` command.
#[derive(Parser, Debug, Clone)]
pub struct SumOpt {
    /// Currency ticker the sum is bound to; values in other currencies are rejected.
    #[arg(long)]
    pub currency: Option<String>,
    /// Interpret every value as a minor-unit count (e.g. cents).
    #[arg(long)]
    pub cents: bool,
    /// Values to sum, e.g. `10`, `23.50`, or `"23.50 SEK"`.
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// Options for the `format` command.
#[derive(Parser, Debug, Clone)]
pub struct FormatOpt {
    /// Minimum number of fractional digits shown.
    #[arg(long)]
    pub min_decimals: Option<u8>,
    /// Maximum number of fractional digits shown (rounds half away from zero).
    #[arg(long)]
    pub max_decimals: Option<u8>,
    /// Currency ticker the value is bound to.
    #[arg(long)]
    pub currency: Option<String>,
    /// Value to format, e.g. `"0.445 CLF"`.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Options for the sub-unit conversion commands.
#[derive(Parser, Debug, Clone)]
pub struct ConvertOpt {
    /// Currency ticker whose minor unit is used (2 digits when absent).
    #[arg(long)]
    pub currency: Option<String>,
    /// Value to convert.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}
