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

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod opt;

use crate::{commands::execute, config::register_currencies, opt::TallyCli};

/// Runs the CLI command described by `opt`, printing its result to stdout.
///
/// # Errors
///
/// Returns an error if the currencies file cannot be loaded or the command fails.
pub fn run(opt: &TallyCli) -> anyhow::Result<()> {
    if let Some(path) = &opt.currencies {
        let count = register_currencies(path)?;
        log::debug!("Registered {count} currencies from '{}'", path.display());
    }
    let output = execute(&opt.command)?;
    println!("{output}");
    Ok(())
}
