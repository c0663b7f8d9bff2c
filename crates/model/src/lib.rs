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

//! Currency-aware money values for the `tally` workspace.
//!
//! The `tally-model` crate binds an exact decimal amount to an optional currency and refuses to
//! silently combine values of different currencies:
//!
//! - [`types::Currency`]: an immutable ticker + minor-unit digit count, compared by ticker.
//! - [`types::Money`]: an immutable (amount, currency) pair with checked arithmetic, comparison,
//!   formatting and sub-unit conversion.
//! - [`parsing`]: turns integers, decimals, floats, strings such as `"10.50 EUR"` and other money
//!   values into an exact amount plus an optional currency.
//! - [`aggregation`]: sums heterogeneous inputs into a single [`types::Money`], resolving one
//!   currency and rejecting genuine mismatches.
//! - [`currencies`]: the built-in currency lookup table and the runtime registry.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs (`rstest` fixtures) for use in testing scenarios.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregation;
pub mod currencies;
pub mod error;
pub mod parsing;
pub mod types;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use crate::{
    error::MoneyError,
    types::{Currency, CurrencySpec, HasTicker, Money},
};
