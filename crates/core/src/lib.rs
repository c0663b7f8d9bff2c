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

//! Core foundational utilities for the `tally` money model.
//!
//! The `tally-core` crate is intentionally small and free of domain types. It supplies the
//! building blocks the model crate composes into currencies and money values:
//!
//! - Correctness validation functions.
//! - Low-level parsing of amount strings (numeric prefix / ticker suffix splitting).
//! - Exact decimal helpers (powers of ten, half-away-from-zero rounding, digit counting).
//!
//! # Decimal context
//!
//! All arithmetic is performed with [`rust_decimal::Decimal`], a base-10 value with a 96-bit
//! mantissa and up to [`decimal::MAX_SCALE`] fractional digits. Rounding for display always uses
//! [`decimal::ROUNDING_STRATEGY`] (half away from zero). This context is fixed for the process and
//! never mutated.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod decimal;
pub mod parsing;

/// Message for when a lock guard cannot be acquired due to poisoning.
///
/// Lock guards should use `expect` rather than handle poison errors.
/// A poisoned lock indicates a thread panicked while holding it,
/// meaning protected data may be in an inconsistent state.
pub const MUTEX_POISONED: &str = "Mutex poisoned";
