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

//! Errors raised by currency resolution, parsing and money arithmetic.

use ustr::Ustr;

use crate::types::Currency;

/// Errors raised by the money model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Currency mismatch: cannot combine {lhs} with {rhs}")]
    CurrencyMismatch { lhs: Ustr, rhs: Ustr },
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl MoneyError {
    pub(crate) fn mismatch(lhs: Currency, rhs: Currency) -> Self {
        Self::CurrencyMismatch {
            lhs: lhs.ticker_ustr(),
            rhs: rhs.ticker_ustr(),
        }
    }

    pub(crate) fn parsing(err: impl std::fmt::Display) -> Self {
        Self::Parsing(err.to_string())
    }

    pub(crate) fn invalid_currency(err: impl std::fmt::Display) -> Self {
        Self::InvalidCurrency(err.to_string())
    }
}
