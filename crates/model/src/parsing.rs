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

//! Parsing of heterogeneous amount inputs into an exact decimal plus an optional currency.

use rust_decimal::Decimal;
use tally_core::{
    decimal::pow10_neg,
    parsing::{decimal_from_f64, parse_decimal, split_ticker_suffix},
};

use crate::{
    error::MoneyError,
    types::{Currency, CurrencySpec, DEFAULT_DECIMAL_DIGITS, Money, currency::reconcile},
};

/// An amount input in any of the shapes accepted by the money constructors and operators.
#[derive(Clone, Debug)]
pub enum MoneyInput {
    /// No amount; parses as zero without a currency.
    Absent,
    /// An exact integer.
    Integer(i128),
    /// An exact decimal.
    Decimal(Decimal),
    /// A binary float, converted through its shortest text form.
    Float(f64),
    /// A decimal string with an optional trailing ticker, e.g. `"10.50 EUR"`.
    Text(String),
    /// An existing money value, reused as is.
    Money(Money),
}

macro_rules! impl_from_integer {
    ($($t:ty),+) => {
        $(
            impl From<$t> for MoneyInput {
                fn from(value: $t) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<Decimal> for MoneyInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for MoneyInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for MoneyInput {
    fn from(value: f32) -> Self {
        // Widening to f64 would expose the binary representation error
        Self::Text(value.to_string())
    }
}

impl From<&str> for MoneyInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MoneyInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for MoneyInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Money> for MoneyInput {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<&Money> for MoneyInput {
    fn from(value: &Money) -> Self {
        Self::Money(*value)
    }
}

impl<T: Into<MoneyInput>> From<Option<T>> for MoneyInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// The result of parsing an amount input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedAmount {
    /// The exact amount.
    pub amount: Decimal,
    /// The currency detected in the input, if any.
    pub currency: Option<Currency>,
}

/// Parses `input` into an exact amount plus the currency it carries, if any.
///
/// # Errors
///
/// Returns [`MoneyError::Parsing`] if:
/// - A string input has a missing or malformed numeric part (e.g. `"ABC"` or `"1.2.3 EUR"`).
/// - A float input is not finite, or its text form has more digits than the engine holds.
///
/// Returns [`MoneyError::InvalidCurrency`] if a string input carries a malformed ticker.
///
/// Returns [`MoneyError::Overflow`] if an integer input exceeds the decimal engine's range.
pub fn parse(input: impl Into<MoneyInput>) -> Result<ParsedAmount, MoneyError> {
    match input.into() {
        MoneyInput::Absent => Ok(ParsedAmount {
            amount: Decimal::ZERO,
            currency: None,
        }),
        MoneyInput::Integer(value) => {
            let amount = Decimal::try_from_i128_with_scale(value, 0)
                .map_err(|e| MoneyError::Overflow(format!("integer {value}: {e}")))?;
            Ok(ParsedAmount {
                amount,
                currency: None,
            })
        }
        MoneyInput::Decimal(amount) => Ok(ParsedAmount {
            amount,
            currency: None,
        }),
        MoneyInput::Float(value) => Ok(ParsedAmount {
            amount: decimal_from_f64(value).map_err(MoneyError::parsing)?,
            currency: None,
        }),
        MoneyInput::Text(text) => parse_text(&text),
        MoneyInput::Money(money) => Ok(ParsedAmount {
            amount: money.amount(),
            currency: money.currency(),
        }),
    }
}

fn parse_text(text: &str) -> Result<ParsedAmount, MoneyError> {
    let (number, ticker) = split_ticker_suffix(text);
    if number.is_empty() {
        return Err(MoneyError::Parsing(format!(
            "missing numeric amount in '{text}'"
        )));
    }

    let amount = parse_decimal(number).map_err(MoneyError::parsing)?;
    let currency = ticker.map(Currency::from_ticker).transpose()?;
    Ok(ParsedAmount { amount, currency })
}

/// Parses `input` as a count of minor units and converts it into major units.
///
/// The digit count comes from the reconciled currency of `input` and `currency`, or
/// [`DEFAULT_DECIMAL_DIGITS`] when neither carries one. `4711` SEK sub-units give `47.11`.
///
/// # Errors
///
/// Returns an error if `input` cannot be parsed, `currency` is malformed, or `input` carries a
/// currency other than `currency`.
pub fn parse_sub_units(
    input: impl Into<MoneyInput>,
    currency: CurrencySpec,
) -> Result<ParsedAmount, MoneyError> {
    let currency = currency.resolve()?;
    let parsed = parse(input)?;
    let currency = reconcile(currency, parsed.currency)?;
    let digits = currency.map_or(DEFAULT_DECIMAL_DIGITS, |c| c.decimal_digits());
    let amount = pow10_neg(u32::from(digits))
        .and_then(|scale| parsed.amount.checked_mul(scale))
        .ok_or_else(|| {
            MoneyError::Overflow(format!(
                "converting {} sub-units at {digits} digits",
                parsed.amount
            ))
        })?;
    Ok(ParsedAmount { amount, currency })
}
