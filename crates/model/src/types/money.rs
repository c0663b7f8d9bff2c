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

//! Represents an exact amount of money, optionally bound to a currency.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize};
use tally_core::{
    correctness::FAILED,
    decimal::{format_decimal, pow10, round_half_away_from_zero},
};

use crate::{
    aggregation,
    error::MoneyError,
    parsing::{MoneyInput, parse, parse_sub_units},
    types::{
        Currency, CurrencySpec, DEFAULT_DECIMAL_DIGITS,
        currency::{compatible, reconcile},
    },
};

/// Represents an exact amount of money, optionally bound to a [`Currency`].
///
/// The amount is a [`Decimal`] and never passes through binary floating point. A value is
/// immutable once constructed; every operation returns a new value:
///
/// ```compile_fail
/// use tally_model::Money;
///
/// let mut money = Money::new("47.11", "EUR");
/// money.amount = rust_decimal::Decimal::ONE;
/// ```
///
/// Operations combining two values reconcile their currencies first. A value without a currency
/// adopts the other side's, and two different currencies are a [`MoneyError::CurrencyMismatch`].
#[derive(Clone, Copy)]
pub struct Money {
    amount: Decimal,
    currency: Option<Currency>,
}

impl Money {
    /// Creates a new [`Money`] instance with correctness checking.
    ///
    /// `amount` may be an integer, a [`Decimal`], a float (converted through its text form), a
    /// string such as `"10.50"` or `"10.50 EUR"`, another [`Money`], or `None` for zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` cannot be parsed.
    /// - `currency` (or a ticker inside `amount`) is malformed.
    /// - `amount` carries a currency which differs from `currency`.
    pub fn new_checked(
        amount: impl Into<MoneyInput>,
        currency: impl Into<CurrencySpec>,
    ) -> Result<Self, MoneyError> {
        let currency = currency.into().resolve()?;
        let parsed = parse(amount)?;
        let currency = reconcile(currency, parsed.currency)?;
        Ok(Self {
            amount: parsed.amount,
            currency,
        })
    }

    /// Creates a new [`Money`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Money::new_checked`] for more details.
    pub fn new(amount: impl Into<MoneyInput>, currency: impl Into<CurrencySpec>) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Creates a new [`Money`] instance from an exact `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if `currency` is malformed.
    pub fn from_decimal(
        amount: Decimal,
        currency: impl Into<CurrencySpec>,
    ) -> Result<Self, MoneyError> {
        Ok(Self::from_parts(amount, currency.into().resolve()?))
    }

    pub(crate) fn from_parts(amount: Decimal, currency: Option<Currency>) -> Self {
        Self { amount, currency }
    }

    /// Creates a new [`Money`] instance with a value of zero.
    ///
    /// # Panics
    ///
    /// Panics if `currency` is malformed.
    #[must_use]
    pub fn zero(currency: impl Into<CurrencySpec>) -> Self {
        Self::from_decimal(Decimal::ZERO, currency).expect(FAILED)
    }

    /// Creates a new [`Money`] instance from a count of minor units.
    ///
    /// The count is divided by `10^decimal_digits` of the currency (2 digits without one).
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be parsed, `currency` is malformed, or `value` carries a
    /// currency other than `currency`.
    pub fn from_sub_units(
        value: impl Into<MoneyInput>,
        currency: impl Into<CurrencySpec>,
    ) -> Result<Self, MoneyError> {
        let parsed = parse_sub_units(value, currency.into())?;
        Ok(Self {
            amount: parsed.amount,
            currency: parsed.currency,
        })
    }

    /// Sums `values` into a single [`Money`], see [`aggregation::sum`].
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed or the values mix currencies.
    pub fn sum<I>(
        values: I,
        currency: impl Into<CurrencySpec>,
        is_cents: bool,
    ) -> Result<Self, MoneyError>
    where
        I: IntoIterator,
        I::Item: Into<MoneyInput>,
    {
        aggregation::sum(values, currency, is_cents)
    }

    /// Returns the exact amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the bound currency, if any.
    #[must_use]
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Returns the ticker of the bound currency, if any.
    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        self.currency.as_ref().map(Currency::ticker)
    }

    /// Returns the minor-unit digit count of the bound currency, or 2 without one.
    #[must_use]
    pub fn decimal_digits(&self) -> u8 {
        self.currency
            .map_or(DEFAULT_DECIMAL_DIGITS, |c| c.decimal_digits())
    }

    /// Returns `true` if the amount is exactly zero, whatever the currency.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the amount as a [`Decimal`].
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount as an `f64`, which may lose precision.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns the amount expressed in minor units (`amount * 10^decimal_digits`).
    ///
    /// The result is exact: an amount with more fractional digits than the currency's minor unit
    /// gives a fractional count (`0.001` at 2 digits is `0.1`) rather than being rounded.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the scaled amount is not representable.
    pub fn sub_units(&self) -> Result<Decimal, MoneyError> {
        let digits = self.decimal_digits();
        pow10(u32::from(digits))
            .and_then(|scale| self.amount.checked_mul(scale))
            .map(|units| units.normalize())
            .ok_or_else(|| {
                MoneyError::Overflow(format!(
                    "converting {} to sub-units at {digits} digits",
                    self.amount
                ))
            })
    }

    /// Returns a new [`Money`] holding the minor-unit count, keeping the currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the scaled amount is not representable.
    pub fn to_sub_units(&self) -> Result<Self, MoneyError> {
        Ok(Self {
            amount: self.sub_units()?,
            currency: self.currency,
        })
    }

    /// Renders the amount with between `min_decimals` and `max_decimals` fractional digits,
    /// followed by the ticker when a currency is bound.
    ///
    /// Without bounds the currency's digit count is shown, or more digits when needed to show the
    /// exact amount. A `max_decimals` bound rounds half away from zero. `min_decimals` defaults to
    /// the currency's digit count (capped at `max_decimals`).
    #[must_use]
    pub fn as_string(&self, min_decimals: Option<u8>, max_decimals: Option<u8>) -> String {
        let digits = self.decimal_digits();
        let min_decimals = min_decimals.unwrap_or(match max_decimals {
            Some(max) => digits.min(max),
            None => digits,
        });
        let amount = format_decimal(
            self.amount,
            u32::from(min_decimals),
            max_decimals.map(u32::from),
        );
        match self.currency {
            Some(currency) => format!("{amount} {currency}"),
            None => amount,
        }
    }

    /// Returns a new value with the same amount bound to `currency` (no conversion).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if `currency` is malformed.
    pub fn with_currency(&self, currency: impl Into<CurrencySpec>) -> Result<Self, MoneyError> {
        Self::from_decimal(self.amount, currency)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Rounds the amount to `dp` fractional digits, half away from zero.
    #[must_use]
    pub fn round(&self, dp: u32) -> Self {
        Self {
            amount: round_half_away_from_zero(self.amount, dp),
            currency: self.currency,
        }
    }

    /// Rounds the amount to a whole number, half away from zero.
    #[must_use]
    pub fn to_integral(&self) -> Self {
        self.round(0)
    }

    /// Adds `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rhs` cannot be parsed, the currencies mismatch, or the result
    /// overflows.
    pub fn try_add(&self, rhs: impl Into<MoneyInput>) -> Result<Self, MoneyError> {
        self.combine(rhs, ArithmeticOp::Add)
    }

    /// Subtracts `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rhs` cannot be parsed, the currencies mismatch, or the result
    /// overflows.
    pub fn try_sub(&self, rhs: impl Into<MoneyInput>) -> Result<Self, MoneyError> {
        self.combine(rhs, ArithmeticOp::Sub)
    }

    /// Multiplies by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rhs` cannot be parsed, the currencies mismatch, or the result
    /// overflows.
    pub fn try_mul(&self, rhs: impl Into<MoneyInput>) -> Result<Self, MoneyError> {
        self.combine(rhs, ArithmeticOp::Mul)
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `rhs` is zero, otherwise as [`Money::try_add`].
    pub fn try_div(&self, rhs: impl Into<MoneyInput>) -> Result<Self, MoneyError> {
        self.combine(rhs, ArithmeticOp::Div)
    }

    /// Returns the remainder of dividing by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `rhs` is zero, otherwise as [`Money::try_add`].
    pub fn try_rem(&self, rhs: impl Into<MoneyInput>) -> Result<Self, MoneyError> {
        self.combine(rhs, ArithmeticOp::Rem)
    }

    fn combine(&self, rhs: impl Into<MoneyInput>, op: ArithmeticOp) -> Result<Self, MoneyError> {
        let rhs = parse(rhs)?;
        let currency = reconcile(self.currency, rhs.currency)?;
        let amount = op.apply(self.amount, rhs.amount)?;
        Ok(Self { amount, currency })
    }
}

#[derive(Clone, Copy, Debug)]
enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithmeticOp {
    fn apply(self, lhs: Decimal, rhs: Decimal) -> Result<Decimal, MoneyError> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div | Self::Rem if rhs.is_zero() => return Err(MoneyError::DivisionByZero),
            Self::Div => lhs.checked_div(rhs),
            Self::Rem => lhs.checked_rem(rhs),
        };
        result.ok_or_else(|| MoneyError::Overflow(format!("{lhs} {self} {rhs}")))
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        };
        write!(f, "{symbol}")
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new_checked(value, CurrencySpec::Default)
    }
}

impl<T: Clone + Into<MoneyInput>> PartialEq<T> for Money {
    fn eq(&self, other: &T) -> bool {
        match parse(other.clone()) {
            Ok(other) => compatible(self.currency, other.currency) && self.amount == other.amount,
            Err(_) => false,
        }
    }
}

impl<T: Clone + Into<MoneyInput>> PartialOrd<T> for Money {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        let other = parse(other.clone()).ok()?;
        if !compatible(self.currency, other.currency) {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

/// Hashes the normalized amount only.
///
/// A value without a currency equals the same amount in any currency, so equality is not
/// transitive across currencies and [`Money`] does not implement [`Eq`]. Equal values still hash
/// equally.
impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.normalize().hash(state);
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl<T: Into<MoneyInput>> Add<T> for Money {
    type Output = Self;
    fn add(self, rhs: T) -> Self::Output {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Into<MoneyInput>> Sub<T> for Money {
    type Output = Self;
    fn sub(self, rhs: T) -> Self::Output {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Into<MoneyInput>> Mul<T> for Money {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output {
        self.try_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Into<MoneyInput>> Div<T> for Money {
    type Output = Self;
    fn div(self, rhs: T) -> Self::Output {
        self.try_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        aggregation::sum(iter, CurrencySpec::Default, false).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        aggregation::sum(iter, CurrencySpec::Default, false).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.currency {
            Some(currency) => write!(f, "{}({}, {currency})", stringify!(Money), self.amount),
            None => write!(f, "{}({}, None)", stringify!(Money), self.amount),
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string(None, None))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let money_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&money_str).map_err(serde::de::Error::custom)
    }
}
