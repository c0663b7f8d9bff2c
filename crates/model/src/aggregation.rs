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

//! Summation of heterogeneous amount inputs into a single [`Money`].

use rust_decimal::Decimal;

use crate::{
    error::MoneyError,
    parsing::{MoneyInput, ParsedAmount, parse, parse_sub_units},
    types::{Currency, CurrencySpec, Money},
};

/// Tracks the currency a sum resolves to while elements are folded in.
#[derive(Debug)]
struct CurrencyResolver {
    /// Currency supplied up front; never overridden.
    seed: Option<Currency>,
    /// Currency committed to by the seed or by a non-zero element.
    committed: Option<Currency>,
    /// Currency of the first zero-valued element, used only if nothing commits.
    tentative: Option<Currency>,
}

impl CurrencyResolver {
    fn new(seed: Option<Currency>) -> Self {
        Self {
            seed,
            committed: seed,
            tentative: None,
        }
    }

    fn observe(&mut self, element: &ParsedAmount) -> Result<(), MoneyError> {
        let Some(currency) = element.currency else {
            return Ok(());
        };

        match self.committed {
            Some(committed) if committed == currency => Ok(()),
            Some(committed) if self.seed.is_some() || !element.amount.is_zero() => {
                Err(MoneyError::mismatch(committed, currency))
            }
            Some(committed) => {
                log::debug!(
                    "Ignoring zero-valued {currency} element in sum resolved to {committed}"
                );
                Ok(())
            }
            None if element.amount.is_zero() => {
                if self.tentative.is_none() {
                    self.tentative = Some(currency);
                }
                Ok(())
            }
            None => {
                self.committed = Some(currency);
                Ok(())
            }
        }
    }

    fn resolve(self) -> Option<Currency> {
        self.committed.or(self.tentative)
    }
}

/// Sums `values` into a single [`Money`].
///
/// Each value is parsed independently (as minor units when `is_cents` is set). The result's
/// currency is the explicit `currency` if given, otherwise the first currency carried by a
/// non-zero value. Zero-valued elements carry no currency commitment, so `["0 EUR", "1 SEK"]`
/// sums to `1 SEK` and `["0 EUR", "0 SEK"]` to `0 EUR`. An empty input gives zero.
///
/// # Errors
///
/// Returns an error if:
/// - A value cannot be parsed.
/// - `currency` is malformed.
/// - Two non-zero values carry different currencies.
/// - A value carries a currency other than the explicit `currency` (even when zero).
/// - The total overflows.
pub fn sum<I>(
    values: I,
    currency: impl Into<CurrencySpec>,
    is_cents: bool,
) -> Result<Money, MoneyError>
where
    I: IntoIterator,
    I::Item: Into<MoneyInput>,
{
    let spec = currency.into();
    let mut resolver = CurrencyResolver::new(spec.resolve()?);
    let mut total = Decimal::ZERO;

    for value in values {
        let element = if is_cents {
            parse_sub_units(value, spec)?
        } else {
            parse(value)?
        };
        resolver.observe(&element)?;
        total = total.checked_add(element.amount).ok_or_else(|| {
            MoneyError::Overflow(format!("sum {total} + {}", element.amount))
        })?;
    }

    Ok(Money::from_parts(total, resolver.resolve()))
}
