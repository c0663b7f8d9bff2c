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

//! Exact decimal helpers shared by the money model.
//!
//! These functions never go through binary floating point. Scaling by powers of ten is done by
//! adjusting the decimal scale, so it is exact whenever the result is representable.

use rust_decimal::{Decimal, RoundingStrategy};

/// The maximum number of fractional digits the decimal engine can represent.
pub const MAX_SCALE: u32 = 28;

/// The rounding strategy used whenever a value must be shortened for display.
pub const ROUNDING_STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Returns `10^exp` as a [`Decimal`], or `None` if `exp` exceeds [`MAX_SCALE`].
#[must_use]
pub fn pow10(exp: u32) -> Option<Decimal> {
    if exp > MAX_SCALE {
        return None;
    }
    Some(Decimal::from_i128_with_scale(10_i128.pow(exp), 0))
}

/// Returns `10^-exp` as a [`Decimal`], or `None` if `exp` exceeds [`MAX_SCALE`].
#[must_use]
pub fn pow10_neg(exp: u32) -> Option<Decimal> {
    if exp > MAX_SCALE {
        return None;
    }
    Some(Decimal::from_i128_with_scale(1, exp))
}

/// Returns the number of fractional digits needed to show `value` exactly.
///
/// Trailing zeros do not count, so `1.500` needs one digit and `100` needs none.
#[must_use]
pub fn fractional_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Rounds `value` to `dp` fractional digits, half away from zero.
///
/// A result of zero is always positive, so `-0.001` rounds to `0.00` rather than `-0.00`.
#[must_use]
pub fn round_half_away_from_zero(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, ROUNDING_STRATEGY);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Renders `value` with exactly `dp` fractional digits, padding with trailing zeros.
///
/// Values with more than `dp` fractional digits are rounded half away from zero first. Padding is
/// applied to the rendered text, so `dp` may exceed [`MAX_SCALE`] and large values keep every
/// requested digit.
#[must_use]
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let value = if value.scale() > dp {
        round_half_away_from_zero(value, dp)
    } else {
        value
    };

    let mut rendered = if value.is_zero() {
        value.abs().to_string()
    } else {
        value.to_string()
    };
    let padding = dp.saturating_sub(value.scale());
    if padding > 0 {
        if value.scale() == 0 {
            rendered.push('.');
        }
        rendered.extend(std::iter::repeat_n('0', padding as usize));
    }
    rendered
}

/// Renders `value` showing between `min_decimals` and `max_decimals` fractional digits.
///
/// - Without a maximum, the value is shown exactly, padded up to `min_decimals`.
/// - With a maximum, the value is first rounded half away from zero to `max_decimals`, and shown
///   with as few digits as needed (but never fewer than `min_decimals`).
/// - A maximum lower than the minimum is raised to the minimum.
#[must_use]
pub fn format_decimal(value: Decimal, min_decimals: u32, max_decimals: Option<u32>) -> String {
    let max_decimals = max_decimals.map(|max| max.max(min_decimals));
    let value = match max_decimals {
        Some(max) => round_half_away_from_zero(value, max),
        None => value,
    };

    let mut digits = fractional_digits(value).max(min_decimals);
    if let Some(max) = max_decimals {
        digits = digits.min(max);
    }
    format_fixed(value, digits)
}
