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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! A condition is a predicate which must be true just prior to the execution of some section of
//! code for correct behavior as per the design specification.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the condition check fails.

use anyhow::bail;

use crate::decimal::MAX_SCALE;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` is a valid currency ticker.
///
/// A valid ticker is non-empty, ASCII only, and contains no whitespace.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` contains any whitespace character.
/// - `s` contains a non-ASCII character.
#[inline(always)]
pub fn check_valid_ticker(s: &str, param: &str) -> anyhow::Result<()> {
    if s.is_empty() {
        bail!("invalid string for '{param}', was empty");
    }
    if s.chars().any(char::is_whitespace) {
        bail!("invalid string for '{param}' contained whitespace, was '{s}'");
    }
    if !s.is_ascii() {
        bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'");
    }
    Ok(())
}

/// Checks the minor-unit digit count is representable by the decimal engine.
///
/// # Errors
///
/// Returns an error if `digits` exceeds [`MAX_SCALE`].
#[inline(always)]
pub fn check_decimal_digits(digits: u8, param: &str) -> anyhow::Result<()> {
    if u32::from(digits) > MAX_SCALE {
        bail!("invalid `{param}` {digits} exceeded maximum `MAX_SCALE` ({MAX_SCALE})");
    }
    Ok(())
}

/// Checks the `f64` value is finite (neither NaN nor infinite).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_finite_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if !value.is_finite() {
        bail!("invalid f64 for '{param}' not finite, was {value}")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("EUR")]
    #[case("BTC")]
    #[case("CarlosCoin")]
    #[case("USDC.e")]
    #[case("1INCH")]
    fn test_check_valid_ticker_with_valid_value(#[case] s: &str) {
        assert!(check_valid_ticker(s, "ticker").is_ok());
    }

    #[rstest]
    #[case("")] // <-- empty string
    #[case(" ")] // <-- whitespace-only
    #[case("EU R")] // <-- inner whitespace
    #[case("EUR\n")] // <-- trailing newline
    #[case("€UR")] // <-- contains non-ASCII char
    fn test_check_valid_ticker_with_invalid_values(#[case] s: &str) {
        assert!(check_valid_ticker(s, "ticker").is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(28)]
    fn test_check_decimal_digits_valid(#[case] digits: u8) {
        assert!(check_decimal_digits(digits, "decimal_digits").is_ok());
    }

    #[rstest]
    #[case(29)]
    #[case(u8::MAX)]
    fn test_check_decimal_digits_invalid(#[case] digits: u8) {
        let result = check_decimal_digits(digits, "decimal_digits");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("exceeded maximum `MAX_SCALE`")
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.5)]
    #[case(f64::MAX)]
    fn test_check_finite_f64_when_valid(#[case] value: f64) {
        assert!(check_finite_f64(value, "value").is_ok());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_check_finite_f64_when_invalid(#[case] value: f64) {
        assert!(check_finite_f64(value, "value").is_err());
    }
}
