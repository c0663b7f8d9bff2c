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

//! Core parsing functions.

use rust_decimal::Decimal;

use crate::correctness::check_finite_f64;

/// Splits a trimmed amount string into its numeric prefix and an optional trailing ticker.
///
/// When the string contains whitespace, the last whitespace-separated token is the ticker if it
/// contains a letter, so `"5 1INCH"` splits into `("5", Some("1INCH"))`. Otherwise the ticker is
/// the maximal run of trailing ASCII letters, so `"10EUR"` splits into `("10", Some("EUR"))`.
/// A lone trailing `e` or `E` is an incomplete exponent, not a ticker. A string without a ticker
/// yields `(s, None)`.
///
/// No validation of the numeric prefix or the ticker is performed here.
#[must_use]
pub fn split_ticker_suffix(s: &str) -> (&str, Option<&str>) {
    let s = s.trim();
    if let Some((number, ticker)) = s.rsplit_once(char::is_whitespace)
        && ticker.chars().any(|c| c.is_ascii_alphabetic())
    {
        return (number.trim_end(), Some(ticker));
    }

    let split_at = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic())
        .last()
        .map(|(i, _)| i);

    match split_at {
        Some(i) if !matches!(&s[i..], "e" | "E") => (s[..i].trim_end(), Some(&s[i..])),
        _ => (s, None),
    }
}

/// Parses an exact [`Decimal`] from the given string.
///
/// Leading and trailing whitespace is ignored, underscores are accepted as digit separators, and
/// scientific notation (e.g. `"2.5e3"`) is supported.
///
/// # Errors
///
/// Returns an error if:
/// - The string is empty or not a decimal number.
/// - The value cannot be represented without rounding away digits.
pub fn parse_decimal(s: &str) -> anyhow::Result<Decimal> {
    let clean = s.trim().replace('_', "");
    if clean.is_empty() {
        anyhow::bail!("invalid decimal '{s}', was empty");
    }

    let decimal = if clean.contains(['e', 'E']) {
        Decimal::from_scientific(&clean)
    } else {
        Decimal::from_str_exact(&clean)
    };
    decimal.map_err(|e| anyhow::anyhow!("invalid decimal '{s}': {e}"))
}

/// Converts an `f64` into an exact [`Decimal`] via its shortest display representation.
///
/// The conversion goes through the text form (so `1.1_f64` becomes exactly `1.1`) rather than the
/// binary value, which would import the float's representation error. The text is parsed with
/// [`parse_decimal`], so a value needing more digits than the engine holds is an error.
///
/// # Errors
///
/// Returns an error if `value` is not finite or its text form cannot be represented exactly.
pub fn decimal_from_f64(value: f64) -> anyhow::Result<Decimal> {
    check_finite_f64(value, "value")?;
    parse_decimal(&value.to_string())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case("", "", None)]
    #[case("10", "10", None)]
    #[case(" 10 ", "10", None)]
    #[case("10 EUR", "10", Some("EUR"))]
    #[case("10EUR", "10", Some("EUR"))]
    #[case("  -0.008   EUR ", "-0.008", Some("EUR"))]
    #[case("5E-3 JPY", "5E-3", Some("JPY"))]
    #[case("1e3", "1e3", None)]
    #[case("100 CarlosCoin", "100", Some("CarlosCoin"))]
    #[case("ABC", "", Some("ABC"))]
    #[case("5 1INCH", "5", Some("1INCH"))]
    #[case("10 20", "10 20", None)]
    #[case("1e", "1e", None)]
    #[case("1E", "1E", None)]
    #[case("1eur", "1", Some("eur"))]
    fn test_split_ticker_suffix(
        #[case] input: &str,
        #[case] expected_number: &str,
        #[case] expected_ticker: Option<&str>,
    ) {
        assert_eq!(
            split_ticker_suffix(input),
            (expected_number, expected_ticker)
        );
    }

    #[rstest]
    #[case("0", dec!(0))]
    #[case("4711", dec!(4711))]
    #[case(" 1.5000 ", dec!(1.5000))]
    #[case("-0.008", dec!(-0.008))]
    #[case("+3.14", dec!(3.14))]
    #[case("10_000.10", dec!(10000.10))]
    #[case("2.5e3", dec!(2500))]
    #[case("1.234E-2", dec!(0.01234))]
    fn test_parse_decimal_valid(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_decimal(input).unwrap(), expected);
    }

    #[rstest]
    fn test_parse_decimal_preserves_scale() {
        assert_eq!(parse_decimal("1.5000").unwrap().scale(), 4);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("1.2.3")]
    #[case("0x00")]
    #[case("NaN")]
    #[case("inf")]
    #[case("0.00000000000000000000000000001")] // <-- would round away a digit
    fn test_parse_decimal_invalid(#[case] input: &str) {
        assert!(parse_decimal(input).is_err());
    }

    #[rstest]
    #[case(1.1, dec!(1.1))]
    #[case(0.1, dec!(0.1))]
    #[case(-47.11, dec!(-47.11))]
    #[case(100.0, dec!(100))]
    fn test_decimal_from_f64(#[case] value: f64, #[case] expected: Decimal) {
        assert_eq!(decimal_from_f64(value).unwrap(), expected);
    }

    #[rstest]
    #[case(1e-30)]
    #[case(1e300)]
    fn test_decimal_from_f64_unrepresentable(#[case] value: f64) {
        assert!(decimal_from_f64(value).is_err());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_decimal_from_f64_non_finite(#[case] value: f64) {
        assert!(decimal_from_f64(value).is_err());
    }

    proptest! {
        #[rstest]
        fn prop_parse_decimal_is_exact(mantissa in any::<i64>(), scale in 0_u32..=18) {
            let expected = Decimal::new(mantissa, scale);
            let parsed = parse_decimal(&expected.to_string()).unwrap();
            prop_assert_eq!(parsed, expected);
            prop_assert_eq!(parsed.scale(), expected.scale());
        }
    }
}
