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

//! Represents a monetary unit identified by its ticker, with a minor-unit digit count.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};
use tally_core::correctness::{FAILED, check_decimal_digits, check_valid_ticker};
use ustr::Ustr;

use crate::{
    currencies::{CURRENCY_MAP, register_currency},
    error::MoneyError,
    parsing::MoneyInput,
    types::Money,
};

/// The minor-unit digit count used when no currency (or an unlisted ticker) is given.
pub const DEFAULT_DECIMAL_DIGITS: u8 = 2;

/// A value which can be resolved into a [`Currency`].
///
/// Any type exposing a ticker (and optionally its own digit count) can stand in for a currency,
/// e.g. a marker type for a custom asset:
///
/// ```
/// use tally_model::{HasTicker, Money};
///
/// struct AppleStock;
///
/// impl HasTicker for AppleStock {
///     fn ticker(&self) -> &str {
///         "APPL"
///     }
/// }
///
/// let stock = Money::new(5, AppleStock);
/// assert_eq!(stock.to_string(), "5.00 APPL");
/// ```
///
/// Resolution is by ticker only: two sources with the same ticker produce equal currencies.
pub trait HasTicker {
    /// Returns the ticker, or the empty string for "no currency".
    fn ticker(&self) -> &str;

    /// Returns the minor-unit digit count, or `None` to defer to the lookup table.
    fn decimal_digits(&self) -> Option<u8> {
        None
    }
}

impl<T: HasTicker + ?Sized> HasTicker for &T {
    fn ticker(&self) -> &str {
        (**self).ticker()
    }

    fn decimal_digits(&self) -> Option<u8> {
        (**self).decimal_digits()
    }
}

/// Represents a monetary unit identified by its ticker, with a minor-unit digit count.
///
/// Equality, ordering and hashing consider the ticker only. The empty ticker is the
/// "no currency" descriptor, see [`Currency::empty`].
#[derive(Clone, Copy, Eq)]
pub struct Currency {
    ticker: Ustr,
    decimal_digits: u8,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// The explicit `decimal_digits` override any lookup-table default, which is how custom or
    /// unlisted currencies are declared.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if:
    /// - `ticker` is empty, contains whitespace, or contains non-ASCII characters.
    /// - `decimal_digits` exceeds the decimal engine's maximum scale.
    pub fn new_checked<T: AsRef<str>>(ticker: T, decimal_digits: u8) -> Result<Self, MoneyError> {
        let ticker = ticker.as_ref();
        check_valid_ticker(ticker, "ticker").map_err(MoneyError::invalid_currency)?;
        check_decimal_digits(decimal_digits, "decimal_digits")
            .map_err(MoneyError::invalid_currency)?;
        Ok(Self {
            ticker: Ustr::from(ticker),
            decimal_digits,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(ticker: T, decimal_digits: u8) -> Self {
        Self::new_checked(ticker, decimal_digits).expect(FAILED)
    }

    /// Returns the empty "no currency" descriptor.
    ///
    /// It equals only itself (and the empty string), and money bound to it carries no currency.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ticker: Ustr::default(),
            decimal_digits: DEFAULT_DECIMAL_DIGITS,
        }
    }

    /// Resolves a ticker through the currency lookup table.
    ///
    /// Registered aliases resolve to their canonical currency (`"XBT"` gives `BTC`). Unknown
    /// tickers produce an ad-hoc currency with [`DEFAULT_DECIMAL_DIGITS`]. Surrounding whitespace
    /// is ignored, and an empty ticker gives [`Currency::empty`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if a non-empty `ticker` is malformed.
    pub fn from_ticker(ticker: &str) -> Result<Self, MoneyError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Ok(Self::empty());
        }
        match Self::try_from_str(ticker) {
            Some(currency) => Ok(currency),
            None => Self::new_checked(ticker, DEFAULT_DECIMAL_DIGITS),
        }
    }

    /// Resolves any [`HasTicker`] source into a [`Currency`].
    ///
    /// A source supplying its own digit count keeps it; otherwise the lookup table decides.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if the ticker or the supplied digit count is
    /// invalid.
    pub fn resolve<T: HasTicker + ?Sized>(source: &T) -> Result<Self, MoneyError> {
        match source.decimal_digits() {
            Some(decimal_digits) if !source.ticker().trim().is_empty() => {
                Self::new_checked(source.ticker(), decimal_digits)
            }
            _ => Self::from_ticker(source.ticker()),
        }
    }

    /// Looks up a registered [`Currency`] by ticker or alias, returning `None` if not found.
    #[must_use]
    pub fn try_from_str(s: &str) -> Option<Self> {
        CURRENCY_MAP
            .read()
            .expect(tally_core::MUTEX_POISONED)
            .get(&Ustr::from(s))
            .copied()
    }

    /// Registers the given `currency` (and any `aliases`) in the currency lookup table.
    ///
    /// - If `overwrite` is `true`, any existing entry for the ticker or an alias is replaced.
    /// - If `overwrite` is `false`, existing entries are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if the currency is empty or an alias is not a
    /// valid ticker.
    pub fn register(currency: Self, aliases: &[&str], overwrite: bool) -> Result<(), MoneyError> {
        register_currency(currency, aliases, overwrite)
    }

    /// Returns the ticker of this currency.
    #[must_use]
    pub fn ticker(&self) -> &str {
        self.ticker.as_str()
    }

    pub(crate) fn ticker_ustr(&self) -> Ustr {
        self.ticker
    }

    /// Returns the minor-unit digit count (e.g. 2 for cents).
    #[must_use]
    pub fn decimal_digits(&self) -> u8 {
        self.decimal_digits
    }

    /// Returns `true` if this is the empty "no currency" descriptor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticker.is_empty()
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.ticker()
    }

    /// Binds `amount` to this currency.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` cannot be parsed or carries a different currency.
    pub fn money(&self, amount: impl Into<MoneyInput>) -> Result<Money, MoneyError> {
        Money::new_checked(amount, *self)
    }
}

impl HasTicker for Currency {
    fn ticker(&self) -> &str {
        self.ticker.as_str()
    }

    fn decimal_digits(&self) -> Option<u8> {
        Some(self.decimal_digits)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.ticker == other.ticker
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.ticker.as_str() == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.ticker.as_str() == *other
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticker.as_str().cmp(other.ticker.as_str())
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticker.as_str().hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(ticker='{}', decimal_digits={})",
            stringify!(Currency),
            self.ticker,
            self.decimal_digits,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ticker)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Parses a ticker, validating it unless it is empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ticker(s)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.ticker.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let currency_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&currency_str).map_err(serde::de::Error::custom)
    }
}

/// How a currency is specified when constructing money.
///
/// Keeps "no currency" and "defer to context" apart until resolution, where both collapse into
/// no currency. Conversions never fail: a malformed ticker becomes [`CurrencySpec::Invalid`], and
/// the error surfaces from [`CurrencySpec::resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurrencySpec {
    /// No currency was given.
    Absent,
    /// Defer to context; resolves like [`CurrencySpec::Absent`].
    #[default]
    Default,
    /// An explicit currency descriptor.
    Explicit(Currency),
    /// A currency specification which failed validation, with the reason.
    Invalid(Ustr),
}

impl CurrencySpec {
    /// Resolves into the bound currency, collapsing the sentinels and the empty descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] for a [`CurrencySpec::Invalid`] specification.
    pub fn resolve(self) -> Result<Option<Currency>, MoneyError> {
        match self {
            Self::Explicit(currency) if !currency.is_empty() => Ok(Some(currency)),
            Self::Invalid(reason) => Err(MoneyError::InvalidCurrency(reason.to_string())),
            _ => Ok(None),
        }
    }

    fn from_result(result: Result<Currency, MoneyError>) -> Self {
        match result {
            Ok(currency) => Self::Explicit(currency),
            Err(MoneyError::InvalidCurrency(reason)) => Self::Invalid(Ustr::from(reason.as_str())),
            Err(e) => Self::Invalid(Ustr::from(e.to_string().as_str())),
        }
    }
}

impl<T: HasTicker> From<T> for CurrencySpec {
    fn from(value: T) -> Self {
        Self::from_result(Currency::resolve(&value))
    }
}

impl From<&str> for CurrencySpec {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::Absent;
        }
        Self::from_result(Currency::from_ticker(value))
    }
}

impl From<String> for CurrencySpec {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Option<Currency>> for CurrencySpec {
    fn from(value: Option<Currency>) -> Self {
        value.map_or(Self::Absent, Self::Explicit)
    }
}

impl From<&Money> for CurrencySpec {
    fn from(value: &Money) -> Self {
        Self::from(value.currency())
    }
}

/// Reconciles the currencies of two operands.
///
/// A missing currency adopts the other side's; two present currencies must be equal.
pub(crate) fn reconcile(
    lhs: Option<Currency>,
    rhs: Option<Currency>,
) -> Result<Option<Currency>, MoneyError> {
    match (lhs, rhs) {
        (Some(l), Some(r)) if l != r => Err(MoneyError::mismatch(l, r)),
        (Some(l), _) => Ok(Some(l)),
        (None, r) => Ok(r),
    }
}

/// Returns `true` if values in these currencies may be compared as equal.
pub(crate) fn compatible(lhs: Option<Currency>, rhs: Option<Currency>) -> bool {
    reconcile(lhs, rhs).is_ok()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use rstest::rstest;

    use super::*;

    struct DogeCoin;

    impl HasTicker for DogeCoin {
        fn ticker(&self) -> &str {
            "DOGE"
        }
    }

    struct CurrencyConcept;

    struct MalformedCoin;

    impl HasTicker for MalformedCoin {
        fn ticker(&self) -> &str {
            "EU R"
        }

        fn decimal_digits(&self) -> Option<u8> {
            Some(40)
        }
    }

    struct OverPreciseCoin;

    impl HasTicker for OverPreciseCoin {
        fn ticker(&self) -> &str {
            "OPC"
        }

        fn decimal_digits(&self) -> Option<u8> {
            Some(40)
        }
    }

    impl HasTicker for CurrencyConcept {
        fn ticker(&self) -> &str {
            ""
        }
    }

    fn hash_of(currency: &Currency) -> u64 {
        let mut hasher = DefaultHasher::new();
        currency.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_debug() {
        let currency = Currency::EUR();
        assert_eq!(
            format!("{currency:?}"),
            "Currency(ticker='EUR', decimal_digits=2)"
        );
    }

    #[rstest]
    fn test_display() {
        let currency = Currency::from_ticker("EUR").unwrap();
        assert_eq!(format!("{currency}"), "EUR");
        assert_eq!(currency.as_str(), "EUR");
        assert_eq!(currency.decimal_digits(), 2);
    }

    #[rstest]
    fn test_equality_by_ticker_only() {
        let builtin = Currency::from_ticker("EUR").unwrap();
        let adhoc = Currency::new("EUR", 7);
        assert_eq!(builtin, adhoc);
        assert_eq!(hash_of(&builtin), hash_of(&adhoc));
        assert_ne!(builtin, Currency::SEK());
    }

    #[rstest]
    fn test_equality_with_strings() {
        let eur = Currency::EUR();
        assert_eq!(eur, "EUR");
        assert_ne!(eur, "SEK");
        assert_ne!(eur, "");
        assert_eq!(Currency::empty(), "");
    }

    #[rstest]
    fn test_empty_currency() {
        let empty = Currency::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.ticker(), "");
        assert_eq!(empty.to_string(), "");
        assert_eq!(empty, Currency::empty());
        assert_ne!(empty, Currency::EUR());
        assert!(!Currency::EUR().is_empty());
    }

    #[rstest]
    fn test_ordering_by_ticker() {
        let mut currencies = vec![Currency::SEK(), Currency::EUR(), Currency::JPY()];
        currencies.sort();
        assert_eq!(
            currencies,
            vec![Currency::EUR(), Currency::JPY(), Currency::SEK()]
        );
    }

    #[rstest]
    #[case("JPY", 0)]
    #[case("IQD", 3)]
    #[case("CLF", 4)]
    #[case("USD", 2)]
    #[case("BABA", 2)] // <-- unlisted ticker
    fn test_from_ticker_digits(#[case] ticker: &str, #[case] expected: u8) {
        let currency = Currency::from_ticker(ticker).unwrap();
        assert_eq!(currency.ticker(), ticker);
        assert_eq!(currency.decimal_digits(), expected);
    }

    #[rstest]
    fn test_from_ticker_alias_resolves_to_canonical() {
        let xbt = Currency::from_ticker("XBT").unwrap();
        assert_eq!(xbt.ticker(), "BTC");
        assert_eq!(xbt, Currency::BTC());
    }

    #[rstest]
    fn test_from_ticker_empty() {
        assert!(Currency::from_ticker("").unwrap().is_empty());
        assert!(Currency::from_ticker("   ").unwrap().is_empty());
    }

    #[rstest]
    fn test_explicit_digits_override_lookup() {
        let carlos = Currency::new("CarlosCoin", 0);
        assert_eq!(carlos.ticker(), "CarlosCoin");
        assert_eq!(carlos.decimal_digits(), 0);

        let jpy_override = Currency::new("JPY", 3);
        assert_eq!(jpy_override.decimal_digits(), 3);
        assert_eq!(jpy_override, Currency::JPY());
    }

    #[rstest]
    #[case("")]
    #[case("EU R")]
    #[case("€")]
    fn test_new_checked_invalid_ticker(#[case] ticker: &str) {
        let result = Currency::new_checked(ticker, 2);
        assert!(matches!(result, Err(MoneyError::InvalidCurrency(_))));
    }

    #[rstest]
    fn test_new_checked_invalid_digits() {
        let result = Currency::new_checked("XYZ", 29);
        assert!(matches!(result, Err(MoneyError::InvalidCurrency(_))));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_panics_on_invalid_ticker() {
        let _ = Currency::new("", 2);
    }

    #[rstest]
    fn test_resolve_copy_of_descriptor() {
        let c1 = Currency::from_ticker("EUR").unwrap();
        let c2 = Currency::resolve(&c1).unwrap();
        assert_eq!(c2, c1);
        assert_eq!(c2.ticker(), "EUR");
        assert_eq!(c2.decimal_digits(), 2);
    }

    #[rstest]
    fn test_resolve_has_ticker_source() {
        let doge = Currency::resolve(&DogeCoin).unwrap();
        assert_eq!(doge, Currency::DOGE());
        assert_eq!(doge, Currency::from_ticker("DOGE").unwrap());

        let concept = Currency::resolve(&CurrencyConcept).unwrap();
        assert!(concept.is_empty());
        assert_ne!(concept, Currency::EUR());
    }

    #[rstest]
    #[case("EU R")]
    #[case("EUR€")]
    fn test_from_ticker_rejects_malformed(#[case] ticker: &str) {
        assert!(matches!(
            Currency::from_ticker(ticker),
            Err(MoneyError::InvalidCurrency(_))
        ));
    }

    #[rstest]
    fn test_resolve_rejects_invalid_sources() {
        assert!(matches!(
            Currency::resolve(&MalformedCoin),
            Err(MoneyError::InvalidCurrency(_))
        ));
        assert!(matches!(
            Currency::resolve(&OverPreciseCoin),
            Err(MoneyError::InvalidCurrency(_))
        ));
    }

    #[rstest]
    fn test_currency_spec_invalid_surfaces_on_resolve() {
        let spec = CurrencySpec::from("EU R");
        assert!(matches!(spec, CurrencySpec::Invalid(_)));
        assert_eq!(
            spec.resolve(),
            Err(MoneyError::InvalidCurrency(
                "invalid string for 'ticker' contained whitespace, was 'EU R'".to_string()
            ))
        );
        assert!(matches!(
            CurrencySpec::from(OverPreciseCoin).resolve(),
            Err(MoneyError::InvalidCurrency(_))
        ));
    }

    #[rstest]
    fn test_from_str_validates() {
        assert_eq!(Currency::from_str("SEK").unwrap(), Currency::SEK());
        assert!(Currency::from_str("").unwrap().is_empty());
        assert!(matches!(
            Currency::from_str("S EK"),
            Err(MoneyError::InvalidCurrency(_))
        ));
    }

    #[rstest]
    fn test_currency_spec_resolution() {
        assert_eq!(CurrencySpec::Absent.resolve().unwrap(), None);
        assert_eq!(CurrencySpec::Default.resolve().unwrap(), None);
        assert_eq!(CurrencySpec::default(), CurrencySpec::Default);
        assert_eq!(CurrencySpec::from("").resolve().unwrap(), None);
        assert_eq!(
            CurrencySpec::from(Currency::empty()).resolve().unwrap(),
            None
        );
        assert_eq!(
            CurrencySpec::from("SEK").resolve().unwrap(),
            Some(Currency::SEK())
        );
        assert_eq!(
            CurrencySpec::from(String::from("JPY")).resolve().unwrap(),
            Some(Currency::JPY())
        );
        assert_eq!(
            CurrencySpec::from(Some(Currency::USD())).resolve().unwrap(),
            Some(Currency::USD())
        );
        assert_eq!(
            CurrencySpec::from(DogeCoin).resolve().unwrap(),
            Some(Currency::DOGE())
        );
    }

    #[rstest]
    fn test_currency_spec_from_money() {
        let money = Money::new(100, "EUR");
        assert_eq!(
            CurrencySpec::from(&money).resolve().unwrap(),
            Some(Currency::EUR())
        );

        let no_currency = Money::new(100, CurrencySpec::Default);
        assert_eq!(CurrencySpec::from(&no_currency).resolve().unwrap(), None);
    }

    #[rstest]
    fn test_money_convenience() {
        let new = Currency::from_ticker("NEW").unwrap();
        assert_eq!(new.money(100).unwrap().to_string(), "100.00 NEW");
        assert_eq!(
            Currency::SEK().money(100).unwrap().to_string(),
            "100.00 SEK"
        );
        assert_eq!(Currency::JPY().money(100).unwrap().to_string(), "100 JPY");
        assert_eq!(
            Currency::BTC().money("1.523").unwrap().to_string(),
            "1.523 BTC"
        );
        assert!(matches!(
            Currency::EUR().money("1 SEK"),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[rstest]
    fn test_reconcile() {
        let eur = Some(Currency::EUR());
        let sek = Some(Currency::SEK());
        assert_eq!(reconcile(eur, None).unwrap(), eur);
        assert_eq!(reconcile(None, sek).unwrap(), sek);
        assert_eq!(reconcile(None, None).unwrap(), None);
        assert_eq!(reconcile(eur, eur).unwrap(), eur);
        assert!(reconcile(eur, sek).is_err());
        assert!(compatible(eur, None));
        assert!(!compatible(eur, sek));
    }

    #[rstest]
    fn test_serialization_deserialization() {
        let currency = Currency::JPY();
        let serialized = serde_json::to_string(&currency).unwrap();
        assert_eq!(serialized, "\"JPY\"");
        let deserialized: Currency = serde_json::from_str(&serialized).unwrap();
        assert_eq!(currency, deserialized);
        assert_eq!(deserialized.decimal_digits(), 0);
    }
}
