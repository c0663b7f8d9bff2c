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

//! Common `Currency` constants and the currency lookup table.

use std::sync::{LazyLock, OnceLock, RwLock};

use ahash::AHashMap;
use tally_core::{MUTEX_POISONED, correctness::check_valid_ticker};
use ustr::Ustr;

use crate::{error::MoneyError, types::Currency};

/// Built-in currencies as `(ticker, decimal_digits, aliases)`.
///
/// Tickers missing from this table resolve with the default of 2 digits.
pub const BUILTIN_CURRENCIES: &[(&str, u8, &[&str])] = &[
    ///////////////////////////////////////////////////////////////////////////
    // Zero-decimal fiat currencies
    ///////////////////////////////////////////////////////////////////////////
    ("BIF", 0, &[]),
    ("CLP", 0, &[]),
    ("DJF", 0, &[]),
    ("GNF", 0, &[]),
    ("ISK", 0, &[]),
    ("JPY", 0, &[]),
    ("KMF", 0, &[]),
    ("KRW", 0, &[]),
    ("PYG", 0, &[]),
    ("RWF", 0, &[]),
    ("UGX", 0, &[]),
    ("UYI", 0, &[]),
    ("VND", 0, &[]),
    ("VUV", 0, &[]),
    ("XAF", 0, &[]),
    ("XOF", 0, &[]),
    ("XPF", 0, &[]),
    ///////////////////////////////////////////////////////////////////////////
    // Three-decimal fiat currencies
    ///////////////////////////////////////////////////////////////////////////
    ("BHD", 3, &[]),
    ("IQD", 3, &[]),
    ("JOD", 3, &[]),
    ("KWD", 3, &[]),
    ("LYD", 3, &[]),
    ("OMR", 3, &[]),
    ("TND", 3, &[]),
    ///////////////////////////////////////////////////////////////////////////
    // Four-decimal units of account
    ///////////////////////////////////////////////////////////////////////////
    ("CLF", 4, &[]),
    ("UYW", 4, &[]),
    ///////////////////////////////////////////////////////////////////////////
    // Fiat currencies
    ///////////////////////////////////////////////////////////////////////////
    ("AED", 2, &[]),
    ("ARS", 2, &[]),
    ("AUD", 2, &[]),
    ("BRL", 2, &[]),
    ("CAD", 2, &[]),
    ("CHF", 2, &[]),
    ("CNY", 2, &[]),
    ("CNH", 2, &[]),
    ("CZK", 2, &[]),
    ("DKK", 2, &[]),
    ("EGP", 2, &[]),
    ("EUR", 2, &[]),
    ("GBP", 2, &[]),
    ("HKD", 2, &[]),
    ("HUF", 2, &[]),
    ("IDR", 2, &[]),
    ("ILS", 2, &[]),
    ("INR", 2, &[]),
    ("MXN", 2, &[]),
    ("MYR", 2, &[]),
    ("NGN", 2, &[]),
    ("NOK", 2, &[]),
    ("NZD", 2, &[]),
    ("PHP", 2, &[]),
    ("PLN", 2, &[]),
    ("RON", 2, &[]),
    ("RUB", 2, &[]),
    ("SAR", 2, &[]),
    ("SEK", 2, &[]),
    ("SGD", 2, &[]),
    ("THB", 2, &[]),
    ("TRY", 2, &[]),
    ("TWD", 2, &[]),
    ("UAH", 2, &[]),
    ("USD", 2, &[]),
    ("ZAR", 2, &[]),
    ///////////////////////////////////////////////////////////////////////////
    // Commodity backed currencies
    ///////////////////////////////////////////////////////////////////////////
    ("XAG", 2, &[]),
    ("XAU", 2, &[]),
    ("XPT", 2, &[]),
    ///////////////////////////////////////////////////////////////////////////
    // Crypto currencies
    ///////////////////////////////////////////////////////////////////////////
    ("ADA", 2, &[]),
    ("BCH", 2, &[]),
    ("BNB", 2, &[]),
    ("BTC", 2, &["XBT"]),
    ("DOGE", 2, &["XDG"]),
    ("DOT", 2, &[]),
    ("ETH", 2, &[]),
    ("LTC", 2, &[]),
    ("SOL", 2, &[]),
    ("USDC", 2, &[]),
    ("USDT", 2, &[]),
    ("XLM", 2, &[]),
    ("XMR", 2, &[]),
    ("XRP", 2, &[]),
];

/// The process-wide currency lookup table, keyed by ticker and alias.
///
/// Seeded from [`BUILTIN_CURRENCIES`]; applications may add entries through
/// [`Currency::register`].
pub static CURRENCY_MAP: LazyLock<RwLock<AHashMap<Ustr, Currency>>> = LazyLock::new(|| {
    let mut map = AHashMap::with_capacity(BUILTIN_CURRENCIES.len() + 2);
    for &(ticker, decimal_digits, aliases) in BUILTIN_CURRENCIES {
        let currency = Currency::new(ticker, decimal_digits);
        map.insert(Ustr::from(ticker), currency);
        for &alias in aliases {
            map.insert(Ustr::from(alias), currency);
        }
    }
    RwLock::new(map)
});

pub(crate) fn register_currency(
    currency: Currency,
    aliases: &[&str],
    overwrite: bool,
) -> Result<(), MoneyError> {
    if currency.is_empty() {
        return Err(MoneyError::InvalidCurrency(
            "cannot register the empty currency".to_string(),
        ));
    }
    for alias in aliases {
        check_valid_ticker(alias, "alias").map_err(MoneyError::invalid_currency)?;
    }

    let mut map = CURRENCY_MAP.write().expect(MUTEX_POISONED);
    let keys = std::iter::once(currency.ticker()).chain(aliases.iter().copied());
    for key in keys {
        let key = Ustr::from(key);
        match map.get(&key) {
            Some(existing) if !overwrite => {
                log::debug!("Currency '{key}' already registered as {existing:?}, skipping");
                continue;
            }
            Some(existing) if existing.decimal_digits() != currency.decimal_digits() => {
                log::warn!("Overwriting currency '{key}': {existing:?} -> {currency:?}");
            }
            _ => log::debug!("Registering currency '{key}' as {currency:?}"),
        }
        map.insert(key, currency);
    }
    Ok(())
}

static USD_LOCK: OnceLock<Currency> = OnceLock::new();
static EUR_LOCK: OnceLock<Currency> = OnceLock::new();
static GBP_LOCK: OnceLock<Currency> = OnceLock::new();
static SEK_LOCK: OnceLock<Currency> = OnceLock::new();
static NOK_LOCK: OnceLock<Currency> = OnceLock::new();
static JPY_LOCK: OnceLock<Currency> = OnceLock::new();
static IQD_LOCK: OnceLock<Currency> = OnceLock::new();
static CLF_LOCK: OnceLock<Currency> = OnceLock::new();
static BTC_LOCK: OnceLock<Currency> = OnceLock::new();
static ETH_LOCK: OnceLock<Currency> = OnceLock::new();
static DOGE_LOCK: OnceLock<Currency> = OnceLock::new();

/// Named accessors for common built-in currencies.
///
/// Each accessor returns the descriptor from [`BUILTIN_CURRENCIES`] and never consults
/// [`CURRENCY_MAP`]. Re-registering one of these tickers with different digits changes lookups
/// through [`Currency::from_ticker`], not these accessors.
impl Currency {
    ///////////////////////////////////////////////////////////////////////////
    // Fiat currencies
    ///////////////////////////////////////////////////////////////////////////
    #[allow(non_snake_case)]
    #[must_use]
    pub fn USD() -> Self {
        *USD_LOCK.get_or_init(|| Self::new("USD", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn EUR() -> Self {
        *EUR_LOCK.get_or_init(|| Self::new("EUR", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn GBP() -> Self {
        *GBP_LOCK.get_or_init(|| Self::new("GBP", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn SEK() -> Self {
        *SEK_LOCK.get_or_init(|| Self::new("SEK", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn NOK() -> Self {
        *NOK_LOCK.get_or_init(|| Self::new("NOK", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn JPY() -> Self {
        *JPY_LOCK.get_or_init(|| Self::new("JPY", 0))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn IQD() -> Self {
        *IQD_LOCK.get_or_init(|| Self::new("IQD", 3))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn CLF() -> Self {
        *CLF_LOCK.get_or_init(|| Self::new("CLF", 4))
    }

    ///////////////////////////////////////////////////////////////////////////
    // Crypto currencies
    ///////////////////////////////////////////////////////////////////////////
    #[allow(non_snake_case)]
    #[must_use]
    pub fn BTC() -> Self {
        *BTC_LOCK.get_or_init(|| Self::new("BTC", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn ETH() -> Self {
        *ETH_LOCK.get_or_init(|| Self::new("ETH", 2))
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn DOGE() -> Self {
        *DOGE_LOCK.get_or_init(|| Self::new("DOGE", 2))
    }
}
