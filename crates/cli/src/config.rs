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

//! Custom currency configuration loaded from JSON.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tally_model::Currency;

/// Configuration for a custom currency registered at startup.
///
/// A file holds a JSON array of these records:
///
/// ```json
/// [{ "ticker": "CarlosCoin", "decimal_digits": 0, "aliases": ["CC"] }]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// The canonical ticker.
    pub ticker: String,
    /// The minor-unit digit count.
    pub decimal_digits: u8,
    /// Synonyms resolving to the same currency.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CurrencyConfig {
    /// Registers this currency (and its aliases), replacing existing entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker, digit count or an alias is invalid.
    pub fn register(&self) -> anyhow::Result<Currency> {
        let currency = Currency::new_checked(&self.ticker, self.decimal_digits)?;
        let aliases: Vec<&str> = self.aliases.iter().map(String::as_str).collect();
        Currency::register(currency, &aliases, true)?;
        Ok(currency)
    }
}

/// Loads currency configurations from the JSON file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of [`CurrencyConfig`].
pub fn load_currencies(path: &Path) -> anyhow::Result<Vec<CurrencyConfig>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read currencies file '{}'", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse currencies file '{}'", path.display()))
}

/// Loads and registers every currency in the JSON file at `path`.
///
/// # Errors
///
/// Returns an error if loading fails or any currency is invalid.
pub fn register_currencies(path: &Path) -> anyhow::Result<usize> {
    let configs = load_currencies(path)?;
    for config in &configs {
        let currency = config.register()?;
        log::info!("Registered {currency:?} with aliases {:?}", config.aliases);
    }
    Ok(configs.len())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tally_model::Money;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[rstest]
    fn test_load_currencies() {
        let file = write_config(
            r#"[
                {"ticker": "CLIA", "decimal_digits": 0, "aliases": ["CLIB"]},
                {"ticker": "CLIC", "decimal_digits": 3}
            ]"#,
        );

        let configs = load_currencies(file.path()).unwrap();
        assert_eq!(
            configs,
            vec![
                CurrencyConfig {
                    ticker: "CLIA".to_string(),
                    decimal_digits: 0,
                    aliases: vec!["CLIB".to_string()],
                },
                CurrencyConfig {
                    ticker: "CLIC".to_string(),
                    decimal_digits: 3,
                    aliases: vec![],
                },
            ]
        );
    }

    #[rstest]
    fn test_register_currencies() {
        let file = write_config(
            r#"[{"ticker": "CLID", "decimal_digits": 0, "aliases": ["CLIE"]}]"#,
        );

        assert_eq!(register_currencies(file.path()).unwrap(), 1);
        assert_eq!(Money::new(100, "CLID").to_string(), "100 CLID");
        assert_eq!(Money::new(100, "CLIE").to_string(), "100 CLID");
    }

    #[rstest]
    fn test_register_invalid_currency() {
        let file = write_config(r#"[{"ticker": "BAD TICKER", "decimal_digits": 2}]"#);
        assert!(register_currencies(file.path()).is_err());
    }

    #[rstest]
    fn test_load_missing_file() {
        let err = load_currencies(Path::new("/nonexistent/currencies.json")).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to read currencies file"));
    }

    #[rstest]
    fn test_load_malformed_file() {
        let file = write_config("{not json");
        let message = load_currencies(file.path()).unwrap_err().to_string();
        assert!(message.starts_with("Failed to parse currencies file"));
    }
}
