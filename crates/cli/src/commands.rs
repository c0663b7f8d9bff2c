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

use tally_model::{CurrencySpec, Money};

use crate::opt::{Commands, ConvertOpt, FormatOpt, SumOpt};

/// Executes `command`, returning the rendered result.
///
/// # Errors
///
/// Returns an error if a value cannot be parsed, currencies mismatch, or a conversion overflows.
pub fn execute(command: &Commands) -> anyhow::Result<String> {
    let output = match command {
        Commands::Sum(opt) => run_sum(opt)?,
        Commands::Format(opt) => run_format(opt)?,
        Commands::SubUnits(opt) => run_sub_units(opt)?,
        Commands::FromSubUnits(opt) => run_from_sub_units(opt)?,
    };
    Ok(output)
}

fn currency_spec(currency: Option<&str>) -> CurrencySpec {
    currency.map_or(CurrencySpec::Default, CurrencySpec::from)
}

fn run_sum(opt: &SumOpt) -> anyhow::Result<String> {
    let spec = currency_spec(opt.currency.as_deref());
    log::debug!("Summing {} values (cents={})", opt.values.len(), opt.cents);
    let total = Money::sum(&opt.values, spec, opt.cents)?;
    Ok(total.to_string())
}

fn run_format(opt: &FormatOpt) -> anyhow::Result<String> {
    let money = Money::new_checked(&opt.value, currency_spec(opt.currency.as_deref()))?;
    Ok(money.as_string(opt.min_decimals, opt.max_decimals))
}

fn run_sub_units(opt: &ConvertOpt) -> anyhow::Result<String> {
    let money = Money::new_checked(&opt.value, currency_spec(opt.currency.as_deref()))?;
    let sub_units = money.sub_units()?;
    Ok(match money.currency() {
        Some(currency) => format!("{sub_units} {currency}"),
        None => sub_units.to_string(),
    })
}

fn run_from_sub_units(opt: &ConvertOpt) -> anyhow::Result<String> {
    let money = Money::from_sub_units(&opt.value, currency_spec(opt.currency.as_deref()))?;
    Ok(money.to_string())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sum_opt(currency: Option<&str>, cents: bool, values: &[&str]) -> Commands {
        Commands::Sum(SumOpt {
            currency: currency.map(str::to_string),
            cents,
            values: values.iter().map(|v| (*v).to_string()).collect(),
        })
    }

    #[rstest]
    fn test_sum() {
        let command = sum_opt(
            None,
            false,
            &["23.50 SEK", "50.00 SEK", "91.21 SEK", "9053 SEK", "20"],
        );
        assert_eq!(execute(&command).unwrap(), "9237.71 SEK");
    }

    #[rstest]
    fn test_sum_cents() {
        let command = sum_opt(
            Some("SEK"),
            true,
            &[
                "471100", "10000", "509000", "350200", "313450", "900400", "1000", "100", "13999",
            ],
        );
        assert_eq!(execute(&command).unwrap(), "25692.49 SEK");
    }

    #[rstest]
    fn test_sum_mismatch() {
        let command = sum_opt(None, false, &["1 EUR", "1 SEK"]);
        let err = execute(&command).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Currency mismatch: cannot combine EUR with SEK"
        );
    }

    #[rstest]
    #[case(None, None, None, "0.445 CLF", "0.4450 CLF")]
    #[case(None, Some(2), None, "0.445 CLF", "0.45 CLF")]
    #[case(Some(4), Some(5), Some("JPY"), "57167", "57167.0000 JPY")]
    #[case(None, None, None, "-0.008", "-0.008")]
    fn test_format(
        #[case] min_decimals: Option<u8>,
        #[case] max_decimals: Option<u8>,
        #[case] currency: Option<&str>,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let command = Commands::Format(FormatOpt {
            min_decimals,
            max_decimals,
            currency: currency.map(str::to_string),
            value: value.to_string(),
        });
        assert_eq!(execute(&command).unwrap(), expected);
    }

    #[rstest]
    #[case(None, "47.11", "4711")]
    #[case(Some("SEK"), "47.11", "4711 SEK")]
    #[case(Some("JPY"), "100.10", "100.1 JPY")]
    fn test_sub_units(
        #[case] currency: Option<&str>,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let command = Commands::SubUnits(ConvertOpt {
            currency: currency.map(str::to_string),
            value: value.to_string(),
        });
        assert_eq!(execute(&command).unwrap(), expected);
    }

    #[rstest]
    #[case(None, "4711", "47.11")]
    #[case(Some("CLF"), "4711", "0.4711 CLF")]
    #[case(Some("JPY"), "1000", "1000 JPY")]
    fn test_from_sub_units(
        #[case] currency: Option<&str>,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let command = Commands::FromSubUnits(ConvertOpt {
            currency: currency.map(str::to_string),
            value: value.to_string(),
        });
        assert_eq!(execute(&command).unwrap(), expected);
    }

    #[rstest]
    fn test_invalid_value() {
        let command = Commands::Format(FormatOpt {
            min_decimals: None,
            max_decimals: None,
            currency: None,
            value: "ABC".to_string(),
        });
        let err = execute(&command).unwrap_err();
        assert!(err.to_string().starts_with("Parsing error"));
    }
}
