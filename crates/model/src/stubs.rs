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

//! Type stubs to facilitate testing.

use rstest::fixture;

use crate::types::{Currency, Money};

#[fixture]
pub fn currency_custom() -> Currency {
    Currency::new("CarlosCoin", 0)
}

#[fixture]
pub fn money_eur() -> Money {
    Money::new("47.11", Currency::EUR())
}

#[fixture]
pub fn money_zero_sek() -> Money {
    Money::zero(Currency::SEK())
}

#[fixture]
pub fn money_jpy() -> Money {
    Money::new(57167, Currency::JPY())
}

#[fixture]
pub fn money_clf() -> Money {
    Money::new("0.445", Currency::CLF())
}
