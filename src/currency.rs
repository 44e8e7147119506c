//! A multi-field currency converter that stores one pivot amount in TWD and derives every
//! displayed field from it.

use crate::Result;
use anyhow::ensure;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Twd,
    Usd,
    Sgd,
    Myr,
    Thb,
    Hkd,
}

serde_plain::derive_display_from_serialize!(Currency);
serde_plain::derive_fromstr_from_deserialize!(Currency);

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Twd,
        Currency::Usd,
        Currency::Sgd,
        Currency::Myr,
        Currency::Thb,
        Currency::Hkd,
    ];

    /// The pivot currency in which the converter stores its amount.
    pub const PIVOT: Currency = Currency::Twd;

    fn index(self) -> usize {
        self as usize
    }

    /// A short name for labels.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Twd => "New Taiwan dollar",
            Currency::Usd => "US dollar",
            Currency::Sgd => "Singapore dollar",
            Currency::Myr => "Malaysian ringgit",
            Currency::Thb => "Thai baht",
            Currency::Hkd => "Hong Kong dollar",
        }
    }
}

/// The value of one unit of each currency, in TWD.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RateTable {
    rates: [Decimal; 6],
}

impl Default for RateTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl RateTable {
    /// Approximate rates for the sample trip.
    pub fn reference() -> Self {
        Self {
            rates: [
                Decimal::ONE,
                Decimal::new(325, 1),
                Decimal::new(242, 1),
                Decimal::new(75, 1),
                Decimal::new(96, 2),
                Decimal::new(42, 1),
            ],
        }
    }

    /// Returns a copy with the rate of `currency` replaced. Rates must be positive.
    pub fn with_rate(mut self, currency: Currency, rate: Decimal) -> Result<Self> {
        ensure!(
            rate > Decimal::ZERO,
            "The rate for {currency} must be positive, got {rate}"
        );
        self.rates[currency.index()] = rate;
        Ok(self)
    }

    pub fn rate(&self, currency: Currency) -> Decimal {
        self.rates[currency.index()]
    }
}

/// A set of currencies that are shown together, along with a disclaimer.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyGroup {
    #[default]
    Singapore,
    MalaysiaThailand,
    CruiseApp,
}

serde_plain::derive_display_from_serialize!(CurrencyGroup);
serde_plain::derive_fromstr_from_deserialize!(CurrencyGroup);

impl CurrencyGroup {
    pub const ALL: [CurrencyGroup; 3] = [
        CurrencyGroup::Singapore,
        CurrencyGroup::MalaysiaThailand,
        CurrencyGroup::CruiseApp,
    ];

    /// The currencies of the group, pivot first.
    pub fn currencies(self) -> &'static [Currency] {
        match self {
            CurrencyGroup::Singapore => &[Currency::Twd, Currency::Usd, Currency::Sgd],
            CurrencyGroup::MalaysiaThailand => {
                &[Currency::Twd, Currency::Usd, Currency::Myr, Currency::Thb]
            }
            CurrencyGroup::CruiseApp => &[Currency::Twd, Currency::Hkd],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CurrencyGroup::Singapore => "Singapore",
            CurrencyGroup::MalaysiaThailand => "Malaysia / Thailand",
            CurrencyGroup::CruiseApp => "Cruise app",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            CurrencyGroup::Singapore => "* Rates are for reference only (USD≈32.5 / SGD≈24.2)",
            CurrencyGroup::MalaysiaThailand => {
                "* Rates are for reference only (MYR≈7.5 / THB≈0.96)"
            }
            CurrencyGroup::CruiseApp => {
                "* Onboard purchases are charged in USD; some app prices may show HKD (HKD≈4.2)"
            }
        }
    }

    pub fn contains(self, currency: Currency) -> bool {
        self.currencies().contains(&currency)
    }
}

/// Holds at most one amount, in TWD. Editing any field overwrites it, and every field is displayed
/// by converting back from it, so the fields never disagree.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    rates: RateTable,
    group: CurrencyGroup,
    pivot: Option<Decimal>,
}

impl Converter {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            group: CurrencyGroup::default(),
            pivot: None,
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn group(&self) -> CurrencyGroup {
        self.group
    }

    /// The stored amount in TWD, if any.
    pub fn pivot(&self) -> Option<Decimal> {
        self.pivot
    }

    /// Switching groups always clears the amount.
    pub fn set_group(&mut self, group: CurrencyGroup) {
        self.group = group;
        self.pivot = None;
    }

    /// Records `raw` as an amount of `currency`. Empty or unparsable input clears the amount.
    pub fn set_from_currency(&mut self, currency: Currency, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            self.pivot = None;
            return;
        }
        self.pivot = match Decimal::from_str(raw) {
            Ok(amount) => {
                let pivot = amount.checked_mul(self.rates.rate(currency));
                if pivot.is_none() {
                    debug!("Ignoring amount '{raw}' for {currency}: too large to convert");
                }
                pivot
            }
            Err(e) => {
                debug!("Ignoring amount '{raw}' for {currency}: {e}");
                None
            }
        };
    }

    /// The amount expressed in `currency`, rounded to two decimal places with trailing zeros
    /// removed, or an empty string when no amount is stored.
    pub fn display_value(&self, currency: Currency) -> String {
        self.value(currency)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// The rounded amount in `currency`.
    pub fn value(&self, currency: Currency) -> Option<Decimal> {
        let pivot = self.pivot?;
        let value = pivot.checked_div(self.rates.rate(currency))?;
        Some(
            value
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    pub fn reset(&mut self) {
        self.pivot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_displays_input() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Usd, "10");
        assert_eq!(c.display_value(Currency::Usd), "10");
        assert_eq!(c.display_value(Currency::Twd), "325");

        c.set_from_currency(Currency::Thb, "1000");
        assert_eq!(c.display_value(Currency::Twd), "960");
        assert_eq!(c.display_value(Currency::Thb), "1000");
    }

    #[test]
    fn test_convert_back_stays_close() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Twd, "100");
        let usd = c.display_value(Currency::Usd);
        assert_eq!(usd, "3.08");

        c.set_from_currency(Currency::Usd, &usd);
        let pivot = c.pivot().unwrap();
        let tolerance = Decimal::new(325, 3);
        assert!((pivot - Decimal::from(100)).abs() <= tolerance);
        assert_eq!(c.display_value(Currency::Twd), "100.1");
    }

    #[test]
    fn test_overflow_clears() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Twd, "1");
        c.set_from_currency(Currency::Usd, &Decimal::MAX.to_string());
        assert!(c.pivot().is_none());
        assert_eq!(c.display_value(Currency::Twd), "");
    }

    #[test]
    fn test_rounding_two_places() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Twd, "100");
        assert_eq!(c.display_value(Currency::Usd), "3.08");
        assert_eq!(c.display_value(Currency::Sgd), "4.13");
        assert_eq!(c.display_value(Currency::Myr), "13.33");
        assert_eq!(c.display_value(Currency::Thb), "104.17");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Twd, "12.50");
        assert_eq!(c.display_value(Currency::Twd), "12.5");
    }

    #[test]
    fn test_empty_clears_everything() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Sgd, "5");
        assert!(c.pivot().is_some());
        c.set_from_currency(Currency::Sgd, "");
        for currency in Currency::ALL {
            assert_eq!(c.display_value(currency), "");
        }
    }

    #[test]
    fn test_unparsable_clears() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Usd, "3");
        c.set_from_currency(Currency::Usd, "abc");
        assert!(c.pivot().is_none());
        assert_eq!(c.display_value(Currency::Twd), "");
    }

    #[test]
    fn test_switching_group_clears() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Usd, "3");
        c.set_group(CurrencyGroup::CruiseApp);
        assert_eq!(c.group(), CurrencyGroup::CruiseApp);
        assert_eq!(c.display_value(Currency::Hkd), "");
    }

    #[test]
    fn test_reset() {
        let mut c = Converter::default();
        c.set_from_currency(Currency::Hkd, "42");
        assert_eq!(c.display_value(Currency::Twd), "176.4");
        c.reset();
        assert!(c.pivot().is_none());
    }

    #[test]
    fn test_rate_must_be_positive() {
        let table = RateTable::reference();
        assert!(table.with_rate(Currency::Usd, Decimal::ZERO).is_err());
        assert!(table.with_rate(Currency::Usd, Decimal::new(-1, 0)).is_err());
        let table = table.with_rate(Currency::Usd, Decimal::new(30, 0)).unwrap();
        assert_eq!(table.rate(Currency::Usd), Decimal::new(30, 0));
    }

    #[test]
    fn test_groups() {
        for group in CurrencyGroup::ALL {
            assert_eq!(group.currencies()[0], Currency::PIVOT);
            assert!(!group.note().is_empty());
        }
        assert!(CurrencyGroup::MalaysiaThailand.contains(Currency::Thb));
        assert!(!CurrencyGroup::CruiseApp.contains(Currency::Usd));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Currency::from_str("SGD").unwrap(), Currency::Sgd);
        assert_eq!(Currency::Hkd.to_string(), "HKD");
        assert_eq!(
            CurrencyGroup::from_str("malaysia_thailand").unwrap(),
            CurrencyGroup::MalaysiaThailand
        );
    }
}
