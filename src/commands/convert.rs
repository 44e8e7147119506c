use crate::commands::{Out, Session};
use crate::currency::{Converter, Currency, CurrencyGroup, RateTable};
use crate::render::render_converter;
use crate::Result;
use anyhow::ensure;
use serde::Serialize;
use std::collections::BTreeMap;

/// The converted amounts, keyed by currency. Empty when no amount was given.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub group: CurrencyGroup,
    pub values: BTreeMap<Currency, String>,
}

/// Converts `amount` of `from` into every currency of `group`.
pub fn convert(
    session: &Session,
    group: CurrencyGroup,
    from: Currency,
    amount: Option<&str>,
) -> Result<Out<Conversion>> {
    ensure!(
        group.contains(from),
        "{from} is not part of the {group} group, which has {}",
        group
            .currencies()
            .iter()
            .map(Currency::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let mut converter = Converter::new(RateTable::reference());
    converter.set_group(group);
    if let Some(amount) = amount {
        converter.set_from_currency(from, amount);
    }
    let values = group
        .currencies()
        .iter()
        .map(|c| (*c, converter.display_value(*c)))
        .filter(|(_, v)| !v.is_empty())
        .collect();
    let body = render_converter(&converter, &session.painter());
    Ok(Out::new("", Conversion { group, values }).with_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[test]
    fn test_convert_usd() {
        let env = TestEnv::new();
        let out = convert(
            &env.session(),
            CurrencyGroup::Singapore,
            Currency::Usd,
            Some("10"),
        )
        .unwrap();
        let values = &out.structure().unwrap().values;
        assert_eq!(values[&Currency::Twd], "325");
        assert_eq!(values[&Currency::Usd], "10");
        assert_eq!(values[&Currency::Sgd], "13.43");
    }

    #[test]
    fn test_convert_without_amount() {
        let env = TestEnv::new();
        let out = convert(&env.session(), CurrencyGroup::CruiseApp, Currency::Twd, None).unwrap();
        assert!(out.structure().unwrap().values.is_empty());
        assert!(out.body().unwrap().contains("HKD"));
    }

    #[test]
    fn test_convert_garbage_amount_is_empty() {
        let env = TestEnv::new();
        let out = convert(
            &env.session(),
            CurrencyGroup::Singapore,
            Currency::Twd,
            Some("ten"),
        )
        .unwrap();
        assert!(out.structure().unwrap().values.is_empty());
    }

    #[test]
    fn test_currency_outside_group() {
        let env = TestEnv::new();
        let result = convert(&env.session(), CurrencyGroup::Singapore, Currency::Thb, Some("1"));
        assert!(result.is_err());
    }
}
