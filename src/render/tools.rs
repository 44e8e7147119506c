use super::{Doc, Painter};
use crate::currency::Converter;
use crate::overview::style;
use crate::prefs::{FontScale, Theme};

/// Shows every currency of the active group with the amount converted from the stored value.
pub fn render_converter(converter: &Converter, painter: &Painter) -> String {
    let mut doc = Doc::new(painter);
    let group = converter.group();
    doc.line(painter.heading(&format!("Currency converter: {}", group.title())));
    for currency in group.currencies() {
        let value = converter.display_value(*currency);
        let value = if value.is_empty() {
            painter.paint("-", style::MUTED)
        } else {
            painter.bold(&value)
        };
        doc.line(format!(
            "{:<4} {value}  {}",
            currency.to_string(),
            painter.paint(currency.label(), style::MUTED)
        ));
    }
    doc.line(painter.paint(group.note(), style::MUTED));
    doc.finish()
}

pub fn render_prefs(theme: Theme, font_scale: FontScale, painter: &Painter) -> String {
    let mut doc = Doc::new(painter);
    doc.line(painter.heading("Preferences"));
    doc.line(format!("theme  {theme}"));
    doc.line(format!("font   {font_scale}"));
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Currency, CurrencyGroup};

    #[test]
    fn test_converter_output() {
        let mut converter = Converter::default();
        converter.set_group(CurrencyGroup::CruiseApp);
        converter.set_from_currency(Currency::Hkd, "10");
        let out = render_converter(&converter, &Painter::plain());
        assert!(out.starts_with("Currency converter: Cruise app\n"));
        assert!(out.contains("TWD  42  New Taiwan dollar\n"));
        assert!(out.contains("HKD  10  Hong Kong dollar\n"));
        assert!(!out.contains("USD "));
    }

    #[test]
    fn test_converter_empty() {
        let out = render_converter(&Converter::default(), &Painter::plain());
        assert!(out.contains("SGD  -  Singapore dollar\n"));
    }

    #[test]
    fn test_prefs_output() {
        let out = render_prefs(Theme::Dark, FontScale::Extra, &Painter::plain());
        assert_eq!(out, "Preferences\ntheme  dark\nfont   extra\n");
    }
}
