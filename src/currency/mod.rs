use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use showroom_config::Config;
use showroom_domain::{BalanceLabel, Money};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DigitGrouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Lakh,
}

/// Locale-aware number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: DigitGrouping,
}

impl LocaleConfig {
    pub fn from_tag(tag: &str) -> Self {
        let language_tag = tag.trim().to_string();
        let (decimal_separator, grouping_separator, grouping) =
            match language_tag.to_ascii_lowercase().as_str() {
                "en-in" | "hi-in" => ('.', ',', DigitGrouping::Lakh),
                "de-de" | "es-es" | "it-it" | "pt-br" => (',', '.', DigitGrouping::Thousands),
                "fr-fr" => (',', ' ', DigitGrouping::Thousands),
                _ => ('.', ',', DigitGrouping::Thousands),
            };
        Self {
            language_tag,
            decimal_separator,
            grouping_separator,
            grouping,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::from_tag("en-US")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AED" => "AED ".into(),
        _ => format!("{code} "),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `value` with the locale separators and a fixed number of decimals.
pub fn format_number(locale: &LocaleConfig, value: Money, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.prec$}", rounded.abs(), prec = precision as usize);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, locale: &LocaleConfig) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(chars[start..end].iter().collect());
        end = start;
        if locale.grouping == DigitGrouping::Lakh {
            size = 2;
        }
    }
    groups.reverse();
    groups.join(&locale.grouping_separator.to_string())
}

/// Bundles currency, locale and precision for rendering amounts and balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub precision: u32,
}

impl MoneyFormat {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        let precision = minor_units_for(code.as_str());
        Self {
            code,
            locale,
            precision,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut format = Self::new(
            CurrencyCode::new(config.currency.as_str()),
            LocaleConfig::from_tag(&config.locale),
        );
        if let Some(precision) = config.currency_precision {
            format.precision = u32::from(precision);
        }
        format
    }

    /// Signed amount with currency symbol, e.g. `₹1,25,000.00` or `-$40.00`.
    pub fn amount(&self, value: Money) -> String {
        let number = format_number(&self.locale, value, self.precision);
        let symbol = symbol_for(self.code.as_str());
        match number.strip_prefix('-') {
            Some(unsigned) => format!("-{symbol}{unsigned}"),
            None => format!("{symbol}{number}"),
        }
    }

    /// Absolute amount followed by its Dr/Cr side, e.g. `₹800.00 Dr`.
    pub fn balance(&self, value: Money) -> String {
        let label = BalanceLabel::with_precision(value, self.precision);
        format!(
            "{}{} {}",
            symbol_for(self.code.as_str()),
            format_number(&self.locale, label.magnitude, self.precision),
            label.side
        )
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lakh_grouping_for_indian_locale() {
        let locale = LocaleConfig::from_tag("en-IN");
        assert_eq!(format_number(&locale, dec!(12345678.9), 2), "1,23,45,678.90");
        assert_eq!(format_number(&locale, dec!(999), 2), "999.00");
        assert_eq!(format_number(&locale, dec!(1000), 2), "1,000.00");
    }

    #[test]
    fn thousands_grouping_with_custom_separators() {
        let locale = LocaleConfig::from_tag("de-DE");
        assert_eq!(format_number(&locale, dec!(-1234567.5), 2), "-1.234.567,50");
    }

    #[test]
    fn zero_precision_drops_fraction() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, dec!(1500.5), 0), "1,501");
    }

    #[test]
    fn rounding_to_zero_has_no_sign() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, dec!(-0.001), 2), "0.00");
    }
}
