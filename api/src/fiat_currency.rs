//! Defines the fiat currencies a till can be configured for.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency, with its code, symbol, and formatting rules.
///
/// A running app uses exactly one of these for every amount it shows.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    BRL, // Brazilian Real
    CAD, // Canadian Dollar
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    KWD, // Kuwaiti Dinar
    MXN, // Mexican Peso
    #[default]
    USD, // United States Dollar
}

impl FiatCurrency {
    /// Number of decimal digits in the minor unit.
    ///
    /// USD has 2 (cents), JPY has none, KWD has 3 (fils).
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            Self::KWD => 3,
            _ => 2,
        }
    }

    /// Graphical symbol prefixed to displayed amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::CAD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::KWD => "د.ك",
            Self::MXN => "$",
            Self::USD => "$",
        }
    }

    /// ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BRL => "Brazilian Real",
            Self::CAD => "Canadian Dollar",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
            Self::KWD => "Kuwaiti Dinar",
            Self::MXN => "Mexican Peso",
            Self::USD => "United States Dollar",
        }
    }

    /// Placeholder text for an empty amount field, e.g. "0.00".
    pub fn zero_placeholder(&self) -> String {
        match self.decimals() {
            0 => "0".to_string(),
            d => format!("0.{}", "0".repeat(d as usize)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("brl"), Ok(FiatCurrency::BRL));
        assert_eq!(FiatCurrency::from_str("Usd"), Ok(FiatCurrency::USD));
        assert!(FiatCurrency::from_str("XYZ").is_err());
    }

    #[test]
    fn placeholder_follows_decimals() {
        assert_eq!(FiatCurrency::USD.zero_placeholder(), "0.00");
        assert_eq!(FiatCurrency::JPY.zero_placeholder(), "0");
        assert_eq!(FiatCurrency::KWD.zero_placeholder(), "0.000");
    }

    #[test]
    fn code_matches_variant_name() {
        assert_eq!(FiatCurrency::EUR.code(), "EUR");
        assert_eq!(FiatCurrency::default(), FiatCurrency::USD);
    }
}
