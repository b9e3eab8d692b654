use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::fiat_currency::FiatCurrency;
use crate::payment_split::DEFAULT_TITLE;

/// How amounts and the split dialog are presented.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayPreference {
    /// The till's single currency. Every amount is entered and shown in it.
    currency: FiatCurrency,

    /// Heading of the split payment dialog when the caller gives none.
    dialog_title: String,
}

impl DisplayPreference {
    pub fn new(currency: FiatCurrency, dialog_title: impl Into<String>) -> Self {
        Self {
            currency,
            dialog_title: dialog_title.into(),
        }
    }

    /// Reads the preference from environment variables, falling back to
    /// in-code defaults.
    ///
    /// # Environment Variables
    /// - `FIAT_CURRENCY`: ISO code such as "USD", "EUR" or "BRL"
    ///   (case-insensitive). Defaults to USD.
    /// - `SPLIT_DIALOG_TITLE`: heading for the split payment dialog.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let currency = match lookup("FIAT_CURRENCY") {
            Some(code) => FiatCurrency::from_str(code.trim()).unwrap_or_else(|_| {
                warn!("unknown FIAT_CURRENCY {code:?}, using {}", FiatCurrency::default().code());
                FiatCurrency::default()
            }),
            None => FiatCurrency::default(),
        };

        let dialog_title = lookup("SPLIT_DIALOG_TITLE")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            currency,
            dialog_title,
        }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn dialog_title(&self) -> &str {
        &self.dialog_title
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> DisplayPreference {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DisplayPreference::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let pref = from_map(&[]);
        assert_eq!(pref.currency(), FiatCurrency::USD);
        assert_eq!(pref.dialog_title(), DEFAULT_TITLE);
    }

    #[test]
    fn reads_currency_and_title() {
        let pref = from_map(&[("FIAT_CURRENCY", "brl"), ("SPLIT_DIALOG_TITLE", "Pagamento")]);
        assert_eq!(pref.currency(), FiatCurrency::BRL);
        assert_eq!(pref.dialog_title(), "Pagamento");
    }

    #[test]
    fn unknown_currency_and_blank_title_fall_back() {
        let pref = from_map(&[("FIAT_CURRENCY", "XYZ"), ("SPLIT_DIALOG_TITLE", "   ")]);
        assert_eq!(pref.currency(), FiatCurrency::USD);
        assert_eq!(pref.dialog_title(), DEFAULT_TITLE);
    }
}
