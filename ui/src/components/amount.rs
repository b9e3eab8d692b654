//! Displays a fiat amount in the till's format.

use api::fiat_amount::FiatAmount;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum CurrencyFormat {
    /// "$25.34"
    #[default]
    Symbol,
    /// "$25.34 USD"
    SymbolAndCode,
}

impl CurrencyFormat {
    pub fn render(&self, amount: &FiatAmount) -> String {
        match self {
            Self::Symbol => amount.to_string_with_symbol(),
            Self::SymbolAndCode => format!(
                "{} {}",
                amount.to_string_with_symbol(),
                amount.currency().code()
            ),
        }
    }
}

/// Renders `amount` inside a `<span>` so callers can style it.
#[component]
pub fn Amount(
    amount: FiatAmount,
    #[props(default)] format: CurrencyFormat,
    #[props(default)] emphasis: bool,
) -> Element {
    let text = format.render(&amount);
    rsx! {
        span {
            title: amount.currency().name(),
            style: if emphasis { "font-weight: bold;" } else { "" },
            "{text}"
        }
    }
}
