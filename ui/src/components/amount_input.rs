use api::fiat_amount::sanitize_amount_input;
use api::fiat_amount::MAX_INTEGER_DIGITS;
use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;

/// A text field that only ever holds a well-formed amount for `currency`.
///
/// Every keystroke is sanitized before `on_input` sees it. A field showing
/// zero is cleared on focus so the cashier can type straight over it.
#[component]
pub fn AmountInput(
    name: String,
    value: String,
    currency: FiatCurrency,
    on_input: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default)] disabled: bool,
) -> Element {
    let max_decimals = currency.decimals();
    let placeholder = currency.zero_placeholder();
    let is_numerically_zero = !value.is_empty() && value.trim_matches(['0', '.']).is_empty();

    let handle_input = move |event: FormEvent| {
        on_input.call(sanitize_amount_input(
            &event.value(),
            MAX_INTEGER_DIGITS,
            max_decimals,
        ));
    };

    let handle_focus = move |_: FocusEvent| {
        if is_numerically_zero {
            on_input.call(String::new());
        }
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem; flex-grow: 1;",
            if !label.is_empty() {
                label {
                    r#for: "{name}",
                    style: "margin-bottom: 0; white-space: nowrap;",
                    "{label}"
                }
            }
            span { style: "opacity: 0.7;", "{currency.symbol()}" }
            input {
                r#type: "text",
                id: "{name}",
                name: "{name}",
                inputmode: "decimal",
                autocomplete: "off",
                style: "margin-bottom: 0; text-align: right;",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled: disabled,
                onfocus: handle_focus,
                oninput: handle_input,
            }
        }
    }
}
