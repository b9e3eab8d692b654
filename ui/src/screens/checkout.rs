//=============================================================================
// File: src/screens/checkout.rs
//=============================================================================
use api::fiat_amount::FiatAmount;
use api::payment_split::ConfirmedPayment;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::components::amount::Amount;
use crate::components::amount::CurrencyFormat;
use crate::components::amount_input::AmountInput;
use crate::components::payment_split_modal::PaymentSplitModal;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::AppState;

/// The till: enter a sale total, split it, and show the last receipt.
///
/// This screen owns the dialog's visibility. It closes the dialog itself
/// once a payment is confirmed.
#[component]
pub fn CheckoutScreen() -> Element {
    let app_state = use_context::<AppState>();
    let currency = app_state.currency;
    let dialog_title = app_state.dialog_title.clone();

    let mut total_str = use_signal(String::new);
    let mut is_split_open = use_signal(|| false);
    let mut last_receipt = use_signal::<Option<ConfirmedPayment>>(|| None);

    let sale_total = use_memo(move || {
        FiatAmount::new_from_str(&total_str(), currency)
            .unwrap_or_else(|_| FiatAmount::zero(currency))
    });

    let handle_confirm = move |payment: ConfirmedPayment| {
        match serde_json::to_string(&payment) {
            Ok(json) => info!("payment recorded: {json}"),
            Err(e) => warn!("could not serialize payment: {e}"),
        }
        last_receipt.set(Some(payment));
        is_split_open.set(false);
        total_str.set(String::new());
    };

    rsx! {
        Card {
            h3 { "Checkout" }
            Grid {
                AmountInput {
                    name: "sale_total",
                    label: "Sale total",
                    value: total_str(),
                    currency,
                    on_input: move |text: String| total_str.set(text),
                }
                Button {
                    disabled: !sale_total().is_positive(),
                    on_click: move |_| is_split_open.set(true),
                    "Split Payment"
                }
            }

            PaymentSplitModal {
                is_open: is_split_open(),
                required_total: sale_total(),
                title: dialog_title,
                on_close: move |_| is_split_open.set(false),
                on_confirm: handle_confirm,
            }

            if let Some(receipt) = last_receipt() {
                hr {}
                h5 { "Last payment" }
                table {
                    thead {
                        tr {
                            th { "Method" }
                            th { style: "text-align: right;", "Amount" }
                        }
                    }
                    tbody {
                        for (i, entry) in receipt.entries.iter().enumerate() {
                            tr {
                                key: "{i}",
                                td { "{entry.method.icon()} {entry.method.label()}" }
                                td {
                                    style: "text-align: right;",
                                    Amount { amount: entry.amount }
                                }
                            }
                        }
                        tr {
                            td { strong { "Change" } }
                            td {
                                style: "text-align: right;",
                                Amount { amount: receipt.change, format: CurrencyFormat::SymbolAndCode, emphasis: true }
                            }
                        }
                    }
                }
            }
        }
    }
}
