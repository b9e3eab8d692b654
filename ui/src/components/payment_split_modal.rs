//=============================================================================
// File: src/components/payment_split_modal.rs
//=============================================================================
use std::str::FromStr;

use api::fiat_amount::FiatAmount;
use api::payment_method::PaymentMethod;
use api::payment_split::ConfirmedPayment;
use api::payment_split::PaymentSplit;
use api::payment_split::PaymentSplitError;
use api::payment_split::PaymentSummary;
use api::payment_split::DEFAULT_TITLE;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use strum::IntoEnumIterator;

use crate::components::amount::Amount;
use crate::components::amount_input::AmountInput;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::CloseButton;
use crate::components::pico::DismissableModal;
use crate::components::pico::Modal;
use crate::split_draft::SplitDraft;

/// Dialog for splitting `required_total` across several tenders.
///
/// Renders nothing while `is_open` is false. The form state lives in an inner
/// component, so it is created fresh each time the dialog opens and dropped
/// when it closes. Confirming hands the positive rows and the change to
/// `on_confirm`; closing the dialog is left to the caller.
#[component]
pub fn PaymentSplitModal(
    is_open: bool,
    required_total: FiatAmount,
    title: Option<String>,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<ConfirmedPayment>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        PaymentSplitForm {
            required_total,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            on_close,
            on_confirm,
        }
    }
}

#[component]
fn PaymentSplitForm(
    required_total: FiatAmount,
    title: String,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<ConfirmedPayment>,
) -> Element {
    let mut draft = use_signal(|| SplitDraft::new(required_total));
    let mut show_error_modal = use_signal(|| false);
    let mut error_modal_message = use_signal(String::new);

    // Follow the caller's total while the dialog is open.
    use_effect(use_reactive((&required_total,), move |(required_total,)| {
        if draft.peek().split().required_total() != required_total {
            draft.with_mut(|d| d.set_required_total(required_total));
        }
    }));

    let summary = draft.read().split().summary();
    let advisory = draft.read().split().advisory();
    let currency = summary.required_total.currency();
    let row_count = draft.read().split().entries().len();
    let can_remove = draft.read().split().can_remove();

    let handle_confirm = move |_: ()| {
        let split = draft.read().split().clone();
        let result = submit_split(&split, |payment| on_confirm.call(payment));
        if let Err(e) = result {
            error_modal_message.set(e.to_string());
            show_error_modal.set(true);
        }
    };

    rsx! {
        DismissableModal {
            on_dismiss: move |_| on_close.call(()),

            header {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h3 { style: "margin-bottom: 0;", "{title}" }
                span {
                    "Sale total: "
                    Amount { amount: summary.required_total, emphasis: true }
                }
            }

            for index in 0..row_count {
                {
                    let entry = draft.read().split().entries()[index];
                    let amount_text = draft.read().amount_text(index).to_string();
                    rsx! {
                        div {
                            key: "{index}",
                            class: "split-row",
                            style: "display: flex; gap: 0.75rem; align-items: center; margin-bottom: 0.75rem;",

                            select {
                                name: "method_{index}",
                                "aria-label": "Payment method",
                                style: "margin-bottom: 0; max-width: 12rem;",
                                onchange: move |evt: FormEvent| {
                                    match PaymentMethod::from_str(&evt.value()) {
                                        Ok(method) => draft.with_mut(|d| d.set_method(index, method)),
                                        Err(e) => warn!("ignoring unknown payment method {:?}: {e}", evt.value()),
                                    }
                                },
                                for method in PaymentMethod::iter() {
                                    option {
                                        key: "{method.key()}",
                                        value: method.key(),
                                        selected: method == entry.method,
                                        "{method.icon()} {method.label()}"
                                    }
                                }
                            }

                            AmountInput {
                                name: "amount_{index}",
                                value: amount_text,
                                currency,
                                on_input: move |text: String| {
                                    draft.with_mut(|d| d.set_amount_text(index, text));
                                },
                            }

                            if summary.remaining.is_positive() {
                                Button {
                                    button_type: ButtonType::Secondary,
                                    outline: true,
                                    title: "Fill remaining balance".to_string(),
                                    style: "margin-bottom: 0; white-space: nowrap;".to_string(),
                                    on_click: move |_| draft.with_mut(|d| d.fill_remaining(index)),
                                    "Rest"
                                }
                            }

                            if can_remove {
                                CloseButton {
                                    label: "Remove payment method",
                                    on_click: move |_| draft.with_mut(|d| d.remove_row(index)),
                                }
                            }
                        }
                    }
                }
            }

            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| draft.with_mut(|d| d.add_row()),
                "+ Add Payment Method"
            }

            hr {}

            SplitSummaryPanel {
                summary,
                advisory,
                on_cancel: move |_| on_close.call(()),
                on_confirm: handle_confirm,
            }
        }

        // After the form so it stacks on top of it.
        Modal {
            is_open: show_error_modal,
            title: "Incomplete Payment",
            p { "{error_modal_message}" }
            footer {
                Button {
                    on_click: move |_| show_error_modal.set(false),
                    "Keep Editing"
                }
            }
        }
    }
}

/// Validates `split` and hands the confirmed rows to `on_confirm`.
///
/// `on_confirm` is not called when the split is incomplete.
fn submit_split(
    split: &PaymentSplit,
    on_confirm: impl FnOnce(ConfirmedPayment),
) -> Result<(), PaymentSplitError> {
    match split.confirm() {
        Ok(payment) => {
            info!(
                "split payment confirmed: {} tender(s), change {}",
                payment.entries.len(),
                payment.change.to_string_with_symbol()
            );
            on_confirm(payment);
            Ok(())
        }
        Err(e) => {
            warn!("split payment rejected: {e}");
            Err(e)
        }
    }
}

/// Totals, the inline advisory and the footer actions.
///
/// Change is only listed when cash is owed back. An overpayment on cards
/// alone is shown as "Overpaid" instead.
#[component]
fn SplitSummaryPanel(
    summary: PaymentSummary,
    advisory: Option<PaymentSplitError>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        table {
            tbody {
                tr {
                    td { "Total paid" }
                    td { style: "text-align: right;", Amount { amount: summary.total_paid } }
                }
                if summary.remaining.is_positive() {
                    tr {
                        td { "Remaining" }
                        td {
                            style: "text-align: right; color: var(--pico-del-color);",
                            Amount { amount: summary.remaining, emphasis: true }
                        }
                    }
                }
                if summary.change.is_positive() {
                    tr {
                        td { "Change" }
                        td {
                            style: "text-align: right; color: var(--pico-ins-color);",
                            Amount { amount: summary.change, emphasis: true }
                        }
                    }
                } else if summary.overpaid.is_positive() {
                    tr {
                        td { "Overpaid" }
                        td { style: "text-align: right;", Amount { amount: summary.overpaid } }
                    }
                }
            }
        }

        if let Some(advisory) = advisory {
            p {
                "role": "alert",
                style: "color: var(--pico-del-color);",
                strong { "Incomplete payment. " }
                "{advisory}"
            }
        }

        footer {
            div {
                style: "display: flex; justify-content: flex-end; gap: 1rem;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    disabled: !summary.is_valid,
                    on_click: move |_| on_confirm.call(()),
                    "Confirm Payment"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::fiat_currency::FiatCurrency;
    use api::payment_split::PaymentEntry;

    use super::*;

    fn usd(major: i64) -> FiatAmount {
        FiatAmount::new_from_major(major, FiatCurrency::USD)
    }

    fn split_of(rows: &[(PaymentMethod, i64)]) -> PaymentSplit {
        let entries = rows
            .iter()
            .map(|&(method, major)| PaymentEntry::new(method, usd(major)))
            .collect();
        PaymentSplit::with_entries(usd(100), entries).unwrap()
    }

    #[component]
    fn Till(is_open: bool) -> Element {
        rsx! {
            PaymentSplitModal {
                is_open,
                required_total: usd(100),
                on_close: |_| {},
                on_confirm: |_| {},
            }
        }
    }

    #[component]
    fn Panel(split: PaymentSplit) -> Element {
        rsx! {
            SplitSummaryPanel {
                summary: split.summary(),
                advisory: split.advisory(),
                on_cancel: |_| {},
                on_confirm: |_| {},
            }
        }
    }

    fn render_till(is_open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Till, TillProps { is_open });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_panel(split: PaymentSplit) -> String {
        let mut dom = VirtualDom::new_with_props(Panel, PanelProps { split });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_till(false);
        assert!(!html.contains("<dialog"), "{html}");
        assert!(!html.contains(DEFAULT_TITLE), "{html}");
    }

    #[test]
    fn opened_dialog_starts_with_default_rows() {
        let html = render_till(true);
        assert!(html.contains("<dialog"), "{html}");
        assert!(html.contains(DEFAULT_TITLE), "{html}");
        assert!(html.contains("$100.00"), "{html}");
        assert!(html.contains("amount_0") && html.contains("amount_1"), "{html}");
        assert!(!html.contains("amount_2"), "{html}");
        assert!(html.contains("Confirm Payment"), "{html}");
        assert!(html.contains("disabled"), "{html}");
        // nothing entered yet, so no advisory
        assert!(!html.contains("Incomplete payment."), "{html}");
    }

    #[test]
    fn partial_payment_shows_remaining_and_advisory() {
        let html = render_panel(split_of(&[(PaymentMethod::Cash, 40)]));
        assert!(html.contains("Remaining"), "{html}");
        assert!(html.contains("$60.00"), "{html}");
        assert!(html.contains("Incomplete payment."), "{html}");
        assert!(html.contains("Remaining: $60.00"), "{html}");
        assert!(!html.contains("Change"), "{html}");
        assert!(html.contains("disabled"), "{html}");
    }

    #[test]
    fn cash_overpayment_shows_change() {
        let html = render_panel(split_of(&[(PaymentMethod::Cash, 150)]));
        assert!(html.contains("Change"), "{html}");
        assert!(html.contains("$50.00"), "{html}");
        assert!(!html.contains("Remaining"), "{html}");
        assert!(!html.contains("Overpaid"), "{html}");
        assert!(!html.contains("Incomplete payment."), "{html}");
    }

    #[test]
    fn card_overpayment_shows_overpaid_without_change() {
        let html = render_panel(split_of(&[(PaymentMethod::CreditCard, 130)]));
        assert!(html.contains("Overpaid"), "{html}");
        assert!(html.contains("$30.00"), "{html}");
        assert!(!html.contains("Change"), "{html}");
        assert!(!html.contains("$0.00"), "{html}");
    }

    #[test]
    fn submit_hands_positive_rows_and_change_to_caller() {
        let split = split_of(&[
            (PaymentMethod::InstantTransfer, 0),
            (PaymentMethod::DebitCard, 70),
            (PaymentMethod::Cash, 50),
        ]);
        let mut received = None;
        submit_split(&split, |payment| received = Some(payment)).unwrap();

        let payment = received.unwrap();
        assert_eq!(
            payment.entries,
            vec![
                PaymentEntry::new(PaymentMethod::DebitCard, usd(70)),
                PaymentEntry::new(PaymentMethod::Cash, usd(50)),
            ]
        );
        assert_eq!(payment.change, usd(20));
    }

    #[test]
    fn submit_withholds_incomplete_payment() {
        let mut called = false;
        let err = submit_split(&split_of(&[(PaymentMethod::Cash, 30)]), |_| called = true)
            .unwrap_err();
        assert!(!called);
        assert_eq!(err, PaymentSplitError::InsufficientTotal { remaining: usd(70) });

        let err = submit_split(&PaymentSplit::new(usd(100)), |_| called = true).unwrap_err();
        assert!(!called);
        assert_eq!(err, PaymentSplitError::NoPaymentConfigured);
    }
}
