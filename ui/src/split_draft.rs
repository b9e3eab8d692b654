//! Pairs the split form state with the raw text of each amount field.
//!
//! The text is kept separately so a half-typed value such as "12." is not
//! rewritten to "12.00" while the cashier is still typing. Both vectors
//! always have the same length.

use api::fiat_amount::FiatAmount;
use api::payment_method::PaymentMethod;
use api::payment_split::EntryUpdate;
use api::payment_split::PaymentSplit;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitDraft {
    split: PaymentSplit,
    amount_texts: Vec<String>,
}

impl SplitDraft {
    pub fn new(required_total: FiatAmount) -> Self {
        let split = PaymentSplit::new(required_total);
        let amount_texts = vec![String::new(); split.entries().len()];
        Self {
            split,
            amount_texts,
        }
    }

    pub fn split(&self) -> &PaymentSplit {
        &self.split
    }

    pub fn amount_text(&self, index: usize) -> &str {
        self.amount_texts.get(index).map_or("", String::as_str)
    }

    pub fn add_row(&mut self) {
        self.split.add_entry();
        self.amount_texts.push(String::new());
    }

    pub fn remove_row(&mut self, index: usize) {
        let before = self.split.entries().len();
        self.split.remove_entry(index);
        if self.split.entries().len() < before {
            self.amount_texts.remove(index);
        }
    }

    pub fn set_method(&mut self, index: usize, method: PaymentMethod) {
        self.split.update_entry(index, EntryUpdate::Method(method));
    }

    pub fn set_amount_text(&mut self, index: usize, text: String) {
        if index >= self.amount_texts.len() {
            return;
        }
        self.split
            .update_entry(index, EntryUpdate::Amount(text.clone()));
        self.amount_texts[index] = text;
    }

    pub fn fill_remaining(&mut self, index: usize) {
        self.split.fill_remaining(index);
        if let (Some(entry), Some(text)) = (
            self.split.entries().get(index),
            self.amount_texts.get_mut(index),
        ) {
            *text = entry.amount.to_string();
        }
    }

    pub fn set_required_total(&mut self, required_total: FiatAmount) {
        let currency_changed = required_total.currency() != self.split.currency();
        self.split.set_required_total(required_total);
        if currency_changed {
            self.amount_texts = vec![String::new(); self.split.entries().len()];
        }
    }
}

#[cfg(test)]
mod tests {
    use api::fiat_currency::FiatCurrency;

    use super::*;

    fn usd(major: i64) -> FiatAmount {
        FiatAmount::new_from_major(major, FiatCurrency::USD)
    }

    #[test]
    fn partial_text_is_kept_verbatim() {
        let mut draft = SplitDraft::new(usd(50));
        draft.set_amount_text(0, "12.".to_string());
        assert_eq!(draft.amount_text(0), "12.");
        assert_eq!(draft.split().entries()[0].amount, usd(12));
    }

    #[test]
    fn texts_follow_row_removal() {
        let mut draft = SplitDraft::new(usd(50));
        draft.add_row();
        draft.set_amount_text(1, "5".to_string());
        draft.set_amount_text(2, "7".to_string());

        draft.remove_row(0);
        assert_eq!(draft.amount_text(0), "5");
        assert_eq!(draft.amount_text(1), "7");

        draft.remove_row(0);
        draft.remove_row(0);
        assert_eq!(draft.split().entries().len(), 1);
        assert_eq!(draft.amount_text(0), "7");
    }

    #[test]
    fn fill_remaining_writes_the_field_text() {
        let mut draft = SplitDraft::new(FiatAmount::new_from_minor(4_250, FiatCurrency::USD));
        draft.set_amount_text(0, "40".to_string());
        draft.fill_remaining(1);
        assert_eq!(draft.amount_text(1), "2.50");
        assert!(draft.split().is_valid());
    }

    #[test]
    fn currency_switch_clears_texts() {
        let mut draft = SplitDraft::new(usd(50));
        draft.set_amount_text(0, "50".to_string());
        draft.set_required_total(FiatAmount::new_from_major(50, FiatCurrency::EUR));
        assert_eq!(draft.amount_text(0), "");
        assert!(draft.split().total_paid().is_zero());
    }
}
