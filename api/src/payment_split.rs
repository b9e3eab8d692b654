//! Form state for splitting one sale total across several tenders.
//!
//! `PaymentSplit` owns the editable rows and keeps the change amount in step
//! with them: every mutating method recomputes it before returning, so no
//! caller can observe a stale value.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::payment_method::PaymentMethod;

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Split Payment";

/// One tender contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub method: PaymentMethod,
    pub amount: FiatAmount,
}

impl PaymentEntry {
    pub fn new(method: PaymentMethod, amount: FiatAmount) -> Self {
        Self { method, amount }
    }

    /// A zero-amount row for `method`.
    pub fn empty(method: PaymentMethod, currency: FiatCurrency) -> Self {
        Self::new(method, FiatAmount::zero(currency))
    }
}

/// A single field edit on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    Method(PaymentMethod),
    /// Raw text from the amount input. Unparseable or negative text becomes 0.
    Amount(String),
}

/// Why a split cannot be built or confirmed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentSplitError {
    #[error(
        "A payment in {} cannot cover a sale in {}",
        .found.code(),
        .expected.code()
    )]
    CurrencyMismatch {
        expected: FiatCurrency,
        found: FiatCurrency,
    },
    #[error(
        "Total paid must equal or exceed the sale total. Remaining: {}",
        .remaining.to_string_with_symbol()
    )]
    InsufficientTotal { remaining: FiatAmount },
    #[error("Configure at least one payment method.")]
    NoPaymentConfigured,
}

/// What the caller receives once a split is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedPayment {
    /// Rows with a positive amount, in display order.
    pub entries: Vec<PaymentEntry>,
    pub change: FiatAmount,
}

/// Derived figures for rendering the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSummary {
    pub required_total: FiatAmount,
    pub total_paid: FiatAmount,
    pub remaining: FiatAmount,
    pub overpaid: FiatAmount,
    pub change: FiatAmount,
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSplit {
    required_total: FiatAmount,
    entries: Vec<PaymentEntry>,
    change_amount: FiatAmount,
}

impl PaymentSplit {
    /// Opens a split for `required_total` with a cash row and an
    /// instant-transfer row, both zero.
    pub fn new(required_total: FiatAmount) -> Self {
        let mut split = Self {
            required_total,
            entries: Vec::new(),
            change_amount: FiatAmount::zero(required_total.currency()),
        };
        split.reset();
        split
    }

    /// Builds a split from explicit rows. An empty list gets the default rows.
    ///
    /// Negative amounts are clamped to zero, as with typed input. Rows in a
    /// currency other than the sale's are rejected.
    pub fn with_entries(
        required_total: FiatAmount,
        entries: Vec<PaymentEntry>,
    ) -> Result<Self, PaymentSplitError> {
        if entries.is_empty() {
            return Ok(Self::new(required_total));
        }
        let currency = required_total.currency();
        if let Some(foreign) = entries.iter().find(|e| e.amount.currency() != currency) {
            return Err(PaymentSplitError::CurrencyMismatch {
                expected: currency,
                found: foreign.amount.currency(),
            });
        }
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                if entry.amount.is_negative() {
                    debug!("negative {} row clamped to zero", entry.method.key());
                    entry.amount = FiatAmount::zero(currency);
                }
                entry
            })
            .collect();

        let mut split = Self {
            required_total,
            entries,
            change_amount: FiatAmount::zero(currency),
        };
        split.recompute_change();
        Ok(split)
    }

    // --- Accessors ---

    pub fn currency(&self) -> FiatCurrency {
        self.required_total.currency()
    }

    pub fn required_total(&self) -> FiatAmount {
        self.required_total
    }

    pub fn entries(&self) -> &[PaymentEntry] {
        &self.entries
    }

    pub fn change_amount(&self) -> FiatAmount {
        self.change_amount
    }

    /// Whether the remove action is offered at all.
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    // --- Derived quantities ---

    pub fn total_paid(&self) -> FiatAmount {
        self.entries
            .iter()
            .fold(FiatAmount::zero(self.currency()), |acc, e| acc + e.amount)
    }

    pub fn remaining(&self) -> FiatAmount {
        self.required_total.excess_over(&self.total_paid())
    }

    pub fn overpaid(&self) -> FiatAmount {
        self.total_paid().excess_over(&self.required_total)
    }

    fn has_positive_entry(&self) -> bool {
        self.entries.iter().any(|e| e.amount.is_positive())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The error `confirm` would report, or `Ok` if the split is complete.
    pub fn validate(&self) -> Result<(), PaymentSplitError> {
        if !self.has_positive_entry() {
            return Err(PaymentSplitError::NoPaymentConfigured);
        }
        let remaining = self.remaining();
        if remaining.is_positive() {
            return Err(PaymentSplitError::InsufficientTotal { remaining });
        }
        Ok(())
    }

    /// Inline advisory for an incomplete split. Silent until something has
    /// been entered, and once the split is valid.
    ///
    /// A positive total implies a positive row, so this only ever yields
    /// `InsufficientTotal`. The all-zero case surfaces through `confirm`.
    pub fn advisory(&self) -> Option<PaymentSplitError> {
        if self.total_paid().is_positive() {
            self.validate().err()
        } else {
            None
        }
    }

    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary {
            required_total: self.required_total,
            total_paid: self.total_paid(),
            remaining: self.remaining(),
            overpaid: self.overpaid(),
            change: self.change_amount,
            is_valid: self.is_valid(),
        }
    }

    // --- Operations ---

    /// Appends a zero cash row.
    pub fn add_entry(&mut self) {
        self.entries
            .push(PaymentEntry::empty(PaymentMethod::Cash, self.currency()));
        self.recompute_change();
    }

    /// Removes the row at `index`. No-op for the last remaining row or an
    /// out-of-range index.
    pub fn remove_entry(&mut self, index: usize) {
        if !self.can_remove() || index >= self.entries.len() {
            debug!("ignoring remove of row {index} ({} rows)", self.entries.len());
            return;
        }
        self.entries.remove(index);
        self.recompute_change();
    }

    /// Replaces one field of the row at `index`. Out-of-range is a no-op.
    pub fn update_entry(&mut self, index: usize, update: EntryUpdate) {
        let currency = self.currency();
        let Some(entry) = self.entries.get_mut(index) else {
            debug!("ignoring update of missing row {index}");
            return;
        };
        match update {
            EntryUpdate::Method(method) => entry.method = method,
            EntryUpdate::Amount(text) => entry.amount = parse_amount_or_zero(&text, currency),
        }
        self.recompute_change();
    }

    /// Adds the outstanding balance to the row at `index`.
    pub fn fill_remaining(&mut self, index: usize) {
        let remaining = self.remaining();
        if remaining.is_zero() {
            return;
        }
        if let Some(entry) = self.entries.get_mut(index) {
            entry.amount += remaining;
            self.recompute_change();
        }
    }

    /// Changes the amount to cover. Entries are kept.
    pub fn set_required_total(&mut self, required_total: FiatAmount) {
        if required_total.currency() != self.currency() {
            // Existing rows are in the old currency and cannot be carried over.
            self.required_total = required_total;
            self.reset();
            return;
        }
        self.required_total = required_total;
        self.recompute_change();
    }

    /// Back to the two default zero rows.
    pub fn reset(&mut self) {
        let currency = self.currency();
        self.entries = vec![
            PaymentEntry::empty(PaymentMethod::Cash, currency),
            PaymentEntry::empty(PaymentMethod::InstantTransfer, currency),
        ];
        self.recompute_change();
    }

    /// Validates and, on success, returns the positive rows and the change.
    ///
    /// Does not close or reset anything; that is the caller's job.
    pub fn confirm(&self) -> Result<ConfirmedPayment, PaymentSplitError> {
        if let Err(e) = self.validate() {
            warn!("split payment rejected: {e}");
            return Err(e);
        }
        Ok(ConfirmedPayment {
            entries: self
                .entries
                .iter()
                .filter(|e| e.amount.is_positive())
                .copied()
                .collect(),
            change: self.change_amount,
        })
    }

    // Change is only owed when cash was handed over.
    fn recompute_change(&mut self) {
        let cash_tendered = self
            .entries
            .iter()
            .any(|e| e.method.is_cash() && e.amount.is_positive());
        self.change_amount = if cash_tendered {
            self.overpaid()
        } else {
            FiatAmount::zero(self.currency())
        };
        debug!("change recomputed: {}", self.change_amount);
    }
}

fn parse_amount_or_zero(text: &str, currency: FiatCurrency) -> FiatAmount {
    match FiatAmount::new_from_str(text.trim(), currency) {
        Ok(amount) if !amount.is_negative() => amount,
        Ok(_) => {
            debug!("negative amount {text:?} coerced to zero");
            FiatAmount::zero(currency)
        }
        Err(e) => {
            if !text.trim().is_empty() {
                debug!("amount {text:?} coerced to zero: {e}");
            }
            FiatAmount::zero(currency)
        }
    }
}
