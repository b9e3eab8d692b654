//! Shared building blocks: Pico.css wrappers, amount display and entry, and
//! the split payment dialog itself.
pub mod amount;
pub mod amount_input;
pub mod payment_split_modal;
pub mod pico;
