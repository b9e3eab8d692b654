//! Framework-free types shared by the split tender UI: money, tender
//! methods, the split form state and user preferences.

pub mod fiat_amount;
pub mod fiat_currency;
pub mod payment_method;
pub mod payment_split;
pub mod prefs;
