//! The closed set of tender types a sale can be split across.

use serde::Deserialize;
use serde::Serialize;

/// How a portion of the sale is paid.
///
/// The string form (`"cash"`, `"instant-transfer"`, ...) is used as the
/// `<select>` option value and in serialized records. Parsing anything else
/// fails; there is no catch-all variant.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    InstantTransfer,
    CreditCard,
    DebitCard,
}

impl PaymentMethod {
    /// Stable machine key, e.g. `"credit-card"`.
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Human label shown in the method selector and on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::InstantTransfer => "Instant Transfer",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Cash => "💵",
            Self::InstantTransfer => "⚡",
            Self::CreditCard | Self::DebitCard => "💳",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for method in PaymentMethod::iter() {
            assert_eq!(PaymentMethod::from_str(method.key()), Ok(method));
        }
        assert_eq!(PaymentMethod::InstantTransfer.key(), "instant-transfer");
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(PaymentMethod::from_str("voucher").is_err());
        assert!(PaymentMethod::from_str("").is_err());
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&PaymentMethod::DebitCard).unwrap();
        assert_eq!(json, "\"debit-card\"");
        let back: PaymentMethod = serde_json::from_str("\"credit-card\"").unwrap();
        assert_eq!(back, PaymentMethod::CreditCard);
        assert!(serde_json::from_str::<PaymentMethod>("\"voucher\"").is_err());
    }
}
