//! Exact fiat currency amounts for the tender dialog.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Sub;

use num_traits::CheckedAdd;
use num_traits::CheckedSub;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::fiat_currency::FiatCurrency;

/// Largest number of integer digits accepted in an amount field.
pub const MAX_INTEGER_DIGITS: u8 = 9;

/// An error that can occur when parsing a string into a `FiatAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseFiatAmountError {
    /// Not a plain decimal number (e.g., "abc", "1.2.3", "1e3").
    #[error("invalid fiat amount format")]
    InvalidFormat,
    /// More decimal places than the currency supports (e.g., "$1.234").
    #[error("too many decimal places for the currency")]
    TooManyDecimals,
}

/// A monetary value in a specific fiat currency.
///
/// Stored as a signed count of the currency's minor unit (cents for USD), so
/// sums and differences are exact. `Display` prints the bare number; use
/// [`FiatAmount::to_string_with_symbol`] for the till format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    // --- Getters ---

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit.
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    // --- Constructors ---

    pub fn zero(currency: FiatCurrency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Creates a new `FiatAmount` directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// use api::fiat_amount::FiatAmount;
    /// use api::fiat_currency::FiatCurrency;
    ///
    /// // 12345 cents represents $123.45
    /// let amount = FiatAmount::new_from_minor(12345, FiatCurrency::USD);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    /// Creates a whole-unit amount, e.g. `new_from_major(100, USD)` is $100.00.
    pub fn new_from_major(major: i64, currency: FiatCurrency) -> Self {
        let multiplier = 10_i64.pow(currency.decimals() as u32);
        Self {
            amount: major.saturating_mul(multiplier),
            currency,
        }
    }

    /// Parses a plain decimal string such as `"123.45"`, `"-3"` or `".5"`.
    ///
    /// Only ASCII digits, one optional decimal point and an optional leading
    /// minus are accepted. Exponents, grouping separators and signs other
    /// than a leading `-` are rejected.
    ///
    /// # Examples
    /// ```
    /// use api::fiat_amount::{FiatAmount, ParseFiatAmountError};
    /// use api::fiat_currency::FiatCurrency;
    ///
    /// let amount = FiatAmount::new_from_str("123.45", FiatCurrency::USD).unwrap();
    /// assert_eq!(amount.as_minor_units(), 12345);
    ///
    /// let err = FiatAmount::new_from_str("1.234", FiatCurrency::USD).unwrap_err();
    /// assert_eq!(err, ParseFiatAmountError::TooManyDecimals);
    /// ```
    pub fn new_from_str(s: &str, currency: FiatCurrency) -> Result<Self, ParseFiatAmountError> {
        let decimals = currency.decimals() as u32;

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (major_str, minor_str) = s.split_once('.').unwrap_or((s, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (major_str.is_empty() && minor_str.is_empty())
            || !all_digits(major_str)
            || !all_digits(minor_str)
        {
            return Err(ParseFiatAmountError::InvalidFormat);
        }

        if minor_str.len() > decimals as usize {
            return Err(ParseFiatAmountError::TooManyDecimals);
        }

        let parse_part = |part: &str| -> Result<i64, ParseFiatAmountError> {
            if part.is_empty() {
                Ok(0)
            } else {
                part.parse::<i64>()
                    .map_err(|_| ParseFiatAmountError::InvalidFormat)
            }
        };
        let major_units = parse_part(major_str)?;
        let minor_units = parse_part(minor_str)?;

        let scaled_minor_units = minor_units * 10_i64.pow(decimals - minor_str.len() as u32);

        let total_minor_units = major_units
            .checked_mul(10_i64.pow(decimals))
            .and_then(|m| m.checked_add(scaled_minor_units))
            .ok_or(ParseFiatAmountError::InvalidFormat)?;

        Ok(Self::new_from_minor(
            if is_negative {
                -total_minor_units
            } else {
                total_minor_units
            },
            currency,
        ))
    }

    /// `self - rhs` when positive, zero otherwise.
    pub fn excess_over(&self, rhs: &Self) -> Self {
        let diff = *self - *rhs;
        if diff.is_positive() {
            diff
        } else {
            Self::zero(self.currency)
        }
    }

    // --- Display Methods ---

    /// Formats the amount with its currency symbol (e.g., "$25.34").
    pub fn to_string_with_symbol(&self) -> String {
        if self.is_negative() {
            format!("-{}{}", self.currency.symbol(), -*self)
        } else {
            format!("{}{}", self.currency.symbol(), self)
        }
    }

    /// Formats the amount with its currency code (e.g., "25.34 USD").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as u32;
        let sign = if self.amount < 0 { "-" } else { "" };
        let magnitude = self.amount.unsigned_abs();

        if decimals == 0 {
            return write!(f, "{sign}{magnitude}");
        }

        let divisor = 10_u64.pow(decimals);
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / divisor,
            magnitude % divisor,
            width = decimals as usize
        )
    }
}

/// Orders amounts of the same currency. Different currencies are unordered.
impl PartialOrd for FiatAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount.cmp(&other.amount))
    }
}

impl std::ops::Neg for FiatAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: self.amount.saturating_neg(),
            currency: self.currency,
        }
    }
}

/// Saturating addition. Panics if currencies do not match.
impl Add for FiatAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "cannot add amounts of different currencies"
        );
        Self {
            amount: self.amount.saturating_add(rhs.amount),
            currency: self.currency,
        }
    }
}

impl AddAssign for FiatAmount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Saturating subtraction. Panics if currencies do not match.
impl Sub for FiatAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "cannot subtract amounts of different currencies"
        );
        Self {
            amount: self.amount.saturating_sub(rhs.amount),
            currency: self.currency,
        }
    }
}

/// Returns `None` if currencies mismatch or the addition overflows.
impl CheckedAdd for FiatAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.currency != v.currency {
            return None;
        }
        self.amount.checked_add(v.amount).map(|new_amount| Self {
            amount: new_amount,
            currency: self.currency,
        })
    }
}

impl CheckedSub for FiatAmount {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        if self.currency != v.currency {
            return None;
        }
        self.amount.checked_sub(v.amount).map(|new_amount| Self {
            amount: new_amount,
            currency: self.currency,
        })
    }
}

/// Strips everything but digits and a single decimal point from raw input,
/// capping integer digits at `max_integers` and decimals at `max_decimals`.
///
/// Extra digits are dropped rather than rejected, so a field never holds
/// text that `FiatAmount::new_from_str` would refuse for length.
pub fn sanitize_amount_input(input: &str, max_integers: u8, max_decimals: u8) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut has_decimal = false;
    let mut integer_digits = 0;
    let mut decimal_digits = 0;

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            if has_decimal {
                if decimal_digits < max_decimals {
                    sanitized.push(ch);
                    decimal_digits += 1;
                }
            } else if integer_digits < max_integers {
                sanitized.push(ch);
                integer_digits += 1;
            }
        } else if ch == '.' && !has_decimal {
            // A currency without minor units keeps only the integer part.
            if max_decimals > 0 {
                sanitized.push(ch);
            }
            has_decimal = true;
        }
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(s: &str) -> Result<FiatAmount, ParseFiatAmountError> {
        FiatAmount::new_from_str(s, FiatCurrency::USD)
    }

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(usd("123.45").unwrap().as_minor_units(), 12345);
        assert_eq!(usd("12.5").unwrap().as_minor_units(), 1250);
        assert_eq!(usd(".5").unwrap().as_minor_units(), 50);
        assert_eq!(usd("7.").unwrap().as_minor_units(), 700);
        assert_eq!(usd("-3").unwrap().as_minor_units(), -300);
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", ".", "-", "abc", "1.2.3", "1e3", "+5", "1,000", " 5", ".+5"] {
            assert_eq!(usd(bad), Err(ParseFiatAmountError::InvalidFormat), "{bad:?}");
        }
        assert_eq!(usd("1.234"), Err(ParseFiatAmountError::TooManyDecimals));
        assert_eq!(usd("99999999999999999999"), Err(ParseFiatAmountError::InvalidFormat));
    }

    #[test]
    fn zero_decimal_currency_rejects_fractions() {
        let yen = FiatAmount::new_from_str("1500", FiatCurrency::JPY).unwrap();
        assert_eq!(yen.as_minor_units(), 1500);
        assert_eq!(yen.to_string_with_symbol(), "¥1500");
        assert_eq!(
            FiatAmount::new_from_str("1.5", FiatCurrency::JPY),
            Err(ParseFiatAmountError::TooManyDecimals)
        );
    }

    #[test]
    fn display_keeps_sign_on_small_negatives() {
        let a = FiatAmount::new_from_minor(-5, FiatCurrency::USD);
        assert_eq!(a.to_string(), "-0.05");
        assert_eq!(a.to_string_with_symbol(), "-$0.05");
        assert_eq!(
            FiatAmount::new_from_minor(2534, FiatCurrency::EUR).to_string_with_code(),
            "25.34 EUR"
        );
    }

    #[test]
    fn excess_over_clamps_at_zero() {
        let hundred = FiatAmount::new_from_major(100, FiatCurrency::USD);
        let seventy = FiatAmount::new_from_major(70, FiatCurrency::USD);
        assert_eq!(hundred.excess_over(&seventy).as_minor_units(), 3000);
        assert!(seventy.excess_over(&hundred).is_zero());
    }

    #[test]
    fn mixed_currencies_do_not_compare() {
        let a = FiatAmount::new_from_major(1, FiatCurrency::USD);
        let b = FiatAmount::new_from_major(1, FiatCurrency::EUR);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.checked_add(&b), None);
        assert_eq!(a.checked_sub(&b), None);
    }

    #[test]
    fn sanitize_caps_digits_and_points() {
        assert_eq!(sanitize_amount_input("12a.3.45", 9, 2), "12.34");
        assert_eq!(sanitize_amount_input("1234567", 4, 2), "1234");
        assert_eq!(sanitize_amount_input("$ 1,500.999", 9, 2), "1500.99");
        assert_eq!(sanitize_amount_input("15.5", 9, 0), "15");
    }
}
