use core::str::FromStr;

use serde::{Deserialize, Serialize};

use brecho_core::{DomainError, ValueObject};

/// Monetary amount with two fractional digits.
///
/// Held as integer cents; crosses the wire as a decimal string (`"45.00"`), never
/// as a float.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Price of `quantity` units. Saturates instead of wrapping.
    pub fn times(self, quantity: u32) -> Self {
        Self {
            cents: self.cents.saturating_mul(u64::from(quantity)),
        }
    }

    pub fn saturating_add(self, other: Price) -> Self {
        Self {
            cents: self.cents.saturating_add(other.cents),
        }
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("invalid price: {s:?}")));
        }

        let frac_cents = match frac {
            None => 0,
            Some(f) if (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) => {
                // "5" means 50 cents, "05" means 5 cents.
                let n: u64 = f
                    .parse()
                    .map_err(|_| DomainError::validation(format!("invalid price: {s:?}")))?;
                if f.len() == 1 { n * 10 } else { n }
            }
            Some(_) => {
                return Err(DomainError::validation(format!(
                    "price must have at most 2 fractional digits: {s:?}"
                )));
            }
        };

        let cents = whole
            .parse::<u64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .and_then(|w| w.checked_add(frac_cents))
            .ok_or_else(|| DomainError::validation(format!("price out of range: {s:?}")))?;

        Ok(Self { cents })
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_two_decimal_strings() {
        assert_eq!("45.00".parse::<Price>().unwrap().cents(), 4500);
        assert_eq!("0.99".parse::<Price>().unwrap().cents(), 99);
    }

    #[test]
    fn normalizes_short_forms() {
        assert_eq!("45".parse::<Price>().unwrap().to_string(), "45.00");
        assert_eq!("45.5".parse::<Price>().unwrap().to_string(), "45.50");
        assert_eq!("45.05".parse::<Price>().unwrap().to_string(), "45.05");
    }

    #[test]
    fn rejects_malformed_prices() {
        for bad in ["", ".50", "45.", "45.123", "-1.00", "1,00", "abc", " 1.00"] {
            assert!(bad.parse::<Price>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn serializes_as_string() {
        let price: Price = "89.00".parse().unwrap();
        assert_eq!(serde_json::to_value(price).unwrap(), serde_json::json!("89.00"));

        let back: Price = serde_json::from_value(serde_json::json!("32.00")).unwrap();
        assert_eq!(back.cents(), 3200);

        assert!(serde_json::from_value::<Price>(serde_json::json!(32.0)).is_err());
    }

    #[test]
    fn totals_multiply_and_sum() {
        let total: Price = [Price::from_cents(4500).times(2), Price::from_cents(8900)]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "179.00");
    }

    proptest! {
        /// Property: every amount formats with two decimals and parses back unchanged.
        #[test]
        fn display_is_canonical(cents in 0u64..10_000_000_000) {
            let text = Price::from_cents(cents).to_string();
            let (_, frac) = text.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
            prop_assert_eq!(text.parse::<Price>().unwrap().cents(), cents);
        }
    }
}
