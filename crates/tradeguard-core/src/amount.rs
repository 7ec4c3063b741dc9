use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;

/// Monetary amount held in minor units (pence).
///
/// The upstream API exchanges amounts as JSON numbers of major units, so the
/// serde boundary converts in both directions: decoding rounds to the nearest
/// penny and rejects non-finite input instead of trusting the wire shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_pence(pence: i64) -> Self {
        Amount(pence)
    }

    pub fn from_major(units: i64) -> Self {
        Amount(units.saturating_mul(100))
    }

    /// Decode a major-unit wire value into pence.
    pub fn try_from_major_f64(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::InvalidAmount(value.to_string()));
        }
        let pence = (value * 100.0).round();
        if pence < i64::MIN as f64 || pence > i64::MAX as f64 {
            return Err(CoreError::InvalidAmount(value.to_string()));
        }
        Ok(Amount(pence as i64))
    }

    pub fn pence(&self) -> i64 {
        self.0
    }

    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    /// Render as GBP with pence precision and thousands separators,
    /// e.g. `£1,234.56`. Zero renders as `£0.00`.
    pub fn format_gbp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let pence = self.0.unsigned_abs();
        format!("{sign}£{}.{:02}", group_thousands(pence / 100), pence % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_gbp())
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::try_from_major_f64(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_major_units_to_pence() {
        let amount: Amount = serde_json::from_str("100").unwrap();
        assert_eq!(amount.pence(), 10_000);
        assert_eq!(amount.format_gbp(), "£100.00");
    }

    #[test]
    fn rounds_to_nearest_penny() {
        let amount = Amount::try_from_major_f64(99.999).unwrap();
        assert_eq!(amount.pence(), 10_000);

        let amount = Amount::try_from_major_f64(12.345).unwrap();
        assert_eq!(amount.pence(), 1_235);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Amount::try_from_major_f64(f64::NAN).is_err());
        assert!(Amount::try_from_major_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(Amount::from_pence(123_456).format_gbp(), "£1,234.56");
        assert_eq!(Amount::from_major(1_000_000).format_gbp(), "£1,000,000.00");
        assert_eq!(Amount::ZERO.format_gbp(), "£0.00");
        assert_eq!(Amount::from_pence(-350).format_gbp(), "-£3.50");
    }

    #[test]
    fn round_trips_through_the_wire_shape() {
        let encoded = serde_json::to_string(&Amount::from_pence(12_345)).unwrap();
        assert_eq!(encoded, "123.45");
        let decoded: Amount = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.pence(), 12_345);
    }
}
