//! Serde helpers for fixed-point integers.
//!
//! Oracle prices carry 8 or 18 decimals, so raw values quickly exceed what a
//! JSON number survives in a browser. They are written as decimal strings and
//! read back from a string or from a JSON integer that fits `i64`/`u64`.
//! Larger JSON numbers reach serde as `f64` with their low digits already
//! gone, so they are rejected and must be sent as strings.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serializer};

/// A fixed-point integer as read from the wire.
struct Raw(i128);

struct RawVisitor;

impl<'de> de::Visitor<'de> for RawVisitor {
    type Value = Raw;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal integer string or an integer within the u64 range")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Raw, E> {
        Ok(Raw(i128::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Raw, E> {
        Ok(Raw(i128::from(value)))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Raw, E> {
        Ok(Raw(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Raw, E> {
        i128::try_from(value)
            .map(Raw)
            .map_err(|_| E::custom(format!("fixed-point integer {value} does not fit i128")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Raw, E> {
        Err(E::custom(format!(
            "fixed-point number {value} is not an integer within the u64 range, send it as a string"
        )))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Raw, E> {
        text.trim()
            .parse::<i128>()
            .map(Raw)
            .map_err(|e| E::custom(format!("invalid fixed-point integer {text:?}: {e}")))
    }
}

impl<'de> Deserialize<'de> for Raw {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawVisitor)
    }
}

pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
    Raw::deserialize(deserializer).map(|raw| raw.0)
}

/// Same encoding for `Option<i128>`; `null` and a missing field both map to `None`.
pub mod option {
    use super::Raw;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<i128>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i128>, D::Error> {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| raw.0))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(with = "super")]
        amount: i128,
        #[serde(default, with = "super::option", skip_serializing_if = "Option::is_none")]
        price: Option<i128>,
    }

    #[test]
    fn test_reads_strings_and_numbers() {
        let from_str: Holder = serde_json::from_str(r#"{"amount":"1500000000000000000","price":"-3"}"#).unwrap();
        assert_eq!(from_str.amount, 1_500_000_000_000_000_000);
        assert_eq!(from_str.price, Some(-3));

        let from_num: Holder = serde_json::from_str(r#"{"amount":7,"price":null}"#).unwrap();
        assert_eq!(from_num, Holder { amount: 7, price: None });

        let negative: Holder = serde_json::from_str(r#"{"amount":-7}"#).unwrap();
        assert_eq!(negative.amount, -7);
    }

    #[test]
    fn test_missing_optional_field() {
        let holder: Holder = serde_json::from_str(r#"{"amount":"1"}"#).unwrap();
        assert_eq!(holder.price, None);
    }

    #[test]
    fn test_writes_strings() {
        let json = serde_json::to_string(&Holder { amount: 10, price: Some(20) }).unwrap();
        assert_eq!(json, r#"{"amount":"10","price":"20"}"#);
    }

    #[test]
    fn test_rejects_garbage() {
        let result = serde_json::from_str::<Holder>(r#"{"amount":"1.5"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Holder>(r#"{"amount":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_large_json_number_asks_for_string() {
        // 3000 at 18 decimals is past u64 and arrives as a float
        let err = serde_json::from_str::<Holder>(r#"{"amount":1,"price":3000000000000000000000}"#).unwrap_err();
        assert!(err.to_string().contains("send it as a string"), "{err}");

        let err = serde_json::from_str::<Holder>(r#"{"amount":1.5}"#).unwrap_err();
        assert!(err.to_string().contains("send it as a string"), "{err}");

        let holder: Holder = serde_json::from_str(r#"{"amount":"3000000000000000000000"}"#).unwrap();
        assert_eq!(holder.amount, 3_000_000_000_000_000_000_000);
    }

    #[test]
    fn test_u64_bounds_as_numbers() {
        let holder: Holder = serde_json::from_str(r#"{"amount":18446744073709551615}"#).unwrap();
        assert_eq!(holder.amount, i128::from(u64::MAX));

        let holder: Holder = serde_json::from_str(r#"{"amount":-9223372036854775808}"#).unwrap();
        assert_eq!(holder.amount, i128::from(i64::MIN));
    }
}
