//! Lenient field codecs for store records.
//!
//! Records written by older console builds carry `""` for unset dates and
//! author references, floating point `order` values, and ISO datetimes where
//! a plain date is expected. These helpers normalise all of those on decode.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Parse a `YYYY-MM-DD` date, keeping only the date part of an ISO datetime.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let day = text.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// `Option<NaiveDate>` stored as `"YYYY-MM-DD"`, with `""` meaning absent.
pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(day) => s.serialize_str(&day.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_date(text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {text:?}"))),
        }
    }
}

/// `Option<i64>` that also accepts floats, numeric strings, `""` and `null`.
pub mod order {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let raw: Option<Value> = Option::deserialize(d)?;
        match raw {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid order: {n}"))),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid order {s:?}: {e}"))),
            Some(other) => Err(D::Error::custom(format!("invalid order: {other}"))),
        }
    }
}

/// Optional identifier where an empty string means "not set".
pub fn non_empty<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw: Option<String> = Option::deserialize(d)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(T::from))
}
