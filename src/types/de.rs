//! Deserializers for the API's uneven wire encodings.
//!
//! The nExt API quotes numbers on some endpoints and not on others: an
//! order listing sends `"marketID":11` while the trade listing sends
//! `"marketID":"11"`, and account balances arrive as quoted decimals.
//! The helpers here accept both forms, together with the two datetime
//! layouts the API uses that chrono does not parse out of the box.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Value(T),
    Text(String),
}

fn parse_i64<E: de::Error>(raw: Raw<i64>) -> Result<i64, E> {
    match raw {
        Raw::Value(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid integer string: {:?}", s))),
    }
}

fn parse_f64<E: de::Error>(raw: Raw<f64>) -> Result<f64, E> {
    match raw {
        Raw::Value(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid decimal string: {:?}", s))),
    }
}

/// Accepts `11` as well as `"11"`.
pub(crate) fn string_or_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_i64(Raw::deserialize(deserializer)?)
}

/// Accepts `65.0` as well as `"65.0"`.
pub(crate) fn string_or_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_f64(Raw::deserialize(deserializer)?)
}

pub(crate) fn opt_string_or_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw<i64>>::deserialize(deserializer)? {
        Some(raw) => parse_i64(raw).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn opt_string_or_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw<f64>>::deserialize(deserializer)? {
        Some(raw) => parse_f64(raw).map(Some),
        None => Ok(None),
    }
}

/// Accepts `true` as well as `"true"`. The account listing sends its
/// `default` flag as a quoted string.
pub(crate) fn string_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawBool {
        Value(bool),
        Text(String),
    }

    match RawBool::deserialize(deserializer)? {
        RawBool::Value(b) => Ok(b),
        RawBool::Text(s) => match s.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::custom(format!(
                "invalid boolean string: {:?}",
                other
            ))),
        },
    }
}

/// Parses news timestamps of the form `2010-03-01 10:40:19 UTC`.
pub(crate) fn utc_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let trimmed = s.trim().trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(de::Error::custom)
}

/// Parses expiry datetimes of the form `2011-02-18 00:00:00`, which carry
/// no timezone on the wire.
pub(crate) fn space_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S").map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct IntField {
        #[serde(deserialize_with = "super::string_or_i64")]
        v: i64,
    }

    #[derive(Deserialize)]
    struct FloatField {
        #[serde(deserialize_with = "super::string_or_f64")]
        v: f64,
    }

    #[derive(Deserialize)]
    struct OptIntField {
        #[serde(default, deserialize_with = "super::opt_string_or_i64")]
        v: Option<i64>,
    }

    #[derive(Deserialize)]
    struct BoolField {
        #[serde(deserialize_with = "super::string_or_bool")]
        v: bool,
    }

    #[derive(Deserialize)]
    struct UtcField {
        #[serde(deserialize_with = "super::utc_datetime")]
        v: DateTime<Utc>,
    }

    #[derive(Deserialize)]
    struct NaiveField {
        #[serde(deserialize_with = "super::space_datetime")]
        v: NaiveDateTime,
    }

    #[test]
    fn integers_decode_quoted_and_bare() {
        let bare: IntField = serde_json::from_str(r#"{"v":11}"#).unwrap();
        let quoted: IntField = serde_json::from_str(r#"{"v":"11"}"#).unwrap();
        assert_eq!(bare.v, 11);
        assert_eq!(quoted.v, 11);
    }

    #[test]
    fn decimals_decode_quoted_and_bare() {
        let bare: FloatField = serde_json::from_str(r#"{"v":65.0}"#).unwrap();
        let quoted: FloatField = serde_json::from_str(r#"{"v":"146"}"#).unwrap();
        let whole: FloatField = serde_json::from_str(r#"{"v":1000}"#).unwrap();
        assert_eq!(bare.v, 65.0);
        assert_eq!(quoted.v, 146.0);
        assert_eq!(whole.v, 1000.0);
    }

    #[test]
    fn optional_integers_accept_null_and_absence() {
        let absent: OptIntField = serde_json::from_str(r#"{}"#).unwrap();
        let null: OptIntField = serde_json::from_str(r#"{"v":null}"#).unwrap();
        let quoted: OptIntField = serde_json::from_str(r#"{"v":"11002"}"#).unwrap();
        assert_eq!(absent.v, None);
        assert_eq!(null.v, None);
        assert_eq!(quoted.v, Some(11002));
    }

    #[test]
    fn booleans_decode_quoted_and_bare() {
        let bare: BoolField = serde_json::from_str(r#"{"v":true}"#).unwrap();
        let quoted: BoolField = serde_json::from_str(r#"{"v":"true"}"#).unwrap();
        let negative: BoolField = serde_json::from_str(r#"{"v":"false"}"#).unwrap();
        assert!(bare.v);
        assert!(quoted.v);
        assert!(!negative.v);
    }

    #[test]
    fn garbage_boolean_string_is_an_error() {
        let result: Result<BoolField, _> = serde_json::from_str(r#"{"v":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn garbage_number_string_is_an_error() {
        let result: Result<IntField, _> = serde_json::from_str(r#"{"v":"eleven"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn news_timestamps_drop_the_utc_suffix() {
        let field: UtcField = serde_json::from_str(r#"{"v":"2010-03-01 10:40:19 UTC"}"#).unwrap();
        assert_eq!(
            field.v.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2010-03-01 10:40:19"
        );
    }

    #[test]
    fn expiry_datetimes_use_a_space_separator() {
        let field: NaiveField = serde_json::from_str(r#"{"v":"2011-02-18 00:00:00"}"#).unwrap();
        assert_eq!(field.v.format("%Y-%m-%d").to_string(), "2011-02-18");
    }
}
