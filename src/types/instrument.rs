//! Instrument search results, intraday chart samples, and derivatives.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de;

/// An instrument as returned by search and exact lookup.
///
/// `multiplier` and `ticksize_id` only appear on exact lookup by
/// identifier and market, not in search results.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    #[serde(rename = "type")]
    pub instrument_type: String,

    pub longname: String,

    #[serde(rename = "marketID", deserialize_with = "de::string_or_i64")]
    pub market_id: i64,

    pub country: String,

    pub shortname: String,

    pub marketname: String,

    #[serde(default, deserialize_with = "de::opt_string_or_f64")]
    pub multiplier: Option<f64>,

    #[serde(
        rename = "ticksizeID",
        default,
        deserialize_with = "de::opt_string_or_i64"
    )]
    pub ticksize_id: Option<i64>,

    pub isin_code: String,

    pub identifier: String,

    pub currency: String,
}

/// One intraday chart sample.
#[derive(Serialize, Deserialize)]
pub struct ChartPoint {
    /// Sample time as the API renders it, `HH:MM`.
    pub timestamp: String,

    pub change: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub volume: f64,

    /// Price level of the sample. `float` is the wire name.
    pub float: f64,
}

/// Compact reference to an instrument on a market. Used by list contents,
/// derivative underlyings, and related-market lookups.
#[derive(Serialize, Deserialize)]
pub struct InstrumentRef {
    #[serde(default)]
    pub shortname: Option<String>,

    #[serde(rename = "marketID", deserialize_with = "de::string_or_i64")]
    pub market_id: i64,

    pub identifier: String,
}

/// A derivative contract on an underlying.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Derivative {
    pub shortname: String,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub multiplier: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub strikeprice: f64,

    #[serde(deserialize_with = "de::space_datetime")]
    pub expirydate: NaiveDateTime,

    #[serde(rename = "marketID", deserialize_with = "de::string_or_i64")]
    pub market_id: i64,

    pub expirytype: String,

    /// Derivative kind code, for example `WNT` or `O`.
    pub kind: String,

    pub identifier: String,

    pub currency: String,

    /// Call/put designation where the kind has one.
    #[serde(default)]
    pub call_put: Option<String>,
}
