//! Market reference data: markets, lists, indices, trading days, ticksizes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de;

/// A marketplace with the order types it accepts.
#[derive(Serialize, Deserialize)]
pub struct Market {
    pub name: String,

    pub country: String,

    #[serde(rename = "marketID", deserialize_with = "de::string_or_i64")]
    pub market_id: i64,

    #[serde(rename = "ordertypes", default)]
    pub order_types: Vec<OrderTypeInfo>,
}

/// An order type a market supports.
#[derive(Serialize, Deserialize)]
pub struct OrderTypeInfo {
    pub text: String,

    #[serde(rename = "type")]
    pub order_type: String,
}

/// A curated instrument list, for example an exchange segment.
#[derive(Serialize, Deserialize)]
pub struct List {
    pub name: String,

    pub country: String,

    #[serde(deserialize_with = "de::string_or_i64")]
    pub id: i64,
}

/// A day a market is open.
#[derive(Serialize, Deserialize)]
pub struct TradingDay {
    pub date: NaiveDate,

    pub display_date: String,
}

/// An index offered through the news and chart endpoints.
#[derive(Serialize, Deserialize)]
pub struct Index {
    #[serde(rename = "type")]
    pub index_type: String,

    pub longname: String,

    pub source: String,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(rename = "imageurl", default)]
    pub image_url: Option<String>,

    pub id: String,
}

/// One band of a ticksize table: the tick that applies above a price level.
#[derive(Serialize, Deserialize)]
pub struct Ticksize {
    pub tick: f64,

    pub above: f64,

    pub decimals: i64,
}
