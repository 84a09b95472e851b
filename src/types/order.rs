//! Order book entries, executed trades, and order entry replies.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// Order side. Uppercase on the wire; `Display` renders the lowercase form
/// the order entry endpoints take as the `side` parameter.
#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}
impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::Buy => "buy",
                Side::Sell => "sell",
            }
        )
    }
}

/// An amount in a given currency.
#[derive(Serialize, Deserialize)]
pub struct Price {
    #[serde(deserialize_with = "de::string_or_f64")]
    pub value: f64,

    #[serde(rename = "curr")]
    pub currency: String,
}

/// Market and identifier pair naming an instrument.
#[derive(Serialize, Deserialize)]
pub struct InstrumentId {
    #[serde(rename = "marketID", deserialize_with = "de::string_or_i64")]
    pub market_id: i64,

    pub identifier: String,
}

/// How long an order stays active.
#[derive(Serialize, Deserialize)]
pub struct Validity {
    #[serde(
        rename = "validUntil",
        default,
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(rename = "type")]
    pub validity_type: String,
}

#[derive(Serialize, Deserialize)]
pub struct ActivationCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
}

/// An order in the order book of an account.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub price_condition: String,

    pub validity: Validity,

    pub price: Price,

    pub side: Side,

    #[serde(rename = "orderID")]
    pub order_id: i64,

    pub volume_condition: String,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub traded_volume: f64,

    #[serde(rename = "instrumentID")]
    pub instrument: InstrumentId,

    /// Server-side order state, for example `LOCAL` or `ON_MARKET`.
    pub order_state: String,

    #[serde(deserialize_with = "de::string_or_i64")]
    pub accno: i64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub open_volume: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub volume: f64,

    /// State of the latest action on the order, for example `INS_PEND`.
    pub action_state: String,

    pub activation_condition: ActivationCondition,

    #[serde(rename = "modDate", with = "chrono::serde::ts_milliseconds")]
    pub modified_at: DateTime<Utc>,
}

/// An executed trade. The listing wraps each one in a `securityTrade` object.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub security_trade: SecurityTrade,
}

/// The fill itself. This endpoint quotes every number.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityTrade {
    #[serde(rename = "tradeID")]
    pub trade_id: String,

    pub price: Price,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub volume: f64,

    pub tradetime: NaiveTime,

    #[serde(rename = "instrumentID")]
    pub instrument: InstrumentId,

    #[serde(deserialize_with = "de::string_or_i64")]
    pub accno: i64,

    pub counterparty: String,

    #[serde(rename = "orderID", deserialize_with = "de::string_or_i64")]
    pub order_id: i64,

    pub side: Side,
}

/// Reply to order creation, modification, and deletion calls.
///
/// `result_code` reports whether the action was accepted; the order itself
/// progresses asynchronously and shows up in the order listing.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReply {
    #[serde(rename = "orderID")]
    pub order_id: i64,

    pub result_code: String,

    pub order_state: String,

    #[serde(rename = "accNo", deserialize_with = "de::string_or_i64")]
    pub accno: i64,

    pub action_state: String,
}
