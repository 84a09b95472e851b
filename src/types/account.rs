//! Account and portfolio types.
//!
//! The account endpoints quote every numeric value, so all amounts here
//! go through the flexible decoders in `de`.

use serde::{Deserialize, Serialize};

use super::de;

/// One entry in the account list.
#[derive(Serialize, Deserialize)]
pub struct Account {
    /// User-chosen alias, if one is set.
    pub alias: Option<String>,

    /// Whether this is the default account.
    #[serde(rename = "default", deserialize_with = "de::string_or_bool")]
    pub is_default: bool,

    pub id: String,
}

/// Balance summary for a single account.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(deserialize_with = "de::string_or_f64")]
    pub own_capital_morning: f64,

    pub account_currency: String,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub own_capital: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub future_sum: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub forward_sum: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub collateral: f64,

    /// Amount available for trading.
    #[serde(deserialize_with = "de::string_or_f64")]
    pub trading_power: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub interest: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub pawn_value: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub account_sum: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub loan_limit: f64,

    #[serde(rename = "fullMarketvalue", deserialize_with = "de::string_or_f64")]
    pub full_market_value: f64,
}

/// Cash balance in one currency.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Balance converted to the account currency.
    #[serde(deserialize_with = "de::string_or_f64")]
    pub account_sum_acc: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub acc_int_cred: f64,

    pub currency: String,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub acc_int_deb: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub account_sum: f64,
}

/// A holding in an account.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(deserialize_with = "de::string_or_f64")]
    pub acq_price: f64,

    /// Acquisition price in the account currency.
    #[serde(deserialize_with = "de::string_or_f64")]
    pub acq_price_acc: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub pawn_percent: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub qty: f64,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub market_value: f64,

    /// Market value in the account currency.
    #[serde(deserialize_with = "de::string_or_f64")]
    pub market_value_acc: f64,

    #[serde(rename = "instrumentID")]
    pub instrument: PositionInstrument,
}

/// The instrument a position is held in.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInstrument {
    #[serde(deserialize_with = "de::string_or_i64")]
    pub main_market_id: i64,

    pub identifier: String,

    #[serde(rename = "type")]
    pub instrument_type: String,

    /// The wire really does spell this field `currecy`.
    #[serde(rename = "currecy")]
    pub currency: String,

    #[serde(deserialize_with = "de::string_or_f64")]
    pub main_market_price: f64,
}
