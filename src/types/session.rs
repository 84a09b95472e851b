//! Session types: system status, login, and realtime market access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// Status block returned by the unauthenticated service root.
#[derive(Serialize, Deserialize)]
pub struct SystemStatus {
    pub message: String,

    pub valid_version: bool,

    pub system_running: bool,

    pub skip_phrase: bool,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// A successful login. The session key inside expires unless the session
/// is touched before `expires_in` seconds have passed.
#[derive(Serialize, Deserialize)]
pub struct Login {
    pub country: String,

    pub expires_in: i64,

    pub session_key: String,

    pub environment: String,

    pub private_feed: Feed,

    pub public_feed: Feed,
}

/// Connection parameters for one of the TCP feeds announced at login.
#[derive(Serialize, Deserialize)]
pub struct Feed {
    pub hostname: String,

    pub port: u16,

    pub encrypted: bool,
}

/// Reply to logout and session-touch calls.
#[derive(Serialize, Deserialize)]
pub struct LoggedInStatus {
    pub logged_in: bool,
}

/// A market the session receives realtime data for, with its access level.
#[derive(Serialize, Deserialize)]
pub struct RealtimeAccess {
    #[serde(rename = "marketID", deserialize_with = "de::string_or_i64")]
    pub market_id: i64,

    pub level: i64,
}
