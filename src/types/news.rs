//! News sources and news items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// A news provider and the access level the session has to it.
#[derive(Serialize, Deserialize)]
pub struct NewsSource {
    pub name: String,

    #[serde(rename = "imageurl")]
    pub image_url: String,

    pub code: String,

    #[serde(rename = "sourceid")]
    pub source_id: i64,

    /// `REALTIME` or `DELAYED`.
    pub level: String,
}

/// Headline-only entry from the news listing.
#[derive(Serialize, Deserialize)]
pub struct NewsPreview {
    #[serde(deserialize_with = "de::utc_datetime")]
    pub datetime: DateTime<Utc>,

    pub headline: String,

    #[serde(rename = "itemid")]
    pub item_id: i64,

    #[serde(rename = "sourceid")]
    pub source_id: i64,

    #[serde(rename = "type")]
    pub news_type: String,
}

/// A full news item with body text.
#[derive(Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(deserialize_with = "de::utc_datetime")]
    pub datetime: DateTime<Utc>,

    pub headline: String,

    pub body: String,

    #[serde(rename = "itemid")]
    pub item_id: i64,

    pub lang: String,

    pub preamble: String,

    #[serde(rename = "sourceid")]
    pub source_id: i64,

    #[serde(rename = "type")]
    pub news_type: String,
}
