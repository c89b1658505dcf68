//! Coin metadata and price payloads.
//!
//! Decoding is lenient about unknown fields; upstream APIs return far more
//! than the coin screens render.

use serde::{Deserialize, Deserializer, Serialize};

/// Coin metadata from `GET {coin_api}/coins/{coin_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_new: bool,
    pub is_active: bool,
    /// Serialized as `type` to match upstream naming.
    #[serde(rename = "type")]
    pub kind: String,
}

/// One OHLC candle from the price endpoint.
///
/// Price fields are kept as strings, matching the upstream payload. Numeric
/// JSON values are accepted and stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinPrice {
    pub time_open: i64,
    pub time_close: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub open: String,
    #[serde(deserialize_with = "string_or_number")]
    pub high: String,
    #[serde(deserialize_with = "string_or_number")]
    pub low: String,
    #[serde(deserialize_with = "string_or_number")]
    pub close: String,
    #[serde(deserialize_with = "string_or_number")]
    pub volume: String,
    #[serde(default)]
    pub market_cap: f64,
}

/// Price endpoint answers with either a candle series or one candle.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum PricePayload {
    Series(Vec<CoinPrice>),
    Single(CoinPrice),
}

impl PricePayload {
    /// Latest candle; series are ordered oldest first.
    pub(crate) fn into_latest(self) -> Option<CoinPrice> {
        match self {
            Self::Series(series) => series.into_iter().last(),
            Self::Single(price) => Some(price),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}
