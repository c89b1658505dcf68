//! HTTP fetch client for the coin screens.
//!
//! # Responsibility
//! - Issue `GET` requests for coin metadata and price candles.
//! - Decode JSON bodies into typed payloads.
//!
//! # Invariants
//! - One request per call; no retry policy.
//! - Non-2xx responses are errors and their bodies are never decoded.

use crate::coin::model::{CoinInfo, CoinPrice, PricePayload};
use crate::coin::{CoinApiError, CoinResult};
use crate::config::CoinApiConfig;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Client for the coin metadata and OHLC price endpoints.
#[derive(Clone)]
pub struct CoinClient {
    client: Client,
    coin_api_base: Url,
    ohlcv_api_base: Url,
}

impl CoinClient {
    /// Builds a client from base URLs and request timeout.
    ///
    /// # Errors
    /// - `InvalidUrl` when a base URL does not parse or cannot carry a path.
    /// - `Transport` when the HTTP client cannot be constructed.
    pub fn new(config: &CoinApiConfig) -> CoinResult<Self> {
        let coin_api_base = parse_base(&config.coin_api_base)?;
        let ohlcv_api_base = parse_base(&config.ohlcv_api_base)?;
        if coin_api_base.cannot_be_a_base() {
            return Err(CoinApiError::InvalidUrl(config.coin_api_base.clone()));
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(CoinApiError::Transport)?;

        Ok(Self {
            client,
            coin_api_base,
            ohlcv_api_base,
        })
    }

    /// Fetches metadata for one coin.
    pub async fn fetch_coin_info(&self, coin_id: &str) -> CoinResult<CoinInfo> {
        let url = self.info_url(coin_id)?;
        self.get_json(url).await
    }

    /// Fetches the latest price candle for one coin.
    ///
    /// # Errors
    /// - `EmptyPriceHistory` when the endpoint returns an empty series.
    pub async fn fetch_coin_price(&self, coin_id: &str) -> CoinResult<CoinPrice> {
        let url = self.price_url(coin_id);
        let payload: PricePayload = self.get_json(url).await?;
        payload
            .into_latest()
            .ok_or_else(|| CoinApiError::EmptyPriceHistory(coin_id.to_string()))
    }

    pub fn info_url(&self, coin_id: &str) -> CoinResult<Url> {
        let mut url = self.coin_api_base.clone();
        url.path_segments_mut()
            .map_err(|_| CoinApiError::InvalidUrl(self.coin_api_base.to_string()))?
            .pop_if_empty()
            .push("coins")
            .push(coin_id);
        Ok(url)
    }

    pub fn price_url(&self, coin_id: &str) -> Url {
        let mut url = self.ohlcv_api_base.clone();
        url.query_pairs_mut().append_pair("coinId", coin_id);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CoinResult<T> {
        debug!("event=coin_fetch module=coin status=start url={url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(CoinApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoinApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(CoinApiError::Transport)?;
        serde_json::from_str(&body).map_err(|err| CoinApiError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

fn parse_base(raw: &str) -> CoinResult<Url> {
    Url::parse(raw.trim()).map_err(|_| CoinApiError::InvalidUrl(raw.to_string()))
}
