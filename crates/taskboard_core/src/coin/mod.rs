//! Coin viewer: payloads, HTTP client, query cache and screen model.
//!
//! # Responsibility
//! - Fetch read-only coin metadata and price data for display.
//! - Keep network concerns out of the board core.
//!
//! # Invariants
//! - Coin screens never touch board state.

pub mod client;
pub mod model;
pub mod query;
pub mod screen;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CoinResult<T> = Result<T, CoinApiError>;

/// Errors from coin API calls.
#[derive(Debug)]
pub enum CoinApiError {
    /// Base URL is malformed or cannot carry path segments.
    InvalidUrl(String),
    /// Connection, timeout or body read failure.
    Transport(reqwest::Error),
    /// Server answered with a non-success status.
    Status { url: String, status: u16 },
    /// Body is not the expected JSON shape.
    Decode { url: String, message: String },
    /// Price endpoint returned no candles.
    EmptyPriceHistory(String),
}

impl Display for CoinApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl(raw) => write!(f, "invalid coin API url: `{raw}`"),
            Self::Transport(err) => write!(f, "coin API request failed: {err}"),
            Self::Status { url, status } => {
                write!(f, "coin API returned HTTP {status} for {url}")
            }
            Self::Decode { url, message } => {
                write!(f, "coin API response from {url} is invalid: {message}")
            }
            Self::EmptyPriceHistory(coin_id) => {
                write!(f, "no price history for coin: {coin_id}")
            }
        }
    }
}

impl Error for CoinApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}
