//! Per-query result cache for the coin screens.
//!
//! # Responsibility
//! - Cache fetched payloads keyed by query kind + coin id.
//! - Serve fresh entries without a network round-trip.
//! - Fall back to a stale entry when a refetch fails.
//!
//! # Invariants
//! - The cache lock is never held across an `.await`.
//! - A failed refetch never evicts an existing entry.

use crate::coin::client::CoinClient;
use crate::coin::model::{CoinInfo, CoinPrice};
use crate::coin::CoinResult;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Which endpoint a cached entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Info,
    Price,
}

impl QueryKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Price => "price",
        }
    }
}

/// Cache key: query kind + coin id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: QueryKind,
    pub coin_id: String,
}

impl QueryKey {
    pub fn new(kind: QueryKind, coin_id: impl Into<String>) -> Self {
        Self {
            kind,
            coin_id: coin_id.into(),
        }
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.coin_id)
    }
}

/// Observable state of one query as seen by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

/// Time-bounded cache of query results.
pub struct QueryCache<T> {
    stale_after: Duration,
    entries: Mutex<HashMap<QueryKey, CacheEntry<T>>>,
}

impl<T: Clone> QueryCache<T> {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the entry only while it is younger than `stale_after`.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_after)
            .map(|entry| entry.value.clone())
    }

    /// Returns the entry regardless of age.
    pub fn get_stale(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn insert(&self, key: QueryKey, value: T) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serves a fresh entry or runs `fetch`, falling back to stale data.
    pub async fn resolve<F, Fut>(&self, key: QueryKey, fetch: F) -> QueryState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CoinResult<T>>,
    {
        if let Some(value) = self.get_fresh(&key) {
            debug!("event=query_cache module=coin status=hit key={key}");
            return QueryState::Ready(value);
        }

        match fetch().await {
            Ok(value) => {
                self.insert(key, value.clone());
                QueryState::Ready(value)
            }
            Err(err) => match self.get_stale(&key) {
                Some(value) => {
                    warn!("event=query_refetch module=coin status=stale key={key} error={err}");
                    QueryState::Ready(value)
                }
                None => {
                    warn!("event=query_fetch module=coin status=error key={key} error={err}");
                    QueryState::Failed(err.to_string())
                }
            },
        }
    }
}

/// Cached coin queries shared by the coin screens.
pub struct CoinQueries {
    client: CoinClient,
    info: QueryCache<CoinInfo>,
    price: QueryCache<CoinPrice>,
}

impl CoinQueries {
    pub fn new(client: CoinClient, stale_after: Duration) -> Self {
        Self {
            client,
            info: QueryCache::new(stale_after),
            price: QueryCache::new(stale_after),
        }
    }

    pub async fn info(&self, coin_id: &str) -> QueryState<CoinInfo> {
        self.info
            .resolve(QueryKey::new(QueryKind::Info, coin_id), || {
                self.client.fetch_coin_info(coin_id)
            })
            .await
    }

    pub async fn price(&self, coin_id: &str) -> QueryState<CoinPrice> {
        self.price
            .resolve(QueryKey::new(QueryKind::Price, coin_id), || {
                self.client.fetch_coin_price(coin_id)
            })
            .await
    }
}
