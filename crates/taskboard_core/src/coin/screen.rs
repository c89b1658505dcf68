//! Coin detail screen model.
//!
//! Combines route params, optional router state and both query states into
//! the values the coin detail view displays.

use crate::coin::model::{CoinInfo, CoinPrice};
use crate::coin::query::{CoinQueries, QueryState};
use crate::route::{CoinTab, Route};

const LOADING_TITLE: &str = "Loading..";
const BACK_LINK: &str = "/";

/// One labelled value in an overview strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewItem {
    pub label: &'static str,
    pub value: String,
}

/// One sub-view tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: CoinTab,
    pub label: &'static str,
    /// Relative link target.
    pub href: &'static str,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinScreen {
    pub coin_id: String,
    /// Name passed along by the list screen link, if any.
    pub route_name: Option<String>,
    pub tab: Option<CoinTab>,
    pub info: QueryState<CoinInfo>,
    pub price: QueryState<CoinPrice>,
}

impl CoinScreen {
    /// Screen with both queries still loading.
    pub fn new(coin_id: impl Into<String>, tab: Option<CoinTab>, route_name: Option<String>) -> Self {
        Self {
            coin_id: coin_id.into(),
            route_name: route_name.filter(|name| !name.trim().is_empty()),
            tab,
            info: QueryState::Loading,
            price: QueryState::Loading,
        }
    }

    /// Builds the screen for a coin route; `None` for other routes.
    pub fn from_route(route: &Route, route_name: Option<String>) -> Option<Self> {
        match route {
            Route::Coin { coin_id, tab } => Some(Self::new(coin_id.clone(), *tab, route_name)),
            _ => None,
        }
    }

    /// Resolves both queries through the shared cache, concurrently.
    pub async fn load(mut self, queries: &CoinQueries) -> Self {
        let (info, price) = tokio::join!(
            queries.info(&self.coin_id),
            queries.price(&self.coin_id)
        );
        self.info = info;
        self.price = price;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.info.is_loading() || self.price.is_loading()
    }

    /// Router state name, else loading marker, else fetched name.
    pub fn title(&self) -> String {
        if let Some(name) = &self.route_name {
            return name.clone();
        }
        if self.is_loading() {
            return LOADING_TITLE.to_string();
        }
        match self.info.data() {
            Some(info) => info.name.clone(),
            None => self.coin_id.clone(),
        }
    }

    /// Rank, symbol and type of the coin.
    pub fn overview(&self) -> Option<Vec<OverviewItem>> {
        let info = self.info.data()?;
        Some(vec![
            OverviewItem {
                label: "Rank:",
                value: info.rank.to_string(),
            },
            OverviewItem {
                label: "Symbol:",
                value: info.symbol.clone(),
            },
            OverviewItem {
                label: "Type:",
                value: info.kind.clone(),
            },
        ])
    }

    /// High and low of the latest candle.
    pub fn price_overview(&self) -> Option<Vec<OverviewItem>> {
        let price = self.price.data()?;
        Some(vec![
            OverviewItem {
                label: "Max Price:",
                value: price.high.clone(),
            },
            OverviewItem {
                label: "Low Price:",
                value: price.low.clone(),
            },
        ])
    }

    pub fn description(&self) -> Option<String> {
        self.info
            .data()
            .map(|info| format!("{} is a {}.", info.name, info.kind))
    }

    pub fn tabs(&self) -> Vec<TabView> {
        [CoinTab::Chart, CoinTab::Price]
            .into_iter()
            .map(|tab| TabView {
                tab,
                label: tab.label(),
                href: tab.segment(),
                is_active: self.tab == Some(tab),
            })
            .collect()
    }

    /// First query error, if any.
    pub fn error(&self) -> Option<&str> {
        self.info.error().or_else(|| self.price.error())
    }

    pub fn back_link(&self) -> &'static str {
        BACK_LINK
    }
}
