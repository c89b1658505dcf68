//! URL path router.
//!
//! # Responsibility
//! - Map path segments to screens and render canonical paths back.
//!
//! # Invariants
//! - Path parameters are passed through as opaque strings.
//! - Trailing slashes do not change the matched route.

use std::error::Error;
use std::fmt::{Display, Formatter};

const USERS_SEGMENT: &str = "users";
const FOLLOWERS_SEGMENT: &str = "followers";

/// Nested coin sub-view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinTab {
    Chart,
    Price,
}

impl CoinTab {
    pub fn segment(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Price => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Chart => "Chart",
            Self::Price => "Price",
        }
    }

    fn parse(segment: &str) -> Option<Self> {
        match segment {
            "chart" => Some(Self::Chart),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Screen selected by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Board view.
    Home,
    Coin {
        coin_id: String,
        tab: Option<CoinTab>,
    },
    User {
        user_id: String,
    },
    UserFollowers {
        user_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NotFound(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "no route matches path `{path}`"),
        }
    }
}

impl Error for RouteError {}

impl Route {
    /// Parses an absolute or relative path such as `/btc-bitcoin/price`.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let without_query = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Some(Self::Home),
            [USERS_SEGMENT, user_id] => Some(Self::User {
                user_id: (*user_id).to_string(),
            }),
            [USERS_SEGMENT, user_id, FOLLOWERS_SEGMENT] => Some(Self::UserFollowers {
                user_id: (*user_id).to_string(),
            }),
            [USERS_SEGMENT] | [USERS_SEGMENT, _, _] => None,
            [coin_id] => Some(Self::Coin {
                coin_id: (*coin_id).to_string(),
                tab: None,
            }),
            [coin_id, tab] => CoinTab::parse(tab).map(|tab| Self::Coin {
                coin_id: (*coin_id).to_string(),
                tab: Some(tab),
            }),
            _ => None,
        };

        route.ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Canonical path for this route.
    ///
    /// Inverts [`Route::parse`] for routes it produced. A hand-built coin
    /// route whose id is `users` or contains `/` renders a path that parses
    /// to something else.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Coin { coin_id, tab: None } => format!("/{coin_id}"),
            Self::Coin {
                coin_id,
                tab: Some(tab),
            } => format!("/{coin_id}/{}", tab.segment()),
            Self::User { user_id } => format!("/{USERS_SEGMENT}/{user_id}"),
            Self::UserFollowers { user_id } => {
                format!("/{USERS_SEGMENT}/{user_id}/{FOLLOWERS_SEGMENT}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoinTab, Route, RouteError};

    #[test]
    fn path_of_reserved_coin_id_does_not_parse_back() {
        let route = Route::Coin {
            coin_id: "users".to_string(),
            tab: None,
        };
        assert_eq!(route.path(), "/users");
        assert_eq!(
            Route::parse(&route.path()),
            Err(RouteError::NotFound("/users".to_string()))
        );
    }

    #[test]
    fn root_and_empty_path_are_home() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(
            Route::parse("/btc-bitcoin/chart/?range=7d").unwrap(),
            Route::Coin {
                coin_id: "btc-bitcoin".to_string(),
                tab: Some(CoinTab::Chart),
            }
        );
    }

    #[test]
    fn unknown_coin_tab_is_not_found() {
        let err = Route::parse("/btc-bitcoin/volume").unwrap_err();
        assert_eq!(err, RouteError::NotFound("/btc-bitcoin/volume".to_string()));
    }

    #[test]
    fn bare_users_segment_is_not_a_coin() {
        assert!(Route::parse("/users").is_err());
        assert!(Route::parse("/users/1/following").is_err());
    }
}
