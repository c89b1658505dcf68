//! Demo user directory and the user/followers screen model.
//!
//! # Invariants
//! - User ids are 1-based and match their position in `USERS`.
//! - Path ids are opaque strings until resolved here.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

pub const USERS: &[User] = &[User { id: 1, name: "nico" }, User { id: 2, name: "lynn" }];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Path parameter is not a positive integer.
    InvalidUserId(String),
    /// No user with this id.
    UserNotFound(u32),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUserId(raw) => write!(f, "user id must be a positive integer: `{raw}`"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Resolves a raw path parameter to a directory entry.
pub fn find_user(raw_user_id: &str) -> Result<User, CatalogError> {
    let id: u32 = raw_user_id
        .trim()
        .parse()
        .map_err(|_| CatalogError::InvalidUserId(raw_user_id.to_string()))?;
    if id == 0 {
        return Err(CatalogError::InvalidUserId(raw_user_id.to_string()));
    }
    USERS
        .get((id - 1) as usize)
        .copied()
        .ok_or(CatalogError::UserNotFound(id))
}

/// Data rendered by the user screen and handed to its followers sub-view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserScreen {
    pub user: User,
    pub show_followers: bool,
}

impl UserScreen {
    pub fn load(raw_user_id: &str, show_followers: bool) -> Result<Self, CatalogError> {
        Ok(Self {
            user: find_user(raw_user_id)?,
            show_followers,
        })
    }

    pub fn headline(&self) -> String {
        format!("User with id {} is name: {}", self.user.id, self.user.name)
    }

    /// Relative link target of the followers sub-view.
    pub fn followers_link(&self) -> &'static str {
        "followers"
    }

    /// Context passed down to the followers sub-view.
    pub fn followers_context(&self) -> Option<&'static str> {
        self.show_followers.then_some(self.user.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{find_user, CatalogError, UserScreen};

    #[test]
    fn find_user_is_one_based() {
        assert_eq!(find_user("1").unwrap().name, "nico");
        assert_eq!(find_user("2").unwrap().name, "lynn");
    }

    #[test]
    fn zero_and_text_ids_are_invalid() {
        assert_eq!(
            find_user("0").unwrap_err(),
            CatalogError::InvalidUserId("0".to_string())
        );
        assert!(matches!(
            find_user("abc").unwrap_err(),
            CatalogError::InvalidUserId(_)
        ));
    }

    #[test]
    fn out_of_range_id_is_not_found() {
        assert_eq!(find_user("99").unwrap_err(), CatalogError::UserNotFound(99));
    }

    #[test]
    fn followers_context_only_on_followers_route() {
        let profile = UserScreen::load("1", false).unwrap();
        assert_eq!(profile.headline(), "User with id 1 is name: nico");
        assert_eq!(profile.followers_context(), None);

        let followers = UserScreen::load("1", true).unwrap();
        assert_eq!(followers.followers_context(), Some("nico"));
    }
}
