//! Listener and creator identities
//!
//! Both stores are plain state. The async sign-in flows live on
//! [`AppModel`](super::AppModel), which flips `is_loading`, awaits the
//! simulated API with no lock held, then hands the outcome back here.

use serde::{Deserialize, Serialize};

use super::creator::{Creator, CreatorProfileUpdate};
use super::types::User;
use crate::api::ApiError;

/// Persisted part of [`AuthStore`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Persisted part of [`CreatorAuthStore`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSnapshot {
    pub creator: Option<Creator>,
    pub is_authenticated: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AuthStore {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthStore {
    pub fn restore(snapshot: AuthSnapshot) -> Self {
        Self {
            // A flag without a user is not a session
            is_authenticated: snapshot.is_authenticated && snapshot.user.is_some(),
            user: snapshot.user,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Outcome of a login or registration call
    pub fn finish_sign_in(&mut self, result: Result<User, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.is_authenticated = true;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn finish_logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct CreatorAuthStore {
    pub creator: Option<Creator>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CreatorAuthStore {
    pub fn restore(snapshot: CreatorSnapshot) -> Self {
        Self {
            is_authenticated: snapshot.is_authenticated && snapshot.creator.is_some(),
            creator: snapshot.creator,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> CreatorSnapshot {
        CreatorSnapshot {
            creator: self.creator.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn finish_sign_in(&mut self, result: Result<Creator, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(creator) => {
                self.creator = Some(creator);
                self.is_authenticated = true;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Local sign-out, no backend round trip
    pub fn logout(&mut self) {
        self.creator = None;
        self.is_authenticated = false;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// No-op while signed out
    pub fn update_profile(&mut self, update: CreatorProfileUpdate) {
        if let Some(creator) = self.creator.as_mut() {
            update.apply(creator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{catalog::Catalog, creator::current_creator};

    #[test]
    fn failed_sign_in_keeps_the_message() {
        let mut store = AuthStore::default();
        store.begin_request();
        assert!(store.is_loading);
        store.finish_sign_in(Err(ApiError::InvalidCredentials));
        assert!(!store.is_loading);
        assert!(!store.is_authenticated);
        assert_eq!(store.error.as_deref(), Some("Invalid credentials"));

        store.begin_request();
        assert!(store.error.is_none());
    }

    #[test]
    fn successful_sign_in_then_logout() {
        let mut store = AuthStore::default();
        store.begin_request();
        store.finish_sign_in(Ok(Catalog::seed().current_user));
        assert!(store.is_authenticated);
        store.finish_logout();
        assert!(store.user.is_none());
        assert!(!store.is_authenticated);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let mut store = AuthStore::default();
        store.finish_sign_in(Ok(Catalog::seed().current_user));
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["user"]["isPremium"], true);
    }

    #[test]
    fn restore_needs_an_identity() {
        let store = AuthStore::restore(AuthSnapshot {
            user: None,
            is_authenticated: true,
        });
        assert!(!store.is_authenticated);

        let creator = CreatorAuthStore::restore(CreatorSnapshot {
            creator: Some(current_creator()),
            is_authenticated: true,
        });
        assert!(creator.is_authenticated);
        assert!(!creator.is_loading);
    }

    #[test]
    fn creator_profile_updates_only_when_signed_in() {
        let mut store = CreatorAuthStore::default();
        store.update_profile(CreatorProfileUpdate {
            bio: Some("ignored".into()),
            ..Default::default()
        });
        assert!(store.creator.is_none());

        store.finish_sign_in(Ok(current_creator()));
        store.update_profile(CreatorProfileUpdate {
            bio: Some("New bio".into()),
            ..Default::default()
        });
        assert_eq!(store.creator.as_ref().map(|c| c.bio.as_str()), Some("New bio"));

        store.error = Some("x".into());
        store.logout();
        assert!(store.creator.is_none());
        assert!(store.error.is_none());
    }
}
