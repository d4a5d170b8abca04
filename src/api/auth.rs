//! Listener and creator authentication endpoints

use crate::data::{self, creator::current_creator};
use crate::model::{Creator, CreatorType, User};

use super::{ApiError, ApiResponse, ApiResult, MIN_PASSWORD_LEN, MockApi};

/// Partial update applied to the listener profile
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub is_premium: Option<bool>,
}

impl ProfileUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(premium) = self.is_premium {
            user.is_premium = premium;
        }
    }
}

/// Sign-up form for the creator portal
#[derive(Clone, Debug, Default)]
pub struct CreatorRegistration {
    pub name: String,
    pub artist_name: String,
    pub email: String,
    pub password: String,
    pub creator_type: CreatorType,
}

pub struct AuthApi<'a> {
    pub(super) api: &'a MockApi,
}

fn password_ok(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

impl AuthApi<'_> {
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        crate::log_api_request!("auth.login", email = %email);
        self.api.latency.wait(800).await;

        let result = if !email.is_empty() && password_ok(password) {
            Ok(ApiResponse::ok(self.api.catalog.current_user.clone()).with_message("Login successful"))
        } else {
            Err(ApiError::InvalidCredentials)
        };
        crate::log_api_result!("auth.login", result);
        result
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<User> {
        crate::log_api_request!("auth.register", email = %email);
        self.api.latency.wait(1000).await;

        let result = if !name.is_empty() && !email.is_empty() && password_ok(password) {
            let mut user = self.api.catalog.current_user.clone();
            user.name = name.to_string();
            user.email = email.to_string();
            Ok(ApiResponse::ok(user).with_message("Registration successful"))
        } else {
            Err(ApiError::InvalidRegistration)
        };
        crate::log_api_result!("auth.register", result);
        result
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.api.latency.wait(500).await;
        tracing::info!(operation = "auth.logout", "API request successful");
        Ok(ApiResponse::ok(()).with_message("Logout successful"))
    }

    pub async fn get_current_user(&self) -> ApiResult<User> {
        self.api.latency.wait(300).await;
        Ok(ApiResponse::ok(self.api.catalog.current_user.clone()))
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> ApiResult<User> {
        self.api.latency.wait(600).await;
        let mut user = self.api.catalog.current_user.clone();
        update.apply(&mut user);
        tracing::info!(operation = "auth.update_profile", user_id = %user.id, "API request successful");
        Ok(ApiResponse::ok(user).with_message("Profile updated"))
    }

    pub async fn creator_login(&self, email: &str, password: &str) -> ApiResult<Creator> {
        crate::log_api_request!("auth.creator_login", email = %email);
        self.api.latency.wait(1000).await;

        let result = if !email.is_empty() && password_ok(password) {
            Ok(ApiResponse::ok(current_creator()))
        } else {
            Err(ApiError::InvalidCredentials)
        };
        crate::log_api_result!("auth.creator_login", result);
        result
    }

    /// Registers a creator. The form is assumed to be validated client-side;
    /// only missing identity fields are rejected here.
    pub async fn creator_register(&self, form: CreatorRegistration) -> ApiResult<Creator> {
        crate::log_api_request!("auth.creator_register", email = %form.email);
        self.api.latency.wait(1500).await;

        let result = if form.email.is_empty() || form.artist_name.is_empty() {
            Err(ApiError::InvalidRegistration)
        } else {
            let creator = Creator {
                id: data::generate_id("creator"),
                name: form.name,
                artist_name: form.artist_name,
                email: form.email,
                creator_type: form.creator_type,
                is_verified: false,
                created_at: data::now_iso(),
                ..current_creator()
            };
            Ok(ApiResponse::ok(creator))
        };
        crate::log_api_result!("auth.creator_register", result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;

    fn api() -> MockApi {
        MockApi::new(Latency::none())
    }

    #[tokio::test]
    async fn login_accepts_six_character_passwords() {
        let api = api();
        let resp = api.auth().login("a@b.com", "123456").await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.id, "user-1");
        assert_eq!(resp.message.as_deref(), Some("Login successful"));
    }

    #[tokio::test]
    async fn login_rejects_short_password_and_empty_email() {
        let api = api();
        assert_eq!(
            api.auth().login("a@b.com", "123").await.unwrap_err(),
            ApiError::InvalidCredentials
        );
        assert!(api.auth().login("", "123456").await.is_err());
    }

    #[tokio::test]
    async fn register_overrides_name_and_email() {
        let api = api();
        let user = api
            .auth()
            .register("Wanjiru", "w@niatunes.com", "secret1")
            .await
            .unwrap()
            .data;
        assert_eq!(user.name, "Wanjiru");
        assert_eq!(user.email, "w@niatunes.com");
        assert_eq!(user.id, "user-1");

        assert_eq!(
            api.auth().register("", "w@niatunes.com", "secret1").await.unwrap_err(),
            ApiError::InvalidRegistration
        );
    }

    #[tokio::test]
    async fn update_profile_applies_partial_fields() {
        let api = api();
        let update = ProfileUpdate {
            name: Some("New Name".into()),
            ..Default::default()
        };
        let user = api.auth().update_profile(update).await.unwrap().data;
        assert_eq!(user.name, "New Name");
        assert_eq!(user.email, "user@niatunes.com");
    }

    #[tokio::test]
    async fn creator_register_mints_unverified_creator() {
        let api = api();
        let form = CreatorRegistration {
            name: "Amani".into(),
            artist_name: "Amani Beats".into(),
            email: "amani@niatunes.com".into(),
            password: "longpassword".into(),
            creator_type: CreatorType::Podcaster,
        };
        let creator = api.auth().creator_register(form).await.unwrap().data;
        assert!(creator.id.starts_with("creator-"));
        assert_ne!(creator.id, "creator-1");
        assert!(!creator.is_verified);
        assert_eq!(creator.creator_type, CreatorType::Podcaster);
        assert_eq!(creator.bio, current_creator().bio);
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_the_simulated_delay() {
        let api = MockApi::new(Latency::default());
        let started = tokio::time::Instant::now();
        api.auth().login("a@b.com", "123456").await.unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(800));
    }
}
