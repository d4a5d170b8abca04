//! Controller module - Application logic and event handling
//!
//! Translates key presses into model operations. Anything that waits on the
//! simulated backend runs on a spawned task so the UI keeps drawing.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event routing (overlays, search box, per-mode keys)
//! - `navigation`: Tabs, catalog pages and the back stack
//! - `playback`: Player actions and playlist edits
//! - `session`: Sign-in forms and sign-out
//! - `social`: Messages, the now-playing sheet and the composer
//! - `studio`: Creator dashboard actions

mod input;
mod navigation;
mod playback;
mod session;
mod social;
mod studio;

use std::future::Future;
use std::sync::Arc;

use crate::api::ApiError;
use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>) -> Self {
        Self { model }
    }

    /// Run `task` in the background with its own handle to the controller
    pub(crate) fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(task(self.clone()));
    }

    /// Show a failed call in the error popup
    pub(crate) async fn report<T>(&self, context: &str, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(context, error = %e, "Action failed");
                self.model.set_error(Self::format_error(&e)).await;
                None
            }
        }
    }

    pub(crate) fn format_error(error: &ApiError) -> String {
        match error {
            ApiError::NotFound(what) => format!("{} not found. It may have been removed.", what),
            ApiError::PlaylistOrSongNotFound => "That playlist or song no longer exists.".to_string(),
            ApiError::InvalidCredentials => "Invalid credentials. Check your email and password.".to_string(),
            ApiError::InvalidRegistration => "Registration was rejected. Check the form and try again.".to_string(),
            ApiError::Validation(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(
            AppController::format_error(&ApiError::NotFound("Album")),
            "Album not found. It may have been removed."
        );
        assert_eq!(
            AppController::format_error(&ApiError::Validation("Nothing to pay out".into())),
            "Nothing to pay out"
        );
    }
}
