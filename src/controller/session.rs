//! Sign-in forms and sign-out

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{AppMode, AuthForm, FormKind, PageKind, Tab};
use super::AppController;

impl AppController {
    pub async fn open_form(&self, kind: FormKind) {
        tracing::debug!(form = kind.title(), "Opening form");
        self.model.with_ui(|ui| ui.auth_form = Some(AuthForm::new(kind))).await;
    }

    /// Closing the creator form without a creator leaves the studio
    pub async fn close_form(&self) {
        let signed_in = self.model.is_creator_signed_in().await;
        self.model
            .with_ui(|ui| {
                ui.auth_form = None;
                if ui.mode == AppMode::Studio && !signed_in {
                    ui.mode = AppMode::Listener;
                }
            })
            .await;
    }

    pub(super) async fn handle_form_key(&self, key: KeyEvent) {
        if key.code == KeyCode::Char('n') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.with_form(AuthForm::switch_kind).await;
            return;
        }

        match key.code {
            KeyCode::Esc => self.close_form().await,
            KeyCode::Tab | KeyCode::Down => self.with_form(AuthForm::focus_next).await,
            KeyCode::BackTab | KeyCode::Up => self.with_form(AuthForm::focus_prev).await,
            KeyCode::Backspace => self.with_form(AuthForm::backspace).await,
            KeyCode::Enter => self.spawn(|c| async move { c.submit_auth_form().await }),
            KeyCode::Char(ch) => self.with_form(|form| form.input_char(ch)).await,
            _ => {}
        }
    }

    async fn with_form(&self, f: impl FnOnce(&mut AuthForm)) {
        self.model
            .with_ui(|ui| {
                if let Some(form) = ui.auth_form.as_mut() {
                    f(form);
                }
            })
            .await;
    }

    /// Validate, then sign in or register. Failures stay on the form.
    pub async fn submit_auth_form(&self) {
        let form = self
            .model
            .with_ui(|ui| {
                let form = ui.auth_form.as_mut()?;
                form.validate().then(|| form.clone())
            })
            .await;
        let Some(form) = form else {
            tracing::debug!("Form has validation errors");
            return;
        };

        let result = match form.kind {
            FormKind::ListenerLogin => self.model.login(form.email.trim(), &form.password).await.map(|_| ()),
            FormKind::ListenerRegister => self
                .model
                .register(form.name.trim(), form.email.trim(), &form.password)
                .await
                .map(|_| ()),
            FormKind::CreatorLogin => self
                .model
                .creator_login(form.email.trim(), &form.password)
                .await
                .map(|_| ()),
            FormKind::CreatorRegister => self.model.creator_register(form.registration()).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                tracing::info!(form = form.kind.title(), "Signed in");
                self.model.with_ui(|ui| ui.auth_form = None).await;
                self.model.set_status("Signed in").await;
                if !form.kind.is_creator() {
                    self.refresh_listener_pages().await;
                }
            }
            Err(e) => {
                let message = Self::format_error(&e);
                self.model
                    .with_ui(|ui| {
                        if let Some(open) = ui.auth_form.as_mut() {
                            open.errors.insert("form", message);
                        }
                    })
                    .await;
            }
        }
    }

    /// Profile and library depend on who is signed in
    async fn refresh_listener_pages(&self) {
        let kind = self.model.get_content_state().await.current_kind().cloned();
        match kind {
            Some(PageKind::Library) => {
                let result = self.model.load_library().await;
                self.report("load_library", result).await;
            }
            Some(PageKind::Profile) => self.model.show_profile().await,
            _ => {}
        }
    }

    pub async fn sign_out(&self) {
        self.model.logout().await;
        self.model.set_status("Signed out").await;
        let tab = self.model.get_ui_state().await.navigation.active_tab;
        if tab == Tab::Profile {
            self.model.show_profile().await;
        } else {
            self.refresh_listener_pages().await;
        }
    }

    pub async fn creator_sign_out(&self) {
        self.model.creator_logout().await;
        self.model
            .with_ui(|ui| {
                ui.mode = AppMode::Listener;
                ui.studio_selected = 0;
            })
            .await;
        self.model.set_status("Signed out of the studio").await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::api::{Latency, MockApi};
    use crate::model::{AppModel, ContentItem, PageAction, SessionStorage};

    fn controller(dir: &TempDir) -> AppController {
        let model = AppModel::with_parts(
            MockApi::new(Latency::none()),
            SessionStorage::new(dir.path()),
            Duration::from_secs(1),
        );
        AppController::new(Arc::new(model))
    }

    async fn fill(controller: &AppController, email: &str, password: &str) {
        controller
            .model
            .with_ui(|ui| {
                let form = ui.auth_form.as_mut().unwrap();
                form.email = email.to_string();
                form.password = password.to_string();
            })
            .await;
    }

    #[tokio::test]
    async fn creator_passwords_need_eight_characters() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.open_form(FormKind::CreatorLogin).await;
        fill(&controller, "alex@niatunes.com", "123456").await;
        controller.submit_auth_form().await;

        let form = controller.model.get_ui_state().await.auth_form.unwrap();
        assert_eq!(form.errors.get("password"), Some("Password must be at least 8 characters"));
        assert!(!controller.model.is_creator_signed_in().await);
    }

    #[tokio::test]
    async fn listener_sign_in_refreshes_profile() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.switch_tab(Tab::Profile).await;
        controller.open_form(FormKind::ListenerLogin).await;
        fill(&controller, "a@b.com", "123456").await;
        controller.submit_auth_form().await;

        assert!(controller.model.current_user().await.is_some());
        let content = controller.model.get_content_state().await;
        let has_sign_out = content.page.unwrap().items.iter().any(|item| {
            matches!(item, ContentItem::Action { action: PageAction::SignOut, .. })
        });
        assert!(has_sign_out);

        controller.sign_out().await;
        assert!(controller.model.current_user().await.is_none());
    }

    #[tokio::test]
    async fn creator_sign_out_returns_to_listening() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.creator_login("alex@niatunes.com", "password123").await.unwrap();
        controller.enter_studio().await;
        controller.creator_sign_out().await;

        assert!(!controller.model.is_creator_signed_in().await);
        assert_eq!(controller.model.get_ui_state().await.mode, AppMode::Listener);
    }
}
