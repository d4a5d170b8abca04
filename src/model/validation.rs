//! Client-side form checks, run before any sign-in call

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::{CreatorRegistration, MIN_PASSWORD_LEN};

/// Creator passwords are held to a stricter minimum than listener ones
pub const CREATOR_MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Per-field messages keyed by form field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// First message in field order, for one-line display
    pub fn first(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !EMAIL_RX.is_match(email) {
        errors.insert("email", "Invalid email address");
    }
}

fn check_password(password: &str, min_len: usize, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < min_len {
        errors.insert("password", format!("Password must be at least {} characters", min_len));
    }
}

pub fn listener_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    check_email(email, &mut errors);
    check_password(password, MIN_PASSWORD_LEN, &mut errors);
    errors
}

pub fn listener_register(name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = listener_login(email, password);
    if name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    errors
}

pub fn creator_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    check_email(email, &mut errors);
    check_password(password, CREATOR_MIN_PASSWORD_LEN, &mut errors);
    errors
}

pub fn creator_registration(form: &CreatorRegistration, confirm_password: &str, agree_terms: bool) -> FieldErrors {
    let mut errors = creator_login(&form.email, &form.password);
    if form.name.trim().is_empty() {
        errors.insert("name", "Full name is required");
    }
    if form.artist_name.trim().is_empty() {
        errors.insert("artistName", "Artist/Podcast name is required");
    }
    if form.password != confirm_password {
        errors.insert("confirmPassword", "Passwords do not match");
    }
    if !agree_terms {
        errors.insert("agreeTerms", "You must agree to the terms");
    }
    errors
}
