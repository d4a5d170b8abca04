//! Sign-in and sign-up form state for the listener and creator overlays

use crate::api::CreatorRegistration;

use super::creator::CreatorType;
use super::validation::{self, FieldErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    ListenerLogin,
    ListenerRegister,
    CreatorLogin,
    CreatorRegister,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::ListenerLogin => "Sign in",
            FormKind::ListenerRegister => "Create account",
            FormKind::CreatorLogin => "Creator sign in",
            FormKind::CreatorRegister => "Become a creator",
        }
    }

    /// Login <-> register for the same audience
    pub fn switched(self) -> Self {
        match self {
            FormKind::ListenerLogin => FormKind::ListenerRegister,
            FormKind::ListenerRegister => FormKind::ListenerLogin,
            FormKind::CreatorLogin => FormKind::CreatorRegister,
            FormKind::CreatorRegister => FormKind::CreatorLogin,
        }
    }

    pub fn is_creator(self) -> bool {
        matches!(self, FormKind::CreatorLogin | FormKind::CreatorRegister)
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            FormKind::ListenerLogin | FormKind::CreatorLogin => &[Field::Email, Field::Password],
            FormKind::ListenerRegister => &[Field::Name, Field::Email, Field::Password],
            FormKind::CreatorRegister => &[
                Field::Name,
                Field::ArtistName,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::CreatorType,
                Field::AgreeTerms,
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    ArtistName,
    Email,
    Password,
    ConfirmPassword,
    CreatorType,
    AgreeTerms,
}

impl Field {
    /// Key used in [`FieldErrors`]
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ArtistName => "artistName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::CreatorType => "creatorType",
            Field::AgreeTerms => "agreeTerms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::ArtistName => "Artist / podcast name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::CreatorType => "Creator type",
            Field::AgreeTerms => "Agree to terms",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

#[derive(Clone, Debug)]
pub struct AuthForm {
    pub kind: FormKind,
    pub name: String,
    pub artist_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub creator_type: CreatorType,
    pub agree_terms: bool,
    pub focus: usize,
    pub errors: FieldErrors,
}

impl AuthForm {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            name: String::new(),
            artist_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            creator_type: CreatorType::default(),
            agree_terms: false,
            focus: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        self.kind.fields()
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Flip between login and register, keeping what was typed
    pub fn switch_kind(&mut self) {
        self.kind = self.kind.switched();
        self.focus = 0;
        self.errors = FieldErrors::default();
    }

    /// Text shown for a field; secrets are masked
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::CreatorType => self.creator_type.label().to_string(),
            Field::AgreeTerms => if self.agree_terms { "[x]" } else { "[ ]" }.to_string(),
            f if f.is_secret() => "•".repeat(self.text(f).map_or(0, |t| t.chars().count())),
            f => self.text(f).cloned().unwrap_or_default(),
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        match field {
            Field::Name => Some(&self.name),
            Field::ArtistName => Some(&self.artist_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::CreatorType | Field::AgreeTerms => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::ArtistName => Some(&mut self.artist_name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::CreatorType | Field::AgreeTerms => None,
        }
    }

    /// Typed character. Space cycles the creator type or ticks the terms box.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        self.errors.clear_field(field.key());
        match field {
            Field::CreatorType if c == ' ' => self.creator_type = self.creator_type.next(),
            Field::AgreeTerms if c == ' ' => self.agree_terms = !self.agree_terms,
            _ => {
                if let Some(text) = self.text_mut(field) {
                    text.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Run the client-side checks; `true` when the form may be submitted
    pub fn validate(&mut self) -> bool {
        self.errors = match self.kind {
            FormKind::ListenerLogin => validation::listener_login(&self.email, &self.password),
            FormKind::ListenerRegister => validation::listener_register(&self.name, &self.email, &self.password),
            FormKind::CreatorLogin => validation::creator_login(&self.email, &self.password),
            FormKind::CreatorRegister => {
                validation::creator_registration(&self.registration(), &self.confirm_password, self.agree_terms)
            }
        };
        self.errors.is_empty()
    }

    pub fn registration(&self) -> CreatorRegistration {
        CreatorRegistration {
            name: self.name.trim().to_string(),
            artist_name: self.artist_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            creator_type: self.creator_type,
        }
    }
}
