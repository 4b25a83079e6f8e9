//! Contact form draft and validation.
//!
//! The draft is saved to local storage on every edit and restored on mount,
//! so a half-written message survives a reload. Sending is local only: a
//! valid submit shows a confirmation and clears the draft.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const DRAFT_KEY: &str = "portfolio_contact_draft";

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    Missing(Field),
    InvalidEmail,
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{} is required", field.label()),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| v.trim().is_empty())
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Reports the first problem in form order.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, or `InvalidEmail` when the address
    /// lacks text on either side of `@`.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::Missing(*field));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        load_json(store, DRAFT_KEY).unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        if self.is_empty() {
            store.remove(DRAFT_KEY);
        } else {
            save_json(store, DRAFT_KEY, self);
        }
    }

    pub fn clear(store: &dyn KeyValueStore) {
        store.remove(DRAFT_KEY);
    }
}

fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
