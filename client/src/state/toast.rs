//! Transient toast notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Visible toasts in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, title: title.into(), description });
        id
    }

    /// Returns whether a toast was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
