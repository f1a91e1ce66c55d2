//! Transient notifications.
//!
//! The queue itself is plain data; [`Toasts`] wraps it in a signal and is
//! provided once at the application root so a toast raised right before a
//! route change is still shown on the next screen.

use std::collections::VecDeque;

use dioxus::prelude::*;

/// Toasts visible at once. A newer toast evicts the oldest.
pub const TOAST_LIMIT: usize = 1;

/// How long a toast stays up unless closed by hand.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    // Newest first.
    entries: VecDeque<(u64, Toast)>,
}

impl ToastQueue {
    /// Show `toast`, returning the id used to dismiss it.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push_front((id, toast));
        self.entries.truncate(TOAST_LIMIT);
        id
    }

    /// Returns `false` if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Toast)> {
        self.entries.iter().map(|(id, toast)| (*id, toast))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// App-wide toast state - use `use_toasts()` to access
#[derive(Clone, Copy)]
pub struct Toasts(Signal<ToastQueue>);

impl Toasts {
    pub fn show(&mut self, toast: Toast) {
        tracing::debug!(title = %toast.title, "Showing toast");
        self.0.write().push(toast);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }

    /// Snapshot of the visible toasts. Subscribes the calling component.
    pub fn visible(&self) -> Vec<(u64, Toast)> {
        self.0
            .read()
            .iter()
            .map(|(id, toast)| (id, toast.clone()))
            .collect()
    }
}

/// Create the toast state. Call once, in the root component.
pub fn provide_toasts() -> Toasts {
    use_context_provider(|| Toasts(Signal::new(ToastQueue::default())))
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
