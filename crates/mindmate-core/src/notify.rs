//! Transient notifications (toasts).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a toast stays visible by default.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// A transient message shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: TOAST_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Notification collaborator provided by the host.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// In-memory notifier that keeps every toast it was asked to show.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Remove and return all queued toasts.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        log::info!("Toast: {} - {}", toast.title, toast.description);
        self.toasts.push(toast);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, toast: Toast) {
        (**self).notify(toast);
    }
}
