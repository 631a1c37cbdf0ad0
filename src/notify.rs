//! User notifications (toasts).

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
}

/// A transient message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
            duration,
        }
    }

    pub fn success(
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
            duration,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Writes notifications to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, n: Notification) {
        match n.kind {
            NotificationKind::Error => {
                tracing::warn!(title = %n.title, duration_ms = n.duration.as_millis() as u64, "{}", n.message)
            }
            NotificationKind::Success => {
                tracing::info!(title = %n.title, duration_ms = n.duration.as_millis() as u64, "{}", n.message)
            }
        }
    }
}

/// Keeps every notification in memory, for front-ends that drain and render them.
#[derive(Clone, Debug, Default)]
pub struct BufferedNotifier {
    pending: Vec<Notification>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn last(&self) -> Option<&Notification> {
        self.pending.last()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }
}
