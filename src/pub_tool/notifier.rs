//! Notification sink for pub results

#[cfg(test)]
use mockall::automock;

/// Notification group shown with every pub message
pub const GROUP_DISPLAY_ID: &str = "Pub Tool";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Information,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub group: &'static str,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn information(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            group: GROUP_DISPLAY_ID,
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Information,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            group: GROUP_DISPLAY_ID,
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Receives user-facing notifications
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
