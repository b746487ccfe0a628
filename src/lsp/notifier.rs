//! Bridges pub notifications to `window/showMessage`

use std::sync::{Mutex, PoisonError};

use tower_lsp::Client;
use tower_lsp::lsp_types::MessageType;

use crate::pub_tool::{Notification, NotificationKind, Notifier};

/// Collects notifications raised on a blocking thread so they can be
/// forwarded to the client afterwards
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl BufferedNotifier {
    pub fn into_notifications(self) -> Vec<Notification> {
        self.notifications
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

pub fn message_type(kind: NotificationKind) -> MessageType {
    match kind {
        NotificationKind::Information => MessageType::INFO,
        NotificationKind::Error => MessageType::ERROR,
    }
}

pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}: {}",
        notification.group, notification.title, notification.message
    )
}

pub async fn show_notifications(client: &Client, notifications: Vec<Notification>) {
    for notification in notifications {
        client
            .show_message(
                message_type(notification.kind),
                format_notification(&notification),
            )
            .await;
    }
}
