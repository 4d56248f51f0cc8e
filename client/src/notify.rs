//! User-facing notifications.
//!
//! The controller queues one notification per completed operation outcome;
//! the host drains the queue and shows them however it likes (the original
//! page rendered transient toasts). Error messages keep the historical
//! console strings so operators grepping logs find familiar text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
