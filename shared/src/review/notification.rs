use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the organizer
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Underlying error text, for the console
    pub detail: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Receives the side effects of review operations: notifications to show
/// and a nudge to re-render after state changed.
pub trait ReviewObserver {
    fn notify(&self, notification: Notification);

    fn refresh(&self) {}
}

/// Observer that keeps everything it is told, in order
#[derive(Debug, Default)]
pub struct NotificationLog {
    notifications: RefCell<Vec<Notification>>,
    refreshes: RefCell<usize>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }

    pub fn refresh_count(&self) -> usize {
        *self.refreshes.borrow()
    }
}

impl ReviewObserver for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }

    fn refresh(&self) {
        *self.refreshes.borrow_mut() += 1;
    }
}
