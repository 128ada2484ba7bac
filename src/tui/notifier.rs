//! Terminal implementation of the controller's notifier
//!
//! Warnings become a modal dialog that must be dismissed; informational
//! messages become toasts that expire.

use crate::services::Notifier;

use super::widgets::{MessageInfo, Notification, NotificationQueue};

#[derive(Debug, Default)]
pub struct TuiNotifier {
    dialog: Option<MessageInfo>,
    toasts: NotificationQueue,
    toast_secs: u64,
}

impl TuiNotifier {
    pub fn new(toast_secs: u64) -> Self {
        Self {
            dialog: None,
            toasts: NotificationQueue::new(),
            toast_secs,
        }
    }

    /// The open warning dialog, if any
    pub fn dialog(&self) -> Option<&MessageInfo> {
        self.dialog.as_ref()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn toasts(&self) -> &NotificationQueue {
        &self.toasts
    }

    /// Drop toasts whose time is up
    pub fn tick(&mut self) {
        self.toasts.remove_expired();
    }
}

impl Notifier for TuiNotifier {
    fn warn(&mut self, title: &str, message: &str) {
        self.dialog = Some(MessageInfo::new(title, message));
    }

    fn inform(&mut self, title: &str, message: &str) {
        self.toasts
            .push(Notification::info(title, message).with_duration(self.toast_secs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_opens_dialog() {
        let mut notifier = TuiNotifier::new(3);
        notifier.warn("Input Error", "Amount must be a number!");

        let dialog = notifier.dialog().unwrap();
        assert_eq!(dialog.title, "Input Error");
        notifier.dismiss_dialog();
        assert!(notifier.dialog().is_none());
    }

    #[test]
    fn test_inform_queues_toast() {
        let mut notifier = TuiNotifier::new(30);
        notifier.inform("Search Result", "No matching expense found.");

        assert!(notifier.dialog().is_none());
        assert_eq!(
            notifier.toasts().current().unwrap().message,
            "No matching expense found."
        );
        notifier.tick();
        assert!(notifier.toasts().current().is_some());
    }
}
