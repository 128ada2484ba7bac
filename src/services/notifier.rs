//! User notification seam
//!
//! The controller never talks to the screen directly. It reports problems
//! through a `Notifier`: `warn` for blocking warnings that must be dismissed,
//! `inform` for transient informational messages.

/// Receives user-facing messages from the controller
pub trait Notifier {
    /// Blocking warning (the mutation that caused it did not happen)
    fn warn(&mut self, title: &str, message: &str);

    /// Non-blocking informational message
    fn inform(&mut self, title: &str, message: &str);
}

/// Severity of a recorded notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Info,
}

/// A message delivered through a notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Notifier that keeps every message, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices in delivery order
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(|n| n.level == NoticeLevel::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|n| n.level == NoticeLevel::Info)
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&mut self, title: &str, message: &str) {
        self.notices
            .push(Notice::new(NoticeLevel::Warning, title, message));
    }

    fn inform(&mut self, title: &str, message: &str) {
        self.notices.push(Notice::new(NoticeLevel::Info, title, message));
    }
}
