//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod message_dialog;
pub mod notification;

// Re-export commonly used widgets
pub use input::TextInput;
pub use message_dialog::{message_dialog_area, MessageDialog, MessageInfo};
pub use notification::{notification_area, Notification, NotificationQueue, NotificationWidget};
