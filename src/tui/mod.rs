//! Terminal User Interface module
//!
//! A single screen built on ratatui: entry form, search line, expense table
//! and running total. Warnings open a modal dialog; search misses show a
//! short-lived toast.

pub mod app;
pub mod event;
pub mod handler;
pub mod notifier;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use notifier::TuiNotifier;
pub use terminal::run_tui;
