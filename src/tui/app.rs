//! Application state for the TUI
//!
//! The App struct holds the controller plus everything that only matters on
//! screen: field widgets, focus and the table cursor.

use ratatui::widgets::TableState;

use crate::config::settings::Settings;
use crate::models::category::cycle_suggestion;
use crate::services::ExpenseController;

use super::notifier::TuiNotifier;
use super::widgets::TextInput;

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    #[default]
    Name,
    Amount,
    Category,
    Search,
    Table,
}

impl FocusedField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Search,
            Self::Search => Self::Table,
            Self::Table => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Table,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Search => Self::Category,
            Self::Table => Self::Search,
        }
    }

    /// Whether this field feeds "Add Expense"
    pub fn is_entry(self) -> bool {
        matches!(self, Self::Name | Self::Amount | Self::Category)
    }
}

/// Main application state
pub struct App {
    pub controller: ExpenseController<TuiNotifier>,

    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focused: FocusedField,

    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub category_input: TextInput,
    pub search_input: TextInput,

    /// Highlighted row in the expense table
    pub table_state: TableState,

    /// When set, moving the cursor leaves the selection alone
    pub multi_select_mode: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let controller = ExpenseController::new(TuiNotifier::new(settings.notification_secs))
            .with_currency_symbol(settings.currency_symbol.clone());

        let mut app = Self {
            controller,
            settings,
            should_quit: false,
            focused: FocusedField::default(),
            name_input: TextInput::new()
                .label("Name")
                .placeholder("Expense name"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("Up/Down for suggestions"),
            search_input: TextInput::new()
                .label("Search")
                .placeholder("Name or category"),
            table_state: TableState::default(),
            multi_select_mode: false,
        };
        app.update_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_focus(&mut self, field: FocusedField) {
        self.focused = field;
        self.update_focus();
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused.prev());
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused == FocusedField::Name;
        self.amount_input.focused = self.focused == FocusedField::Amount;
        self.category_input.focused = self.focused == FocusedField::Category;
        self.search_input.focused = self.focused == FocusedField::Search;
    }

    /// The text input under focus, if focus is on a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FocusedField::Name => Some(&mut self.name_input),
            FocusedField::Amount => Some(&mut self.amount_input),
            FocusedField::Category => Some(&mut self.category_input),
            FocusedField::Search => Some(&mut self.search_input),
            FocusedField::Table => None,
        }
    }

    /// Check if a warning dialog is blocking input
    pub fn has_dialog(&self) -> bool {
        self.controller.notifier().dialog().is_some()
    }

    pub fn dismiss_dialog(&mut self) {
        self.controller.notifier_mut().dismiss_dialog();
    }

    /// "Add Expense"
    pub fn add_expense(&mut self) {
        let fields = self.controller.fields_mut();
        fields.name = self.name_input.value().to_string();
        fields.amount = self.amount_input.value().to_string();
        fields.category = self.category_input.value().to_string();

        if self.controller.submit().is_ok() {
            self.name_input.clear();
            self.amount_input.clear();
            self.category_input.clear();
            self.set_focus(FocusedField::Name);
        }
    }

    /// "Delete Expense"
    pub fn delete_selected(&mut self) {
        if self.controller.delete_selected().is_ok() {
            self.clamp_cursor();
        }
    }

    /// "Clear All"
    pub fn clear_all(&mut self) {
        self.controller.clear_all();
        self.table_state.select(None);
    }

    /// "Search": select and scroll to the first match
    pub fn search(&mut self) {
        self.controller
            .set_search_query(self.search_input.value().to_string());
        if let Some(id) = self.controller.search() {
            let row = self.controller.ledger().position(id);
            self.table_state.select(row);
        }
    }

    /// Move the table cursor and select the row under it
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.controller.ledger().len();
        if len == 0 {
            return;
        }

        let row = match self.table_state.selected() {
            Some(current) => current.saturating_add_signed(delta).min(len - 1),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.select_row(row);
    }

    pub fn cursor_to_start(&mut self) {
        if !self.controller.ledger().is_empty() {
            self.select_row(0);
        }
    }

    pub fn cursor_to_end(&mut self) {
        let len = self.controller.ledger().len();
        if len > 0 {
            self.select_row(len - 1);
        }
    }

    fn select_row(&mut self, row: usize) {
        self.table_state.select(Some(row));
        if self.multi_select_mode {
            return;
        }
        if let Some(record) = self.controller.ledger().records().get(row) {
            let id = record.id();
            self.controller.select_only(id);
        }
    }

    /// Enter or leave multi-select mode
    ///
    /// Leaving it narrows the selection back to the row under the cursor.
    pub fn toggle_multi_select(&mut self) {
        self.multi_select_mode = !self.multi_select_mode;
        if !self.multi_select_mode {
            match self.table_state.selected() {
                Some(row) => self.select_row(row),
                None => self.controller.clear_selection(),
            }
        }
    }

    /// Add or remove the row under the cursor from the selection
    pub fn toggle_at_cursor(&mut self) {
        let id = self
            .table_state
            .selected()
            .and_then(|row| self.controller.ledger().records().get(row))
            .map(|record| record.id());
        if let Some(id) = id {
            self.controller.toggle_selected(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.controller.clear_selection();
    }

    /// Replace the Category text with the next or previous suggestion
    pub fn cycle_category(&mut self, forward: bool) {
        let next = cycle_suggestion(
            &self.settings.categories,
            self.category_input.value(),
            forward,
        )
        .map(str::to_string);
        if let Some(next) = next {
            self.category_input.set_content(next);
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.controller.notifier_mut().tick();
    }

    fn clamp_cursor(&mut self) {
        let len = self.controller.ledger().len();
        let row = match self.table_state.selected() {
            Some(_) if len == 0 => None,
            Some(row) => Some(row.min(len - 1)),
            None => None,
        };
        self.table_state.select(row);
    }
}
