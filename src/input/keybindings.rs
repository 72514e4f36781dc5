//! Default keybindings for the application.
//!
//! Maps key combinations to commands, grouped by where they apply: always
//! (outside modals), inside a modal, or on a table view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::View;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Key combo for an event, with Shift dropped where the key code already
    /// carries it (uppercase characters, BackTab).
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Bindings active whenever no modal is open
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Bindings active on the patient, doctor and appointment views
    pub table: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            table: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_table_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::NextView);
        self.global
            .insert(KeyCombo::plain(KeyCode::BackTab), Command::PreviousView);

        for (view, key) in View::ALL.into_iter().zip(['1', '2', '3', '4']) {
            self.global
                .insert(KeyCombo::plain(KeyCode::Char(key)), Command::SwitchView(view));
        }
    }

    fn setup_modal_bindings(&mut self) {
        let mut form = HashMap::new();
        form.insert(KeyCombo::plain(KeyCode::Esc), Command::FormCancel);
        form.insert(KeyCombo::plain(KeyCode::Enter), Command::FormSave);
        form.insert(KeyCombo::plain(KeyCode::Tab), Command::FormNextField);
        form.insert(KeyCombo::plain(KeyCode::Down), Command::FormNextField);
        form.insert(KeyCombo::plain(KeyCode::BackTab), Command::FormPreviousField);
        form.insert(KeyCombo::plain(KeyCode::Up), Command::FormPreviousField);
        form.insert(KeyCombo::plain(KeyCode::Right), Command::FormNextChoice);
        form.insert(KeyCombo::plain(KeyCode::Left), Command::FormPreviousChoice);
        form.insert(KeyCombo::plain(KeyCode::Backspace), Command::FormBackspace);
        self.modal.insert(ModalType::Form, form);

        let mut confirm = HashMap::new();
        confirm.insert(KeyCombo::plain(KeyCode::Char('y')), Command::ConfirmYes);
        confirm.insert(KeyCombo::plain(KeyCode::Char('Y')), Command::ConfirmYes);
        confirm.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmYes);
        confirm.insert(KeyCombo::plain(KeyCode::Char('n')), Command::ConfirmNo);
        confirm.insert(KeyCombo::plain(KeyCode::Char('N')), Command::ConfirmNo);
        confirm.insert(KeyCombo::plain(KeyCode::Esc), Command::ConfirmNo);
        self.modal.insert(ModalType::Confirm, confirm);
    }

    fn setup_table_bindings(&mut self) {
        self.table
            .insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrevious);
        self.table
            .insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrevious);
        self.table
            .insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        self.table
            .insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext);
        self.table
            .insert(KeyCombo::plain(KeyCode::Char('a')), Command::AddRecord);
        self.table
            .insert(KeyCombo::plain(KeyCode::Char('e')), Command::EditSelected);
        self.table
            .insert(KeyCombo::plain(KeyCode::Enter), Command::EditSelected);
        self.table
            .insert(KeyCombo::plain(KeyCode::Char('d')), Command::DeleteSelected);
        self.table
            .insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteSelected);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_table(&self, combo: &KeyCombo) -> Option<&Command> {
        self.table.get(combo)
    }
}
