//! Keyboard bindings configuration.

use crate::model::key_action::ListAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to list actions.
///
/// Provides default vim-style bindings with option to override.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyEvent, ListAction>,
}

impl KeyMap {
    /// Empty key map.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Look up the action for a key event.
    ///
    /// Event kind and keyboard state are ignored so that presses reported
    /// with extra flags by the terminal still match.
    pub fn get(&self, key: KeyEvent) -> Option<ListAction> {
        let normalized = KeyEvent {
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
            ..key
        };
        self.bindings.get(&normalized).copied()
    }

    /// Bind `code` + `modifiers` to `action`, replacing any previous binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: ListAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    /// Remove every binding of `action`.
    pub fn unbind(&mut self, action: ListAction) {
        self.bindings.retain(|_, bound| *bound != action);
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::empty();

        // Line scrolling
        map.bind(KeyCode::Down, KeyModifiers::NONE, ListAction::Down);
        map.bind(KeyCode::Char('j'), KeyModifiers::NONE, ListAction::Down);
        map.bind(KeyCode::Char('j'), KeyModifiers::CONTROL, ListAction::Down);
        map.bind(KeyCode::Char('n'), KeyModifiers::CONTROL, ListAction::Down);
        map.bind(KeyCode::Up, KeyModifiers::NONE, ListAction::Up);
        map.bind(KeyCode::Char('k'), KeyModifiers::NONE, ListAction::Up);
        map.bind(KeyCode::Char('k'), KeyModifiers::CONTROL, ListAction::Up);
        map.bind(KeyCode::Char('p'), KeyModifiers::CONTROL, ListAction::Up);

        // Item navigation
        map.bind(KeyCode::Down, KeyModifiers::SHIFT, ListAction::DownOneItem);
        map.bind(KeyCode::Char('J'), KeyModifiers::SHIFT, ListAction::DownOneItem);
        map.bind(KeyCode::Up, KeyModifiers::SHIFT, ListAction::UpOneItem);
        map.bind(KeyCode::Char('K'), KeyModifiers::SHIFT, ListAction::UpOneItem);

        // Page navigation
        map.bind(KeyCode::Char('d'), KeyModifiers::NONE, ListAction::HalfPageDown);
        map.bind(KeyCode::Char('u'), KeyModifiers::NONE, ListAction::HalfPageUp);
        map.bind(KeyCode::PageDown, KeyModifiers::NONE, ListAction::PageDown);
        map.bind(KeyCode::Char(' '), KeyModifiers::NONE, ListAction::PageDown);
        map.bind(KeyCode::Char('f'), KeyModifiers::NONE, ListAction::PageDown);
        map.bind(KeyCode::PageUp, KeyModifiers::NONE, ListAction::PageUp);
        map.bind(KeyCode::Char('b'), KeyModifiers::NONE, ListAction::PageUp);

        // Jumps
        map.bind(KeyCode::End, KeyModifiers::NONE, ListAction::End);
        map.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, ListAction::End);
        map.bind(KeyCode::Home, KeyModifiers::NONE, ListAction::Home);
        map.bind(KeyCode::Char('g'), KeyModifiers::NONE, ListAction::Home);

        map
    }
}
