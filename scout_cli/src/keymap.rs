/// Centralized keybindings and help text for the Candidate Scout TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("+/a", "Accept candidate"),
            ("-/r", "Reject candidate"),
            ("j/↓", "Move down (saved table)"),
            ("k/↑", "Move up (saved table)"),
            ("d/Del", "Remove saved candidate"),
            ("1", "Browse screen"),
            ("2", "Saved screen"),
            ("Tab", "Switch screen"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Esc", "Quit/Close"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is accept
    pub fn is_accept(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('+') | KeyCode::Char('a'))
    }

    /// Check if key is reject
    pub fn is_reject(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('-') | KeyCode::Char('r'))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    /// Check if key is remove (saved table)
    pub fn is_remove(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('d') | KeyCode::Delete)
    }

    /// Check if key is the browse screen shortcut
    pub fn is_browse_screen(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('1'))
    }

    /// Check if key is the saved screen shortcut
    pub fn is_saved_screen(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('2'))
    }

    /// Check if key switches between the two screens
    pub fn is_switch_screen(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab)
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }
}
