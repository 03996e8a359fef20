//! Preset keymaps: Standard, Vim
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Vim-style navigation (hjkl, etc.)
    Vim,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("ctrl+t", Action::ToggleTheme),
        KeyBinding::new("f1", Action::ShowSignUp),
        KeyBinding::new("f2", Action::ShowSignIn),
        KeyBinding::new("f3", Action::ShowHome),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        // Tab navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
    ]
}

/// Vim-style bindings (hjkl plus the standard keys)
fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("$", Action::End),
        KeyBinding::new("end", Action::End),
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("ctrl+t", Action::ToggleTheme),
        KeyBinding::new("f1", Action::ShowSignUp),
        KeyBinding::new("f2", Action::ShowSignIn),
        KeyBinding::new("f3", Action::ShowHome),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("x", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
        // Tab navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn action_for(preset: KeymapPreset, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        preset
            .bindings()
            .into_iter()
            .find(|b| b.matches(code, modifiers))
            .map(|b| b.action)
    }

    #[test]
    fn test_standard_core_bindings() {
        assert_eq!(
            action_for(KeymapPreset::Standard, KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Confirm)
        );
        assert_eq!(
            action_for(
                KeymapPreset::Standard,
                KeyCode::Char(' '),
                KeyModifiers::NONE
            ),
            Some(Action::ToggleSelect)
        );
        assert_eq!(
            action_for(
                KeymapPreset::Standard,
                KeyCode::Char('t'),
                KeyModifiers::CONTROL
            ),
            Some(Action::ToggleTheme)
        );
    }

    #[test]
    fn test_screen_switch_keys_in_both_presets() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim] {
            assert_eq!(
                action_for(preset, KeyCode::F(1), KeyModifiers::NONE),
                Some(Action::ShowSignUp)
            );
            assert_eq!(
                action_for(preset, KeyCode::F(2), KeyModifiers::NONE),
                Some(Action::ShowSignIn)
            );
            assert_eq!(
                action_for(preset, KeyCode::F(3), KeyModifiers::NONE),
                Some(Action::ShowHome)
            );
        }
    }

    #[test]
    fn test_vim_adds_hjkl() {
        assert_eq!(
            action_for(KeymapPreset::Vim, KeyCode::Char('h'), KeyModifiers::NONE),
            Some(Action::MoveLeft)
        );
        assert_eq!(
            action_for(KeymapPreset::Vim, KeyCode::Char('l'), KeyModifiers::NONE),
            Some(Action::MoveRight)
        );
        // Standard does not bind hjkl
        assert_eq!(
            action_for(
                KeymapPreset::Standard,
                KeyCode::Char('h'),
                KeyModifiers::NONE
            ),
            None
        );
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
    }
}
