//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation (unified across screens) ============
    /// Move focus up (previous field or control)
    MoveUp,
    /// Move focus down (next field or control)
    MoveDown,
    /// Move left (chip/card cursor, text cursor)
    MoveLeft,
    /// Move right (chip/card cursor, text cursor)
    MoveRight,
    /// Jump to start of line/input
    Home,
    /// Jump to end of line/input
    End,

    // ============ Selection & Confirmation ============
    /// Confirm / activate the focused control (Enter)
    Confirm,
    /// Cancel / clear (Esc)
    Cancel,
    /// Toggle the focused checkbox or bookmark (Space)
    ToggleSelect,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Flip between the light and dark theme
    ToggleTheme,
    /// Jump directly to the Sign Up screen
    ShowSignUp,
    /// Jump directly to the Sign In screen
    ShowSignIn,
    /// Jump directly to the Home screen
    ShowHome,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Tab/Field navigation ============
    /// Move to next field or focus area
    NextTab,
    /// Move to previous field or focus area
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel",
            Action::ToggleSelect => "Toggle",
            Action::Quit => "Quit",
            Action::ToggleTheme => "Toggle theme",
            Action::ShowSignUp => "Go to Sign Up",
            Action::ShowSignIn => "Go to Sign In",
            Action::ShowHome => "Go to Home",
            Action::Backspace => "Delete backwards",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions_are_nonempty() {
        let actions = [
            Action::MoveUp,
            Action::Confirm,
            Action::ToggleTheme,
            Action::ShowHome,
            Action::PrevTab,
        ];
        for action in actions {
            assert!(!action.description().is_empty());
        }
    }

    #[test]
    fn test_serde_snake_case_names() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "action",
            Action::ToggleTheme,
        )]))
        .unwrap();
        assert!(toml.contains("toggle_theme"));
    }
}
