use crate::styles::theme;
use ratatui::prelude::*;

/// Get the border style for a focused pane or control
pub fn focused_border_style() -> Style {
    theme().border_focused_style()
}

/// Get the border style for an unfocused pane or control
pub fn unfocused_border_style() -> Style {
    theme().border_style()
}

/// Get the border style for a disabled control
pub fn disabled_border_style() -> Style {
    theme().disabled_style()
}

/// Get the text style for a disabled control
pub fn disabled_text_style() -> Style {
    theme().disabled_style()
}

/// Get the text style for placeholder text
pub fn input_placeholder_style() -> Style {
    theme().muted_style()
}

/// Get the text style for normal input text
pub fn input_text_style() -> Style {
    theme().text_style()
}
