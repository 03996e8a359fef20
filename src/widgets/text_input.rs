//! Text input widget for rendering TextInput instances.
//!
//! Provides a centralized way to render text input fields with:
//! - Consistent styling across the application
//! - Cursor positioning when focused
//! - Placeholder text support
//! - Password masking
//! - Disabled state support

use crate::utils::text_input::TextInput;
use crate::utils::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering a [`TextInput`] with consistent styling.
///
/// # Example
/// ```
/// use plateful::widgets::TextInputWidget;
/// use plateful::utils::TextInput;
///
/// let input = TextInput::with_text("a@x.com");
/// let widget = TextInputWidget::new(&input)
///     .title("Email")
///     .placeholder("Enter Email")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    /// Reference to the text input state
    input: &'a TextInput,
    /// Title for the input field
    title: Option<&'a str>,
    /// Placeholder text when empty
    placeholder: Option<&'a str>,
    /// Whether the input is focused
    focused: bool,
    /// Whether the input is disabled
    disabled: bool,
    /// Whether to mask the text (for passwords)
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    /// Create a new text input widget.
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
            masked: false,
        }
    }

    /// Set the title for the input field.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set whether the input is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether the input is disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            // Mask with bullets (same length as actual text)
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    /// Get the text style based on state.
    fn text_style(&self) -> Style {
        if self.disabled {
            disabled_text_style()
        } else if self.input.text().is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    /// Get the border style based on state.
    fn border_style(&self) -> Style {
        if self.disabled {
            disabled_border_style()
        } else if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        }
    }

    /// Create the block for the input.
    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }

        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let paragraph = Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style());
        paragraph.render(area, buf);
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// Since the Widget trait doesn't have access to Frame, we need this extension
/// to properly set the cursor position.
pub trait TextInputWidgetExt {
    /// Render a TextInputWidget and set cursor position if focused.
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let disabled = widget.disabled;
        let cursor_pos = widget.input.cursor();
        let char_count = widget.input.text().chars().count();

        let inner = widget.create_block().inner(area);

        self.render_widget(widget, area);

        if focused && !disabled {
            let clamped_cursor = cursor_pos.min(char_count);
            let x = inner.x + clamped_cursor.min(inner.width as usize) as u16;
            let y = inner.y;
            self.set_cursor_position((x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_builder() {
        let input = TextInput::with_text("test");
        let widget = TextInputWidget::new(&input)
            .title("Password")
            .placeholder("Enter Password")
            .focused(true)
            .masked(true);

        assert!(widget.focused);
        assert!(!widget.disabled);
        assert!(widget.masked);
        assert_eq!(widget.title, Some("Password"));
    }

    #[test]
    fn test_display_text_empty_shows_placeholder() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Enter Name");
        assert_eq!(widget.display_text(), "Enter Name");
    }

    #[test]
    fn test_display_text_masked() {
        let input = TextInput::with_text("password1");
        let widget = TextInputWidget::new(&input).masked(true);
        assert_eq!(widget.display_text(), "•••••••••");
        assert_eq!(widget.display_text().chars().count(), 9);
    }

    #[test]
    fn test_display_text_normal() {
        let input = TextInput::with_text("hello");
        let widget = TextInputWidget::new(&input);
        assert_eq!(widget.display_text(), "hello");
    }
}
