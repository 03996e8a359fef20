//! Chip row widget: a horizontal, single-select category filter.
//!
//! The active chip is tracked as a single index, so exactly one chip is
//! active at any time. The cursor (which chip activation applies to) is
//! tracked separately so moving focus does not change the selection.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

/// State for the chip row widget
#[derive(Debug, Clone)]
pub struct ChipRowState {
    /// Chip the cursor is on (activation target)
    cursor: usize,
    /// Currently active chip (exclusive selection)
    active: usize,
    /// Number of chips, used for clamping
    len: usize,
}

impl ChipRowState {
    /// Create a new state over `len` chips with the first chip active.
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            active: 0,
            len,
        }
    }

    /// Chip index the cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the active (selected) chip.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Move the cursor left, stopping at the first chip.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor right, stopping at the last chip.
    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    /// Activate the chip under the cursor, deactivating the previous one.
    ///
    /// Returns the newly active index.
    pub fn activate(&mut self) -> usize {
        self.active = self.cursor;
        self.active
    }
}

/// Chip row widget rendering labels as a single line of pills
#[derive(Debug, Clone)]
pub struct ChipRow<'a> {
    labels: &'a [&'a str],
    /// Whether the row has keyboard focus (shows the cursor highlight)
    focused: bool,
}

impl<'a> ChipRow<'a> {
    /// Create a new chip row over the given labels.
    pub fn new(labels: &'a [&'a str]) -> Self {
        Self {
            labels,
            focused: false,
        }
    }

    /// Set whether the row has keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for ChipRow<'_> {
    type State = ChipRowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();
        let mut spans: Vec<Span> = Vec::new();

        for (i, label) in self.labels.iter().enumerate() {
            let is_active = state.active == i;
            let is_cursor = self.focused && state.cursor == i;

            let mut style = if is_active {
                Style::default()
                    .fg(t.background)
                    .bg(t.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.text).bg(t.highlight_bg)
            };
            if is_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }

            spans.push(Span::styled(format!(" {} ", label), style));
            spans.push(Span::raw(" "));
        }

        Line::from(spans).render(area, buf);
    }
}
