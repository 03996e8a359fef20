//! Home screen.
//!
//! Greeting, search field, filter button, single-select category chips,
//! the static "New Recipes" list and the "Popular" cards with per-card
//! bookmark toggles. No navigation originates here; screen switching is
//! done with the global keys.

use crate::catalog::{
    CHIP_LABELS, GREETING_SUBTITLE, GREETING_TITLE, NEW_RECIPES, POPULAR_DISHES,
};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{
    create_standard_layout, focused_border_style, unfocused_border_style, TextInput,
};
use crate::widgets::{ChipRow, ChipRowState, Footer, Header, TextInputWidget, TextInputWidgetExt, Toast};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Focus areas on the home screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    Search,
    Filter,
    #[default]
    Chips,
    Popular,
}

impl HomeFocus {
    fn next(self) -> HomeFocus {
        match self {
            HomeFocus::Search => HomeFocus::Filter,
            HomeFocus::Filter => HomeFocus::Chips,
            HomeFocus::Chips => HomeFocus::Popular,
            HomeFocus::Popular => HomeFocus::Search,
        }
    }

    fn prev(self) -> HomeFocus {
        match self {
            HomeFocus::Search => HomeFocus::Popular,
            HomeFocus::Filter => HomeFocus::Search,
            HomeFocus::Chips => HomeFocus::Filter,
            HomeFocus::Popular => HomeFocus::Chips,
        }
    }
}

/// Home screen state
#[derive(Debug)]
pub struct HomeState {
    pub focus: HomeFocus,
    pub search_input: TextInput,
    pub chips: ChipRowState,
    /// Cursor over the popular cards
    pub popular_cursor: usize,
    /// One independent bookmark flag per popular card
    pub bookmarks: Vec<bool>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            focus: HomeFocus::default(),
            search_input: TextInput::default(),
            chips: ChipRowState::new(CHIP_LABELS.len()),
            popular_cursor: 0,
            bookmarks: vec![false; POPULAR_DISHES.len()],
        }
    }
}

/// Home screen controller
#[derive(Default)]
pub struct HomeScreen {
    state: HomeState,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the screen state (fresh mount)
    pub fn reset(&mut self) {
        self.state = HomeState::default();
    }

    /// Read-only state access
    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// Activate the control under the cursor (Enter or Space).
    fn handle_activate(&mut self) -> Result<ScreenAction> {
        match self.state.focus {
            // The search field has no submit behavior in the mockup
            HomeFocus::Search => Ok(ScreenAction::None),
            HomeFocus::Filter => Ok(ScreenAction::ShowToast(Toast::info(
                "Open filter (placeholder).",
            ))),
            HomeFocus::Chips => {
                let active = self.state.chips.activate();
                Ok(ScreenAction::ShowToast(Toast::info(format!(
                    "Filter by: {}",
                    CHIP_LABELS[active]
                ))))
            }
            HomeFocus::Popular => {
                let i = self.state.popular_cursor;
                self.state.bookmarks[i] = !self.state.bookmarks[i];
                Ok(ScreenAction::None)
            }
        }
    }

    fn move_left(&mut self) {
        match self.state.focus {
            HomeFocus::Search => self.state.search_input.move_left(),
            HomeFocus::Chips => self.state.chips.move_left(),
            HomeFocus::Popular => {
                self.state.popular_cursor = self.state.popular_cursor.saturating_sub(1);
            }
            HomeFocus::Filter => {}
        }
    }

    fn move_right(&mut self) {
        match self.state.focus {
            HomeFocus::Search => self.state.search_input.move_right(),
            HomeFocus::Chips => self.state.chips.move_right(),
            HomeFocus::Popular => {
                if self.state.popular_cursor + 1 < POPULAR_DISHES.len() {
                    self.state.popular_cursor += 1;
                }
            }
            HomeFocus::Filter => {}
        }
    }

    fn render_search_row(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(10)])
            .split(area);

        let search = TextInputWidget::new(&self.state.search_input)
            .title("Search")
            .placeholder("Search recipe")
            .focused(self.state.focus == HomeFocus::Search);
        frame.render_text_input_widget(search, row[0]);

        let filter_focused = self.state.focus == HomeFocus::Filter;
        let border_style = if filter_focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        };
        let filter = Paragraph::new("Filter")
            .style(t.text_style())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(filter, row[1]);
    }

    fn render_new_recipes(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut lines = vec![Line::from(Span::styled("New Recipes", t.title_style()))];

        for recipe in NEW_RECIPES {
            let stars = "★".repeat(recipe.rating as usize);
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", recipe.title), t.text_style()),
                Span::styled(format!("  {} mins", recipe.minutes), t.muted_style()),
                Span::styled(format!("  By {}", recipe.author), t.muted_style()),
                Span::styled(format!("  {}", stars), t.emphasis_style()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_popular(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled("Popular", t.title_style())),
            chunks[0],
        );

        let constraints: Vec<Constraint> = POPULAR_DISHES
            .iter()
            .map(|_| Constraint::Ratio(1, POPULAR_DISHES.len() as u32))
            .collect();
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[1]);

        for (i, dish) in POPULAR_DISHES.iter().enumerate() {
            let is_cursor = self.state.focus == HomeFocus::Popular && self.state.popular_cursor == i;
            let bookmarked = self.state.bookmarks[i];

            let border_style = if is_cursor {
                focused_border_style()
            } else {
                unfocused_border_style()
            };

            let bookmark_span = if bookmarked {
                Span::styled("⚑ saved", t.success_style().add_modifier(Modifier::BOLD))
            } else {
                Span::styled("⚐", t.muted_style())
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("★ {:.1}  ", dish.rating), t.emphasis_style()),
                    bookmark_span,
                ]),
                Line::from(Span::styled(dish.title, t.text_style())),
                Line::from(Span::styled(
                    format!("Time: {} Mins", dish.minutes),
                    t.muted_style(),
                )),
            ];

            let card = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(card, cards[i]);
        }
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 4, 2);

        Header::render(frame, header_chunk, GREETING_TITLE, GREETING_SUBTITLE)?;

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                           // Search + filter
                Constraint::Length(1),                           // Chips
                Constraint::Length(1),                           // Spacer
                Constraint::Length(NEW_RECIPES.len() as u16 + 1), // New recipes
                Constraint::Min(6),                              // Popular cards
            ])
            .split(content_chunk);

        self.render_search_row(frame, sections[0]);

        let chips = ChipRow::new(CHIP_LABELS).focused(self.state.focus == HomeFocus::Chips);
        frame.render_stateful_widget(chips, sections[1], &mut self.state.chips);

        self.render_new_recipes(frame, sections[3]);
        self.render_popular(frame, sections[4]);

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "{}: Section | ←/→: Move | {}: Select | {}: Sign Up | {}: Theme | {}: Quit",
            keymap.get_key_display_for_action(Action::NextTab),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.get_key_display_for_action(Action::ShowSignUp),
            keymap.get_key_display_for_action(Action::ToggleTheme),
            keymap.get_key_display_for_action(Action::Quit),
        );
        Footer::render(frame, footer_chunk, &footer_text)?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        // Plain characters go into the search field while it is focused.
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                && self.state.focus == HomeFocus::Search
            {
                self.state.search_input.insert_char(c);
                return Ok(ScreenAction::None);
            }
        }

        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.state.focus = self.state.focus.next();
                Ok(ScreenAction::None)
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.state.focus = self.state.focus.prev();
                Ok(ScreenAction::None)
            }
            Some(Action::Cancel) => {
                self.state.focus = HomeFocus::Chips;
                Ok(ScreenAction::None)
            }
            Some(Action::MoveLeft) => {
                self.move_left();
                Ok(ScreenAction::None)
            }
            Some(Action::MoveRight) => {
                self.move_right();
                Ok(ScreenAction::None)
            }
            Some(Action::Confirm | Action::ToggleSelect) => self.handle_activate(),
            Some(act @ (Action::Backspace | Action::DeleteChar | Action::Home | Action::End)) => {
                if self.state.focus == HomeFocus::Search {
                    self.state.search_input.handle_action(act);
                }
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.state.focus == HomeFocus::Search
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_tab_order_wraps() {
        assert_eq!(HomeFocus::Search.next(), HomeFocus::Filter);
        assert_eq!(HomeFocus::Popular.next(), HomeFocus::Search);
        assert_eq!(HomeFocus::Search.prev(), HomeFocus::Popular);
    }

    #[test]
    fn test_default_state() {
        let screen = HomeScreen::new();
        assert_eq!(screen.state.focus, HomeFocus::Chips);
        assert_eq!(screen.state.chips.active(), 0);
        assert!(screen.state.bookmarks.iter().all(|b| !b));
        assert_eq!(screen.state.bookmarks.len(), POPULAR_DISHES.len());
    }

    #[test]
    fn test_popular_cursor_clamps() {
        let mut screen = HomeScreen::new();
        screen.state.focus = HomeFocus::Popular;
        screen.move_left();
        assert_eq!(screen.state.popular_cursor, 0);
        for _ in 0..20 {
            screen.move_right();
        }
        assert_eq!(screen.state.popular_cursor, POPULAR_DISHES.len() - 1);
    }
}
