//! Sign In screen.
//!
//! Email and password fields, a "forgot password" placeholder link, two
//! placeholder social buttons and a link to the Sign Up screen.

use crate::keymap::Action;
use crate::screens::screen_trait::{
    RenderContext, Screen, ScreenAction, ScreenContext, ScreenId,
};
use crate::styles::theme;
use crate::utils::{
    create_standard_layout, focused_border_style, unfocused_border_style, TextInput,
};
use crate::widgets::{Footer, Header, TextInputWidget, TextInputWidgetExt, Toast};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Focusable controls on the sign in screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInField {
    #[default]
    Email,
    Password,
    Forgot,
    Submit,
    Google,
    Facebook,
    SignUpLink,
}

impl SignInField {
    fn next(self) -> SignInField {
        match self {
            SignInField::Email => SignInField::Password,
            SignInField::Password => SignInField::Forgot,
            SignInField::Forgot => SignInField::Submit,
            SignInField::Submit => SignInField::Google,
            SignInField::Google => SignInField::Facebook,
            SignInField::Facebook => SignInField::SignUpLink,
            SignInField::SignUpLink => SignInField::Email,
        }
    }

    fn prev(self) -> SignInField {
        match self {
            SignInField::Email => SignInField::SignUpLink,
            SignInField::Password => SignInField::Email,
            SignInField::Forgot => SignInField::Password,
            SignInField::Submit => SignInField::Forgot,
            SignInField::Google => SignInField::Submit,
            SignInField::Facebook => SignInField::Google,
            SignInField::SignUpLink => SignInField::Facebook,
        }
    }

    /// Whether this control is an editable text field
    fn is_text(self) -> bool {
        matches!(self, SignInField::Email | SignInField::Password)
    }
}

/// Sign in screen state
#[derive(Debug, Default)]
pub struct SignInState {
    pub email_input: TextInput,
    pub password_input: TextInput,
    pub field: SignInField,
}

/// Sign in screen controller
#[derive(Default)]
pub struct SignInScreen {
    state: SignInState,
}

impl SignInScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the screen state (fresh mount)
    pub fn reset(&mut self) {
        self.state = SignInState::default();
    }

    /// Read-only state access
    pub fn state(&self) -> &SignInState {
        &self.state
    }

    fn current_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.state.field {
            SignInField::Email => Some(&mut self.state.email_input),
            SignInField::Password => Some(&mut self.state.password_input),
            _ => None,
        }
    }

    /// Validate and submit the form.
    fn handle_submit(&mut self) -> Result<ScreenAction> {
        let email = self.state.email_input.text_trimmed().to_string();
        let password = self.state.password_input.text().to_string();

        if email.is_empty() || password.is_empty() {
            return Ok(ScreenAction::ShowToast(Toast::error(
                "Please enter both email and password.",
            )));
        }

        Ok(ScreenAction::NavigateWithToast {
            screen: ScreenId::Home,
            toast: Toast::success(format!("Sign In submitted: {}", email)),
        })
    }

    /// Activate the focused control (Enter).
    fn handle_confirm(&mut self) -> Result<ScreenAction> {
        match self.state.field {
            SignInField::Forgot => Ok(ScreenAction::ShowToast(Toast::info(
                "Navigate to Forgot Password (placeholder).",
            ))),
            SignInField::Google => Ok(ScreenAction::ShowToast(Toast::info(
                "Google sign-in clicked (placeholder).",
            ))),
            SignInField::Facebook => Ok(ScreenAction::ShowToast(Toast::info(
                "Facebook sign-in clicked (placeholder).",
            ))),
            SignInField::SignUpLink => Ok(ScreenAction::Navigate(ScreenId::SignUp)),
            // Enter in a text field or on the button submits the form
            _ => self.handle_submit(),
        }
    }

    fn render_link(&self, frame: &mut Frame, area: Rect, text: &str, focused: bool) {
        let t = theme();
        let style = if focused {
            t.highlight_style().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(t.accent)
        };
        let para = Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center);
        frame.render_widget(para, area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.state.field == SignInField::Submit;
        let border_style = if focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let label = Paragraph::new("Sign In →")
            .style(t.title_style())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(label, area);
    }

    fn render_social_row(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (i, (label, field)) in [
            ("G  Google", SignInField::Google),
            ("f  Facebook", SignInField::Facebook),
        ]
        .into_iter()
        .enumerate()
        {
            let focused = self.state.field == field;
            let border_style = if focused {
                focused_border_style()
            } else {
                unfocused_border_style()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let para = Paragraph::new(label)
                .style(t.text_style())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(para, buttons[i]);
        }
    }
}

impl Screen for SignInScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 4, 2);

        Header::render(frame, header_chunk, "Hello,", "Welcome Back!")?;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(46),
                Constraint::Min(1),
            ])
            .split(content_chunk);

        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(1), // Forgot link
                Constraint::Length(3), // Submit
                Constraint::Length(1), // Or line
                Constraint::Length(3), // Social buttons
                Constraint::Length(1), // Sign up link
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let email = TextInputWidget::new(&self.state.email_input)
            .title("Email")
            .placeholder("Enter Email")
            .focused(self.state.field == SignInField::Email);
        frame.render_text_input_widget(email, fields[0]);

        let password = TextInputWidget::new(&self.state.password_input)
            .title("Enter Password")
            .placeholder("Enter Password")
            .masked(true)
            .focused(self.state.field == SignInField::Password);
        frame.render_text_input_widget(password, fields[1]);

        self.render_link(
            frame,
            fields[2],
            "Forgot Password?",
            self.state.field == SignInField::Forgot,
        );
        self.render_submit(frame, fields[3]);

        let or_line = Paragraph::new("─── Or Sign in With ───")
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(or_line, fields[4]);

        self.render_social_row(frame, fields[5]);
        self.render_link(
            frame,
            fields[6],
            "Don't have an account? Sign up",
            self.state.field == SignInField::SignUpLink,
        );

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "{}: Fields | {}: Submit | {}: Sign Up | {}: Theme",
            keymap.navigation_display(),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.get_key_display_for_action(Action::ShowSignUp),
            keymap.get_key_display_for_action(Action::ToggleTheme),
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

        // Plain characters go to the focused text field first.
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                && self.state.field.is_text()
            {
                if let Some(input) = self.current_input_mut() {
                    input.insert_char(c);
                }
                return Ok(ScreenAction::None);
            }
        }

        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.state.field = self.state.field.next();
                Ok(ScreenAction::None)
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.state.field = self.state.field.prev();
                Ok(ScreenAction::None)
            }
            Some(Action::Cancel) => {
                self.state.field = SignInField::Submit;
                Ok(ScreenAction::None)
            }
            Some(Action::Confirm) => self.handle_confirm(),
            Some(
                act @ (Action::Backspace
                | Action::DeleteChar
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End),
            ) => {
                if let Some(input) = self.current_input_mut() {
                    input.handle_action(act);
                }
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.state.field.is_text()
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
    fn test_field_tab_order_wraps() {
        assert_eq!(SignInField::Email.next(), SignInField::Password);
        assert_eq!(SignInField::SignUpLink.next(), SignInField::Email);
        assert_eq!(SignInField::Email.prev(), SignInField::SignUpLink);
    }

    #[test]
    fn test_text_fields() {
        assert!(SignInField::Email.is_text());
        assert!(SignInField::Password.is_text());
        assert!(!SignInField::Forgot.is_text());
    }

    #[test]
    fn test_default_state() {
        let screen = SignInScreen::new();
        assert_eq!(screen.state.field, SignInField::Email);
        assert!(screen.state.email_input.is_empty());
    }
}
