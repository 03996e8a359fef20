//! Sign Up screen.
//!
//! Form with name, email, password and confirm-password fields, a terms
//! checkbox that gates the submit control, two placeholder social buttons
//! and a link to the Sign In screen. All values are transient; nothing is
//! submitted anywhere.

use crate::keymap::Action;
use crate::screens::screen_trait::{
    RenderContext, Screen, ScreenAction, ScreenContext, ScreenId,
};
use crate::styles::theme;
use crate::utils::{
    create_standard_layout, disabled_border_style, focused_border_style, unfocused_border_style,
    TextInput,
};
use crate::widgets::{Footer, Header, TextInputWidget, TextInputWidgetExt, Toast};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Focusable controls on the sign up screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpField {
    #[default]
    Name,
    Email,
    Password,
    Confirm,
    Terms,
    Submit,
    Google,
    Facebook,
    SignInLink,
}

impl SignUpField {
    fn next(self) -> SignUpField {
        match self {
            SignUpField::Name => SignUpField::Email,
            SignUpField::Email => SignUpField::Password,
            SignUpField::Password => SignUpField::Confirm,
            SignUpField::Confirm => SignUpField::Terms,
            SignUpField::Terms => SignUpField::Submit,
            SignUpField::Submit => SignUpField::Google,
            SignUpField::Google => SignUpField::Facebook,
            SignUpField::Facebook => SignUpField::SignInLink,
            SignUpField::SignInLink => SignUpField::Name,
        }
    }

    fn prev(self) -> SignUpField {
        match self {
            SignUpField::Name => SignUpField::SignInLink,
            SignUpField::Email => SignUpField::Name,
            SignUpField::Password => SignUpField::Email,
            SignUpField::Confirm => SignUpField::Password,
            SignUpField::Terms => SignUpField::Confirm,
            SignUpField::Submit => SignUpField::Terms,
            SignUpField::Google => SignUpField::Submit,
            SignUpField::Facebook => SignUpField::Google,
            SignUpField::SignInLink => SignUpField::Facebook,
        }
    }

    /// Whether this control is an editable text field
    fn is_text(self) -> bool {
        matches!(
            self,
            SignUpField::Name | SignUpField::Email | SignUpField::Password | SignUpField::Confirm
        )
    }
}

/// Sign up screen state
#[derive(Debug, Default)]
pub struct SignUpState {
    pub name_input: TextInput,
    pub email_input: TextInput,
    pub password_input: TextInput,
    pub confirm_input: TextInput,
    pub terms_accepted: bool,
    pub field: SignUpField,
}

/// Sign up screen controller
#[derive(Default)]
pub struct SignUpScreen {
    state: SignUpState,
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the screen state (fresh mount)
    pub fn reset(&mut self) {
        self.state = SignUpState::default();
    }

    /// Read-only state access
    pub fn state(&self) -> &SignUpState {
        &self.state
    }

    /// The submit control is disabled until the terms checkbox is checked.
    fn submit_enabled(&self) -> bool {
        self.state.terms_accepted
    }

    fn current_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.state.field {
            SignUpField::Name => Some(&mut self.state.name_input),
            SignUpField::Email => Some(&mut self.state.email_input),
            SignUpField::Password => Some(&mut self.state.password_input),
            SignUpField::Confirm => Some(&mut self.state.confirm_input),
            _ => None,
        }
    }

    /// Validate and submit the form.
    fn handle_submit(&mut self) -> Result<ScreenAction> {
        // Disabled submit is a no-op, same as a disabled form button.
        if !self.submit_enabled() {
            return Ok(ScreenAction::None);
        }

        let name = self.state.name_input.text_trimmed().to_string();
        let email = self.state.email_input.text_trimmed().to_string();
        let password = self.state.password_input.text().to_string();
        let confirm = self.state.confirm_input.text().to_string();

        if name.is_empty()
            || email.is_empty()
            || password.is_empty()
            || password != confirm
            || !self.state.terms_accepted
        {
            return Ok(ScreenAction::ShowToast(Toast::error(
                "Please complete all fields correctly and accept the terms.",
            )));
        }

        Ok(ScreenAction::NavigateWithToast {
            screen: ScreenId::Home,
            toast: Toast::success(format!("Sign Up submitted: {} <{}>", name, email)),
        })
    }

    /// Activate the focused control (Enter).
    fn handle_confirm(&mut self) -> Result<ScreenAction> {
        match self.state.field {
            SignUpField::Terms => {
                self.state.terms_accepted = !self.state.terms_accepted;
                Ok(ScreenAction::None)
            }
            SignUpField::Google => Ok(ScreenAction::ShowToast(Toast::info(
                "Google sign-in clicked (placeholder).",
            ))),
            SignUpField::Facebook => Ok(ScreenAction::ShowToast(Toast::info(
                "Facebook sign-in clicked (placeholder).",
            ))),
            SignUpField::SignInLink => Ok(ScreenAction::Navigate(ScreenId::SignIn)),
            // Enter in a text field or on the button submits the form
            _ => self.handle_submit(),
        }
    }

    fn render_checkbox(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.state.field == SignUpField::Terms;
        let mark = if self.state.terms_accepted { "x" } else { " " };

        let mut style = t.text_style();
        if focused {
            style = t.highlight_style();
        }

        let line = Line::from(vec![
            Span::styled(format!("[{}] ", mark), style.add_modifier(Modifier::BOLD)),
            Span::styled("Accept terms & Condition", style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.state.field == SignUpField::Submit;
        let enabled = self.submit_enabled();

        let border_style = if !enabled {
            disabled_border_style()
        } else if focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        };

        let label_style = if enabled {
            t.title_style()
        } else {
            t.disabled_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let label = Paragraph::new("Sign Up →")
            .style(label_style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(label, area);
    }

    fn render_social_row(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(50),
            ])
            .split(area);

        for (i, (label, field)) in [
            ("G  Google", SignUpField::Google),
            ("f  Facebook", SignUpField::Facebook),
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

    fn render_signin_link(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.state.field == SignUpField::SignInLink;
        let style = if focused {
            t.highlight_style().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(t.accent)
        };
        let para = Paragraph::new(Span::styled("Already a member? Sign In", style))
            .alignment(Alignment::Center);
        frame.render_widget(para, area);
    }
}

impl Screen for SignUpScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 4, 2);

        Header::render(
            frame,
            header_chunk,
            "Create an account",
            "Let's help you set up your account, it won't take long.",
        )?;

        // Center the form column
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
                Constraint::Length(3), // Name
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(3), // Confirm
                Constraint::Length(1), // Terms
                Constraint::Length(3), // Submit
                Constraint::Length(1), // Or line
                Constraint::Length(3), // Social buttons
                Constraint::Length(1), // Sign in link
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let name = TextInputWidget::new(&self.state.name_input)
            .title("Name")
            .placeholder("Enter Name")
            .focused(self.state.field == SignUpField::Name);
        frame.render_text_input_widget(name, fields[0]);

        let email = TextInputWidget::new(&self.state.email_input)
            .title("Email")
            .placeholder("Enter Email")
            .focused(self.state.field == SignUpField::Email);
        frame.render_text_input_widget(email, fields[1]);

        let password = TextInputWidget::new(&self.state.password_input)
            .title("Password")
            .placeholder("Enter Password")
            .masked(true)
            .focused(self.state.field == SignUpField::Password);
        frame.render_text_input_widget(password, fields[2]);

        let confirm = TextInputWidget::new(&self.state.confirm_input)
            .title("Confirm Password")
            .placeholder("Retype Password")
            .masked(true)
            .focused(self.state.field == SignUpField::Confirm);
        frame.render_text_input_widget(confirm, fields[3]);

        self.render_checkbox(frame, fields[4]);
        self.render_submit(frame, fields[5]);

        let or_line = Paragraph::new("─── Or Sign in With ───")
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(or_line, fields[6]);

        self.render_social_row(frame, fields[7]);
        self.render_signin_link(frame, fields[8]);

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "{}: Fields | {}: Submit | Space: Terms | {}: Sign In | {}: Theme",
            keymap.navigation_display(),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.get_key_display_for_action(Action::ShowSignIn),
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

        // For plain character keys, insert into the focused text field first
        // so letter bindings like 'q' don't interfere with typing.
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
                // Esc leaves the text fields so global keys work again
                self.state.field = SignUpField::Submit;
                Ok(ScreenAction::None)
            }
            Some(Action::ToggleSelect) => {
                if self.state.field == SignUpField::Terms {
                    self.state.terms_accepted = !self.state.terms_accepted;
                }
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
        assert_eq!(SignUpField::Name.next(), SignUpField::Email);
        assert_eq!(SignUpField::SignInLink.next(), SignUpField::Name);
        assert_eq!(SignUpField::Name.prev(), SignUpField::SignInLink);
    }

    #[test]
    fn test_text_fields() {
        assert!(SignUpField::Name.is_text());
        assert!(SignUpField::Confirm.is_text());
        assert!(!SignUpField::Terms.is_text());
        assert!(!SignUpField::Submit.is_text());
    }

    #[test]
    fn test_default_state() {
        let screen = SignUpScreen::new();
        assert_eq!(screen.state.field, SignUpField::Name);
        assert!(!screen.state.terms_accepted);
        assert!(!screen.submit_enabled());
    }
}
