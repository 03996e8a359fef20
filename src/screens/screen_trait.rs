//! Screen trait and associated types.
//!
//! Screens are self-contained controllers: they own their transient state,
//! render themselves, and handle input events while mounted. Navigation and
//! notifications are requested by *returning* a [`ScreenAction`] from
//! `handle_event`; screens never reference each other and never touch
//! app-level state directly.

use crate::config::Config;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::str::FromStr;

/// Identifier for the three previewed screens.
///
/// This is a closed set: a navigation request can only name one of these,
/// so navigating to an unknown screen is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    SignUp,
    SignIn,
    Home,
}

impl ScreenId {
    /// Human-readable name for logging and the header.
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::SignUp => "Sign Up",
            ScreenId::SignIn => "Sign In",
            ScreenId::Home => "Home",
        }
    }
}

impl FromStr for ScreenId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "signup" => Ok(ScreenId::SignUp),
            "signin" => Ok(ScreenId::SignIn),
            "home" => Ok(ScreenId::Home),
            other => Err(format!("unknown screen: {}", other)),
        }
    }
}

/// Context provided for rendering screens.
///
/// Read-only access to shared resources needed during a draw.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration (keymap lookups).
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Actions that a screen can return after handling an event.
///
/// This is the action-return form of the original mockups' `onNavigate`
/// callback plus the notify capability: the app applies the action, the
/// screen never mutates global state.
#[derive(Debug, Clone)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Show a transient toast notification.
    ShowToast(Toast),
    /// Show a toast and navigate in the same step (e.g. successful submit).
    NavigateWithToast { screen: ScreenId, toast: Toast },
}

impl Default for ScreenAction {
    fn default() -> Self {
        Self::None
    }
}

/// Trait for screen controllers.
///
/// Screens own their state and handle both rendering and events in a
/// self-contained way. The app resets a screen and calls `on_enter` each
/// time it is navigated to, so remounted screens start from fresh state.
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    ///
    /// Returns an action indicating what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, plain-letter global keybindings are disabled so users can
    /// type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen is exited (navigated away from).
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_id_from_str() {
        assert_eq!("signup".parse::<ScreenId>().unwrap(), ScreenId::SignUp);
        assert_eq!("sign-in".parse::<ScreenId>().unwrap(), ScreenId::SignIn);
        assert_eq!("HOME".parse::<ScreenId>().unwrap(), ScreenId::Home);
        assert!("profile".parse::<ScreenId>().is_err());
    }

    #[test]
    fn test_screen_id_names() {
        assert_eq!(ScreenId::SignUp.name(), "Sign Up");
        assert_eq!(ScreenId::SignIn.name(), "Sign In");
        assert_eq!(ScreenId::Home.name(), "Home");
    }
}
