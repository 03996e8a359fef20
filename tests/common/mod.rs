//! Shared test utilities for workflow integration tests.
//!
//! Screens are driven the same way the app drives them: one crossterm key
//! event in, one `ScreenAction` out. The helpers here build those events
//! and collect the returned actions so tests can assert on them directly.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use plateful::config::Config;
use plateful::screens::{Screen, ScreenAction, ScreenContext};

/// Build a key press event the way crossterm reports it (Shift+Tab comes
/// in as BackTab with the shift modifier set).
pub fn key(code: KeyCode) -> Event {
    let modifiers = if code == KeyCode::BackTab {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    Event::Key(KeyEvent::new(code, modifiers))
}

/// Press a single key on a screen and return the resulting action.
pub fn press(screen: &mut dyn Screen, config: &Config, code: KeyCode) -> ScreenAction {
    let ctx = ScreenContext::new(config);
    screen
        .handle_event(key(code), &ctx)
        .expect("event handling failed")
}

/// Type a string into the currently focused text field.
pub fn type_text(screen: &mut dyn Screen, config: &Config, text: &str) {
    for c in text.chars() {
        press(screen, config, KeyCode::Char(c));
    }
}

/// Press Tab a number of times to move focus.
pub fn tab(screen: &mut dyn Screen, config: &Config, times: usize) {
    for _ in 0..times {
        press(screen, config, KeyCode::Tab);
    }
}

/// Whether an action navigates anywhere (plain or with a toast).
pub fn navigates(action: &ScreenAction) -> bool {
    matches!(
        action,
        ScreenAction::Navigate(_) | ScreenAction::NavigateWithToast { .. }
    )
}

/// Remount a screen the way the app does on navigation: exit, then enter.
pub fn remount(screen: &mut dyn Screen, config: &Config) {
    let ctx = ScreenContext::new(config);
    screen.on_exit(&ctx).expect("on_exit failed");
    screen.on_enter(&ctx).expect("on_enter failed");
}
