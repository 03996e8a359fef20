//! Application loop and navigation controller.
//!
//! `App` owns the current screen identifier, the theme flag and the toast
//! manager. Screens request navigation and notifications by returning a
//! [`ScreenAction`]; the app is the only place those actions are applied.

use crate::config::Config;
use crate::keymap::Action;
use crate::screens::{
    HomeScreen, RenderContext, Screen, ScreenAction, ScreenContext, ScreenId, SignInScreen,
    SignUpScreen,
};
use crate::styles::{init_theme, ThemeType};
use crate::tui::Tui;
use crate::widgets::ToastManager;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::{debug, info};

/// Main application state
pub struct App {
    config: Config,
    tui: Tui,
    /// The currently mounted screen; navigation is an exclusive switch
    current_screen: ScreenId,
    theme: ThemeType,
    toasts: ToastManager,
    should_quit: bool,
    sign_up: SignUpScreen,
    sign_in: SignInScreen,
    home: HomeScreen,
}

impl App {
    /// Create the app with the resolved config, initial theme and screen.
    pub fn new(config: Config, theme: ThemeType, initial_screen: ScreenId) -> Result<Self> {
        let tui = Tui::new()?;
        init_theme(theme);

        Ok(Self {
            config,
            tui,
            current_screen: initial_screen,
            theme,
            toasts: ToastManager::new(),
            should_quit: false,
            sign_up: SignUpScreen::new(),
            sign_in: SignInScreen::new(),
            home: HomeScreen::new(),
        })
    }

    /// Run the event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!(screen = self.current_screen.name(), "starting preview");

        // Mount the initial screen
        {
            let ctx = ScreenContext::new(&self.config);
            match self.current_screen {
                ScreenId::SignUp => self.sign_up.on_enter(&ctx)?,
                ScreenId::SignIn => self.sign_in.on_enter(&ctx)?,
                ScreenId::Home => self.home.on_enter(&ctx)?,
            }
        }

        loop {
            self.toasts.tick();
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so expiring toasts disappear without input
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    fn active_screen_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::SignUp => &mut self.sign_up,
            ScreenId::SignIn => &mut self.sign_in,
            ScreenId::Home => &mut self.home,
        }
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            config,
            tui,
            current_screen,
            toasts,
            sign_up,
            sign_in,
            home,
            ..
        } = self;

        let ctx = RenderContext::new(config);
        tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            let result = match current_screen {
                ScreenId::SignUp => sign_up.render(frame, area, &ctx),
                ScreenId::SignIn => sign_in.render(frame, area, &ctx),
                ScreenId::Home => home.render(frame, area, &ctx),
            };
            if let Err(e) = result {
                debug!(error = %e, "screen render failed");
            }

            toasts.render(frame, area);
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        // Global keys first: screen switching, theme toggle, quit. While a
        // text input is focused, plain-letter bindings belong to the input,
        // so only chorded or function-key bindings act globally.
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press {
                let action = self.config.keymap.get_action(key.code, key.modifiers);
                if let Some(action) = action {
                    let input_focused = self
                        .active_screen_mut(self.current_screen)
                        .is_input_focused();
                    let is_plain_char = matches!(key.code, KeyCode::Char(_))
                        && !key.modifiers.intersects(
                            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                        );

                    if Self::is_global_action(action) && (!input_focused || !is_plain_char) {
                        self.handle_global_action(action)?;
                        return Ok(());
                    }
                }
            }
        }

        let action = {
            let ctx = ScreenContext::new(&self.config);
            match self.current_screen {
                ScreenId::SignUp => self.sign_up.handle_event(event, &ctx)?,
                ScreenId::SignIn => self.sign_in.handle_event(event, &ctx)?,
                ScreenId::Home => self.home.handle_event(event, &ctx)?,
            }
        };
        self.apply_action(action)
    }

    /// Whether an action is handled by the app instead of the active screen.
    fn is_global_action(action: Action) -> bool {
        matches!(
            action,
            Action::Quit
                | Action::ToggleTheme
                | Action::ShowSignUp
                | Action::ShowSignIn
                | Action::ShowHome
        )
    }

    fn handle_global_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleTheme => self.toggle_theme(),
            Action::ShowSignUp => self.navigate(ScreenId::SignUp)?,
            Action::ShowSignIn => self.navigate(ScreenId::SignIn)?,
            Action::ShowHome => self.navigate(ScreenId::Home)?,
            _ => {}
        }
        Ok(())
    }

    /// Apply the action returned by the active screen.
    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(screen) => self.navigate(screen)?,
            ScreenAction::ShowToast(toast) => {
                debug!(message = %toast.message, "toast");
                self.toasts.push(toast);
            }
            ScreenAction::NavigateWithToast { screen, toast } => {
                self.toasts.push(toast);
                self.navigate(screen)?;
            }
        }
        Ok(())
    }

    /// Switch to another screen: unmount the current one, mount the target
    /// with fresh state. Navigating to the current screen is a no-op.
    fn navigate(&mut self, target: ScreenId) -> Result<()> {
        if target == self.current_screen {
            return Ok(());
        }
        info!(
            from = self.current_screen.name(),
            to = target.name(),
            "navigate"
        );

        let ctx = ScreenContext::new(&self.config);
        match self.current_screen {
            ScreenId::SignUp => self.sign_up.on_exit(&ctx)?,
            ScreenId::SignIn => self.sign_in.on_exit(&ctx)?,
            ScreenId::Home => self.home.on_exit(&ctx)?,
        }
        self.current_screen = target;
        match target {
            ScreenId::SignUp => self.sign_up.on_enter(&ctx)?,
            ScreenId::SignIn => self.sign_in.on_enter(&ctx)?,
            ScreenId::Home => self.home.on_enter(&ctx)?,
        }
        Ok(())
    }

    /// Flip between the light and dark theme. The change is process-local
    /// and not written to the config file.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        init_theme(self.theme);
        info!(theme = self.theme.name(), "theme toggled");
    }
}
