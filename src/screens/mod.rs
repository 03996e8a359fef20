//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. The app routes events to the active screen and applies the
//! [`ScreenAction`] it returns:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    App                        │
//! │   match current_screen {                      │
//! │     SignUp => sign_up.handle_event(...)       │
//! │     SignIn => sign_in.handle_event(...)       │
//! │     Home   => home.handle_event(...)          │
//! │   }                                           │
//! │          │ ScreenAction                       │
//! │          ▼                                    │
//! │   navigate / toast / quit                     │
//! └──────────────────────────────────────────────┘
//! ```

pub mod home;
pub mod screen_trait;
pub mod sign_in;
pub mod sign_up;

pub use home::HomeScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;
