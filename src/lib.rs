//! Plateful - a terminal preview of the Plateful recipe app screens
//!
//! This library provides the screen controllers, navigation loop and
//! widgets for previewing the Sign Up, Sign In and Home mockups in a
//! terminal.

// Core modules
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use screens::{Screen, ScreenAction, ScreenId};
pub use styles::{theme, ThemeType};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
