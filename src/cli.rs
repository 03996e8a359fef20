//! Command-line interface for the preview app.

use crate::screens::ScreenId;
use crate::styles::ThemeType;
use clap::Parser;
use std::path::PathBuf;

/// A keyboard-driven terminal preview of the Plateful recipe app screens
#[derive(Parser, Debug)]
#[command(
    name = "plateful",
    version,
    about = "Preview the Plateful sign up, sign in and home screens in the terminal",
    long_about = None
)]
pub struct Cli {
    /// Initial theme, overriding the config file (light or dark)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemeType>,

    /// Screen to start on (signup, signin or home)
    #[arg(long, value_parser = parse_screen)]
    pub screen: Option<ScreenId>,

    /// Path to the config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Result<ThemeType, String> {
    match s.to_lowercase().as_str() {
        "light" => Ok(ThemeType::Light),
        "dark" => Ok(ThemeType::Dark),
        other => Err(format!("unknown theme: {} (expected light or dark)", other)),
    }
}

fn parse_screen(s: &str) -> Result<ScreenId, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["plateful"]);
        assert!(cli.theme.is_none());
        assert!(cli.screen.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["plateful", "--theme", "light", "--screen", "signin"]);
        assert_eq!(cli.theme, Some(ThemeType::Light));
        assert_eq!(cli.screen, Some(ScreenId::SignIn));
    }

    #[test]
    fn test_reject_unknown_theme() {
        assert!(Cli::try_parse_from(["plateful", "--theme", "sepia"]).is_err());
    }
}
