//! Integration tests for the Sign Up and Sign In flows.
//!
//! Screens are driven through key events exactly as the app delivers them;
//! the assertions are on the `ScreenAction` each event returns.

mod common;

use common::{navigates, press, remount, tab, type_text};
use crossterm::event::KeyCode;
use plateful::config::Config;
use plateful::screens::{ScreenAction, ScreenId, SignInScreen, SignUpScreen};
use plateful::widgets::ToastVariant;

/// Fill the four sign up text fields, leaving focus on the Confirm field.
fn fill_sign_up(
    screen: &mut SignUpScreen,
    config: &Config,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) {
    type_text(screen, config, name);
    tab(screen, config, 1);
    type_text(screen, config, email);
    tab(screen, config, 1);
    type_text(screen, config, password);
    tab(screen, config, 1);
    type_text(screen, config, confirm);
}

/// Move from the Confirm field to Terms and accept them with Space.
fn accept_terms(screen: &mut SignUpScreen, config: &Config) {
    tab(screen, config, 1);
    press(screen, config, KeyCode::Char(' '));
}

// ============================================================================
// SIGN UP
// ============================================================================

#[test]
fn sign_up_with_terms_unchecked_never_navigates() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    // Given: all fields filled correctly but terms not accepted
    fill_sign_up(&mut screen, &config, "Ann", "a@x.com", "p1", "p1");

    // When: submitting from the Confirm field and from the Submit control
    let from_field = press(&mut screen, &config, KeyCode::Enter);
    tab(&mut screen, &config, 2); // Terms -> Submit
    let from_button = press(&mut screen, &config, KeyCode::Enter);

    // Then: the gated submit is a no-op both times
    assert!(!navigates(&from_field));
    assert!(!navigates(&from_button));
    assert!(matches!(from_button, ScreenAction::None));
}

#[test]
fn sign_up_valid_submission_navigates_home_exactly_once() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    fill_sign_up(&mut screen, &config, "Ann", "a@x.com", "p1", "p1");
    accept_terms(&mut screen, &config);

    // When: submitting (single key event)
    tab(&mut screen, &config, 1); // Terms -> Submit
    let action = press(&mut screen, &config, KeyCode::Enter);

    // Then: the one event yields the one navigation, with the confirmation
    // toast carrying name and email
    match action {
        ScreenAction::NavigateWithToast { screen, toast } => {
            assert_eq!(screen, ScreenId::Home);
            assert_eq!(toast.variant, ToastVariant::Success);
            assert!(toast.message.contains("Ann"));
            assert!(toast.message.contains("a@x.com"));
        }
        other => panic!("expected NavigateWithToast, got {:?}", other),
    }
}

#[test]
fn sign_up_password_mismatch_shows_error_and_stays() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    fill_sign_up(&mut screen, &config, "Ann", "a@x.com", "p1", "p2");
    accept_terms(&mut screen, &config);

    tab(&mut screen, &config, 1);
    let action = press(&mut screen, &config, KeyCode::Enter);

    match action {
        ScreenAction::ShowToast(toast) => {
            assert_eq!(toast.variant, ToastVariant::Error);
            assert!(toast.message.contains("accept the terms"));
        }
        other => panic!("expected error toast, got {:?}", other),
    }
}

#[test]
fn sign_up_empty_required_field_shows_error() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    // Name left empty
    fill_sign_up(&mut screen, &config, "", "a@x.com", "p1", "p1");
    accept_terms(&mut screen, &config);

    tab(&mut screen, &config, 1);
    let action = press(&mut screen, &config, KeyCode::Enter);

    assert!(!navigates(&action));
    assert!(matches!(action, ScreenAction::ShowToast(_)));
}

#[test]
fn sign_up_signin_link_navigates_without_validation() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    // Given: a completely empty form, focus moved to the sign in link
    tab(&mut screen, &config, 8); // Name -> ... -> SignInLink

    let action = press(&mut screen, &config, KeyCode::Enter);
    assert!(matches!(action, ScreenAction::Navigate(ScreenId::SignIn)));
}

#[test]
fn sign_up_social_buttons_show_placeholder_only() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    tab(&mut screen, &config, 6); // Name -> ... -> Google
    let google = press(&mut screen, &config, KeyCode::Enter);
    tab(&mut screen, &config, 1);
    let facebook = press(&mut screen, &config, KeyCode::Enter);

    for action in [google, facebook] {
        match action {
            ScreenAction::ShowToast(toast) => {
                assert_eq!(toast.variant, ToastVariant::Info);
                assert!(toast.message.contains("placeholder"));
            }
            other => panic!("expected placeholder toast, got {:?}", other),
        }
    }
    // No state changed: terms still unchecked, fields still empty
    assert!(!screen.state().terms_accepted);
    assert!(screen.state().name_input.is_empty());
}

#[test]
fn sign_up_remount_resets_all_fields() {
    let config = Config::default();
    let mut screen = SignUpScreen::new();

    fill_sign_up(&mut screen, &config, "Ann", "a@x.com", "p1", "p1");
    accept_terms(&mut screen, &config);
    assert!(screen.state().terms_accepted);

    // When: navigating away and back
    remount(&mut screen, &config);

    // Then: the screen is indistinguishable from a first mount
    assert!(screen.state().name_input.is_empty());
    assert!(screen.state().email_input.is_empty());
    assert!(screen.state().password_input.is_empty());
    assert!(!screen.state().terms_accepted);
}

// ============================================================================
// SIGN IN
// ============================================================================

#[test]
fn sign_in_empty_password_shows_error() {
    let config = Config::default();
    let mut screen = SignInScreen::new();

    type_text(&mut screen, &config, "a@x.com");
    tab(&mut screen, &config, 3); // Email -> Password -> Forgot -> Submit
    let action = press(&mut screen, &config, KeyCode::Enter);

    match action {
        ScreenAction::ShowToast(toast) => {
            assert_eq!(toast.variant, ToastVariant::Error);
            assert!(toast.message.contains("email and password"));
        }
        other => panic!("expected error toast, got {:?}", other),
    }
}

#[test]
fn sign_in_valid_submission_navigates_home_exactly_once() {
    let config = Config::default();
    let mut screen = SignInScreen::new();

    type_text(&mut screen, &config, "a@x.com");
    tab(&mut screen, &config, 1);
    type_text(&mut screen, &config, "x");

    // Enter in the password field submits, like the mockup form
    let action = press(&mut screen, &config, KeyCode::Enter);

    match action {
        ScreenAction::NavigateWithToast { screen, toast } => {
            assert_eq!(screen, ScreenId::Home);
            assert!(toast.message.contains("a@x.com"));
        }
        other => panic!("expected NavigateWithToast, got {:?}", other),
    }
}

#[test]
fn sign_in_forgot_password_is_a_placeholder() {
    let config = Config::default();
    let mut screen = SignInScreen::new();

    tab(&mut screen, &config, 2); // Email -> Password -> Forgot
    let action = press(&mut screen, &config, KeyCode::Enter);

    match action {
        ScreenAction::ShowToast(toast) => {
            assert!(toast.message.contains("Forgot Password"));
        }
        other => panic!("expected placeholder toast, got {:?}", other),
    }
}

#[test]
fn sign_in_signup_link_navigates() {
    let config = Config::default();
    let mut screen = SignInScreen::new();

    tab(&mut screen, &config, 6); // Email -> ... -> SignUpLink
    let action = press(&mut screen, &config, KeyCode::Enter);
    assert!(matches!(action, ScreenAction::Navigate(ScreenId::SignUp)));
}

#[test]
fn sign_in_remount_resets_fields() {
    let config = Config::default();
    let mut screen = SignInScreen::new();

    type_text(&mut screen, &config, "a@x.com");
    remount(&mut screen, &config);
    assert!(screen.state().email_input.is_empty());

    // A fresh submit on the remounted screen behaves like a first mount:
    // one event, one validation error, no navigation.
    tab(&mut screen, &config, 3);
    let action = press(&mut screen, &config, KeyCode::Enter);
    assert!(!navigates(&action));
}
