use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Actions that can result from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    NextSection,
    PrevSection,
    GoToSection(usize),
    JumpToTop,
    JumpToBottom,
    NextSlide,
    PrevSlide,
    GoToSlide(usize),
    ToggleFaq(usize),
    ToggleTheme,
    OpenPrimaryLink,
    OpenUrl(String),
    ShowHelp,
    Dismiss,
    SkipSplash,
    PointerMoved(u16, u16),
    PendingG,
    None,
}

/// Map a key event to an action, given current app state
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // The splash screen swallows everything except quit
    if app.in_splash() {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q'), _) => Action::Quit,
            _ => Action::SkipSplash,
        };
    }

    // Help overlay: any key closes it
    if app.help_visible() {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q'), _) => Action::Quit,
            _ => Action::Dismiss,
        };
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // Complete or cancel a pending "gg" sequence
    if app.pending_key == Some('g') {
        if keymap.is_g_prefix(&binding) {
            if let Some(action) = keymap.get_pending_g_action() {
                return action.clone();
            }
        }
        // Any other key falls through to normal lookup below
    } else if keymap.is_g_prefix(&binding) {
        return Action::PendingG;
    }

    if let Some(action) = keymap.get(&binding) {
        return action.clone();
    }

    // Terminals report shifted punctuation inconsistently: some send
    // Char('?') with SHIFT, others without. Retry without the modifier.
    if key.modifiers == KeyModifiers::SHIFT {
        if let KeyCode::Char(c) = key.code {
            if !c.is_ascii_uppercase() {
                if let Some(action) = keymap.get(&KeyBinding::simple(key.code)) {
                    return action.clone();
                }
            }
        }
    }

    Action::None
}

/// Map a mouse event to an action
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.in_splash() {
        return match mouse.kind {
            MouseEventKind::Down(_) => Action::SkipSplash,
            _ => Action::None,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.help_visible() {
                return Action::Dismiss;
            }
            app.hit_test(mouse.column, mouse.row)
                .unwrap_or(Action::None)
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Action::PointerMoved(mouse.column, mouse.row)
        }
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use starlit_core::config::AppConfig;
    use starlit_core::content::SiteContent;

    fn test_app() -> App {
        let mut app = App::new(
            AppConfig::default(),
            SiteContent::embedded(),
            fastrand::Rng::with_seed(1),
            120,
            40,
        );
        app.skip_splash();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_navigation_keys() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('k')), &app, &keymap),
            Action::ScrollUp
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        let keymap = Keymap::default();

        // First 'g' starts the sequence
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );

        // Second 'g' completes it
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_shift_g_jumps_to_bottom() {
        let app = test_app();
        let keymap = Keymap::default();
        let shifted = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(shifted, &app, &keymap), Action::JumpToBottom);
    }

    #[test]
    fn test_help_key_with_stray_shift_modifier() {
        let app = test_app();
        let keymap = Keymap::default();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(shifted, &app, &keymap), Action::ShowHelp);
    }

    #[test]
    fn test_splash_swallows_keys() {
        let mut app = test_app();
        app.restart_splash();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::SkipSplash
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
    }

    #[test]
    fn test_help_overlay_dismisses_on_any_key() {
        let mut app = test_app();
        app.toggle_help();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::Dismiss
        );
    }

    #[test]
    fn test_wheel_scrolls() {
        let app = test_app();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(wheel, &app), Action::ScrollDown);
    }

    #[test]
    fn test_pointer_move_reports_position() {
        let app = test_app();
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 42,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(moved, &app), Action::PointerMoved(42, 7));
    }
}
