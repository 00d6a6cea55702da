use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::warn;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        handle_help_overlay(key, state);
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }
        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
            state.move_to_top();
        }
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
            state.move_to_bottom();
        }

        // Copy recording
        (KeyCode::Char('y'), KeyModifiers::NONE) | (KeyCode::Enter, KeyModifiers::NONE) => {
            state.copy_selected(Instant::now());
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            if let Err(e) = state.reload_history() {
                warn!(error = %e, "Manual reload failed");
            }
        }

        (KeyCode::Char('?'), _) => {
            state.show_help = true;
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            state.should_quit = true;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        _ => {}
    }

    Ok(())
}

fn handle_help_overlay(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            state.show_help = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::FakeClipboard;
    use crate::recording::{RecordingEntry, RecordingHistory};
    use crate::ui::theme::Theme;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_state() -> AppState {
        let history = RecordingHistory::new(
            "test",
            PathBuf::from("HISTORY_test.txt"),
            vec![
                RecordingEntry::new("first", 45000, 0),
                RecordingEntry::new("second", 44000, 0),
            ],
        );
        AppState::new(
            history,
            Theme::default(),
            FakeClipboard::accepting().worker(),
        )
    }

    #[test]
    fn test_navigation_keys() {
        let mut state = test_state();
        handle_key_event(key(KeyCode::Char('j')), &mut state).unwrap();
        assert_eq!(state.cursor_position, 1);
        handle_key_event(key(KeyCode::Char('k')), &mut state).unwrap();
        assert_eq!(state.cursor_position, 0);
        handle_key_event(key(KeyCode::End), &mut state).unwrap();
        assert_eq!(state.cursor_position, 1);
    }

    #[test]
    fn test_copy_key_shows_notification_for_missing_recording() {
        let mut state = test_state();
        handle_key_event(key(KeyCode::Char('y')), &mut state).unwrap();
        assert_eq!(state.notifications.len(), 1);
        assert!(state.notifications.active()[0].is_error);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut state = test_state();
        handle_key_event(key(KeyCode::Char('?')), &mut state).unwrap();
        assert!(state.show_help);

        handle_key_event(key(KeyCode::Char('j')), &mut state).unwrap();
        assert_eq!(state.cursor_position, 0);

        handle_key_event(key(KeyCode::Esc), &mut state).unwrap();
        assert!(!state.show_help);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_quit_key() {
        let mut state = test_state();
        handle_key_event(key(KeyCode::Char('q')), &mut state).unwrap();
        assert!(state.should_quit);
    }
}
