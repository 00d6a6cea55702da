pub mod recording_list;
pub mod status_bar;
pub mod toast;

use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Recording list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    recording_list::render(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }

    // Toasts stay on top of everything, including help.
    toast::render(f, state, chunks[0]);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    polyclip Help

      ↑/↓ or j/k      Move cursor
      g / G           Jump to first / last run
      y or Enter      Copy recording to clipboard
      r               Reload history file
      ?               Toggle help
      q or Esc        Quit

    ● marks runs that carry a recording.
    "#;

    let area = centered_rect(60, 50, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::FakeClipboard;
    use crate::recording::{RecordingEntry, RecordingHistory};
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_list_and_toast() {
        let history = RecordingHistory::new(
            "Summer 1",
            PathBuf::from("HISTORY_Summer 1.txt"),
            vec![RecordingEntry::new("speedy", 61234, 1717000000).with_recording("abc")],
        );
        let mut state = AppState::new(
            history,
            Theme::default(),
            FakeClipboard::accepting().worker(),
        );
        state.notifications.show("Copied to clipboard", false, Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Summer 1"));
        assert!(text.contains("speedy"));
        assert!(text.contains("1:01.234"));
        assert!(text.contains("Copied to clipboard"));
    }
}
