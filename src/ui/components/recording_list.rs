use crate::app::AppState;
use crate::utils::unicode::{pad_to_width, truncate_to_width};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

const TIME_WIDTH: usize = 10;
const DATE_WIDTH: usize = 19;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let available_width = area.width.saturating_sub(2) as usize;
    let index_width = state.history.len().to_string().len().max(2);
    // index, time, date, marker and the separators between them
    let fixed = index_width + TIME_WIDTH + DATE_WIDTH + 4 + 3;
    let name_width = available_width.saturating_sub(fixed);

    let items: Vec<ListItem> = state
        .history
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_cursor = idx == state.cursor_position;
            let base = if is_cursor {
                Style::default()
                    .fg(state.theme.cursor)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(state.theme.foreground)
            };
            let muted = if is_cursor {
                base
            } else {
                Style::default().fg(state.theme.muted)
            };
            let marker = if entry.has_recording() {
                Span::styled(
                    " ● ",
                    if is_cursor { base } else { Style::default().fg(state.theme.recording) },
                )
            } else {
                Span::styled(" ○ ", muted)
            };

            let name = pad_to_width(&truncate_to_width(&entry.name, name_width), name_width);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>index_width$} ", idx + 1), muted),
                Span::styled(format!("{:>TIME_WIDTH$} ", entry.time_display()), base),
                Span::styled(format!("{:<DATE_WIDTH$} ", entry.date_display()), muted),
                marker,
                Span::styled(name, base),
            ]))
        })
        .collect();

    let title = format!(
        " {} ({} runs, {} with recordings) ",
        state.history.track,
        state.history.len(),
        state.history.with_recording_count()
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(state.theme.background)),
    );

    let mut list_state = ListState::default();
    if !state.history.is_empty() {
        list_state.select(Some(state.cursor_position));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}
