use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let position = if state.history.is_empty() {
        "0/0".to_string()
    } else {
        format!("{}/{}", state.cursor_position + 1, state.history.len())
    };

    let reload_indicator = state
        .last_reload_time
        .map(|t| format!(" | reloaded {}s ago", t.elapsed().as_secs()))
        .unwrap_or_default();

    let left_content = format!(
        " {} | {}{}",
        state.history.path.display(),
        position,
        reload_indicator
    );
    let nav_hint = "y copy  ? help  q quit";
    let version_text = format!("v{VERSION}");

    let padding = area.width.saturating_sub(
        left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3,
    );

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}
