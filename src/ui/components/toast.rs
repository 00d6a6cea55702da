use crate::app::AppState;
use crate::notification::Notification;
use crate::utils::unicode::truncate_to_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const MAX_TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;

/// Draws active notifications stacked upward from the bottom-right corner of
/// `area`, newest at the bottom.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let mut bottom = area.y + area.height;

    for notification in state.notifications.active().iter().rev() {
        if bottom < area.y + TOAST_HEIGHT + MARGIN {
            break;
        }
        let rect = toast_rect(notification, area, bottom - MARGIN);
        render_toast(f, state, notification, rect);
        bottom = rect.y;
    }
}

fn toast_rect(notification: &Notification, area: Rect, bottom: u16) -> Rect {
    let max_width = MAX_TOAST_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
    let width = (notification.message.width() as u16 + 4).min(max_width);
    Rect {
        x: area.x + area.width.saturating_sub(width + MARGIN),
        y: bottom.saturating_sub(TOAST_HEIGHT),
        width,
        height: TOAST_HEIGHT,
    }
}

fn render_toast(f: &mut Frame, state: &AppState, notification: &Notification, rect: Rect) {
    let accent = if notification.is_error {
        state.theme.toast_error
    } else {
        state.theme.toast_border
    };
    let text_color = if notification.is_error {
        state.theme.toast_error
    } else {
        state.theme.toast_fg
    };

    let mut border_style = Style::default().fg(accent);
    let mut text_style = Style::default().fg(text_color);
    if !notification.is_shown() {
        border_style = border_style.add_modifier(Modifier::DIM);
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let inner_width = rect.width.saturating_sub(2) as usize;
    let message = truncate_to_width(&notification.message, inner_width.saturating_sub(2));

    let paragraph = Paragraph::new(format!(" {message} "))
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}
