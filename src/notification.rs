//! Transient toast notifications.
//!
//! A notification is shown, hidden once [`SHOW_DURATION`] has passed, and
//! removed [`HIDE_DURATION`] after it was hidden. Time is passed in
//! explicitly so the lifecycle can be driven from the UI tick.

use std::time::{Duration, Instant};
use tracing::debug;

pub const SHOW_DURATION: Duration = Duration::from_millis(2000);
pub const HIDE_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Shown,
    Hiding,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub is_error: bool,
    pub phase: NotificationPhase,
    pub created_at: Instant,
    pub hidden_at: Option<Instant>,
}

impl Notification {
    pub fn is_shown(&self) -> bool {
        self.phase == NotificationPhase::Shown
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, is_error: bool, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let message = message.into();
        debug!(id, message = %message, is_error, "Showing notification");

        self.notifications.push(Notification {
            id,
            message,
            is_error,
            phase: NotificationPhase::Shown,
            created_at: now,
            hidden_at: None,
        });
        id
    }

    /// Advances every notification's timers.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.retain(|n| match n.hidden_at {
            Some(hidden_at) => now.saturating_duration_since(hidden_at) < HIDE_DURATION,
            None => true,
        });

        for n in &mut self.notifications {
            if n.phase == NotificationPhase::Shown
                && now.saturating_duration_since(n.created_at) >= SHOW_DURATION
            {
                n.phase = NotificationPhase::Hiding;
                n.hidden_at = Some(now);
            }
        }
    }

    /// Time left until the next hide or removal is due, or `None` when no
    /// notification is active.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.notifications
            .iter()
            .map(|n| {
                let due = match n.hidden_at {
                    Some(hidden_at) => hidden_at + HIDE_DURATION,
                    None => n.created_at + SHOW_DURATION,
                };
                due.saturating_duration_since(now)
            })
            .min()
    }

    /// Oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: u64) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
