//! Transient success notices.
//!
//! A notice appears on the frame it is raised and disappears once its
//! timer runs out. Raising a new notice replaces the current one along
//! with its timer.

use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::style::Theme;

/// Seconds a notice stays up after "Copy Result".
pub const COPY_NOTICE_SECS: f32 = 2.0;
/// Seconds a notice stays up after "Clear History".
pub const CLEAR_NOTICE_SECS: f32 = 3.0;

/// Height of a rendered notice, in rows.
pub const NOTICE_HEIGHT: f32 = 4.0;

/// A notice to be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Bold first line.
    pub title: String,
    /// Second line.
    pub message: String,
    /// Seconds until the notice is dismissed.
    pub remaining: f32,
}

impl Notice {
    /// Creates the standard success notice.
    #[must_use]
    pub fn success(duration: f32) -> Self {
        Self {
            title: "Success".to_owned(),
            message: "Action completed successfully".to_owned(),
            remaining: duration,
        }
    }

    /// Generates render commands for this notice inside `bounds`.
    pub fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        commands.push(RenderCommand::Rect {
            bounds,
            color: theme.surface,
        });
        commands.push(RenderCommand::RectOutline {
            bounds,
            color: theme.foreground,
            rounded: true,
        });

        let inner = bounds.shrink(1.0);
        let line = Rect::new(inner.x + 1.0, inner.y, inner.width - 2.0, 1.0);
        commands.push(
            RenderCommand::text_in(line, &format!("✓ {}", self.title), TextAlign::Left, theme.foreground)
                .bold(),
        );
        let line = Rect::new(line.x + 2.0, line.y + 1.0, line.width - 2.0, 1.0);
        commands.push(RenderCommand::text_in(
            line,
            &self.message,
            TextAlign::Left,
            theme.muted,
        ));
    }
}

/// Holds at most one active notice.
#[derive(Debug, Clone, Default)]
pub struct NoticeManager {
    current: Option<Notice>,
}

impl NoticeManager {
    /// Creates a manager with no active notice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a success notice for `duration` seconds, replacing any other.
    pub fn show_success(&mut self, duration: f32) {
        self.current = Some(Notice::success(duration));
    }

    /// Returns true if a notice is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current notice.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Advances the timer by `dt` seconds.
    ///
    /// Returns true if the notice expired during this call.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(notice) = self.current.as_mut() else {
            return false;
        };
        notice.remaining -= dt;
        if notice.remaining <= 0.0 {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Generates render commands for the active notice.
    pub fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        if let Some(notice) = &self.current {
            notice.render(bounds, theme, commands);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let mut notices = NoticeManager::new();
        notices.show_success(COPY_NOTICE_SECS);
        assert!(notices.is_active());

        assert!(!notices.update(1.5));
        assert!(notices.is_active());
        assert!(notices.update(0.5));
        assert!(!notices.is_active());
        assert!(!notices.update(1.0));
    }

    #[test]
    fn test_newer_notice_replaces_timer() {
        let mut notices = NoticeManager::new();
        notices.show_success(COPY_NOTICE_SECS);
        notices.update(1.9);

        notices.show_success(CLEAR_NOTICE_SECS);
        notices.update(2.0);
        assert!(notices.is_active());
        notices.update(1.0);
        assert!(!notices.is_active());
    }

    #[test]
    fn test_render_only_when_active() {
        let mut notices = NoticeManager::new();
        let mut commands = Vec::new();
        let bounds = Rect::new(0.0, 0.0, 40.0, NOTICE_HEIGHT);

        notices.render(bounds, &Theme::LIGHT, &mut commands);
        assert!(commands.is_empty());

        notices.show_success(COPY_NOTICE_SECS);
        notices.render(bounds, &Theme::LIGHT, &mut commands);
        assert!(commands.iter().any(|c| matches!(
            c,
            RenderCommand::Text { text, .. } if text == "Action completed successfully"
        )));
    }
}
