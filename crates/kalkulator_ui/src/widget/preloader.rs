//! Loading screen shown before the calculator.
//!
//! Purely cosmetic: a progress bar that fills over the minimum display
//! duration, a typewriter caption and a skip button. The host reports when
//! loading finished; the screen then completes once the minimum duration
//! is honoured.

use std::time::Duration;

use super::core::{Widget, WidgetId, WidgetResponse, WidgetState};
use crate::animation::{Animation, Easing};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::style::Theme;

/// Minimum display duration when none is configured.
pub const DEFAULT_MIN_DURATION: Duration = Duration::from_millis(1200);
/// How long before the minimum duration a "loaded" page may start closing.
pub const COMPLETE_LEAD: Duration = Duration::from_millis(200);
/// Fade-out delay between the close decision and completion.
pub const COMPLETE_DELAY: Duration = Duration::from_millis(180);

const CURSOR_BLINK: Duration = Duration::from_millis(500);
const PRELOADER_HEIGHT: f32 = 11.0;
const CONTENT_WIDTH: f32 = 40.0;

/// Preloader settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloaderConfig {
    /// Shortest time the screen stays up.
    pub min_duration: Duration,
    /// Typewriter text.
    pub caption: String,
    /// Avatar initials.
    pub initials: String,
    /// Line above the caption.
    pub label: String,
    /// Line under the progress bar.
    pub footer: String,
    /// Show the caption statically and skip easing.
    pub reduced_motion: bool,
    /// The page already finished loading when the screen appeared.
    pub loaded_at_start: bool,
    /// Delay per typed character.
    pub type_speed: Duration,
    /// Delay at full text before deleting.
    pub pause: Duration,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_DURATION,
            caption: "Ridhwan Zakki".to_owned(),
            initials: "RZ".to_owned(),
            label: "Preparing interface".to_owned(),
            footer: "loading components…".to_owned(),
            reduced_motion: false,
            loaded_at_start: false,
            type_speed: Duration::from_millis(55),
            pause: Duration::from_millis(600),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Types the caption one character at a time, then deletes it, forever.
#[derive(Debug, Clone)]
struct Typewriter {
    text: Vec<char>,
    shown: usize,
    phase: Phase,
    until_next: Duration,
    type_speed: Duration,
    delete_speed: Duration,
    pause: Duration,
}

impl Typewriter {
    fn new(text: &str, type_speed: Duration, pause: Duration) -> Self {
        let type_speed = type_speed.max(Duration::from_millis(1));
        let delete_speed = type_speed
            .saturating_sub(Duration::from_millis(15))
            .max(Duration::from_millis(30));
        Self {
            text: text.chars().collect(),
            shown: 0,
            phase: Phase::Typing,
            until_next: type_speed,
            type_speed,
            delete_speed,
            pause,
        }
    }

    fn advance(&mut self, mut dt: Duration) {
        if self.text.is_empty() {
            return;
        }
        while dt >= self.until_next {
            dt -= self.until_next;
            self.step();
        }
        self.until_next -= dt;
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= self.text.len() {
                    self.phase = Phase::Deleting;
                    self.until_next = self.pause;
                } else {
                    self.until_next = self.type_speed;
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                }
                self.until_next = self.delete_speed;
            }
        }
    }

    fn visible(&self) -> String {
        self.text[..self.shown].iter().collect()
    }
}

/// The loading screen.
pub struct Preloader {
    state: WidgetState,
    config: PreloaderConfig,
    elapsed: Duration,
    completes_at: Option<Duration>,
    done: bool,
    bar: Animation,
    typewriter: Typewriter,
    theme: Theme,
    width: f32,
}

impl Preloader {
    /// Creates a preloader from `config`.
    #[must_use]
    pub fn new(config: PreloaderConfig) -> Self {
        let typewriter = Typewriter::new(&config.caption, config.type_speed, config.pause);
        let easing = if config.reduced_motion {
            Easing::Instant
        } else {
            Easing::ExponentialOut
        };
        let mut preloader = Self {
            state: WidgetState::new(WidgetId::new(2)),
            config,
            elapsed: Duration::ZERO,
            completes_at: None,
            done: false,
            bar: Animation::new(0.0, easing),
            typewriter,
            theme: Theme::default(),
            width: CONTENT_WIDTH + 4.0,
        };
        if preloader.config.loaded_at_start {
            preloader.notify_loaded();
        }
        preloader
    }

    /// Sets the color theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the screen width in cells.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.floor().max(24.0);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PreloaderConfig {
        &self.config
    }

    /// Returns time since the screen appeared.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns when completion is scheduled, once loading has finished.
    #[must_use]
    pub fn completes_at(&self) -> Option<Duration> {
        self.completes_at
    }

    /// Returns true once the screen has completed or been skipped.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns progress in percent, capped at 100.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.config.min_duration.is_zero() {
            return 100.0;
        }
        let ratio = self.elapsed.as_secs_f32() / self.config.min_duration.as_secs_f32();
        (ratio * 100.0).min(100.0)
    }

    /// Returns progress rounded to a whole percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        self.progress().round() as u32
    }

    /// Returns the caption as currently shown.
    #[must_use]
    pub fn caption_text(&self) -> String {
        if self.config.reduced_motion {
            self.config.caption.clone()
        } else {
            self.typewriter.visible()
        }
    }

    /// Records that loading finished now.
    ///
    /// Completion is scheduled `max(now, min_duration - 200 ms) + 180 ms`
    /// after the screen appeared. Later calls are ignored.
    pub fn notify_loaded(&mut self) {
        if self.completes_at.is_some() || self.done {
            return;
        }
        let earliest = self.config.min_duration.saturating_sub(COMPLETE_LEAD);
        let at = self.elapsed.max(earliest) + COMPLETE_DELAY;
        tracing::debug!(elapsed = ?self.elapsed, completes_at = ?at, "page loaded");
        self.completes_at = Some(at);
    }

    /// Completes immediately.
    ///
    /// Returns true if this call completed the screen.
    pub fn skip(&mut self) -> bool {
        if self.done {
            return false;
        }
        tracing::info!(elapsed = ?self.elapsed, "preloader skipped");
        self.done = true;
        true
    }

    /// Advances all timers by `dt`.
    ///
    /// Returns true on the call that completes the screen, false otherwise.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.done {
            return false;
        }
        self.elapsed += dt;

        self.bar.set_target(self.progress());
        self.bar.update(dt.as_secs_f32());
        if !self.config.reduced_motion {
            self.typewriter.advance(dt);
        }

        match self.completes_at {
            Some(at) if self.elapsed >= at => {
                tracing::info!(elapsed = ?self.elapsed, "preloader complete");
                self.done = true;
                true
            }
            _ => false,
        }
    }

    fn content(&self) -> Rect {
        let width = CONTENT_WIDTH.min(self.width - 4.0);
        Rect::new(0.0, 0.0, self.width, PRELOADER_HEIGHT).centered(width, PRELOADER_HEIGHT - 2.0)
    }

    fn skip_button(&self) -> Rect {
        let content = self.content();
        Rect::new(content.x, content.y + 7.0, 8.0, 1.0)
    }

    fn cursor_visible(&self) -> bool {
        let ticks = self.elapsed.as_millis() / CURSOR_BLINK.as_millis();
        ticks % 2 == 0
    }

    fn bar_text(&self, width: f32) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total = width.max(0.0) as usize;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = ((self.bar.value() / 100.0) * total as f32).round() as usize;
        let filled = filled.min(total);
        let mut bar = "█".repeat(filled);
        bar.push_str(&"░".repeat(total - filled));
        bar
    }
}

impl Widget for Preloader {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        let skip_key = input
            .keys_pressed()
            .iter()
            .any(|&key| matches!(key, Key::Escape | Key::Char('s' | 'S')));
        let skip_click = input.mouse_clicked(MouseButton::Left)
            && self.skip_button().contains(input.mouse_x, input.mouse_y);
        response.clicked = skip_click;

        if skip_key || skip_click {
            response.completed = self.skip();
        } else {
            response.completed = self.advance(Duration::from_secs_f32(dt.max(0.0)));
        }
        response.changed = true;
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let screen = Rect::new(0.0, 0.0, self.width, PRELOADER_HEIGHT);
        let content = self.content();

        commands.push(RenderCommand::Rect {
            bounds: screen,
            color: theme.surface,
        });

        let avatar = Rect::new(content.x, content.y, 6.0, 3.0);
        commands.push(RenderCommand::Rect {
            bounds: avatar,
            color: theme.foreground,
        });
        commands.push(RenderCommand::RectOutline {
            bounds: avatar,
            color: theme.border,
            rounded: true,
        });
        commands.push(
            RenderCommand::text_in(
                Rect::new(avatar.x + 1.0, avatar.y + 1.0, 4.0, 1.0),
                &self.config.initials,
                TextAlign::Center,
                theme.on_foreground,
            )
            .bold(),
        );

        let text_x = avatar.right() + 2.0;
        let text_width = content.right() - text_x;
        commands.push(RenderCommand::text_in(
            Rect::new(text_x, content.y, text_width, 1.0),
            &self.config.label,
            TextAlign::Left,
            theme.muted,
        ));
        let mut caption = self.caption_text();
        if !self.config.reduced_motion && self.cursor_visible() {
            caption.push('▌');
        }
        commands.push(
            RenderCommand::text_in(
                Rect::new(text_x, content.y + 1.0, text_width, 1.0),
                &caption,
                TextAlign::Left,
                theme.foreground,
            )
            .bold(),
        );

        let bar_row = Rect::new(content.x, content.y + 4.0, content.width, 1.0);
        commands.push(RenderCommand::Text {
            text: self.bar_text(content.width),
            x: bar_row.x,
            y: bar_row.y,
            color: theme.foreground,
            bold: false,
        });

        let footer_row = Rect::new(content.x, content.y + 5.0, content.width, 1.0);
        commands.push(RenderCommand::text_in(
            footer_row,
            &self.config.footer,
            TextAlign::Left,
            theme.muted,
        ));
        commands.push(RenderCommand::text_in(
            footer_row,
            &format!("{}%", self.percent()),
            TextAlign::Right,
            theme.muted,
        ));

        commands.push(RenderCommand::text_in(
            self.skip_button(),
            "[ Skip ]",
            TextAlign::Left,
            theme.foreground,
        ));
    }

    fn min_size(&self) -> (f32, f32) {
        (self.width, PRELOADER_HEIGHT)
    }
}
