//! "About Calculator" dialog.

use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::style::Theme;

/// Title shown at the top of the dialog.
pub const ABOUT_TITLE: &str = "Zakrenz Modern Calculator";

const ABOUT_DESCRIPTION: &str = "Everyday and scientific math.";

const ABOUT_LINES: [(&str, &str); 4] = [
    ("Modes", "Standard / Sci / Prog"),
    ("Precision", "0, 2, 4 or 6 decimals"),
    ("Features", "History, copy, keyboard"),
    ("Developer", "Ridhwan Zakki"),
];

/// Modal informational dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutDialog {
    open: bool,
}

impl AboutDialog {
    /// Creates a closed dialog.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Opens the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dialog.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Returns true while the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Rows needed to draw the dialog.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn height() -> f32 {
        // border, title, description, blank, lines, blank, hint, border
        ABOUT_LINES.len() as f32 + 7.0
    }

    /// Returns the dialog rect centered inside `screen`.
    #[must_use]
    pub fn bounds(screen: Rect) -> Rect {
        screen.centered(screen.width - 4.0, Self::height())
    }

    /// Generates render commands when open.
    pub fn render(&self, screen: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        if !self.open {
            return;
        }
        let bounds = Self::bounds(screen);
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
        let row = |offset: f32| Rect::new(inner.x + 1.0, inner.y + offset, inner.width - 2.0, 1.0);

        commands.push(
            RenderCommand::text_in(row(0.0), ABOUT_TITLE, TextAlign::Center, theme.foreground)
                .bold(),
        );
        commands.push(RenderCommand::text_in(
            row(1.0),
            ABOUT_DESCRIPTION,
            TextAlign::Center,
            theme.muted,
        ));

        let mut offset = 3.0;
        for (label, value) in ABOUT_LINES {
            let line = row(offset);
            let (left, right) = line.split_horizontal(0.3, 1.0);
            commands.push(
                RenderCommand::text_in(left, label, TextAlign::Left, theme.foreground).bold(),
            );
            commands.push(RenderCommand::text_in(
                right,
                value,
                TextAlign::Left,
                theme.muted,
            ));
            offset += 1.0;
        }

        commands.push(RenderCommand::text_in(
            row(offset + 1.0),
            "[ Close ]",
            TextAlign::Center,
            theme.foreground,
        ));
    }

    /// Returns the rect of the close button inside `screen`.
    #[must_use]
    pub fn close_button(screen: Rect) -> Rect {
        let bounds = Self::bounds(screen);
        Rect::new(bounds.x, bounds.bottom() - 2.0, bounds.width, 1.0)
    }
}
