//! UI rendering system.
//!
//! Widgets emit backend-agnostic commands; the renderer collects them per
//! frame and hands batches to a backend such as [`crate::canvas::TextCanvas`].

use crate::layout::Rect;
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Rounded corners.
        rounded: bool,
    },
    /// Single line of text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Bold weight.
        bold: bool,
    },
    /// Scissor rect (clip children).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// Horizontal placement of text inside a rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

impl RenderCommand {
    /// Creates a text command placed inside `bounds` on its first row.
    ///
    /// Text wider than `bounds` is cut to fit and ends with `…`.
    #[must_use]
    pub fn text_in(bounds: Rect, text: &str, align: TextAlign, color: Color) -> Self {
        let text = truncate(text, bounds.width);
        #[allow(clippy::cast_precision_loss)]
        let len = text.chars().count() as f32;
        let x = match align {
            TextAlign::Left => bounds.x,
            TextAlign::Center => bounds.x + ((bounds.width - len) * 0.5).floor(),
            TextAlign::Right => bounds.right() - len,
        };
        Self::Text {
            text,
            x,
            y: bounds.y,
            color,
            bold: false,
        }
    }

    /// Marks a text command bold; other commands are returned unchanged.
    #[must_use]
    pub fn bold(self) -> Self {
        match self {
            Self::Text {
                text, x, y, color, ..
            } => Self::Text {
                text,
                x,
                y,
                color,
                bold: true,
            },
            other => other,
        }
    }
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max = width.max(0.0).floor() as usize;
    if text.chars().count() <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// A batch of render commands with the same state.
#[derive(Debug, Clone)]
pub struct UIBatch {
    /// Commands in this batch.
    pub commands: Vec<RenderCommand>,
    /// Clip rect (if any).
    pub clip: Option<Rect>,
}

impl UIBatch {
    /// Creates a new empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            clip: None,
        }
    }
}

impl Default for UIBatch {
    fn default() -> Self {
        Self::new()
    }
}

/// UI renderer that collects and batches commands.
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
    /// Final batches for rendering.
    batches: Vec<UIBatch>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
            clip_stack: Vec::with_capacity(8),
            batches: Vec::with_capacity(8),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.batches.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// Pushes a clip rect.
    pub fn push_clip(&mut self, bounds: Rect) {
        // Intersect with current clip if any
        let actual_clip = if let Some(current) = self.clip_stack.last() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip {
            bounds: actual_clip,
        });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.commands.push(RenderCommand::PopClip);
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Ends the frame and returns batches for rendering.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        // A text backend has no state changes to sort by; one batch is enough.
        let batch = UIBatch {
            commands: std::mem::take(&mut self.commands),
            clip: None,
        };

        self.batches.clear();
        self.batches.push(batch);

        &self.batches
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
