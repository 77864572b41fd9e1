//! Character-grid backend for render commands.
//!
//! Paints [`RenderCommand`]s onto a fixed grid of cells and serializes the
//! result either as plain text or with ANSI true-color escapes.

use crate::layout::Rect;
use crate::render::{RenderCommand, UIBatch};
use crate::style::Color;

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Glyph.
    pub ch: char,
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Bold weight.
    pub bold: bool,
}

impl Cell {
    /// An empty, unstyled cell.
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: None,
        bg: None,
        bold: false,
    };
}

/// Integer cell bounds, half-open on the right and bottom.
#[derive(Debug, Clone, Copy)]
struct CellRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl CellRect {
    #[allow(clippy::cast_possible_truncation)]
    fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.x.floor() as i32,
            top: rect.y.floor() as i32,
            right: rect.right().floor() as i32,
            bottom: rect.bottom().floor() as i32,
        }
    }

    fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// A grid of styled character cells.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    clip_stack: Vec<CellRect>,
}

impl TextCanvas {
    /// Creates a blank canvas of `width` x `height` cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
            clip_stack: Vec::new(),
        }
    }

    /// Returns the width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resets every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.clip_stack.clear();
    }

    /// Returns the cell at (`x`, `y`), if inside the canvas.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Paints every command of every batch, in order.
    pub fn paint_batches(&mut self, batches: &[UIBatch]) {
        for batch in batches {
            if let Some(clip) = batch.clip {
                self.clip_stack.push(CellRect::from_rect(clip));
            }
            self.paint(&batch.commands);
            if batch.clip.is_some() {
                self.clip_stack.pop();
            }
        }
    }

    /// Paints a list of commands, in order.
    pub fn paint(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            match command {
                RenderCommand::Rect { bounds, color } => self.fill(*bounds, *color),
                RenderCommand::RectOutline {
                    bounds,
                    color,
                    rounded,
                } => self.outline(*bounds, *color, *rounded),
                RenderCommand::Text {
                    text,
                    x,
                    y,
                    color,
                    bold,
                } => self.text(text, *x, *y, *color, *bold),
                RenderCommand::PushClip { bounds } => {
                    self.clip_stack.push(CellRect::from_rect(*bounds));
                }
                RenderCommand::PopClip => {
                    self.clip_stack.pop();
                }
            }
        }
    }

    /// Fills cover whatever was painted underneath.
    fn fill(&mut self, bounds: Rect, color: Color) {
        if !color.is_visible() {
            return;
        }
        let area = CellRect::from_rect(bounds);
        for y in area.top..area.bottom {
            for x in area.left..area.right {
                if let Some(cell) = self.cell_mut(x, y) {
                    *cell = Cell {
                        bg: Some(color),
                        ..Cell::BLANK
                    };
                }
            }
        }
    }

    fn outline(&mut self, bounds: Rect, color: Color, rounded: bool) {
        let area = CellRect::from_rect(bounds);
        if area.right - area.left < 2 || area.bottom - area.top < 2 {
            return;
        }
        let (tl, tr, bl, br) = if rounded {
            ('╭', '╮', '╰', '╯')
        } else {
            ('┌', '┐', '└', '┘')
        };
        let (right, bottom) = (area.right - 1, area.bottom - 1);

        for x in area.left + 1..right {
            self.put(x, area.top, '─', color, false);
            self.put(x, bottom, '─', color, false);
        }
        for y in area.top + 1..bottom {
            self.put(area.left, y, '│', color, false);
            self.put(right, y, '│', color, false);
        }
        self.put(area.left, area.top, tl, color, false);
        self.put(right, area.top, tr, color, false);
        self.put(area.left, bottom, bl, color, false);
        self.put(right, bottom, br, color, false);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn text(&mut self, text: &str, x: f32, y: f32, color: Color, bold: bool) {
        let row = y.floor() as i32;
        let mut column = x.floor() as i32;
        for ch in text.chars() {
            self.put(column, row, ch, color, bold);
            column += 1;
        }
    }

    fn put(&mut self, x: i32, y: i32, ch: char, color: Color, bold: bool) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.ch = ch;
            cell.fg = Some(color);
            cell.bold = bold;
        }
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if let Some(clip) = self.clip_stack.last() {
            if !clip.contains(x, y) {
                return None;
            }
        }
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get_mut(y * self.width + x)
    }

    fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Returns the glyphs only, one line per row, trailing spaces removed.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.ch).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    /// Returns the grid with ANSI color escapes, one line per row.
    #[must_use]
    pub fn to_ansi_string(&self) -> String {
        const RESET: &str = "\x1b[0m";
        const BOLD: &str = "\x1b[1m";

        let mut out = String::with_capacity(self.cells.len() * 4);
        for row in self.rows() {
            let mut current: Option<(Option<Color>, Option<Color>, bool)> = None;
            for cell in row {
                let style = (cell.fg, cell.bg, cell.bold);
                if current != Some(style) {
                    out.push_str(RESET);
                    if let Some(bg) = cell.bg {
                        out.push_str(&bg.ansi_bg());
                    }
                    if let Some(fg) = cell.fg {
                        out.push_str(&fg.ansi_fg());
                    }
                    if cell.bold {
                        out.push_str(BOLD);
                    }
                    current = Some(style);
                }
                out.push(cell.ch);
            }
            out.push_str(RESET);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_and_text() {
        let mut canvas = TextCanvas::new(6, 3);
        canvas.paint(&[
            RenderCommand::RectOutline {
                bounds: Rect::new(0.0, 0.0, 6.0, 3.0),
                color: Color::BLACK,
                rounded: true,
            },
            RenderCommand::Text {
                text: "42".into(),
                x: 2.0,
                y: 1.0,
                color: Color::BLACK,
                bold: false,
            },
        ]);

        assert_eq!(canvas.to_plain_string(), "╭────╮\n│ 42 │\n╰────╯\n");
    }

    #[test]
    fn test_clip_hides_overflow() {
        let mut canvas = TextCanvas::new(8, 1);
        canvas.paint(&[
            RenderCommand::PushClip {
                bounds: Rect::new(0.0, 0.0, 3.0, 1.0),
            },
            RenderCommand::Text {
                text: "abcdef".into(),
                x: 0.0,
                y: 0.0,
                color: Color::BLACK,
                bold: false,
            },
            RenderCommand::PopClip,
        ]);

        assert_eq!(canvas.to_plain_string(), "abc\n");
    }

    #[test]
    fn test_offscreen_is_ignored() {
        let mut canvas = TextCanvas::new(2, 1);
        canvas.paint(&[RenderCommand::Text {
            text: "xyz".into(),
            x: -1.0,
            y: 0.0,
            color: Color::BLACK,
            bold: false,
        }]);

        assert_eq!(canvas.to_plain_string(), "yz\n");
        assert!(canvas.cell(5, 5).is_none());
    }

    #[test]
    fn test_fill_covers_glyphs() {
        let mut canvas = TextCanvas::new(2, 1);
        canvas.paint(&[
            RenderCommand::Text {
                text: "ab".into(),
                x: 0.0,
                y: 0.0,
                color: Color::BLACK,
                bold: false,
            },
            RenderCommand::Rect {
                bounds: Rect::new(0.0, 0.0, 2.0, 1.0),
                color: Color::WHITE,
            },
        ]);

        let cell = canvas.cell(1, 0).copied().unwrap_or(Cell::BLANK);
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.bg, Some(Color::WHITE));
        assert!(canvas.to_ansi_string().contains("\x1b[48;2;255;255;255m"));
    }
}
