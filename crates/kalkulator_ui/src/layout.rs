//! Layout system for UI positioning.
//!
//! Units are terminal cells: one column wide, one row tall.

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if two rectangles intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }

    /// Expands the rectangle by the given amount on all sides.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        self.expand(-amount)
    }

    /// Splits off the left `fraction` of the width, leaving `gap` between halves.
    #[must_use]
    pub fn split_horizontal(&self, fraction: f32, gap: f32) -> (Self, Self) {
        let left_width = ((self.width - gap) * fraction).floor();
        let left = Self::new(self.x, self.y, left_width, self.height);
        let right = Self::new(
            self.x + left_width + gap,
            self.y,
            self.width - left_width - gap,
            self.height,
        );
        (left, right)
    }

    /// Returns a rect of `width` x `height` centered inside this one.
    #[must_use]
    pub fn centered(&self, width: f32, height: f32) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self::new(
            (self.x + (self.width - width) * 0.5).floor(),
            (self.y + (self.height - height) * 0.5).floor(),
            width,
            height,
        )
    }
}

/// Layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Horizontal (left to right).
    #[default]
    Horizontal,
    /// Vertical (top to bottom).
    Vertical,
}

/// Layout alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to start (left/top).
    #[default]
    Start,
    /// Align to center.
    Center,
    /// Align to end (right/bottom).
    End,
    /// Stretch to fill available space.
    Stretch,
}

/// Layout manager for arranging widgets in a row or column.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Current layout direction.
    pub direction: Direction,
    /// Cross axis alignment.
    pub cross_alignment: Alignment,
    /// Gap between elements.
    pub gap: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            cross_alignment: Alignment::Start,
            gap: 1.0,
        }
    }
}

impl Layout {
    /// Creates a horizontal layout.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    /// Creates a vertical layout.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Sets the gap between elements.
    #[must_use]
    pub const fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Sets cross axis alignment.
    #[must_use]
    pub const fn align_cross(mut self, alignment: Alignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Lays out a list of sizes within the given bounds, from the start edge.
    ///
    /// Returns the positions for each element.
    #[must_use]
    pub fn arrange(&self, bounds: Rect, sizes: &[(f32, f32)]) -> Vec<Rect> {
        let mut results = Vec::with_capacity(sizes.len());
        let mut cursor = match self.direction {
            Direction::Horizontal => bounds.x,
            Direction::Vertical => bounds.y,
        };

        for &(w, h) in sizes {
            let rect = match self.direction {
                Direction::Horizontal => {
                    let (y, height) = self.cross(bounds.y, bounds.height, h);
                    Rect::new(cursor, y, w, height)
                }
                Direction::Vertical => {
                    let (x, width) = self.cross(bounds.x, bounds.width, w);
                    Rect::new(x, cursor, width, h)
                }
            };
            cursor += match self.direction {
                Direction::Horizontal => w,
                Direction::Vertical => h,
            } + self.gap;
            results.push(rect);
        }

        results
    }

    /// Position and extent along the cross axis.
    fn cross(&self, start: f32, available: f32, size: f32) -> (f32, f32) {
        match self.cross_alignment {
            Alignment::Start => (start, size),
            Alignment::Center => (start + (available - size) * 0.5, size),
            Alignment::End => (start + available - size, size),
            Alignment::Stretch => (start, available),
        }
    }
}

/// Uniform grid of cells, used for keypads.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    /// Area covered by the grid.
    pub bounds: Rect,
    /// Number of columns.
    pub columns: u16,
    /// Height of one row.
    pub row_height: f32,
    /// Horizontal gap between cells.
    pub column_gap: f32,
    /// Vertical gap between rows.
    pub row_gap: f32,
}

impl Grid {
    /// Creates a grid with `columns` columns over `bounds`.
    #[must_use]
    pub const fn new(bounds: Rect, columns: u16, row_height: f32) -> Self {
        Self {
            bounds,
            columns,
            row_height,
            column_gap: 1.0,
            row_gap: 0.0,
        }
    }

    /// Returns the width of one column.
    #[must_use]
    pub fn column_width(&self) -> f32 {
        let columns = f32::from(self.columns.max(1));
        (self.bounds.width - self.column_gap * (columns - 1.0)) / columns
    }

    /// Returns the rect of the cell at (`column`, `row`) spanning `span` columns.
    #[must_use]
    pub fn cell(&self, column: u16, row: u16, span: u16) -> Rect {
        let width = self.column_width();
        let span = f32::from(span.max(1));
        Rect::new(
            self.bounds.x + f32::from(column) * (width + self.column_gap),
            self.bounds.y + f32::from(row) * (self.row_height + self.row_gap),
            width * span + self.column_gap * (span - 1.0),
            self.row_height,
        )
    }

}
