//! Styling: colors and themes.
//!
//! Light card on a gray page, near-black foreground buttons, muted captions.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque color from a hex value (0xRRGGBB).
    #[must_use]
    pub fn hex(hex: u32) -> Self {
        let channel = |shift: u32| f32::from(((hex >> shift) & 0xFF) as u8) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Returns true if the color is at least half opaque.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.a >= 0.5
    }

    /// Returns the 8-bit channels.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Returns the ANSI true-color foreground escape.
    #[must_use]
    pub fn ansi_fg(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    /// Returns the ANSI true-color background escape.
    #[must_use]
    pub fn ansi_bg(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("\x1b[48;2;{r};{g};{b}m")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Complete theme for the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Card surface.
    pub surface: Color,
    /// Primary text and filled buttons.
    pub foreground: Color,
    /// Text drawn on filled buttons.
    pub on_foreground: Color,
    /// Captions and placeholders.
    pub muted: Color,
    /// Outlines.
    pub border: Color,
    /// Display panel background.
    pub panel: Color,
}

impl Theme {
    /// Light theme.
    pub const LIGHT: Self = Self {
        background: Color::rgb(0.976, 0.980, 0.984),
        surface: Color::WHITE,
        foreground: Color::rgb(0.035, 0.035, 0.043),
        on_foreground: Color::rgb(0.980, 0.980, 0.980),
        muted: Color::rgb(0.443, 0.443, 0.478),
        border: Color::rgb(0.894, 0.894, 0.906),
        panel: Color::rgb(0.953, 0.957, 0.965),
    };

    /// Dark theme.
    pub const DARK: Self = Self {
        background: Color::rgb(0.035, 0.035, 0.043),
        surface: Color::rgb(0.094, 0.094, 0.106),
        foreground: Color::rgb(0.980, 0.980, 0.980),
        on_foreground: Color::rgb(0.035, 0.035, 0.043),
        muted: Color::rgb(0.631, 0.631, 0.667),
        border: Color::rgb(0.153, 0.153, 0.165),
        panel: Color::rgb(0.153, 0.153, 0.165),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF_80_00);
        assert_eq!(color.to_rgb8(), [255, 128, 0]);
    }

    #[test]
    fn test_ansi_escapes() {
        assert_eq!(Color::WHITE.ansi_fg(), "\x1b[38;2;255;255;255m");
        assert_eq!(Color::BLACK.ansi_bg(), "\x1b[48;2;0;0;0m");
        assert!(!Color::TRANSPARENT.is_visible());
    }
}
