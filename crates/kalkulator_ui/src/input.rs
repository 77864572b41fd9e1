//! Input handling for UI.
//!
//! Collects mouse and keyboard events for one frame and maps keys to
//! calculator actions.

use kalkulator_core::{Digit, Operator};

use crate::action::Action;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse X position (cells).
    pub mouse_x: f32,
    /// Current mouse Y position (cells).
    pub mouse_y: f32,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
    /// Keys pressed this frame, in order.
    keys_pressed: Vec<Key>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed = 0;
        self.keys_pressed.clear();
    }

    /// Updates mouse position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        self.buttons_down &= !Self::button_mask(button);
    }

    /// Moves the mouse and clicks the left button.
    pub fn click_at(&mut self, x: f32, y: f32) {
        self.set_mouse_pos(x, y);
        self.mouse_button_down(MouseButton::Left);
        self.mouse_button_up(MouseButton::Left);
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        self.keys_pressed.push(key);
    }

    /// Records typed text, one key per character.
    pub fn text(&mut self, text: &str) {
        self.keys_pressed.extend(text.chars().map(Key::Char));
    }

    /// Returns true if the mouse button was clicked this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns the keys pressed this frame, in order.
    #[must_use]
    pub fn keys_pressed(&self) -> &[Key] {
        &self.keys_pressed
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
        }
    }
}

/// Keyboard shortcuts for the calculator.
///
/// | key | action |
/// |---|---|
/// | `0`-`9` | digit |
/// | `.` `,` | decimal point |
/// | `+ - * x / ^` | operator |
/// | `=` Enter | calculate |
/// | `c` Escape | clear |
/// | `n` | toggle sign |
/// | `%` | percentage |
/// | `h` | toggle history |
/// | `y` | copy result |
/// | `?` | about |
#[derive(Debug, Clone, Copy, Default)]
pub struct Keymap;

impl Keymap {
    /// Returns the action bound to `key`.
    #[must_use]
    pub fn action_for(self, key: Key) -> Option<Action> {
        match key {
            Key::Enter => Some(Action::Calculate),
            Key::Escape => Some(Action::Clear),
            Key::Backspace | Key::Tab => None,
            Key::Char(c) => Self::char_action(c),
        }
    }

    fn char_action(c: char) -> Option<Action> {
        if let Ok(digit) = Digit::try_from(c) {
            return Some(Action::Digit(digit));
        }
        match c {
            '.' | ',' => Some(Action::Decimal),
            '=' => Some(Action::Calculate),
            'c' | 'C' => Some(Action::Clear),
            'n' => Some(Action::ToggleSign),
            '%' => Some(Action::Percent),
            'h' => Some(Action::ToggleHistory),
            'y' => Some(Action::CopyResult),
            '?' => Some(Action::OpenAbout),
            _ => {
                let mut buf = [0; 4];
                c.encode_utf8(&mut buf)
                    .parse::<Operator>()
                    .ok()
                    .map(Action::Operator)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_click() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.begin_frame();
        assert!(!input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.mouse_button_up(MouseButton::Left);
        assert!(!input.mouse_down(MouseButton::Left));
    }

    #[test]
    fn test_text_becomes_keys() {
        let mut input = InputState::new();
        input.text("7+3");
        input.key_down(Key::Enter);

        assert_eq!(input.keys_pressed().len(), 4);
        assert!(input.keys_pressed().contains(&Key::Char('+')));

        input.begin_frame();
        assert!(input.keys_pressed().is_empty());
    }

    #[test]
    fn test_keymap() {
        let keymap = Keymap;
        assert_eq!(
            keymap.action_for(Key::Char('7')),
            Some(Action::Digit(Digit::new(7).unwrap()))
        );
        assert_eq!(
            keymap.action_for(Key::Char('x')),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            keymap.action_for(Key::Char('^')),
            Some(Action::Operator(Operator::Power))
        );
        assert_eq!(keymap.action_for(Key::Enter), Some(Action::Calculate));
        assert_eq!(keymap.action_for(Key::Char('q')), None);
    }
}
