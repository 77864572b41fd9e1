//! Core widget types and traits.

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle (set after layout).
    pub rect: Rect,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
        }
    }
}

/// Response from widget update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// Widget was clicked.
    pub clicked: bool,
    /// Pointer is over the widget.
    pub hovered: bool,
    /// Widget value changed.
    pub changed: bool,
    /// Widget finished its job (e.g. a loading screen completed).
    pub completed: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles input and advances timers by `dt` seconds.
    ///
    /// Called every frame, even without input events.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse;

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the minimum size of this widget.
    fn min_size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(WidgetState);

    impl Widget for Fixed {
        fn state(&self) -> &WidgetState {
            &self.0
        }

        fn state_mut(&mut self) -> &mut WidgetState {
            &mut self.0
        }

        fn update(&mut self, _input: &InputState, _dt: f32) -> WidgetResponse {
            WidgetResponse::default()
        }

        fn render(&self, _commands: &mut Vec<RenderCommand>) {}
    }

    #[test]
    fn test_new_state_has_no_bounds() {
        let mut widget = Fixed(WidgetState::new(WidgetId::new(7)));
        assert_eq!(widget.state().id, WidgetId::new(7));
        assert_eq!(widget.state().rect, Rect::ZERO);
        assert_eq!(widget.min_size(), (0.0, 0.0));

        widget.state_mut().rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(widget.state().rect.width, 3.0);
    }
}
