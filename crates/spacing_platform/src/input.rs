//! Input event types for pointer and touch

use spacing_core::Point;

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse / pointer event
    Mouse(MouseEvent),
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position in client coordinates
        x: f32,
        /// Y position in client coordinates
        y: f32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position in client coordinates
        x: f32,
        /// Y position in client coordinates
        y: f32,
    },
}

impl MouseEvent {
    /// Client position of a primary-button press, the only mouse input that
    /// counts as a click on the surface
    pub fn primary_press(&self) -> Option<Point> {
        match self {
            MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } => Some(Point::new(*x, *y)),
            _ => None,
        }
    }
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Touch Events
// ============================================================================

/// A single contact point of a touch event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Unique identifier for this touch
    pub id: u64,
    /// X position in client coordinates
    pub x: f32,
    /// Y position in client coordinates
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Touch phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Touch events for touchscreens
///
/// `touches` lists every contact still on the surface, `changed_touches` the
/// contacts that changed in this event. Either list may be empty (a touch end
/// after the last finger lifts has no remaining `touches`).
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
    pub changed_touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// A touch start with a single contact
    pub fn started(x: f32, y: f32) -> Self {
        let point = TouchPoint::new(0, x, y);
        Self {
            phase: TouchPhase::Started,
            touches: vec![point],
            changed_touches: vec![point],
        }
    }

    /// The contact a single-point consumer should act on: the first active
    /// touch, falling back to the first changed touch. Further contacts are
    /// ignored. `None` when both lists are empty.
    pub fn primary_point(&self) -> Option<Point> {
        self.touches
            .first()
            .or_else(|| self.changed_touches.first())
            .map(|t| Point::new(t.x, t.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_press_only_left() {
        let left = MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: 3.0,
            y: 4.0,
        };
        let right = MouseEvent::ButtonPressed {
            button: MouseButton::Right,
            x: 3.0,
            y: 4.0,
        };
        let released = MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x: 3.0,
            y: 4.0,
        };

        assert_eq!(left.primary_press(), Some(Point::new(3.0, 4.0)));
        assert_eq!(right.primary_press(), None);
        assert_eq!(released.primary_press(), None);
    }

    #[test]
    fn test_primary_point_uses_first_touch() {
        let event = TouchEvent {
            phase: TouchPhase::Started,
            touches: vec![TouchPoint::new(1, 10.0, 20.0), TouchPoint::new(2, 50.0, 60.0)],
            changed_touches: vec![TouchPoint::new(2, 50.0, 60.0)],
        };

        assert_eq!(event.primary_point(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_primary_point_falls_back_to_changed() {
        let event = TouchEvent {
            phase: TouchPhase::Ended,
            touches: vec![],
            changed_touches: vec![TouchPoint::new(1, 7.0, 8.0)],
        };

        assert_eq!(event.primary_point(), Some(Point::new(7.0, 8.0)));
    }

    #[test]
    fn test_empty_touch_lists() {
        let event = TouchEvent {
            phase: TouchPhase::Ended,
            touches: vec![],
            changed_touches: vec![],
        };

        assert_eq!(event.primary_point(), None);
    }
}
