//! Platform events delivered to the field by the host's event loop

use crate::input::InputEvent;

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep the loop alive; another frame has been requested
    #[default]
    Continue,
    /// Nothing further is scheduled
    Idle,
}

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window-related event
    Window(WindowEvent),
    /// Input event (mouse, touch)
    Input(InputEvent),
    /// Frame tick - a previously requested animation frame is due
    Frame,
}

/// Window events
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowEvent {
    /// Viewport was resized
    Resized {
        /// New logical width
        width: f32,
        /// New logical height
        height: f32,
    },
}
