//! Spacing Platform Abstraction Layer
//!
//! Platform-agnostic traits and types for the environment a particle field
//! runs in: input events, viewport resizes, animation-frame scheduling and
//! the drawing surface.
//!
//! # Architecture
//!
//! - [`Host`] - surface access, frame scheduling and listener registration
//! - [`Event`] - what the host's event loop delivers to a mounted field
//! - [`InputEvent`] - pointer and touch input in client coordinates
//!
//! # Example
//!
//! ```ignore
//! use spacing_platform::*;
//!
//! fn pump<H: Host>(host: &mut H, field: &mut MyField, events: Vec<Event>) {
//!     for event in events {
//!         if field.handle_event(host, &event) == ControlFlow::Idle {
//!             break;
//!         }
//!     }
//! }
//! ```

mod error;
mod event;
mod input;
mod platform;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, WindowEvent};
pub use input::{InputEvent, MouseButton, MouseEvent, TouchEvent, TouchPhase, TouchPoint};
pub use platform::{FrameRequestId, Host, Listener};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, WindowEvent};
    pub use crate::input::{
        InputEvent, MouseButton, MouseEvent, TouchEvent, TouchPhase, TouchPoint,
    };
    pub use crate::platform::{FrameRequestId, Host, Listener};
}
