//! Host abstraction: the environment a field is mounted into

use crate::error::Result;
use spacing_core::{DrawContext, Point, Size};

/// Identifier of a pending animation-frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Event listeners a field attaches while running
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Pointer-down / click on the surface
    PointerDown,
    /// Touch start on the surface
    TouchStart,
    /// Viewport resize
    Resize,
}

impl Listener {
    pub const ALL: [Listener; 3] = [Listener::PointerDown, Listener::TouchStart, Listener::Resize];
}

/// The host a field is mounted into.
///
/// Implemented by the platform integration (a browser canvas, a native
/// window, or the headless recorder used by tests). Everything is driven from
/// one event loop: the host calls back into the field for frames, input and
/// resizes, and never concurrently.
pub trait Host {
    /// The drawing surface type
    type Surface: DrawContext;

    /// The drawing surface, or why it can't be used right now
    fn surface(&mut self) -> Result<&mut Self::Surface>;

    /// Current inner size of the viewport the surface should fill
    fn viewport_size(&self) -> Size;

    /// Top-left corner of the surface in client coordinates
    fn surface_origin(&self) -> Point {
        Point::ZERO
    }

    /// Schedule one animation frame
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancel a pending animation frame. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: FrameRequestId);

    /// Start delivering events of the given kind
    fn add_listener(&mut self, listener: Listener);

    /// Stop delivering events of the given kind
    fn remove_listener(&mut self, listener: Listener);
}
