//! Headless host
//!
//! A [`Host`] backed by a [`RecordingContext`]. Frame requests are queued
//! rather than timed, so a caller advances the animation explicitly with
//! [`HeadlessHost::pump`]. Used by the integration tests and the CLI.

use crate::lifecycle::ParticleField;
use rand::Rng;
use rustc_hash::FxHashSet;
use spacing_core::{Point, RecordingContext, Size};
use spacing_platform::{Event, FrameRequestId, Host, Listener, PlatformError, Result};

#[derive(Debug)]
pub struct HeadlessHost {
    surface: Option<RecordingContext>,
    /// Reported when `surface` is `None`
    surface_error: PlatformError,
    viewport: Size,
    origin: Point,
    pending_frame: Option<FrameRequestId>,
    next_request: u64,
    frames_requested: u64,
    frames_cancelled: u64,
    listeners: FxHashSet<Listener>,
}

impl HeadlessHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            surface: Some(RecordingContext::new(viewport)),
            surface_error: PlatformError::SurfaceUnavailable,
            viewport,
            origin: Point::ZERO,
            pending_frame: None,
            next_request: 0,
            frames_requested: 0,
            frames_cancelled: 0,
            listeners: FxHashSet::default(),
        }
    }

    /// A host whose surface can't be obtained
    pub fn without_surface(viewport: Size) -> Self {
        Self::failing(viewport, PlatformError::SurfaceUnavailable)
    }

    /// A host whose surface lookup fails with `error`
    pub fn failing(viewport: Size, error: PlatformError) -> Self {
        Self {
            surface: None,
            surface_error: error,
            ..Self::new(viewport)
        }
    }

    /// Place the surface at `origin` in client coordinates
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn recording(&self) -> Option<&RecordingContext> {
        self.surface.as_ref()
    }

    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_frame
    }

    /// Consume the pending frame request, as the event loop does when the
    /// frame fires
    pub fn take_pending_frame(&mut self) -> Option<FrameRequestId> {
        self.pending_frame.take()
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    pub fn frames_cancelled(&self) -> u64 {
        self.frames_cancelled
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Change the viewport. The field learns about it through
    /// `Event::Window(WindowEvent::Resized { .. })`.
    pub fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Deliver up to `max_frames` queued frames to `field`. Stops early once
    /// no frame is pending. Returns the number of frames delivered.
    pub fn pump<R: Rng>(&mut self, field: &mut ParticleField<R>, max_frames: usize) -> usize {
        let mut delivered = 0;
        while delivered < max_frames && self.take_pending_frame().is_some() {
            field.handle_event(self, &Event::Frame);
            delivered += 1;
        }
        delivered
    }
}

impl Host for HeadlessHost {
    type Surface = RecordingContext;

    fn surface(&mut self) -> Result<&mut RecordingContext> {
        match self.surface.as_mut() {
            Some(surface) => Ok(surface),
            None => Err(self.surface_error.clone()),
        }
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn surface_origin(&self) -> Point {
        self.origin
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_request);
        self.next_request += 1;
        self.frames_requested += 1;
        self.pending_frame = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.pending_frame == Some(id) {
            self.pending_frame = None;
            self.frames_cancelled += 1;
        }
    }

    fn add_listener(&mut self, listener: Listener) {
        self.listeners.insert(listener);
    }

    fn remove_listener(&mut self, listener: Listener) {
        self.listeners.remove(&listener);
    }
}
