//! Draw Context - 2D drawing-surface API
//!
//! The `DrawContext` trait is the only surface the simulation draws onto. It
//! exposes just the primitives a canvas-style backend offers:
//!
//! - Clearing a rectangle
//! - Filling a circle
//! - Stroking a straight line
//!
//! along with the logical width/height of the surface, which the host may
//! change on resize.
//!
//! # Example
//!
//! ```ignore
//! fn paint(ctx: &mut dyn DrawContext) {
//!     ctx.clear();
//!     ctx.fill_circle(Point::new(40.0, 40.0), 3.0, Color::hsla(220.0, 0.7, 0.6, 0.25));
//!     ctx.stroke_line(
//!         Point::new(40.0, 40.0),
//!         Point::new(90.0, 60.0),
//!         &Stroke::new(0.5),
//!         Color::hsla(220.0, 0.5, 0.5, 0.05),
//!     );
//! }
//! ```

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

/// Stroke configuration for lines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width in surface units
    pub width: f32,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

/// A 2D drawing surface
pub trait DrawContext {
    /// Logical size of the surface
    fn viewport(&self) -> Size;

    /// Resize the surface (e.g. to follow the window)
    fn set_viewport(&mut self, size: Size);

    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke a straight line between two points
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke, color: Color);
}

/// Convenience methods available on every `DrawContext`
pub trait DrawContextExt: DrawContext {
    /// Clear the whole surface
    fn clear(&mut self) {
        let rect = self.viewport().to_rect();
        self.clear_rect(rect);
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        rect: Rect,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        stroke: Stroke,
        color: Color,
    },
}

impl DrawCommand {
    pub fn is_clear(&self) -> bool {
        matches!(self, DrawCommand::ClearRect { .. })
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::FillCircle { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::StrokeLine { .. })
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands recorded since (and including) the most recent full clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(DrawCommand::is_clear)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of clears recorded, i.e. the number of frames drawn
    pub fn frame_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_clear()).count()
    }

    /// Clear all recorded commands
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect { rect });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            stroke: *stroke,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.clear();
        ctx.fill_circle(Point::new(10.0, 30.0), 2.0, Color::WHITE);
        ctx.stroke_line(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            &Stroke::new(0.5),
            Color::BLACK,
        );

        assert_eq!(ctx.commands().len(), 3);
        assert_eq!(
            ctx.commands()[0],
            DrawCommand::ClearRect {
                rect: Rect::new(0.0, 0.0, 800.0, 600.0)
            }
        );
        assert!(ctx.commands()[1].is_circle());
        assert!(ctx.commands()[2].is_line());
    }

    #[test]
    fn test_last_frame() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));

        ctx.clear();
        ctx.fill_circle(Point::ZERO, 1.0, Color::WHITE);
        ctx.fill_circle(Point::ZERO, 1.0, Color::WHITE);
        ctx.clear();
        ctx.fill_circle(Point::ZERO, 1.0, Color::WHITE);

        assert_eq!(ctx.frame_count(), 2);
        assert_eq!(ctx.last_frame().len(), 2);
    }

    #[test]
    fn test_viewport_follows_resize() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.set_viewport(Size::new(300.0, 200.0));
        ctx.clear();

        assert_eq!(
            ctx.take_commands(),
            vec![DrawCommand::ClearRect {
                rect: Rect::new(0.0, 0.0, 300.0, 200.0)
            }]
        );
        assert!(ctx.commands().is_empty());
    }
}
