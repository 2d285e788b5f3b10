//! Spacing Core
//!
//! Foundational primitives shared by the Spacing crates:
//!
//! - **Geometry**: points, sizes and rectangles in surface space
//! - **Color**: RGBA colour with HSLA construction
//! - **Draw Context**: the 2D drawing-surface contract (clear, filled circle, line)
//!   plus a recording implementation for headless use and tests
//! - **Store**: keyed, subscribable state owned outside the simulation
//!
//! # Example
//!
//! ```rust
//! use spacing_core::{Color, DrawContext, DrawContextExt, Point, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
//! ctx.clear();
//! ctx.fill_circle(Point::new(10.0, 10.0), 2.0, Color::hsla(210.0, 0.7, 0.6, 0.3));
//!
//! assert_eq!(ctx.commands().len(), 2);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;
pub mod store;

pub use color::Color;
pub use draw::{DrawCommand, DrawContext, DrawContextExt, RecordingContext, Stroke};
pub use geometry::{Point, Rect, Size, Vec2};
pub use store::{Store, SubscriptionHandle};
