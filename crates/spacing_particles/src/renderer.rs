//! Field renderer
//!
//! Paints one frame onto a [`DrawContext`]: a full clear, every particle as a
//! filled circle, then (at high intensity) the connection lines on top.

use crate::config::{
    CONNECTION_LIGHTNESS, CONNECTION_LINE_WIDTH, CONNECTION_SATURATION, PARTICLE_LIGHTNESS,
    PARTICLE_SATURATION,
};
use crate::particle::Particle;
use crate::spatial::{self, Connection};
use spacing_core::{Color, DrawContext, DrawContextExt, Stroke};

/// Fill colour of a particle
pub fn particle_color(particle: &Particle) -> Color {
    Color::hsla(
        particle.hue,
        PARTICLE_SATURATION,
        PARTICLE_LIGHTNESS,
        particle.opacity,
    )
}

/// Stroke colour of a connection, taken from its first particle's hue
pub fn connection_color(connection: &Connection<'_>) -> Color {
    Color::hsla(
        connection.from.hue,
        CONNECTION_SATURATION,
        CONNECTION_LIGHTNESS,
        connection.alpha,
    )
}

pub fn draw_particle<C: DrawContext + ?Sized>(ctx: &mut C, particle: &Particle) {
    ctx.fill_circle(particle.position, particle.size, particle_color(particle));
}

pub fn draw_connection<C: DrawContext + ?Sized>(ctx: &mut C, connection: &Connection<'_>) {
    ctx.stroke_line(
        connection.from.position,
        connection.to.position,
        &Stroke::new(CONNECTION_LINE_WIDTH),
        connection_color(connection),
    );
}

/// Paint a whole frame. Returns the number of connection lines drawn.
pub fn render_frame<C: DrawContext + ?Sized>(
    ctx: &mut C,
    particles: &[Particle],
    draw_connections: bool,
) -> usize {
    ctx.clear();

    for particle in particles {
        draw_particle(ctx, particle);
    }

    if !draw_connections {
        return 0;
    }

    let mut lines = 0;
    for connection in spatial::connections(particles) {
        draw_connection(ctx, &connection);
        lines += 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{ParticleGroup, ParticleId, ParticleKind};
    use spacing_core::{DrawCommand, Point, RecordingContext, Size, Vec2};

    fn mote(id: u64, x: f32, hue: f32) -> Particle {
        Particle {
            id: ParticleId(id),
            kind: ParticleKind::Seeded,
            position: Point::new(x, 50.0),
            velocity: Vec2::ZERO,
            size: 2.0,
            opacity: 0.25,
            hue,
            group: ParticleGroup::Blue,
        }
    }

    #[test]
    fn test_render_clears_then_draws_circles() {
        let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
        let particles = vec![mote(0, 10.0, 215.0), mote(1, 20.0, 225.0)];

        let lines = render_frame(&mut ctx, &particles, false);

        assert_eq!(lines, 0);
        let commands = ctx.commands();
        assert_eq!(commands.len(), 3);
        assert!(commands[0].is_clear());
        assert_eq!(
            commands[1],
            DrawCommand::FillCircle {
                center: Point::new(10.0, 50.0),
                radius: 2.0,
                color: Color::hsla(215.0, 0.7, 0.6, 0.25),
            }
        );
    }

    #[test]
    fn test_render_connections_after_particles() {
        let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
        let particles = vec![mote(0, 0.0, 215.0), mote(1, 50.0, 235.0)];

        let lines = render_frame(&mut ctx, &particles, true);

        assert_eq!(lines, 1);
        let commands = ctx.commands();
        assert_eq!(commands.len(), 4);
        match &commands[3] {
            DrawCommand::StrokeLine {
                from,
                to,
                stroke,
                color,
            } => {
                assert_eq!(*from, Point::new(0.0, 50.0));
                assert_eq!(*to, Point::new(50.0, 50.0));
                assert_eq!(stroke.width, 0.5);
                let expected = Color::hsla(215.0, 0.5, 0.5, 0.05);
                assert!((color.a - expected.a).abs() < 1e-6);
                assert!((color.r - expected.r).abs() < 1e-6);
                assert!((color.b - expected.b).abs() < 1e-6);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_render_empty_population_still_clears() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));

        render_frame(&mut ctx, &[], true);

        assert_eq!(ctx.frame_count(), 1);
        assert_eq!(ctx.commands().len(), 1);
    }
}
