//! Lifecycle Controller
//!
//! [`ParticleField`] ties the simulation to a [`Host`]: it sizes the surface,
//! seeds the population, attaches listeners, and drives the frame loop. The
//! host delivers frames, input and resizes through [`ParticleField::handle_event`]
//! (or the individual handlers), always from one event loop, so a frame step
//! and an input handler never overlap.
//!
//! # Example
//!
//! ```ignore
//! let mut field = ParticleField::new(FieldContext::default());
//! if let MountOutcome::Mounted = field.mount(&mut host) {
//!     while let Some(event) = host.next_event() {
//!         field.handle_event(&mut host, &event);
//!     }
//! }
//! field.unmount(&mut host);
//! ```

use crate::config::{FieldSettings, SimulationConfig};
use crate::factory::ParticleFactory;
use crate::interaction;
use crate::particle::Particle;
use crate::population::{FrameStats, Population};
use crate::renderer;
use crate::settings::SettingsWatch;
use rand::rngs::StdRng;
use rand::Rng;
use spacing_core::{DrawContext, Point, Size};
use spacing_platform::{
    ControlFlow, Event, FrameRequestId, Host, InputEvent, Listener, PlatformError, TouchEvent,
    TouchPhase, WindowEvent,
};

/// The externally owned inputs the field reads, held as a snapshot and
/// refreshed through [`ParticleField::apply_settings`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldContext {
    pub config: SimulationConfig,
    pub reduced_motion: bool,
}

impl FieldContext {
    pub fn new(config: SimulationConfig, reduced_motion: bool) -> Self {
        Self {
            config,
            reduced_motion,
        }
    }
}

impl From<FieldSettings> for FieldContext {
    fn from(settings: FieldSettings) -> Self {
        Self::new(settings.background_animation, settings.reduced_motion())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    Uninitialized,
    Running,
    Stopped,
}

/// Result of [`ParticleField::mount`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// The host had no usable surface; nothing was initialised
    Skipped(PlatformError),
}

impl MountOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountOutcome::Mounted)
    }
}

/// A mounted (or mountable) dust-mote field
pub struct ParticleField<R: Rng = StdRng> {
    context: FieldContext,
    population: Population,
    factory: ParticleFactory<R>,
    state: LifecycleState,
    bounds: Size,
    pending_frame: Option<FrameRequestId>,
    frames: u64,
    draws: u64,
}

impl ParticleField<StdRng> {
    /// Field with an entropy-seeded random source
    pub fn new(context: FieldContext) -> Self {
        Self::with_factory(context, ParticleFactory::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Field drawing from the given random source
    pub fn with_rng(context: FieldContext, rng: R) -> Self {
        Self::with_factory(context, ParticleFactory::new(rng))
    }

    fn with_factory(context: FieldContext, factory: ParticleFactory<R>) -> Self {
        Self {
            context,
            population: Population::new(),
            factory,
            state: LifecycleState::Uninitialized,
            bounds: Size::ZERO,
            pending_frame: None,
            frames: 0,
            draws: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn context(&self) -> FieldContext {
        self.context
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Direct access to the live collection, for hosts restoring a scene
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn particles(&self) -> &[Particle] {
        self.population.particles()
    }

    /// Surface bounds the simulation currently wraps and clamps against
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn is_frame_pending(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Number of simulation steps taken since mount
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of times the surface was painted since mount
    pub fn draws(&self) -> u64 {
        self.draws
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Size the surface, seed the population, attach listeners and run the
    /// first frame. A host without a usable surface is skipped, not failed.
    pub fn mount<H: Host>(&mut self, host: &mut H) -> MountOutcome {
        if self.is_running() {
            tracing::debug!("ParticleField: already mounted");
            return MountOutcome::Mounted;
        }

        let size = host.viewport_size();
        match host.surface() {
            Ok(surface) => surface.set_viewport(size),
            Err(err) => {
                tracing::warn!("ParticleField: skipping mount: {}", err);
                return MountOutcome::Skipped(err);
            }
        }

        self.bounds = size;
        let count = self.context.config.intensity.initial_population();
        self.population.seed(count, size, &mut self.factory);
        for listener in Listener::ALL {
            host.add_listener(listener);
        }
        self.state = LifecycleState::Running;
        self.frames = 0;
        self.draws = 0;

        tracing::debug!(
            "ParticleField: mounted {}x{} with {} particles ({}, {}, reduced_motion={})",
            size.width,
            size.height,
            count,
            self.context.config.effect_kind,
            self.context.config.intensity,
            self.context.reduced_motion
        );

        self.frame(host);
        MountOutcome::Mounted
    }

    /// Cancel the pending frame and detach listeners. The surface keeps its
    /// last drawn state.
    pub fn unmount<H: Host>(&mut self, host: &mut H) {
        if !self.is_running() {
            return;
        }

        if let Some(id) = self.pending_frame.take() {
            host.cancel_frame(id);
        }
        for listener in Listener::ALL {
            host.remove_listener(listener);
        }
        self.state = LifecycleState::Stopped;

        tracing::debug!(
            "ParticleField: unmounted after {} frames with {} particles",
            self.frames,
            self.population.len()
        );
    }

    /// Refresh the context from new settings.
    ///
    /// A different animation config restarts the field with a fresh
    /// population. A reduced-motion toggle only flips the flag; the next
    /// step honours it.
    pub fn apply_settings<H: Host>(&mut self, host: &mut H, context: FieldContext) {
        if context == self.context {
            return;
        }

        if context.config != self.context.config {
            let running = self.is_running();
            tracing::debug!(
                "ParticleField: config changed to {} / {}{}",
                context.config.effect_kind,
                context.config.intensity,
                if running { ", restarting" } else { "" }
            );
            if running {
                self.unmount(host);
                self.context = context;
                self.mount(host);
            } else {
                self.context = context;
            }
            return;
        }

        tracing::debug!("ParticleField: reduced_motion={}", context.reduced_motion);
        self.context = context;
        if !self.is_running() || self.is_frame_pending() {
            return;
        }
        if self.context.reduced_motion {
            self.redraw(host);
        } else if self.context.config.keeps_animating() {
            self.schedule(host);
        }
    }

    /// Apply the latest settings from `watch`, if they changed
    pub fn sync_settings<H: Host>(&mut self, host: &mut H, watch: &mut SettingsWatch) {
        if let Some(settings) = watch.take_changed() {
            self.apply_settings(host, settings.into());
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Run one frame: step the simulation, draw, and reschedule while the
    /// particle effect is selected. Under reduced motion the frame only
    /// redraws the current state and schedules nothing.
    ///
    /// Returns the step's statistics, or `None` when no step was taken.
    pub fn frame<H: Host>(&mut self, host: &mut H) -> Option<FrameStats> {
        self.pending_frame = None;
        if !self.is_running() {
            return None;
        }

        if self.context.reduced_motion {
            self.redraw(host);
            return None;
        }

        let stats = self.population.step(self.bounds, &mut self.factory);
        self.frames += 1;
        tracing::trace!(
            "ParticleField: frame {} grown={} merges={} dropped={} population={}",
            self.frames,
            stats.grown,
            stats.merges,
            stats.dropped,
            stats.population
        );

        self.redraw(host);
        if self.context.config.keeps_animating() {
            self.schedule(host);
        }
        Some(stats)
    }

    fn schedule<H: Host>(&mut self, host: &mut H) {
        if self.pending_frame.is_none() {
            self.pending_frame = Some(host.request_frame());
        }
    }

    fn redraw<H: Host>(&mut self, host: &mut H) {
        match host.surface() {
            Ok(surface) => {
                renderer::render_frame(
                    surface,
                    self.population.particles(),
                    self.context.config.intensity.draws_connections(),
                );
                self.draws += 1;
            }
            Err(err) => tracing::debug!("ParticleField: surface unavailable, not drawing: {}", err),
        }
    }

    /// Redraw once after a state change when no frame is coming to do it
    fn refresh<H: Host>(&mut self, host: &mut H) {
        if !self.is_frame_pending() {
            self.redraw(host);
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch one host event. Returns `Idle` once nothing is scheduled.
    pub fn handle_event<H: Host>(&mut self, host: &mut H, event: &Event) -> ControlFlow {
        match event {
            Event::Frame => {
                self.frame(host);
            }
            Event::Window(WindowEvent::Resized { width, height }) => {
                self.resize(host, Size::new(*width, *height));
            }
            Event::Input(InputEvent::Mouse(mouse)) => {
                if let Some(point) = mouse.primary_press() {
                    self.pointer_down(host, point);
                }
            }
            Event::Input(InputEvent::Touch(touch)) => {
                self.touch_start(host, touch);
            }
        }

        if self.is_frame_pending() {
            ControlFlow::Continue
        } else {
            ControlFlow::Idle
        }
    }

    /// Burst the particles around a press at client coordinates `client`.
    /// Applied immediately, so the next frame's merge scan sees the result.
    /// Returns how many particles burst.
    pub fn pointer_down<H: Host>(&mut self, host: &mut H, client: Point) -> usize {
        if !self.is_running() {
            return 0;
        }

        let point = client.relative_to(host.surface_origin());
        let delta = interaction::burst_at(self.population.particles(), point, &mut self.factory);
        if delta.is_empty() {
            return 0;
        }

        let burst = delta.remove.len();
        self.population.apply(delta);
        self.refresh(host);
        burst
    }

    /// Touch start, reduced to its first contact. Other phases and events
    /// without any contact are ignored.
    pub fn touch_start<H: Host>(&mut self, host: &mut H, touch: &TouchEvent) -> usize {
        if touch.phase != TouchPhase::Started {
            return 0;
        }
        match touch.primary_point() {
            Some(point) => self.pointer_down(host, point),
            None => {
                tracing::trace!("ParticleField: ignoring touch without contacts");
                0
            }
        }
    }

    /// Follow a viewport resize: resize the surface and clamp every particle
    /// into the new bounds. The population is neither reseeded nor culled.
    pub fn resize<H: Host>(&mut self, host: &mut H, size: Size) {
        if !self.is_running() {
            return;
        }

        if let Ok(surface) = host.surface() {
            surface.set_viewport(size);
        }
        self.bounds = size;
        self.population.clamp_to(size);
        tracing::debug!("ParticleField: resized to {}x{}", size.width, size.height);

        self.refresh(host);
    }
}

impl<R: Rng> std::fmt::Debug for ParticleField<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleField")
            .field("context", &self.context)
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("population", &self.population.len())
            .field("pending_frame", &self.pending_frame)
            .field("frames", &self.frames)
            .finish()
    }
}
