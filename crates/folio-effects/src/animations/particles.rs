//! Particle field animation (stateful).

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::lifecycle::{FrameToken, Lifecycle};
use crate::surface::{Surface, SurfaceSize};

/// Default ceiling on the number of particles.
pub const DEFAULT_DENSITY: usize = 80;

/// Surface area (square virtual pixels) budgeted for each particle.
pub const AREA_PER_PARTICLE: f64 = 18_000.0;

/// Surfaces are never shorter than this, so short terminals still get a field.
pub const MIN_SURFACE_HEIGHT: f32 = 700.0;

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f32 = 120.0;

/// Opacity of a line between two coincident particles.
pub const LINK_MAX_OPACITY: f32 = 0.12;

/// Largest per-axis speed in virtual pixels per frame.
const MAX_SPEED: f32 = 0.15;

/// A single point of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// Place a particle uniformly at random on the surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, size: SurfaceSize) -> Self {
        Self {
            x: rng.r#gen::<f32>() * size.width,
            y: rng.r#gen::<f32>() * size.height,
            vx: (rng.r#gen::<f32>() - 0.5) * 2.0 * MAX_SPEED,
            vy: (rng.r#gen::<f32>() - 0.5) * 2.0 * MAX_SPEED,
            radius: rng.r#gen::<f32>() * 1.8 + 0.4,
            alpha: rng.r#gen::<f32>() * 0.6 + 0.25,
        }
    }

    /// Advance one frame, bouncing off the surface edges.
    ///
    /// Each axis is checked on its own. A velocity component is negated only
    /// while the particle is outside on that axis and still heading outward,
    /// so one crossing produces exactly one flip and the overshoot never
    /// exceeds one step.
    pub fn step(&mut self, size: SurfaceSize) {
        self.x += self.vx;
        self.y += self.vy;

        if (self.x < 0.0 && self.vx < 0.0) || (self.x >= size.width && self.vx > 0.0) {
            self.vx = -self.vx;
        }
        if (self.y < 0.0 && self.vy < 0.0) || (self.y >= size.height && self.vy > 0.0) {
            self.vy = -self.vy;
        }
    }

    /// Euclidean distance to another particle.
    pub fn distance(&self, other: &Particle) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Surface dimensions for a viewport, with the minimum height applied.
pub fn surface_size(viewport_width: f32, viewport_height: f32) -> SurfaceSize {
    SurfaceSize::new(viewport_width.max(0.0), viewport_height.max(MIN_SURFACE_HEIGHT))
}

/// Number of particles for a surface: one per [`AREA_PER_PARTICLE`], capped at `density`.
pub fn particle_count(size: SurfaceSize, density: usize) -> usize {
    if size.is_empty() {
        return 0;
    }
    let by_area = (f64::from(size.width) * f64::from(size.height) / AREA_PER_PARTICLE).floor();
    if by_area >= density as f64 {
        density
    } else {
        by_area as usize
    }
}

/// Opacity of the line joining two particles `distance` apart.
///
/// `None` when the pair is too far apart to be linked.
pub fn link_opacity(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some((1.0 - distance / LINK_DISTANCE) * LINK_MAX_OPACITY)
    } else {
        None
    }
}

/// Ambient field of drifting points joined by proximity lines.
#[derive(Debug)]
pub struct ParticleField {
    /// Ceiling on the particle count.
    density: usize,
    /// Current surface dimensions.
    size: SurfaceSize,
    /// Live particles, regenerated on every resize.
    particles: Vec<Particle>,
    lifecycle: Lifecycle,
    rng: StdRng,
}

impl ParticleField {
    /// Create an idle field seeded from the OS entropy source.
    pub fn new(density: usize) -> Self {
        Self::from_rng(density, StdRng::from_entropy())
    }

    /// Create an idle field with a fixed seed.
    pub fn with_seed(density: usize, seed: u64) -> Self {
        Self::from_rng(density, StdRng::seed_from_u64(seed))
    }

    fn from_rng(density: usize, rng: StdRng) -> Self {
        Self {
            density,
            size: SurfaceSize::default(),
            particles: Vec::new(),
            lifecycle: Lifecycle::default(),
            rng,
        }
    }

    /// Mount the field on a surface and return the token for the first frame.
    ///
    /// Starting an already running field restarts it; frames scheduled by the
    /// previous run become stale.
    pub fn start(&mut self, size: SurfaceSize) -> FrameToken {
        let token = self.lifecycle.start();
        self.regenerate(size);
        tracing::debug!(
            "Particle field started on {}x{} with {} particles",
            self.size.width,
            self.size.height,
            self.particles.len()
        );
        token
    }

    /// Replace the whole particle set to fit a new surface size.
    ///
    /// Existing positions are discarded rather than rescaled.
    pub fn resize(&mut self, size: SurfaceSize) {
        if !self.lifecycle.is_running() {
            return;
        }
        self.regenerate(size);
        tracing::debug!(
            "Particle field resized to {}x{}, {} particles",
            self.size.width,
            self.size.height,
            self.particles.len()
        );
    }

    fn regenerate(&mut self, size: SurfaceSize) {
        self.size = size;
        let count = particle_count(size, self.density);
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, size)).collect();
    }

    /// Run one animation frame and return the token for the next one.
    ///
    /// A stale token, or a field that has been stopped, makes this a no-op
    /// that returns `None`.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        token: FrameToken,
        surface: &mut S,
    ) -> Option<FrameToken> {
        if !self.lifecycle.accepts(token) {
            tracing::trace!("Ignoring particle frame scheduled before teardown");
            return None;
        }

        surface.clear();

        let size = self.size;
        for particle in &mut self.particles {
            particle.step(size);
            surface.fill_circle(particle.x, particle.y, particle.radius, particle.alpha);
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(opacity) = link_opacity(a.distance(b)) {
                    surface.stroke_line((a.x, a.y), (b.x, b.y), opacity);
                }
            }
        }

        Some(token)
    }

    /// Stop the animation loop. Outstanding frame tokens become stale.
    pub fn stop(&mut self) {
        if self.lifecycle.stop() {
            self.particles.clear();
            tracing::debug!("Particle field stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn density(&self) -> usize {
        self.density
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.stop();
    }
}
