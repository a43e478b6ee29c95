//! Visual effects for the folio portfolio.
//!
//! Two independent engines live here: a [`ParticleField`] of drifting points
//! joined by proximity lines, and a [`TypewriterCycler`] that types and
//! deletes a rotating list of phrases. Both are driven by the host loop and
//! follow an explicit start/stop lifecycle; steps scheduled before a stop are
//! ignored.

mod animations;
mod chars;
mod color;
mod error;
mod lifecycle;
mod raster;
mod state;
mod surface;

pub use animations::caret::{CARET, caret_visible, render_caret};
pub use animations::particles::{
    AREA_PER_PARTICLE, DEFAULT_DENSITY, LINK_DISTANCE, LINK_MAX_OPACITY, MIN_SURFACE_HEIGHT,
    Particle, ParticleField, link_opacity, particle_count, surface_size,
};
pub use animations::typewriter::{Mode, TypewriterCycler};
pub use color::{blend, glow_gradient, hsl_to_rgb};
pub use error::EffectError;
pub use lifecycle::{FrameToken, Ticket, TimerToken};
pub use raster::{CellSurface, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
pub use state::ParticleBackground;
pub use surface::{Surface, SurfaceSize};
