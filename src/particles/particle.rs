use std::f32::consts::TAU;

use rand::Rng;

use crate::math::Vec2;

use super::{SwirlConfig, Viewport};

/// The characters particles are drawn with.
pub const GLYPHS: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@#$%&*+=-";

/// Pick a glyph uniformly from [GLYPHS].
pub fn random_glyph(rng: &mut impl Rng) -> char {
    GLYPHS[rng.random_range(0..GLYPHS.len())] as char
}

/// Pick an angle uniformly from [0, 2π).
pub fn random_angle(rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..TAU)
}

/// A single character spiraling around the center of the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    /// Offset from the center at spawn time, in un-stretched swirl space.
    pub initial_offset: Vec2,

    /// Monotonic time, in seconds, when the particle was spawned.
    pub birth_time: f64,

    pub glyph: char,
}

/// Places particles on a ring around the center of the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spawner {
    ring_min: f32,
    ring_max: f32,
}

impl Spawner {
    pub fn new(config: &SwirlConfig) -> Self {
        let ring_min = config.spawn_ring_min.min(config.spawn_ring_max);
        let ring_max = config.spawn_ring_min.max(config.spawn_ring_max);
        Self { ring_min, ring_max }
    }

    /// The radius bounds, in cells, of the spawn ring for a viewport.
    pub fn ring_bounds(&self, viewport: &Viewport) -> (f32, f32) {
        let max_radius = viewport.max_radius();
        (self.ring_min * max_radius, self.ring_max * max_radius)
    }

    /// Create a fresh particle at a random point on the spawn ring.
    pub fn respawn(
        &self,
        viewport: &Viewport,
        now: f64,
        rng: &mut impl Rng,
    ) -> Particle {
        let (inner, outer) = self.ring_bounds(viewport);
        let radius = rng.random_range(inner..=outer);
        let angle = random_angle(rng);
        Particle {
            initial_offset: Vec2::new(radius * angle.cos(), radius * angle.sin()),
            birth_time: now,
            glyph: random_glyph(rng),
        }
    }
}
