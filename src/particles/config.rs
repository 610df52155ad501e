use std::time::Duration;

/// Every tunable constant which shapes the swirl.
///
/// There is no runtime configuration. The default values are the ones the
/// animation ships with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SwirlConfig {
    /// Fixed damping scale applied to the raw swirl vector.
    pub scale: f32,

    /// Grows or shrinks the overall swirl radius.
    pub radius_mult: f32,

    /// Horizontal stretch. Terminal cells are roughly twice as tall as they
    /// are wide, so the default doubles x.
    pub x_mult: f32,

    /// Vertical stretch.
    pub y_mult: f32,

    /// Converts wall-clock seconds into swirl time.
    pub speed: f32,

    /// Particles closer than this to the center (in un-stretched space) are
    /// respawned.
    pub min_radius: f32,

    /// Inner bound of the spawn ring as a fraction of the smaller half
    /// dimension of the terminal.
    pub spawn_ring_min: f32,

    /// Outer bound of the spawn ring. 0.95 keeps every spawn on screen,
    /// 2.95 also spawns particles outside which only become visible once
    /// they have spiraled inward.
    pub spawn_ring_max: f32,

    /// One particle per this many terminal cells.
    pub density_divisor: usize,

    /// Lower bound on the particle count.
    pub min_particles: usize,

    /// A live particle swaps its glyph with a 1-in-N chance each frame.
    pub glyph_mutation_odds: u32,

    /// Fixed sleep between frames.
    pub frame_delay: Duration,

    pub black_hole: BlackHoleConfig,
}

impl Default for SwirlConfig {
    fn default() -> Self {
        Self {
            scale: 0.76,
            radius_mult: 2.0,
            x_mult: 2.0,
            y_mult: 1.0,
            speed: 1.35,
            min_radius: 3.0,
            spawn_ring_min: 0.35,
            spawn_ring_max: 2.95,
            density_divisor: 20,
            min_particles: 200,
            glyph_mutation_odds: 28,
            frame_delay: Duration::from_micros(3280),
            black_hole: BlackHoleConfig::default(),
        }
    }
}

impl SwirlConfig {
    /// The number of particles to simulate for a terminal with the given
    /// dimensions.
    pub fn particle_count(&self, cols: u16, rows: u16) -> usize {
        let area = cols as usize * rows as usize;
        (area / self.density_divisor.max(1)).max(self.min_particles)
    }
}

/// Constants used by the accretion-disk shading. Radii are fractions of the
/// largest radius which is visible on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlackHoleConfig {
    pub shadow_radius: f32,
    pub ring_radius: f32,
    pub ring_width: f32,

    /// Swirl is divided by this before clamping to [0, 1].
    pub swirl_norm: f32,

    /// Weights for time, swirl, radius and heat in the rotating hue.
    pub hue_weights: [f32; 4],

    /// Ring blink frequency in toggles per second.
    pub ring_blink_rate: f32,
}

impl Default for BlackHoleConfig {
    fn default() -> Self {
        Self {
            shadow_radius: 0.18,
            ring_radius: 0.32,
            ring_width: 0.06,
            swirl_norm: 2.0,
            hue_weights: [0.12, 0.85, 0.40, 0.15],
            ring_blink_rate: 14.0,
        }
    }
}
