use rand::Rng;

use crate::render::{Canvas, Cell, Palette, Style};

use super::{
    random_glyph, shade_plain, BlackHoleShader, Particle,
    ShadingMode, Spawner, SwirlConfig, SwirlError, Trajectory, Viewport,
};

/// What happened while rendering a single frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub drawn: usize,
    pub respawned: usize,
    pub hidden: usize,
}

/// A fixed-size arena of particles.
///
/// The particle storage is allocated once, when the field is created, and
/// every slot is reused in place for the lifetime of the field. Expired
/// particles are respawned into the slot they occupied.
pub struct ParticleField {
    config: SwirlConfig,
    trajectory: Trajectory,
    spawner: Spawner,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Allocate and spawn every particle for the given viewport.
    ///
    /// Returns `Err()` if the particle storage cannot be allocated.
    pub fn new(
        config: SwirlConfig,
        viewport: Viewport,
        now: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, SwirlError> {
        let count = config.particle_count(viewport.cols, viewport.rows);
        let mut particles = Vec::new();
        particles.try_reserve_exact(count).map_err(|source| {
            SwirlError::ParticleAllocationFailed { count, source }
        })?;

        let spawner = Spawner::new(&config);
        particles.extend(
            (0..count).map(|_| spawner.respawn(&viewport, now, rng)),
        );

        Ok(Self {
            trajectory: Trajectory::new(&config),
            spawner,
            viewport,
            particles,
            config,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adopt a new viewport and respawn every particle in place.
    ///
    /// The particle count is fixed when the field is created and does not
    /// change here.
    pub fn resize(&mut self, viewport: Viewport, now: f64, rng: &mut impl Rng) {
        self.viewport = viewport;
        for particle in self.particles.iter_mut() {
            *particle = self.spawner.respawn(&self.viewport, now, rng);
        }
    }

    /// Advance every particle to `now` and draw the survivors.
    ///
    /// # Params
    ///
    /// * `canvas` - erased, then drawn into. Only in-bounds cells are ever
    ///   written.
    /// * `now` - monotonic time in seconds, the same clock used for birth
    ///   times.
    /// * `mode` - which shading to apply.
    /// * `palette` - resolves shades to concrete colors.
    pub fn render(
        &mut self,
        canvas: &mut impl Canvas,
        now: f64,
        mode: ShadingMode,
        palette: &Palette,
        rng: &mut impl Rng,
    ) -> FrameStats {
        let Self {
            config,
            trajectory,
            spawner,
            viewport,
            particles,
        } = self;

        let mut stats = FrameStats::default();
        let time = now as f32;
        let shader =
            BlackHoleShader::new(config, viewport, palette.rainbow_len());

        canvas.erase();
        for particle in particles.iter_mut() {
            let age = trajectory.age(particle.birth_time, now);
            let kinematics = trajectory.advance(particle.initial_offset, age);

            let Some((x, y)) = trajectory.visible_cell(&kinematics, viewport)
            else {
                *particle = spawner.respawn(viewport, now, rng);
                stats.respawned += 1;
                continue;
            };

            if rng.random_ratio(1, config.glyph_mutation_odds.max(1)) {
                particle.glyph = random_glyph(rng);
            }

            let style = if palette.is_colored() {
                let shade = match mode {
                    ShadingMode::Plain => shade_plain(age),
                    ShadingMode::BlackHole => {
                        shader.shade(&kinematics, time, rng)
                    }
                };
                match palette.style(&shade) {
                    Some(style) => style,
                    None => {
                        stats.hidden += 1;
                        continue;
                    }
                }
            } else {
                Style::PLAIN
            };

            canvas.draw(
                x,
                y,
                Cell {
                    glyph: particle.glyph,
                    style,
                },
            );
            stats.drawn += 1;
        }
        stats
    }
}
