use rand::Rng;

use super::{BlackHoleConfig, Kinematics, SwirlConfig, Viewport};

/// How particles are colored. Toggled at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Monochrome "falling code".
    #[default]
    Plain,

    /// Multi-band accretion disk colored by radius and velocity.
    BlackHole,
}

impl ShadingMode {
    pub fn toggled(self) -> Self {
        match self {
            ShadingMode::Plain => ShadingMode::BlackHole,
            ShadingMode::BlackHole => ShadingMode::Plain,
        }
    }
}

/// The band of the picture a particle was classified into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Zone {
    Plain,
    Shadow,
    Ring,
    Disk,
}

/// Which palette entry to draw with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ink {
    /// The single plain-mode color.
    Mono,

    /// An index into the rainbow palette.
    Rainbow(usize),

    /// The brightest entry of the rainbow palette.
    White,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub bold: bool,
    pub dim: bool,
    pub blink: bool,
}

impl Emphasis {
    pub const NONE: Emphasis = Emphasis {
        bold: false,
        dim: false,
        blink: false,
    };
    pub const BOLD: Emphasis = Emphasis {
        bold: true,
        dim: false,
        blink: false,
    };
    pub const DIM: Emphasis = Emphasis {
        bold: false,
        dim: true,
        blink: false,
    };
    pub const BOLD_BLINK: Emphasis = Emphasis {
        bold: true,
        dim: false,
        blink: true,
    };
}

/// The visual state of a particle for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shade {
    pub zone: Zone,
    pub ink: Ink,
    pub emphasis: Emphasis,

    /// False when the particle should be skipped this frame.
    pub visible: bool,
}

/// Normalized age above which plain-mode particles turn bold.
const PLAIN_BOLD_THRESHOLD: f32 = 0.66;

/// Plain-mode shading. Particles brighten once they have lived long
/// enough and stay bright until they are respawned.
pub fn shade_plain(age: f32) -> Shade {
    let normalized_age = (age / 2.0).min(1.0);
    let emphasis = if normalized_age > PLAIN_BOLD_THRESHOLD {
        Emphasis::BOLD
    } else {
        Emphasis::NONE
    };
    Shade {
        zone: Zone::Plain,
        ink: Ink::Mono,
        emphasis,
        visible: true,
    }
}

/// The velocity derived quantities used to pick accretion-disk colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiskMotion {
    /// Angular rate proxy, |v̇| / r, normalized to [0, 1].
    pub swirl: f32,

    /// Speed relative to the fastest expected speed, in [0, 1].
    pub heat: f32,

    /// Radius relative to the largest visible radius, in [0, 1].
    pub radius: f32,
}

/// Accretion-disk shading, with every per-frame constant resolved for the
/// current viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlackHoleShader {
    config: BlackHoleConfig,
    max_visible_radius: f32,
    reference_speed: f32,
    shadow_radius: f32,
    ring_radius: f32,
    ring_width: f32,
    palette_len: usize,
}

impl BlackHoleShader {
    /// Build a shader for one frame.
    ///
    /// # Params
    ///
    /// * `palette_len` - the number of rainbow colors. The last entry is
    ///   treated as white.
    pub fn new(
        config: &SwirlConfig,
        viewport: &Viewport,
        palette_len: usize,
    ) -> Self {
        let bh = config.black_hole;
        let max_visible_radius = viewport.max_visible_radius(config);
        Self {
            config: bh,
            max_visible_radius,
            reference_speed: config.speed * max_visible_radius * 2.0,
            shadow_radius: bh.shadow_radius * max_visible_radius,
            ring_radius: bh.ring_radius * max_visible_radius,
            ring_width: bh.ring_width * max_visible_radius,
            palette_len: palette_len.max(1),
        }
    }

    pub fn shadow_radius(&self) -> f32 {
        self.shadow_radius
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    /// Half-width of the photon ring for a given normalized swirl.
    pub fn ring_thickness(&self, swirl: f32) -> f32 {
        self.ring_width * (0.6 + 0.8 * swirl)
    }

    pub fn motion(&self, radius: f32, speed: f32) -> DiskMotion {
        let swirl = speed / (radius + 1e-3);
        DiskMotion {
            swirl: (swirl / self.config.swirl_norm).clamp(0.0, 1.0),
            heat: (speed / (self.reference_speed + 1e-3)).clamp(0.0, 1.0),
            radius: (radius / (self.max_visible_radius + 1e-3))
                .clamp(0.0, 1.0),
        }
    }

    /// The rainbow entry for a particle. Rotates over time and shifts with
    /// swirl, radius and heat so the colors are not a plain radial gradient.
    pub fn hue_index(&self, motion: &DiskMotion, time: f32) -> usize {
        let [w_time, w_swirl, w_radius, w_heat] = self.config.hue_weights;
        let hue = (w_time * time
            + w_swirl * motion.swirl
            + w_radius * motion.radius
            + w_heat * motion.heat)
            .rem_euclid(1.0);
        let index = (hue * self.palette_len as f32).floor();
        (index.max(0.0) as usize).min(self.palette_len - 1)
    }

    /// Pick the zone from the radius alone, given the normalized swirl
    /// which widens the photon ring.
    pub fn zone(&self, radius: f32, swirl: f32) -> Zone {
        if radius < self.shadow_radius {
            Zone::Shadow
        } else if (radius - self.ring_radius).abs()
            < self.ring_thickness(swirl)
        {
            Zone::Ring
        } else {
            Zone::Disk
        }
    }

    /// Classify a particle for the current frame.
    ///
    /// The random draws only decide cosmetic flicker, never motion.
    pub fn shade(
        &self,
        kinematics: &Kinematics,
        time: f32,
        rng: &mut impl Rng,
    ) -> Shade {
        let motion = self.motion(kinematics.radius, kinematics.speed());
        let rainbow = Ink::Rainbow(self.hue_index(&motion, time));
        let zone = self.zone(kinematics.radius, motion.swirl);

        match zone {
            Zone::Shadow => {
                if rng.random_ratio(3, 4) {
                    Shade {
                        zone,
                        ink: Ink::Rainbow(0),
                        emphasis: Emphasis::NONE,
                        visible: false,
                    }
                } else {
                    Shade {
                        zone,
                        ink: Ink::Rainbow(0),
                        emphasis: Emphasis::DIM,
                        visible: true,
                    }
                }
            }
            Zone::Ring => {
                let blink_phase =
                    (time * self.config.ring_blink_rate).floor() as i64;
                let white_hot = blink_phase & 1 == 1 || motion.swirl > 0.55;
                Shade {
                    zone,
                    ink: if white_hot { Ink::White } else { rainbow },
                    emphasis: Emphasis {
                        bold: true,
                        dim: false,
                        blink: motion.swirl > 0.75,
                    },
                    visible: true,
                }
            }
            // zone() never yields Plain
            Zone::Disk | Zone::Plain => self.shade_disk(&motion, rainbow, rng),
        }
    }

    fn shade_disk(
        &self,
        motion: &DiskMotion,
        rainbow: Ink,
        rng: &mut impl Rng,
    ) -> Shade {
        let intensity = 0.60 * motion.heat + 0.40 * motion.swirl;
        let (mut ink, mut emphasis) = if intensity > 0.85 {
            if rng.random_ratio(1, 10) {
                (Ink::White, Emphasis::BOLD_BLINK)
            } else {
                (rainbow, Emphasis::BOLD)
            }
        } else if intensity > 0.65 {
            (rainbow, Emphasis::BOLD)
        } else if intensity < 0.25 {
            (rainbow, Emphasis::DIM)
        } else {
            (rainbow, Emphasis::NONE)
        };

        // twinkle
        if rng.random_ratio(1, 128) {
            ink = Ink::White;
            emphasis = Emphasis::BOLD_BLINK;
        }

        Shade {
            zone: Zone::Disk,
            ink,
            emphasis,
            visible: true,
        }
    }
}
