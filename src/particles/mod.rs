//! The particle swirl simulation.
//!
//! Particles follow the closed-form solution of a damped rotation (see
//! [crate::math::swirl_exp]), are respawned on a ring whenever they leave
//! the screen or fall into the center, and are shaded each frame from their
//! radius, speed and age.

mod config;
mod error;
mod field;
mod particle;
mod shading;
mod trajectory;

pub use self::{
    config::{BlackHoleConfig, SwirlConfig},
    error::SwirlError,
    field::{FrameStats, ParticleField},
    particle::{random_angle, random_glyph, Particle, Spawner, GLYPHS},
    shading::{
        shade_plain, BlackHoleShader, DiskMotion, Emphasis, Ink, Shade,
        ShadingMode, Zone,
    },
    trajectory::{Kinematics, Trajectory, Viewport},
};
