use crate::math::{swirl_exp, swirl_generator, Vec2};

use super::SwirlConfig;

/// The terminal area particles are projected onto.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// The center of the terminal in cell coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.cols as f32 - 1.0) * 0.5,
            (self.rows as f32 - 1.0) * 0.5,
        )
    }

    /// Half of the smaller terminal dimension. Never negative.
    pub fn max_radius(&self) -> f32 {
        let center = self.center();
        center.x.min(center.y).max(0.0)
    }

    /// The largest radius, in un-stretched swirl space, which is still
    /// visible on screen.
    pub fn max_visible_radius(&self, config: &SwirlConfig) -> f32 {
        let center = self.center();
        (center.x / config.x_mult)
            .min(center.y / config.y_mult)
            .max(0.0)
    }

    /// Round a screen-space offset from the center to a cell, or None when
    /// the cell is off screen.
    pub fn cell_at(&self, screen_offset: Vec2) -> Option<(u16, u16)> {
        let position = self.center() + screen_offset;
        let x = position.x.round();
        let y = position.y.round();
        let in_bounds = x >= 0.0
            && x < self.cols as f32
            && y >= 0.0
            && y < self.rows as f32;
        if in_bounds {
            Some((x as u16, y as u16))
        } else {
            None
        }
    }
}

/// Where a particle is and how fast it moves at some age.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Kinematics {
    /// Offset from the center in un-stretched swirl space.
    pub position: Vec2,

    /// Offset from the center in screen space, after stretching.
    pub screen_offset: Vec2,

    /// Length of `position`.
    pub radius: f32,

    /// d(position)/dt with respect to wall-clock time.
    pub velocity: Vec2,
}

impl Kinematics {
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}

/// Maps a particle's initial offset and age to its current kinematics
/// using the closed form solution of dv/dt = A·v.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Trajectory {
    magnitude: f32,
    stretch: Vec2,
    speed: f32,
    min_radius: f32,
}

impl Trajectory {
    pub fn new(config: &SwirlConfig) -> Self {
        Self {
            magnitude: config.radius_mult * config.scale,
            stretch: Vec2::new(config.x_mult, config.y_mult),
            speed: config.speed,
            min_radius: config.min_radius,
        }
    }

    /// Convert elapsed wall-clock seconds into swirl time.
    pub fn age(&self, birth_time: f64, now: f64) -> f32 {
        ((now - birth_time) * self.speed as f64) as f32
    }

    /// Compute the particle's kinematics after `age` units of swirl time.
    pub fn advance(&self, initial_offset: Vec2, age: f32) -> Kinematics {
        let position = self.magnitude * (swirl_exp(age) * initial_offset);
        let screen_offset = position.component_mul(&self.stretch);
        let velocity = self.speed * (swirl_generator() * position);
        Kinematics {
            position,
            screen_offset,
            radius: position.norm(),
            velocity,
        }
    }

    /// The cell a particle should be drawn in, or None when the particle has
    /// expired by falling into the center or leaving the screen.
    pub fn visible_cell(
        &self,
        kinematics: &Kinematics,
        viewport: &Viewport,
    ) -> Option<(u16, u16)> {
        if kinematics.radius < self.min_radius {
            return None;
        }
        viewport.cell_at(kinematics.screen_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn age_zero_only_applies_scale_and_stretch() {
        let config = SwirlConfig::default();
        let trajectory = Trajectory::new(&config);
        let offset = Vec2::new(4.0, -2.0);

        let k = trajectory.advance(offset, 0.0);

        let magnitude = config.radius_mult * config.scale;
        assert!(close(k.position.x / magnitude, offset.x));
        assert!(close(k.position.y / magnitude, offset.y));
        assert!(close(k.screen_offset.x, k.position.x * config.x_mult));
        assert!(close(k.screen_offset.y, k.position.y * config.y_mult));
        assert!(close(k.radius, offset.norm() * magnitude));
    }

    #[test]
    fn unit_trajectory_at_age_zero_is_the_identity() {
        let config = SwirlConfig {
            scale: 1.0,
            radius_mult: 1.0,
            x_mult: 1.0,
            y_mult: 1.0,
            ..SwirlConfig::default()
        };
        let offset = Vec2::new(-6.5, 3.25);
        let k = Trajectory::new(&config).advance(offset, 0.0);
        assert!(close(k.screen_offset.x, offset.x));
        assert!(close(k.screen_offset.y, offset.y));
    }

    #[test]
    fn velocity_follows_the_ode_in_unstretched_space() {
        let config = SwirlConfig::default();
        let trajectory = Trajectory::new(&config);
        let offset = Vec2::new(7.0, 1.0);

        let k = trajectory.advance(offset, 0.8);

        let (vx, vy) = (k.position.x, k.position.y);
        assert!(close(k.velocity.x, config.speed * (-vx - vy)));
        assert!(close(k.velocity.y, config.speed * vx));
    }

    #[test]
    fn radius_decays_with_age() {
        let trajectory = Trajectory::new(&SwirlConfig::default());
        let offset = Vec2::new(20.0, 5.0);
        let start = trajectory.advance(offset, 0.0).radius;
        let late = trajectory.advance(offset, 15.0).radius;
        assert!(late < start * 0.01);
    }

    #[test]
    fn age_scales_elapsed_time_by_speed() {
        let trajectory = Trajectory::new(&SwirlConfig::default());
        assert!(close(trajectory.age(10.0, 12.0), 2.0 * 1.35));
        assert_eq!(trajectory.age(3.0, 3.0), 0.0);
    }

    #[test]
    fn cells_outside_the_viewport_are_rejected() {
        let viewport = Viewport::new(80, 24);
        assert_eq!(viewport.cell_at(Vec2::new(0.0, 0.0)), Some((40, 12)));
        assert_eq!(viewport.cell_at(Vec2::new(-39.5, -11.5)), Some((0, 0)));
        assert_eq!(viewport.cell_at(Vec2::new(40.0, 0.0)), None);
        assert_eq!(viewport.cell_at(Vec2::new(0.0, 12.0)), None);
        assert_eq!(viewport.cell_at(Vec2::new(-40.6, 0.0)), None);
    }

    #[test]
    fn particles_near_the_center_expire() {
        let config = SwirlConfig::default();
        let trajectory = Trajectory::new(&config);
        let viewport = Viewport::new(80, 24);

        let near = trajectory.advance(Vec2::new(1.0, 0.0), 0.0);
        assert!(near.radius < config.min_radius);
        assert_eq!(trajectory.visible_cell(&near, &viewport), None);

        let far = trajectory.advance(Vec2::new(5.0, 0.0), 0.0);
        assert!(trajectory.visible_cell(&far, &viewport).is_some());
    }
}
