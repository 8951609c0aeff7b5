//! Vertical point-mass bounce
//!
//! A single body falling under constant gravity onto a ground plane. It
//! shares the frame loop with the sphere field but no data.

use crate::consts::{GRAVITY, GROUND_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    /// Height above the origin
    pub position: f32,
    /// Vertical velocity (positive is up)
    pub velocity: f32,
    pub gravity: f32,
}

impl Default for PointMass {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            gravity: GRAVITY,
        }
    }
}

impl PointMass {
    /// Advance by `dt` seconds. Returns true when the ground was hit.
    ///
    /// Velocity is updated before position (semi-implicit Euler). On ground
    /// contact the velocity is negated with no energy loss and the position
    /// is clamped to exactly `GROUND_LEVEL`.
    pub fn update(&mut self, dt: f32) -> bool {
        self.velocity += self.gravity * dt;
        self.position += self.velocity * dt;

        if self.position < GROUND_LEVEL {
            self.velocity = -self.velocity;
            self.position = GROUND_LEVEL;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_free_fall_accumulates() {
        let mut mass = PointMass::default();
        assert!(!mass.update(DT));
        assert!((mass.velocity - GRAVITY * DT).abs() < 1e-6);
        assert!((mass.position - GRAVITY * DT * DT).abs() < 1e-6);
    }

    #[test]
    fn test_reaches_ground_and_bounces() {
        let mut mass = PointMass::default();
        let mut frames = 0;
        while !mass.update(DT) {
            frames += 1;
            assert!(frames < 10_000, "never reached the ground");
            assert!(mass.velocity <= 0.0);
        }

        // Clamped exactly and heading back up
        assert_eq!(mass.position, GROUND_LEVEL);
        assert!(mass.velocity > 0.0);

        // Roughly sqrt(2 * 5 / 9.81) ~= 1.01 s of fall
        let fall_time = (frames + 1) as f32 * DT;
        assert!((fall_time - 1.01).abs() < 0.05, "fall took {fall_time}");
    }

    #[test]
    fn test_never_below_ground() {
        let mut mass = PointMass::default();
        for _ in 0..5_000 {
            mass.update(DT);
            assert!(mass.position >= GROUND_LEVEL);
        }
    }

    #[test]
    fn test_rises_after_bounce() {
        let mut mass = PointMass {
            position: GROUND_LEVEL,
            velocity: 5.0,
            gravity: GRAVITY,
        };
        assert!(!mass.update(DT));
        assert!(mass.position > GROUND_LEVEL);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut mass = PointMass {
            position: 1.0,
            velocity: -2.0,
            gravity: GRAVITY,
        };
        assert!(!mass.update(0.0));
        assert_eq!(mass.position, 1.0);
        assert_eq!(mass.velocity, -2.0);
    }
}
