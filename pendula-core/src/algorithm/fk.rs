// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::consts::{WOBBLE_AMPLITUDE, WOBBLE_RATE};
use crate::{PendulumConfiguration, PerturbedAngles, Position, Snapshot};

/// Forward kinematics of the pendulum chain.
///
/// Every frame is evaluated from the base angles of the configuration. The
/// wobble of a frame never carries over into the next one.
pub struct ForwardKinematics {
    config: PendulumConfiguration,
}

impl ForwardKinematics {
    pub fn new(config: PendulumConfiguration) -> Self {
        Self { config }
    }

    /// Apply the frame wobble to the base angles.
    ///
    /// The second rod trails the first by a quarter period.
    pub fn perturb(&self, frame: u32) -> PerturbedAngles {
        let phase = WOBBLE_RATE * frame as f64;

        PerturbedAngles {
            theta1: self.config.theta1 + WOBBLE_AMPLITUDE * phase.sin(),
            theta2: self.config.theta2 + WOBBLE_AMPLITUDE * phase.cos(),
        }
    }

    pub fn solve(&self, frame: u32) -> (Snapshot, PerturbedAngles) {
        let angles = self.perturb(frame);

        let mass1 = Position::new(
            self.config.x_base + self.config.l1 * angles.theta1.sin(),
            -self.config.l1 * angles.theta1.cos(),
        );

        let mass2 = Position::new(
            mass1.x + self.config.l2 * angles.theta2.sin(),
            mass1.y - self.config.l2 * angles.theta2.cos(),
        );

        log::trace!("FK frame {:4}: {}", frame, angles);

        (Snapshot::new(self.config.x_base, mass1, mass2), angles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_forward_kinematics_frame_zero() {
        let solver = ForwardKinematics::new(PendulumConfiguration::new(0.0, 1.0, 1.0, 0.0, 0.0));

        let (snapshot, angles) = solver.solve(0);

        assert!(angles.theta1.abs() < EPSILON);
        assert!((angles.theta2 - 0.2).abs() < EPSILON);
        assert_eq!(snapshot.base(), Position::new(0.0, 0.0));
        assert!(snapshot.mass1().x.abs() < EPSILON);
        assert!((snapshot.mass1().y + 1.0).abs() < EPSILON);
        assert!((snapshot.mass2().x - 0.2_f64.sin()).abs() < EPSILON);
        assert!((snapshot.mass2().y + 1.0 + 0.2_f64.cos()).abs() < EPSILON);
        assert!((snapshot.mass2().x - 0.19867).abs() < 1e-5);
        assert!((snapshot.mass2().y + 1.98007).abs() < 1e-5);
    }

    #[test]
    fn test_forward_kinematics_wobble() {
        let solver = ForwardKinematics::new(PendulumConfiguration::new(0.0, 1.0, 1.0, 0.5, -0.5));

        let angles = solver.perturb(10);

        assert!((angles.theta1 - (0.5 + 0.2 * 1.0_f64.sin())).abs() < EPSILON);
        assert!((angles.theta2 - (-0.5 + 0.2 * 1.0_f64.cos())).abs() < EPSILON);
    }

    #[test]
    fn test_forward_kinematics_does_not_accumulate() {
        let solver = ForwardKinematics::new(PendulumConfiguration::new(1.0, 2.0, 1.0, 0.3, 0.1));

        let first = solver.solve(5);
        let _ = solver.solve(6);
        let again = solver.solve(5);

        assert_eq!(first, again);
    }

    #[test]
    fn test_forward_kinematics_base_offset() {
        let solver = ForwardKinematics::new(PendulumConfiguration::new(3.0, 1.0, 2.0, 0.0, 0.0));

        let (snapshot, _) = solver.solve(0);

        assert_eq!(snapshot.base(), Position::new(3.0, 0.0));
        assert!((snapshot.mass1().x - 3.0).abs() < EPSILON);
        assert!((snapshot.mass2().x - (3.0 + 2.0 * 0.2_f64.sin())).abs() < EPSILON);
    }

    #[test]
    fn test_forward_kinematics_degenerate_lengths() {
        let solver = ForwardKinematics::new(PendulumConfiguration::new(0.0, 0.0, -1.0, 0.0, 0.0));

        let (snapshot, _) = solver.solve(0);

        assert_eq!(snapshot.mass1(), Position::new(0.0, 0.0));
        assert!((snapshot.mass2().x + 0.2_f64.sin()).abs() < EPSILON);
        assert!((snapshot.mass2().y - 0.2_f64.cos()).abs() < EPSILON);
    }
}
