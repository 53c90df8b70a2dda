// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::{PendulumConfiguration, Snapshot};

/// Recover the pendulum configuration from a single snapshot.
///
/// The recovered angles are the perturbed angles of the frame, not the base
/// angles of the configuration that produced it. Lengths are recovered as
/// magnitudes and are never negative.
///
/// Angles are recovered in the principal range `(-π, π]`. A perturbed angle
/// outside of that range comes back as its equivalent modulo `2π`, and no
/// attempt is made to unwrap it.
pub fn invert_snapshot(snapshot: &Snapshot) -> PendulumConfiguration {
    let base = snapshot.base();
    let mass1 = snapshot.mass1();
    let mass2 = snapshot.mass2();

    // First rod, hinged at the base.
    let dx1 = mass1.x - base.x;
    let dy1 = mass1.y;

    // Second rod, hinged at the first mass.
    let dx2 = mass2.x - mass1.x;
    let dy2 = mass2.y - mass1.y;

    PendulumConfiguration {
        x_base: base.x,
        l1: dx1.hypot(dy1),
        theta1: dx1.atan2(-dy1),
        l2: dx2.hypot(dy2),
        theta2: dx2.atan2(-dy2),
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::algorithm::ForwardKinematics;
    use crate::Position;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_invert_snapshot_round_trip() {
        let config = PendulumConfiguration::new(0.75, 2.0, 1.25, 0.4, -1.1);
        let solver = ForwardKinematics::new(config);

        for frame in [0, 1, 7, 31, 99] {
            let (snapshot, angles) = solver.solve(frame);
            let recovered = invert_snapshot(&snapshot);

            assert!((recovered.x_base - 0.75).abs() < EPSILON);
            assert!((recovered.l1 - 2.0).abs() < EPSILON);
            assert!((recovered.l2 - 1.25).abs() < EPSILON);
            assert!((recovered.theta1 - angles.theta1).abs() < EPSILON);
            assert!((recovered.theta2 - angles.theta2).abs() < EPSILON);
        }
    }

    #[test]
    fn test_invert_snapshot_hanging() {
        let snapshot = Snapshot::new(1.0, Position::new(1.0, -2.0), Position::new(1.0, -5.0));

        let recovered = invert_snapshot(&snapshot);

        assert_eq!(recovered, PendulumConfiguration::new(1.0, 2.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn test_invert_snapshot_negative_length() {
        let solver = ForwardKinematics::new(PendulumConfiguration::new(0.0, -1.5, 1.0, 0.3, 0.0));

        let (snapshot, _) = solver.solve(0);
        let recovered = invert_snapshot(&snapshot);

        assert!((recovered.l1 - 1.5).abs() < EPSILON);
        assert!((recovered.theta1 - (0.3 - PI)).abs() < EPSILON);
    }

    #[test]
    fn test_invert_snapshot_angle_wrap() {
        // theta1' = 3.1 + 0.2 * sin(1.5) exceeds π at frame 15.
        let solver = ForwardKinematics::new(PendulumConfiguration::new(0.0, 1.0, 1.0, 3.1, 0.0));

        let (snapshot, angles) = solver.solve(15);
        assert!(angles.theta1 > PI);

        let recovered = invert_snapshot(&snapshot);

        assert!((recovered.theta1 - (angles.theta1 - 2.0 * PI)).abs() < EPSILON);
        assert!(recovered.theta1 > -PI && recovered.theta1 <= PI);
    }
}
