// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Double pendulum kinematics.
//!
//! The pipeline runs in three stages: the forward model maps a
//! [`PendulumConfiguration`] and a frame index onto joint positions, the
//! sequence generator samples the forward model over a range of frames, and
//! the inverse estimator recovers the configuration from observed snapshots.
//!
//! ```
//! use pendula_core::{estimate_parameters, generate_sequence, PendulumConfiguration};
//!
//! let config = PendulumConfiguration::new(0.0, 1.0, 1.0, 0.0, 0.0);
//! let sequence = generate_sequence(&config, 100);
//!
//! let summary = estimate_parameters(&sequence).unwrap();
//! assert_eq!(summary.num_frames, 100);
//! ```

pub mod algorithm;
pub mod compare;
pub mod config;
pub mod estimate;
pub mod math;
pub mod position;
pub mod sequence;

pub use nalgebra;

pub use self::compare::{Comparison, ParameterComparison};
pub use self::config::{Parameter, PendulumConfiguration};
pub use self::estimate::{estimate_parameters, EstimationSummary, ParameterEstimate};
pub use self::position::{PerturbedAngles, Position, Snapshot};
pub use self::sequence::{generate_sequence, Sequence};

/// Compute the joint positions of the pendulum at the given frame.
///
/// Returns the snapshot together with the perturbed angles that produced it.
#[inline]
pub fn compute_positions(
    config: &PendulumConfiguration,
    frame: u32,
) -> (Snapshot, PerturbedAngles) {
    algorithm::ForwardKinematics::new(*config).solve(frame)
}

/// Compute the joint positions of the pendulum from loose parameters.
///
/// Returns the base, first mass and second mass positions, followed by the
/// perturbed angles of the first and second rod.
pub fn compute_positions_from_parts(
    x_base: f64,
    l1: f64,
    l2: f64,
    theta1: f64,
    theta2: f64,
    frame: u32,
) -> (Position, Position, Position, f64, f64) {
    let config = PendulumConfiguration::new(x_base, l1, l2, theta1, theta2);
    let (snapshot, angles) = compute_positions(&config, frame);

    (
        snapshot.base(),
        snapshot.mass1(),
        snapshot.mass2(),
        angles.theta1,
        angles.theta2,
    )
}

/// Pendula core constants.
pub mod consts {
    /// Pendula core version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Amplitude of the angular wobble in radians.
    pub const WOBBLE_AMPLITUDE: f64 = 0.2;

    /// Phase advance of the angular wobble per frame in radians.
    pub const WOBBLE_RATE: f64 = 0.1;

    /// Number of frames generated when the caller does not specify one.
    pub const DEFAULT_FRAME_COUNT: u32 = 100;

    /// Decimal places kept on an estimated mean.
    pub const MEAN_DECIMALS: i32 = 3;

    /// Decimal places kept on an estimated standard deviation.
    pub const STD_DECIMALS: i32 = 4;

    /// Percent error below which an estimate is considered accurate.
    pub const ACCURACY_THRESHOLD: f64 = 5.0;
}
