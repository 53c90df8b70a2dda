// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// Planar joint position.
pub type Position = nalgebra::Point2<f64>;

/// Joint positions of the pendulum at a single frame.
///
/// The base always lies on the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    base: Position,
    mass1: Position,
    mass2: Position,
}

impl Snapshot {
    /// Construct a snapshot with the base at `x_base` on the horizontal axis.
    pub fn new(x_base: f64, mass1: Position, mass2: Position) -> Self {
        Self {
            base: Position::new(x_base, 0.0),
            mass1,
            mass2,
        }
    }

    /// Base position.
    #[inline]
    pub fn base(&self) -> Position {
        self.base
    }

    /// Position of the first mass.
    #[inline]
    pub fn mass1(&self) -> Position {
        self.mass1
    }

    /// Position of the second mass.
    #[inline]
    pub fn mass2(&self) -> Position {
        self.mass2
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Base: ({:>+8.5}, {:>+8.5}) Mass1: ({:>+8.5}, {:>+8.5}) Mass2: ({:>+8.5}, {:>+8.5})",
            self.base.x, self.base.y, self.mass1.x, self.mass1.y, self.mass2.x, self.mass2.y
        )
    }
}

/// Rod angles after the frame perturbation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerturbedAngles {
    /// First rod angle in radians.
    pub theta1: f64,
    /// Second rod angle in radians.
    pub theta2: f64,
}

impl std::fmt::Display for PerturbedAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Theta1: {:5.3}rad {:5.2}°; Theta2: {:5.3}rad {:5.2}°",
            self.theta1,
            self.theta1.to_degrees(),
            self.theta2,
            self.theta2.to_degrees()
        )
    }
}
