// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use serde::{Deserialize, Serialize};

/// Geometric parameters of the pendulum chain.
///
/// Lengths and angles are not validated. Zero or negative lengths yield a
/// degenerate but well defined chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PendulumConfiguration {
    /// Horizontal position of the base.
    pub x_base: f64,
    /// Length of the first rod.
    pub l1: f64,
    /// Base angle of the first rod in radians.
    pub theta1: f64,
    /// Length of the second rod.
    pub l2: f64,
    /// Base angle of the second rod in radians.
    pub theta2: f64,
}

impl PendulumConfiguration {
    /// Construct a configuration in entry order.
    pub fn new(x_base: f64, l1: f64, l2: f64, theta1: f64, theta2: f64) -> Self {
        Self {
            x_base,
            l1,
            theta1,
            l2,
            theta2,
        }
    }

    /// Get the value of a single parameter.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::XBase => self.x_base,
            Parameter::L1 => self.l1,
            Parameter::Theta1 => self.theta1,
            Parameter::L2 => self.l2,
            Parameter::Theta2 => self.theta2,
        }
    }

    /// Check if every parameter is a finite number.
    pub fn is_finite(&self) -> bool {
        Parameter::ALL
            .iter()
            .all(|parameter| self.get(*parameter).is_finite())
    }
}

impl std::fmt::Display for PendulumConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X base: {:.4}; L1: {:.4}; L2: {:.4}; Theta1: {:.4}rad {:.2}°; Theta2: {:.4}rad {:.2}°",
            self.x_base,
            self.l1,
            self.l2,
            self.theta1,
            self.theta1.to_degrees(),
            self.theta2,
            self.theta2.to_degrees()
        )
    }
}

/// Parameters of the pendulum chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Horizontal base position.
    XBase,
    /// First rod length.
    L1,
    /// First rod angle.
    Theta1,
    /// Second rod length.
    L2,
    /// Second rod angle.
    Theta2,
}

impl Parameter {
    /// All parameters in estimation order.
    pub const ALL: [Parameter; 5] = [
        Parameter::XBase,
        Parameter::L1,
        Parameter::Theta1,
        Parameter::L2,
        Parameter::Theta2,
    ];

    /// All parameters in entry order.
    pub const ENTRY_ORDER: [Parameter; 5] = [
        Parameter::XBase,
        Parameter::L1,
        Parameter::L2,
        Parameter::Theta1,
        Parameter::Theta2,
    ];

    /// Short name of the parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::XBase => "x_base",
            Parameter::L1 => "L1",
            Parameter::Theta1 => "theta1",
            Parameter::L2 => "L2",
            Parameter::Theta2 => "theta2",
        }
    }

    /// Check if the parameter is an angle.
    pub fn is_angle(&self) -> bool {
        matches!(self, Parameter::Theta1 | Parameter::Theta2)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
