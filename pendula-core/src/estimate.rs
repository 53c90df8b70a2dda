// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use serde::Serialize;

use crate::algorithm::invert_snapshot;
use crate::consts::{MEAN_DECIMALS, STD_DECIMALS};
use crate::math::{mean, population_std, round_to};
use crate::{Parameter, PendulumConfiguration, Snapshot};

/// Aggregated estimate of a single parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterEstimate {
    /// Mean, rounded to 3 decimal places.
    pub mean: f64,
    /// Population standard deviation, rounded to 4 decimal places.
    pub std: f64,
}

impl ParameterEstimate {
    fn from_samples(samples: &[f64]) -> Self {
        Self {
            mean: round_to(mean(samples), MEAN_DECIMALS),
            std: round_to(population_std(samples), STD_DECIMALS),
        }
    }
}

impl std::fmt::Display for ParameterEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} ± {:.4}", self.mean, self.std)
    }
}

/// Estimated pendulum configuration over a sequence of snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EstimationSummary {
    /// Number of snapshots the estimate was computed from.
    pub num_frames: usize,
    /// Horizontal base position.
    pub x_base: ParameterEstimate,
    /// First rod length.
    pub l1: ParameterEstimate,
    /// First rod angle.
    pub theta1: ParameterEstimate,
    /// Second rod length.
    pub l2: ParameterEstimate,
    /// Second rod angle.
    pub theta2: ParameterEstimate,
}

impl EstimationSummary {
    /// Get the estimate of a single parameter.
    pub fn get(&self, parameter: Parameter) -> &ParameterEstimate {
        match parameter {
            Parameter::XBase => &self.x_base,
            Parameter::L1 => &self.l1,
            Parameter::Theta1 => &self.theta1,
            Parameter::L2 => &self.l2,
            Parameter::Theta2 => &self.theta2,
        }
    }

    /// Configuration made up of the estimated means.
    pub fn mean_configuration(&self) -> PendulumConfiguration {
        PendulumConfiguration {
            x_base: self.x_base.mean,
            l1: self.l1.mean,
            theta1: self.theta1.mean,
            l2: self.l2.mean,
            theta2: self.theta2.mean,
        }
    }
}

impl std::fmt::Display for EstimationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of frames: {}", self.num_frames)?;

        for parameter in Parameter::ALL {
            writeln!(f, "{}: {}", parameter, self.get(parameter))?;
        }

        Ok(())
    }
}

/// Estimate the pendulum configuration from a sequence of snapshots.
///
/// Every snapshot is inverted on its own with [`invert_snapshot`], then the
/// recovered values are aggregated per parameter into a mean and a population
/// standard deviation. The estimate is recomputed from scratch on every call.
///
/// Returns `None` when there are no snapshots to estimate from.
///
/// Angles are recovered in the principal range `(-π, π]`. When the perturbed
/// angle of a frame lies outside of that range the recovered value differs
/// from it by a multiple of `2π`, which also shifts the mean.
pub fn estimate_parameters(snapshots: &[Snapshot]) -> Option<EstimationSummary> {
    if snapshots.is_empty() {
        log::debug!("No data in sequence");
        return None;
    }

    let recovered: Vec<PendulumConfiguration> = snapshots.iter().map(invert_snapshot).collect();

    let estimate = |parameter: Parameter| {
        let samples: Vec<f64> = recovered
            .iter()
            .map(|config| config.get(parameter))
            .collect();

        ParameterEstimate::from_samples(&samples)
    };

    let summary = EstimationSummary {
        num_frames: snapshots.len(),
        x_base: estimate(Parameter::XBase),
        l1: estimate(Parameter::L1),
        theta1: estimate(Parameter::Theta1),
        l2: estimate(Parameter::L2),
        theta2: estimate(Parameter::Theta2),
    };

    log::trace!("Estimated from {} frames", summary.num_frames);

    Some(summary)
}
