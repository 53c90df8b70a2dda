// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::consts::ACCURACY_THRESHOLD;
use crate::{EstimationSummary, Parameter, ParameterEstimate, PendulumConfiguration};

/// Keeps the percent error finite when the real value is zero.
const PERCENT_ERROR_GUARD: f64 = 1e-8;

/// Known parameter value next to its estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterComparison {
    /// Compared parameter.
    pub parameter: Parameter,
    /// Known value.
    pub real: f64,
    /// Estimated value.
    pub estimate: ParameterEstimate,
}

impl ParameterComparison {
    /// Absolute difference between the known value and the estimated mean.
    pub fn delta(&self) -> f64 {
        (self.real - self.estimate.mean).abs()
    }

    /// Difference relative to the known value, in percent.
    pub fn percent_error(&self) -> f64 {
        100.0 * self.delta() / (self.real.abs() + PERCENT_ERROR_GUARD)
    }

    /// Check if the estimate lies within the accuracy threshold.
    pub fn is_accurate(&self) -> bool {
        self.percent_error() < ACCURACY_THRESHOLD
    }
}

impl std::fmt::Display for ParameterComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: real = {:.4}, estimated = {} → Δ = {:.4} ({:.2}%) {}",
            self.parameter,
            self.real,
            self.estimate,
            self.delta(),
            self.percent_error(),
            if self.is_accurate() {
                "Accurate"
            } else {
                "Needs review"
            }
        )
    }
}

/// Comparison between a known configuration and its estimate.
///
/// Note that the estimator recovers perturbed angles. Estimated angles only
/// match the known base angles on average over a long sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison(Vec<ParameterComparison>);

impl Comparison {
    /// Compare every parameter, in entry order.
    pub fn new(real: &PendulumConfiguration, summary: &EstimationSummary) -> Self {
        Self(
            Parameter::ENTRY_ORDER
                .iter()
                .map(|parameter| ParameterComparison {
                    parameter: *parameter,
                    real: real.get(*parameter),
                    estimate: *summary.get(*parameter),
                })
                .collect(),
        )
    }

    /// Iterate over the parameter comparisons.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterComparison> {
        self.0.iter()
    }

    /// Check if every parameter was estimated accurately.
    pub fn is_accurate(&self) -> bool {
        self.0.iter().all(ParameterComparison::is_accurate)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for comparison in &self.0 {
            writeln!(f, "{}", comparison)?;
        }

        Ok(())
    }
}
