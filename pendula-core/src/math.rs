// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// Arithmetic mean of the values.
///
/// Returns `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of the values.
///
/// The sum of squared deviations is divided by the number of values, not by
/// one less. Returns `NaN` for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    let mean = mean(values);

    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

/// Round a value to the given number of decimal places.
///
/// Halfway cases round to the nearest even digit.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);

    (value * factor).round_ties_even() / factor
}
