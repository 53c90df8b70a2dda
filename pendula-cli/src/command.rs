// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::io::Write;

use pendula_core::{
    compute_positions, generate_sequence, Comparison, EstimationSummary, PendulumConfiguration,
    Sequence,
};

pub(crate) fn snapshot<W: Write>(
    out: &mut W,
    config: &PendulumConfiguration,
    frame: u32,
) -> std::io::Result<()> {
    log::debug!("Configuration: {}", config);

    let (snapshot, angles) = compute_positions(config, frame);

    writeln!(out, "Frame {:4} » {}", frame, snapshot)?;
    writeln!(out, "Frame {:4} » {}", frame, angles)
}

pub(crate) fn sequence<W: Write>(
    out: &mut W,
    config: &PendulumConfiguration,
    frames: u32,
) -> std::io::Result<()> {
    let sequence = generate_sequence(config, frames);

    for (frame, snapshot) in sequence.iter().enumerate() {
        writeln!(out, "Frame {:4} » {}", frame, snapshot)?;
    }

    Ok(())
}

pub(crate) fn estimate<W: Write>(
    out: &mut W,
    config: &PendulumConfiguration,
    frames: u32,
) -> std::io::Result<()> {
    let sequence = generate_sequence(config, frames);

    match sequence.estimate() {
        Some(summary) => report(out, config, &summary),
        None => {
            log::warn!("No data in sequence");
            Ok(())
        }
    }
}

/// Append one snapshot at a time and estimate over everything observed so far.
///
/// Without animation every observation is taken at frame zero.
pub(crate) fn observe<W: Write>(
    out: &mut W,
    config: &PendulumConfiguration,
    frames: u32,
    animate: bool,
) -> std::io::Result<()> {
    let mut memory = Sequence::with_capacity(frames as usize);
    let mut last_summary = None;

    for step in 0..frames {
        let frame = if animate { step } else { 0 };

        memory.push(compute_positions(config, frame).0);

        if let Some(summary) = memory.estimate() {
            writeln!(
                out,
                "Frames {:4} » x_base: {}; L1: {}; theta1: {}; L2: {}; theta2: {}",
                summary.num_frames,
                summary.x_base,
                summary.l1,
                summary.theta1,
                summary.l2,
                summary.theta2
            )?;

            last_summary = Some(summary);
        }
    }

    match last_summary {
        Some(summary) => {
            writeln!(out)?;
            report(out, config, &summary)
        }
        None => {
            log::warn!("No data in sequence");
            Ok(())
        }
    }
}

fn report<W: Write>(
    out: &mut W,
    config: &PendulumConfiguration,
    summary: &EstimationSummary,
) -> std::io::Result<()> {
    let comparison = Comparison::new(config, summary);

    writeln!(out, "Estimated parameters")?;
    write!(out, "{}", summary)?;
    writeln!(out)?;
    writeln!(out, "Comparison between real and estimated parameters")?;
    write!(out, "{}", comparison)?;

    if !comparison.is_accurate() {
        log::info!("Estimated angles include the frame wobble");
    }

    Ok(())
}
