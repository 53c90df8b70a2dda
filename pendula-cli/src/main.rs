// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::Parser;
use pendula_core::PendulumConfiguration;

mod command;
mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Pendula double pendulum simulator", long_about = None)]
struct Args {
    /// Quiet output (no logging).
    #[arg(long, global = true)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the joint positions at a single frame.
    Snapshot {
        #[command(flatten)]
        source: SourceArgs,
        /// Frame index.
        #[arg(short, long, default_value_t = 0)]
        frame: u32,
    },
    /// Show the joint positions over a range of frames.
    Sequence {
        #[command(flatten)]
        source: SourceArgs,
        /// Number of frames.
        #[arg(short = 'n', long)]
        frames: Option<u32>,
    },
    /// Estimate the pendulum parameters from a generated sequence.
    Estimate {
        #[command(flatten)]
        source: SourceArgs,
        /// Number of frames.
        #[arg(short = 'n', long)]
        frames: Option<u32>,
    },
    /// Observe the pendulum one snapshot at a time and estimate after each.
    Observe {
        #[command(flatten)]
        source: SourceArgs,
        /// Number of observations.
        #[arg(short = 'n', long)]
        frames: Option<u32>,
        /// Advance the frame index on every observation.
        #[arg(long)]
        animate: bool,
    },
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Pendulum parameters: X_BASE L1 L2 THETA1 THETA2.
    #[arg(
        num_args = 5,
        value_names = ["X_BASE", "L1", "L2", "THETA1", "THETA2"],
        allow_negative_numbers = true,
        required_unless_present = "config",
        conflicts_with = "config"
    )]
    parameters: Vec<String>,
    /// Configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
}

impl SourceArgs {
    /// Resolve the pendulum configuration and the configured frame count.
    fn resolve(&self) -> config::Result<(PendulumConfiguration, Option<u32>)> {
        match &self.config {
            Some(path) => {
                let config = config::from_file(path)?;
                Ok((config.pendulum, config.frames))
            }
            None => Ok((config::from_args(&self.parameters)?, None)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::trace!("Pendula core version {}", pendula_core::consts::VERSION);

    let stdout = &mut std::io::stdout().lock();

    match args.command {
        Command::Snapshot { source, frame } => {
            let (pendulum, _) = source.resolve()?;
            command::snapshot(stdout, &pendulum, frame)?;
        }
        Command::Sequence { source, frames } => {
            let (pendulum, configured) = source.resolve()?;
            command::sequence(stdout, &pendulum, frame_count(frames, configured))?;
        }
        Command::Estimate { source, frames } => {
            let (pendulum, configured) = source.resolve()?;
            command::estimate(stdout, &pendulum, frame_count(frames, configured))?;
        }
        Command::Observe {
            source,
            frames,
            animate,
        } => {
            let (pendulum, configured) = source.resolve()?;
            command::observe(stdout, &pendulum, frame_count(frames, configured), animate)?;
        }
    }

    Ok(())
}

/// Command line takes precedence over the configuration file.
fn frame_count(argument: Option<u32>, configured: Option<u32>) -> u32 {
    argument
        .or(configured)
        .unwrap_or(pendula_core::consts::DEFAULT_FRAME_COUNT)
}
