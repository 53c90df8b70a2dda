// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::algorithm::ForwardKinematics;
use crate::{EstimationSummary, PendulumConfiguration, Snapshot};

/// Ordered list of snapshots.
///
/// Snapshots are kept in observation order. The sequence only grows; once
/// appended a snapshot is never changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence(Vec<Snapshot>);

impl Sequence {
    /// Construct an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Construct an empty sequence with room for `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a snapshot to the end of the sequence.
    #[inline]
    pub fn push(&mut self, snapshot: Snapshot) {
        self.0.push(snapshot);
    }

    /// Estimate the pendulum configuration from all snapshots so far.
    ///
    /// See [`crate::estimate_parameters`].
    #[inline]
    pub fn estimate(&self) -> Option<EstimationSummary> {
        crate::estimate_parameters(&self.0)
    }

    /// Consume the sequence and return the snapshots.
    pub fn into_inner(self) -> Vec<Snapshot> {
        self.0
    }
}

impl std::ops::Deref for Sequence {
    type Target = [Snapshot];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Snapshot]> for Sequence {
    fn as_ref(&self) -> &[Snapshot] {
        &self.0
    }
}

impl From<Vec<Snapshot>> for Sequence {
    fn from(value: Vec<Snapshot>) -> Self {
        Self(value)
    }
}

impl FromIterator<Snapshot> for Sequence {
    fn from_iter<T: IntoIterator<Item = Snapshot>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Snapshot> for Sequence {
    fn extend<T: IntoIterator<Item = Snapshot>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sample the forward model over frames `0..num_frames`.
///
/// Each frame is evaluated from the same configuration.
pub fn generate_sequence(config: &PendulumConfiguration, num_frames: u32) -> Sequence {
    let solver = ForwardKinematics::new(*config);

    log::debug!("Generating {} frames for {}", num_frames, config);

    (0..num_frames).map(|frame| solver.solve(frame).0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_positions;

    #[test]
    fn test_generate_sequence_empty() {
        let config = PendulumConfiguration::new(0.0, 1.0, 1.0, 0.0, 0.0);

        let sequence = generate_sequence(&config, 0);

        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
    }

    #[test]
    fn test_generate_sequence_frames() {
        let config = PendulumConfiguration::new(0.2, 1.0, 0.5, 0.1, -0.3);

        let sequence = generate_sequence(&config, 25);

        assert_eq!(sequence.len(), 25);
        for (frame, snapshot) in sequence.iter().enumerate() {
            let (expected, _) = compute_positions(&config, frame as u32);
            assert_eq!(*snapshot, expected);
            assert_eq!(snapshot.base().y, 0.0);
        }
    }

    #[test]
    fn test_generate_sequence_prefix() {
        let config = PendulumConfiguration::new(0.0, 1.0, 1.0, 0.7, 0.2);

        let short = generate_sequence(&config, 10);
        let long = generate_sequence(&config, 30);

        assert_eq!(&long[..10], &short[..]);
    }

    #[test]
    fn test_sequence_append() {
        let config = PendulumConfiguration::new(0.0, 1.0, 1.0, 0.0, 0.0);
        let mut sequence = Sequence::new();

        assert!(sequence.estimate().is_none());

        let (snapshot, _) = compute_positions(&config, 0);
        sequence.push(snapshot);
        sequence.extend(generate_sequence(&config, 2).into_inner());

        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence[0], snapshot);
        assert_eq!(sequence[1], snapshot);
        assert_eq!((&sequence).into_iter().count(), 3);
    }
}
