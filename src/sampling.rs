use nalgebra::Vector2;

/// Sampling policy that marks one trajectory sample per elapsed interval.
///
/// The solver feeds it every sample; it answers with the indices that land
/// on a new whole multiple of the interval. Decoupled from the integration
/// step, so a coarser or finer marker spacing never changes the physics.
#[derive(Debug, Clone)]
pub struct CheckpointSampler {
    interval_s: f64,
    intervals_seen: u64,
}

impl CheckpointSampler {
    pub fn new(interval_s: f64) -> Self {
        Self {
            interval_s,
            intervals_seen: 0,
        }
    }

    /// Observe a sample at `elapsed_s`; returns `Some(sample_index)` when the
    /// elapsed time has crossed into a new whole interval.
    pub fn observe(&mut self, elapsed_s: f64, sample_index: usize) -> Option<usize> {
        let intervals = (elapsed_s / self.interval_s).floor() as u64;
        if intervals > self.intervals_seen {
            self.intervals_seen = intervals;
            Some(sample_index)
        } else {
            None
        }
    }
}

/// Recorded trajectory of one drop: the sample series plus sparse
/// checkpoint markers for visualization.
///
/// Index 0 is the release point. Checkpoint indices are strictly
/// increasing and always index a valid sample.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Elapsed time of each sample (s)
    pub times: Vec<f64>,
    /// Position of each sample (m); x downrange, y above ground
    pub positions: Vec<Vector2<f64>>,
    /// Indices into `positions` marking roughly one checkpoint interval each
    pub checkpoints: Vec<usize>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Last recorded position; below ground level once the drop terminated
    /// on ground contact.
    pub fn final_position(&self) -> Option<Vector2<f64>> {
        self.positions.last().copied()
    }

    /// Total simulated time (s)
    pub fn flight_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Positions of the checkpoint markers, in recording order
    pub fn checkpoint_positions(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.checkpoints.iter().map(|&idx| self.positions[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_marks_whole_intervals() {
        let mut sampler = CheckpointSampler::new(1.0);
        assert_eq!(sampler.observe(0.25, 1), None);
        assert_eq!(sampler.observe(0.75, 2), None);
        assert_eq!(sampler.observe(1.0, 3), Some(3));
        assert_eq!(sampler.observe(1.25, 4), None);
        assert_eq!(sampler.observe(2.5, 5), Some(5));
    }

    #[test]
    fn test_sampler_interval_decoupled_from_step() {
        // Half-second markers over quarter-second samples
        let mut sampler = CheckpointSampler::new(0.5);
        let marked: Vec<usize> = (1..=8)
            .filter_map(|i| sampler.observe(i as f64 * 0.25, i))
            .collect();
        assert_eq!(marked, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_sampler_skipped_intervals_mark_once() {
        let mut sampler = CheckpointSampler::new(1.0);
        // A jump across several intervals still produces a single marker
        assert_eq!(sampler.observe(3.5, 7), Some(7));
        assert_eq!(sampler.observe(3.75, 8), None);
    }

    #[test]
    fn test_trajectory_accessors() {
        let trajectory = Trajectory {
            times: vec![0.0, 0.1, 0.2],
            positions: vec![
                Vector2::new(0.0, 100.0),
                Vector2::new(5.0, 99.9),
                Vector2::new(10.0, 99.7),
            ],
            checkpoints: vec![2],
        };

        assert_eq!(trajectory.len(), 3);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.final_position(), Some(Vector2::new(10.0, 99.7)));
        assert_eq!(trajectory.flight_time(), 0.2);

        let marks: Vec<_> = trajectory.checkpoint_positions().collect();
        assert_eq!(marks, vec![Vector2::new(10.0, 99.7)]);
    }
}
