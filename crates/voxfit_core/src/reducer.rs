//! Trajectory reductions.
//!
//! Every distance here is measured in the ground plane and divided by the
//! lattice dimension, so bodies built from differently sized voxels score on
//! the same scale.

use crate::config::ReportConfig;
use std::iter::Copied;
use std::slice;
use voxfit_data::{CmSample, RunSummary, Vec3, VolumeSample};

/// Planar distance between the initial and final center of mass, in voxels.
///
/// `lattice_dim` must be positive.
#[must_use]
pub fn normalized_final_distance(initial_cm: Vec3, final_cm: Vec3, lattice_dim: f64) -> f64 {
    debug_assert!(lattice_dim > 0.0, "lattice dimension must be positive");
    final_cm.planar_distance(&initial_cm) / lattice_dim
}

/// One reduced center-of-mass trace step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceDelta {
    pub time: f64,
    pub position: Vec3,
    /// Normalized planar distance from the initial center of mass.
    pub norm_dist: f64,
    /// `norm_dist` minus the previous step's `norm_dist` (0 before the first step).
    pub delta_norm_dist: f64,
}

/// Iterator returned by [`normalized_trace_deltas`].
///
/// Yields exactly one [`TraceDelta`] per input sample. Cloning it restarts
/// from the clone's position with identical results.
#[derive(Debug, Clone)]
pub struct TraceDeltas<'a> {
    samples: slice::Iter<'a, CmSample>,
    initial_cm: Vec3,
    lattice_dim: f64,
    prev_norm_dist: f64,
}

impl Iterator for TraceDeltas<'_> {
    type Item = TraceDelta;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.samples.next()?;
        let norm_dist = normalized_final_distance(self.initial_cm, sample.position, self.lattice_dim);
        let delta_norm_dist = norm_dist - self.prev_norm_dist;
        self.prev_norm_dist = norm_dist;
        Some(TraceDelta {
            time: sample.time,
            position: sample.position,
            norm_dist,
            delta_norm_dist,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl ExactSizeIterator for TraceDeltas<'_> {}

/// Running first difference of the normalized distance series.
#[must_use]
pub fn normalized_trace_deltas(
    samples: &[CmSample],
    initial_cm: Vec3,
    lattice_dim: f64,
) -> TraceDeltas<'_> {
    debug_assert!(lattice_dim > 0.0, "lattice dimension must be positive");
    TraceDeltas {
        samples: samples.iter(),
        initial_cm,
        lattice_dim,
        prev_norm_dist: 0.0,
    }
}

/// Volume samples, unchanged and in order.
#[must_use]
pub fn volume_trace(samples: &[VolumeSample]) -> Copied<slice::Iter<'_, VolumeSample>> {
    samples.iter().copied()
}

/// Everything the result writer consumes. A `None` trace means the section is
/// disabled, which is distinct from an enabled but empty trace.
#[derive(Debug, Clone, Copy)]
pub struct ResultInputs<'a> {
    pub initial_cm: Vec3,
    pub current_cm: Vec3,
    pub lattice_dim: f64,
    pub cm_trace: Option<&'a [CmSample]>,
    pub volume_trace: Option<&'a [VolumeSample]>,
}

impl<'a> ResultInputs<'a> {
    /// Selects the sections of `run` that `config` enables.
    ///
    /// The current center of mass stands in for the final one.
    #[must_use]
    pub fn from_run(run: &'a RunSummary, config: &ReportConfig) -> Self {
        Self {
            initial_cm: run.initial_cm(),
            current_cm: run.current_cm,
            lattice_dim: run.lattice_dim(),
            cm_trace: config.trace_enabled().then(|| run.cm_trace()),
            volume_trace: config.volume_trace_enabled().then(|| run.volume_trace()),
        }
    }

    #[must_use]
    pub fn norm_final_dist(&self) -> f64 {
        normalized_final_distance(self.initial_cm, self.current_cm, self.lattice_dim)
    }

    #[must_use]
    pub fn trace_deltas(&self) -> Option<TraceDeltas<'a>> {
        self.cm_trace
            .map(|samples| normalized_trace_deltas(samples, self.initial_cm, self.lattice_dim))
    }

    #[must_use]
    pub fn volume_steps(&self) -> Option<Copied<slice::Iter<'a, VolumeSample>>> {
        self.volume_trace.map(volume_trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(time: f64, x: f64, y: f64, z: f64) -> CmSample {
        CmSample {
            time,
            position: Vec3::new(x, y, z),
        }
    }

    #[test]
    fn test_final_distance_scales_with_lattice() {
        let origin = Vec3::default();
        let end = Vec3::new(0.03, 0.04, 0.5);
        assert!((normalized_final_distance(origin, end, 0.01) - 5.0).abs() < 1e-9);
        assert!((normalized_final_distance(origin, end, 0.05) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_step_scenario() {
        let samples = [
            sample(0.0, 0.0, 0.0, 0.0),
            sample(1.0, 1.0, 0.0, 0.0),
            sample(2.0, 1.0, 0.0, 0.0),
        ];
        let steps: Vec<TraceDelta> =
            normalized_trace_deltas(&samples, Vec3::default(), 1.0).collect();

        let dists: Vec<f64> = steps.iter().map(|s| s.norm_dist).collect();
        let deltas: Vec<f64> = steps.iter().map(|s| s.delta_norm_dist).collect();
        assert_eq!(dists, vec![0.0, 1.0, 1.0]);
        assert_eq!(deltas, vec![0.0, 1.0, 0.0]);
        assert_eq!(steps[1].time, 1.0);
        assert_eq!(steps[2].position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_single_sample_delta_is_its_distance() {
        let samples = [sample(0.25, 3.0, 4.0, 0.0)];
        let steps: Vec<TraceDelta> =
            normalized_trace_deltas(&samples, Vec3::default(), 2.0).collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].norm_dist, 2.5);
        assert_eq!(steps[0].delta_norm_dist, 2.5);
    }

    #[test]
    fn test_empty_trace_yields_nothing() {
        assert_eq!(normalized_trace_deltas(&[], Vec3::default(), 1.0).count(), 0);
    }

    #[test]
    fn test_deltas_are_restartable() {
        let samples = [
            sample(0.0, 0.1, 0.0, 0.0),
            sample(0.1, 0.3, 0.2, 0.0),
            sample(0.2, -0.4, 0.2, 0.0),
        ];
        let deltas = normalized_trace_deltas(&samples, Vec3::default(), 0.1);
        assert_eq!(deltas.len(), 3);
        let first: Vec<TraceDelta> = deltas.clone().collect();
        let second: Vec<TraceDelta> = deltas.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_volume_trace_passthrough() {
        let samples = [
            VolumeSample { time: 0.0, volume: 1.0 },
            VolumeSample { time: 0.5, volume: 0.8 },
        ];
        let copied: Vec<VolumeSample> = volume_trace(&samples).collect();
        assert_eq!(copied, samples.to_vec());
    }

    #[test]
    fn test_inputs_follow_config_flags() {
        let mut run = RunSummary::new(Vec3::default(), 0.01).unwrap();
        run.push_cm(0.0, Vec3::new(0.01, 0.0, 0.0)).unwrap();
        run.push_volume(0.0, 1e-6).unwrap();

        let disabled = ResultInputs::from_run(&run, &ReportConfig::default());
        assert!(disabled.trace_deltas().is_none());
        assert!(disabled.volume_steps().is_none());
        assert!((disabled.norm_final_dist() - 1.0).abs() < 1e-9);

        let config = ReportConfig {
            time_between_traces: 0.01,
            save_traces: true,
            normalize_dist_by_volume: true,
        };
        let enabled = ResultInputs::from_run(&run, &config);
        assert_eq!(enabled.trace_deltas().map(|d| d.count()), Some(1));
        assert_eq!(enabled.volume_steps().map(|v| v.count()), Some(1));
    }

    fn arb_vec3() -> impl Strategy<Value = Vec3> {
        (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_final_distance_non_negative_and_symmetric(
            a in arb_vec3(),
            b in arb_vec3(),
            lattice in 0.001f64..10.0,
        ) {
            let forward = normalized_final_distance(a, b, lattice);
            let backward = normalized_final_distance(b, a, lattice);
            prop_assert!(forward >= 0.0);
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_stationary_trace_has_zero_deltas(
            p in arb_vec3(),
            n in 1usize..50,
            lattice in 0.001f64..10.0,
        ) {
            let samples: Vec<CmSample> = (0..n)
                .map(|i| CmSample { time: i as f64, position: p })
                .collect();
            let steps: Vec<TraceDelta> =
                normalized_trace_deltas(&samples, p, lattice).collect();
            prop_assert_eq!(steps.len(), n);
            for step in &steps {
                prop_assert_eq!(step.delta_norm_dist, 0.0);
            }
        }

        #[test]
        fn prop_displaced_constant_trace_moves_once(
            p in arb_vec3(),
            origin in arb_vec3(),
            n in 1usize..50,
            lattice in 0.001f64..10.0,
        ) {
            let samples: Vec<CmSample> = (0..n)
                .map(|i| CmSample { time: i as f64, position: p })
                .collect();
            let steps: Vec<TraceDelta> =
                normalized_trace_deltas(&samples, origin, lattice).collect();
            prop_assert_eq!(steps[0].delta_norm_dist, steps[0].norm_dist);
            for step in &steps[1..] {
                prop_assert_eq!(step.delta_norm_dist, 0.0);
            }
        }

        #[test]
        fn prop_deltas_telescope_to_last_distance(
            points in prop::collection::vec(arb_vec3(), 1..40),
            origin in arb_vec3(),
            lattice in 0.01f64..10.0,
        ) {
            let samples: Vec<CmSample> = points
                .iter()
                .enumerate()
                .map(|(i, p)| CmSample { time: i as f64, position: *p })
                .collect();
            let steps: Vec<TraceDelta> =
                normalized_trace_deltas(&samples, origin, lattice).collect();
            let total: f64 = steps.iter().map(|s| s.delta_norm_dist).sum();
            let last = steps.last().map(|s| s.norm_dist).unwrap_or(0.0);
            prop_assert!((total - last).abs() < 1e-6 * (1.0 + last.abs()));
        }
    }
}
