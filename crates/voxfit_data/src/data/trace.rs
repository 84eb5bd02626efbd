use super::geometry::Vec3;
use serde::{Deserialize, Serialize};

/// One center-of-mass sample of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CmSample {
    pub time: f64,
    pub position: Vec3,
}

/// One volume sample of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeSample {
    pub time: f64,
    pub volume: f64,
}

/// Snapshot of the trajectory buffers a finished run hands to the reporter.
///
/// Samples are kept in insertion order, which must be non-decreasing time.
/// Deserialization goes through the same checks as [`RunSummary::new`] and
/// the `push_*` methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRunSummary")]
pub struct RunSummary {
    initial_cm: Vec3,
    pub current_cm: Vec3,
    lattice_dim: f64,
    cm_trace: Vec<CmSample>,
    volume_trace: Vec<VolumeSample>,
}

impl RunSummary {
    /// Starts an empty summary. `lattice_dim` is the voxel edge length used to
    /// normalize distances and must be positive.
    pub fn new(initial_cm: Vec3, lattice_dim: f64) -> anyhow::Result<Self> {
        anyhow::ensure!(
            lattice_dim.is_finite() && lattice_dim > 0.0,
            "Lattice dimension must be positive and finite (got {lattice_dim})"
        );
        Ok(Self {
            initial_cm,
            current_cm: initial_cm,
            lattice_dim,
            cm_trace: Vec::new(),
            volume_trace: Vec::new(),
        })
    }

    #[must_use]
    pub fn initial_cm(&self) -> Vec3 {
        self.initial_cm
    }

    #[must_use]
    pub fn lattice_dim(&self) -> f64 {
        self.lattice_dim
    }

    #[must_use]
    pub fn cm_trace(&self) -> &[CmSample] {
        &self.cm_trace
    }

    #[must_use]
    pub fn volume_trace(&self) -> &[VolumeSample] {
        &self.volume_trace
    }

    /// Appends a center-of-mass sample and moves `current_cm` to it.
    pub fn push_cm(&mut self, time: f64, position: Vec3) -> anyhow::Result<()> {
        if let Some(last) = self.cm_trace.last() {
            anyhow::ensure!(
                time >= last.time,
                "CM sample at t={time} precedes previous sample at t={}",
                last.time
            );
        }
        self.cm_trace.push(CmSample { time, position });
        self.current_cm = position;
        Ok(())
    }

    pub fn push_volume(&mut self, time: f64, volume: f64) -> anyhow::Result<()> {
        if let Some(last) = self.volume_trace.last() {
            anyhow::ensure!(
                time >= last.time,
                "Volume sample at t={time} precedes previous sample at t={}",
                last.time
            );
        }
        self.volume_trace.push(VolumeSample { time, volume });
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawRunSummary {
    initial_cm: Vec3,
    current_cm: Vec3,
    lattice_dim: f64,
    cm_trace: Vec<CmSample>,
    volume_trace: Vec<VolumeSample>,
}

impl TryFrom<RawRunSummary> for RunSummary {
    type Error = anyhow::Error;

    fn try_from(raw: RawRunSummary) -> anyhow::Result<Self> {
        let mut run = Self::new(raw.initial_cm, raw.lattice_dim)?;
        for sample in raw.cm_trace {
            run.push_cm(sample.time, sample.position)?;
        }
        for sample in raw.volume_trace {
            run.push_volume(sample.time, sample.volume)?;
        }
        run.current_cm = raw.current_cm;
        Ok(run)
    }
}
