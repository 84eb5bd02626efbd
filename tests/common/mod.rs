use voxfit_lib::{ReportConfig, RunSummary, SimGa, Vec3};

/// Builds a [`SimGa`] from a list of center-of-mass samples.
#[allow(dead_code)]
pub struct RunBuilder {
    initial_cm: Vec3,
    lattice_dim: f64,
    cm: Vec<(f64, Vec3)>,
    volume: Vec<(f64, f64)>,
    report: ReportConfig,
}

#[allow(dead_code)]
impl RunBuilder {
    pub fn new() -> Self {
        Self {
            initial_cm: Vec3::default(),
            lattice_dim: 1.0,
            cm: Vec::new(),
            volume: Vec::new(),
            report: ReportConfig::default(),
        }
    }

    pub fn with_initial_cm(mut self, cm: Vec3) -> Self {
        self.initial_cm = cm;
        self
    }

    pub fn with_lattice_dim(mut self, lattice_dim: f64) -> Self {
        self.lattice_dim = lattice_dim;
        self
    }

    pub fn with_cm(mut self, time: f64, x: f64, y: f64, z: f64) -> Self {
        self.cm.push((time, Vec3::new(x, y, z)));
        self
    }

    pub fn with_volume(mut self, time: f64, volume: f64) -> Self {
        self.volume.push((time, volume));
        self
    }

    pub fn with_report<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut ReportConfig),
    {
        modifier(&mut self.report);
        self
    }

    /// Enables the CM trace and the volume trace.
    pub fn with_all_traces(self) -> Self {
        self.with_report(|r| {
            r.time_between_traces = 0.1;
            r.save_traces = true;
            r.normalize_dist_by_volume = true;
        })
    }

    pub fn build(self) -> anyhow::Result<SimGa> {
        let mut run = RunSummary::new(self.initial_cm, self.lattice_dim)?;
        for (time, position) in self.cm {
            run.push_cm(time, position)?;
        }
        for (time, volume) in self.volume {
            run.push_volume(time, volume)?;
        }
        Ok(SimGa::new(run, self.report))
    }
}
