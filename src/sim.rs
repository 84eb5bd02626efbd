//! The simulation-result object.

use serde::{Deserialize, Serialize};
use std::path::Path;
use voxfit_core::{ReportConfig, ResultInputs};
use voxfit_data::{FitnessRecord, RunSummary};
use voxfit_io::{persistence, record, result, LoadOutcome, MarkupTree};

/// Fitness bookkeeping and trajectory of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimGa {
    pub record: FitnessRecord,
    pub report: ReportConfig,
    pub run: RunSummary,
}

impl SimGa {
    /// Starts with a freshly constructed [`FitnessRecord`].
    #[must_use]
    pub fn new(run: RunSummary, report: ReportConfig) -> Self {
        Self {
            record: FitnessRecord::new(),
            report,
            run,
        }
    }

    #[must_use]
    pub fn result_inputs(&self) -> ResultInputs<'_> {
        ResultInputs::from_run(&self.run, &self.report)
    }

    pub fn write_result<T: MarkupTree + ?Sized>(&self, doc: &mut T) {
        result::write_result(doc, &self.result_inputs());
    }

    pub fn save_result_file<P: AsRef<Path>>(&self, path: P) -> voxfit_io::Result<()> {
        persistence::save_result_file(path, &self.result_inputs())
    }

    /// Writes the standalone report when the record enables it.
    pub fn save_fitness_file(&self) -> voxfit_io::Result<bool> {
        persistence::save_fitness_report(&self.record, &self.result_inputs())
    }

    /// Hook for the configuration save pipeline: appends the `GA` section.
    pub fn write_ga_section<T: MarkupTree + ?Sized>(&self, doc: &mut T) {
        record::write_config(doc, &self.record);
    }

    /// Hook for the configuration load pipeline. Always succeeds; the outcome
    /// lists defaulted fields and carries an optional diagnostic message.
    pub fn read_ga_section<T: MarkupTree + ?Sized>(&mut self, doc: &mut T) -> LoadOutcome {
        let outcome = record::read_config(doc, &mut self.record);
        if outcome.section_found {
            tracing::debug!(
                fitness_type = %self.record.fitness_type,
                track_voxel = self.record.track_voxel_id,
                defaulted = outcome.issues.len(),
                "Loaded GA section"
            );
        }
        outcome
    }

    pub fn save_config_file<P: AsRef<Path>>(&self, path: P) -> voxfit_io::Result<()> {
        persistence::save_config_file(path, &self.record)
    }

    pub fn load_config_file<P: AsRef<Path>>(&mut self, path: P) -> voxfit_io::Result<LoadOutcome> {
        persistence::load_config_file(path, &mut self.record)
    }
}
