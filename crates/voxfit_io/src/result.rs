//! The `Voxelyze_Sim_Result` document.
//!
//! ```text
//! Voxelyze_Sim_Result Version="1.0"
//!   Fitness
//!     NormFinalDist
//!   CMTrace                  (when the CM trace is enabled)
//!     TraceStep*  Time TraceX TraceY TraceZ deltaNormDist
//!   VolumeTrace              (when the volume trace is enabled)
//!     TraceStep*  Time Volume
//! ```

use crate::error::{IoError, Result};
use crate::markup::{MarkupTree, MarkupTreeExt};
use serde::{Deserialize, Serialize};
use voxfit_core::ResultInputs;
use voxfit_data::{Vec3, VolumeSample};

pub const RESULT_SECTION: &str = "Voxelyze_Sim_Result";
pub const VERSION_ATTR: &str = "Version";
pub const RESULT_VERSION: &str = "1.0";

pub mod tags {
    pub const FITNESS: &str = "Fitness";
    pub const NORM_FINAL_DIST: &str = "NormFinalDist";
    pub const CM_TRACE: &str = "CMTrace";
    pub const VOLUME_TRACE: &str = "VolumeTrace";
    pub const TRACE_STEP: &str = "TraceStep";
    pub const TIME: &str = "Time";
    pub const TRACE_X: &str = "TraceX";
    pub const TRACE_Y: &str = "TraceY";
    pub const TRACE_Z: &str = "TraceZ";
    pub const DELTA_NORM_DIST: &str = "deltaNormDist";
    pub const VOLUME: &str = "Volume";
}

/// Appends a complete result section built from `inputs`.
pub fn write_result<T: MarkupTree + ?Sized>(doc: &mut T, inputs: &ResultInputs<'_>) {
    let norm_final_dist = inputs.norm_final_dist();
    doc.section(RESULT_SECTION, |doc| {
        doc.set_attribute(VERSION_ATTR, RESULT_VERSION);
        doc.section(tags::FITNESS, |doc| {
            doc.element(tags::NORM_FINAL_DIST, &norm_final_dist);
        });

        if let Some(steps) = inputs.trace_deltas() {
            doc.section(tags::CM_TRACE, |doc| {
                for step in steps {
                    doc.section(tags::TRACE_STEP, |doc| {
                        doc.element(tags::TIME, &step.time);
                        doc.element(tags::TRACE_X, &step.position.x);
                        doc.element(tags::TRACE_Y, &step.position.y);
                        doc.element(tags::TRACE_Z, &step.position.z);
                        doc.element(tags::DELTA_NORM_DIST, &step.delta_norm_dist);
                    });
                }
            });
        }

        if let Some(samples) = inputs.volume_steps() {
            doc.section(tags::VOLUME_TRACE, |doc| {
                for sample in samples {
                    doc.section(tags::TRACE_STEP, |doc| {
                        doc.element(tags::TIME, &sample.time);
                        doc.element(tags::VOLUME, &sample.volume);
                    });
                }
            });
        }
    });
    tracing::debug!(norm_final_dist, "Wrote result section");
}

/// One `CMTrace` step as stored in a result document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CmTraceStep {
    pub time: f64,
    pub position: Vec3,
    pub delta_norm_dist: f64,
}

/// Contents of a result document. A `None` trace means the section was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResult {
    pub version: Option<String>,
    pub norm_final_dist: f64,
    pub cm_trace: Option<Vec<CmTraceStep>>,
    pub volume_trace: Option<Vec<VolumeSample>>,
}

impl SimResult {
    /// Per-step `deltaNormDist` values, empty when there is no CM trace.
    #[must_use]
    pub fn delta_norm_dists(&self) -> Vec<f64> {
        self.cm_trace
            .iter()
            .flatten()
            .map(|step| step.delta_norm_dist)
            .collect()
    }
}

/// Reads the result section under the cursor. The cursor is left where it
/// started. Trace steps with missing or unparseable leaves are skipped.
pub fn read_result<T: MarkupTree + ?Sized>(doc: &mut T) -> Result<SimResult> {
    doc.within(RESULT_SECTION, 0, |doc| {
        let version = doc.attribute(VERSION_ATTR).map(str::to_string);
        let norm_final_dist = doc
            .within(tags::FITNESS, 0, |doc| {
                doc.load_element::<f64>(tags::NORM_FINAL_DIST)
            })
            .ok_or_else(|| IoError::not_found(tags::FITNESS))?
            .map_err(|e| IoError::validation(format!("{}: {e}", tags::NORM_FINAL_DIST)))?;

        let cm_trace = doc.within(tags::CM_TRACE, 0, |doc| read_steps(doc, read_cm_step));
        let volume_trace = doc.within(tags::VOLUME_TRACE, 0, |doc| read_steps(doc, read_volume_step));

        Ok(SimResult {
            version,
            norm_final_dist,
            cm_trace,
            volume_trace,
        })
    })
    .ok_or_else(|| IoError::not_found(RESULT_SECTION))?
}

fn read_steps<T, S, F>(doc: &mut T, read_step: F) -> Vec<S>
where
    T: MarkupTree + ?Sized,
    F: Fn(&T) -> Option<S>,
{
    let count = doc.section_count(tags::TRACE_STEP);
    let mut steps = Vec::with_capacity(count);
    for index in 0..count {
        match doc.within(tags::TRACE_STEP, index, |doc| read_step(doc)).flatten() {
            Some(step) => steps.push(step),
            None => tracing::warn!(index, "Skipping malformed trace step"),
        }
    }
    steps
}

fn read_cm_step<T: MarkupTree + ?Sized>(doc: &T) -> Option<CmTraceStep> {
    Some(CmTraceStep {
        time: doc.load_element(tags::TIME).ok()?,
        position: Vec3::new(
            doc.load_element(tags::TRACE_X).ok()?,
            doc.load_element(tags::TRACE_Y).ok()?,
            doc.load_element(tags::TRACE_Z).ok()?,
        ),
        delta_norm_dist: doc.load_element(tags::DELTA_NORM_DIST).ok()?,
    })
}

fn read_volume_step<T: MarkupTree + ?Sized>(doc: &T) -> Option<VolumeSample> {
    Some(VolumeSample {
        time: doc.load_element(tags::TIME).ok()?,
        volume: doc.load_element(tags::VOLUME).ok()?,
    })
}
