//! # Voxfit
//!
//! Result reporting and fitness-record persistence for a voxel soft-body
//! simulator used inside an evolutionary search.
//!
//! After a run the physics engine hands over its trajectory buffers as a
//! [`RunSummary`]. [`SimGa`] owns that summary together with the run's
//! [`FitnessRecord`] and [`ReportConfig`], and exposes the hooks the save/load
//! pipeline calls: writing the result document, writing and reading the `GA`
//! configuration section, and emitting the standalone fitness report.
//!
//! ## Example
//!
//! ```
//! use voxfit_lib::{ReportConfig, RunSummary, SimGa, Vec3, XmlTree};
//!
//! let mut run = RunSummary::new(Vec3::default(), 1.0).unwrap();
//! run.push_cm(0.0, Vec3::new(0.0, 0.0, 0.0)).unwrap();
//! run.push_cm(0.1, Vec3::new(3.0, 4.0, 0.0)).unwrap();
//!
//! let config = ReportConfig { time_between_traces: 0.1, ..Default::default() };
//! let sim = SimGa::new(run, config);
//!
//! let mut doc = XmlTree::new();
//! sim.write_result(&mut doc);
//! let xml = doc.to_xml_string().unwrap();
//! assert!(xml.contains("<NormFinalDist>5</NormFinalDist>"));
//! ```

pub mod sim;

pub use sim::SimGa;
pub use voxfit_core::{init_logging, ReportConfig, ResultInputs};
pub use voxfit_data::{CmSample, FitnessRecord, FitnessType, RunSummary, Vec3, VolumeSample};
pub use voxfit_io::{IoError, LoadOutcome, MarkupTree, SimResult, XmlTree};
