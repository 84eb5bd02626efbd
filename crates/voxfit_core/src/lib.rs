//! # Voxfit Core
//!
//! Reduction of a finished run's trajectory into fitness metrics.
//!
//! This crate contains:
//! - The result reducer: normalized final distance, per-step distance deltas
//!   and the volume trace passthrough
//! - Report configuration (which traces a result document carries)
//! - Logging bootstrap
//!
//! ## Example
//!
//! ```
//! use voxfit_core::reducer::{normalized_final_distance, normalized_trace_deltas};
//! use voxfit_data::{CmSample, Vec3};
//!
//! let origin = Vec3::default();
//! let samples = [
//!     CmSample { time: 0.0, position: Vec3::new(0.0, 0.0, 0.0) },
//!     CmSample { time: 1.0, position: Vec3::new(0.02, 0.0, 0.0) },
//! ];
//!
//! let dist = normalized_final_distance(origin, samples[1].position, 0.01);
//! assert!((dist - 2.0).abs() < 1e-12);
//!
//! let deltas: Vec<f64> = normalized_trace_deltas(&samples, origin, 0.01)
//!     .map(|step| step.delta_norm_dist)
//!     .collect();
//! assert_eq!(deltas.len(), 2);
//! ```

/// Report configuration loaded from TOML
pub mod config;
/// Structured logging setup
pub mod logging;
/// Trajectory reductions feeding the result document
pub mod reducer;

pub use config::ReportConfig;
pub use logging::init_logging;
pub use reducer::{
    normalized_final_distance, normalized_trace_deltas, volume_trace, ResultInputs, TraceDelta,
    TraceDeltas,
};
