//! # Voxfit Data
//!
//! Plain data shared by the reducer and the persistence layer: trajectory
//! samples handed over by the physics collaborator and the per-run fitness
//! record owned by the simulation object.

pub mod data;

pub use data::fitness::{FitnessRecord, FitnessType, InvalidFitnessType};
pub use data::geometry::Vec3;
pub use data::trace::{CmSample, RunSummary, VolumeSample};
