//! # Voxfit IO
//!
//! Persistence layer for simulation results and fitness records.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - The markup tree capability and its XML implementation
//! - Per-field default resolution for configuration loads
//! - Writers and readers for the `GA` configuration section and the
//!   `Voxelyze_Sim_Result` document
//! - File entry points that build or parse a whole document in one go

/// Error types and result aliases for I/O operations
pub mod error;
/// Field descriptors and default resolution for configuration loads
pub mod fields;
/// Abstract markup tree and the in-memory XML tree
pub mod markup;
/// File save/load entry points
pub mod persistence;
/// Reader and writer for the `GA` configuration section
pub mod record;
/// Reader and writer for the simulation result document
pub mod result;

pub use error::{IoError, Result};
pub use fields::{FieldDef, FieldIssue, LoadOutcome};
pub use markup::{LeafError, MarkupTree, MarkupTreeExt, MarkupValue, XmlTree};
pub use persistence::{
    load_config_file, load_result_file, save_config_file, save_fitness_report, save_result_file,
};
pub use record::{read_config, write_config};
pub use result::{read_result, write_result, CmTraceStep, SimResult};
