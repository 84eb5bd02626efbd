//! File entry points.
//!
//! Each save builds a fresh document in memory and writes it with a single
//! call; there is no appending or streaming.

use crate::error::{IoError, Result};
use crate::fields::LoadOutcome;
use crate::markup::{MarkupTree, MarkupTreeExt, XmlTree};
use crate::record::{read_config, write_config};
use crate::result::{read_result, write_result, SimResult};
use std::path::Path;
use voxfit_core::ResultInputs;
use voxfit_data::FitnessRecord;

/// Root of a saved simulation configuration.
pub const VXA_SECTION: &str = "VXA";
pub const VXA_VERSION: &str = "1.1";
/// Section of a configuration that holds the `GA` block.
pub const SIMULATOR_SECTION: &str = "Simulator";

fn write_document<P: AsRef<Path>>(path: P, doc: &XmlTree) -> Result<()> {
    let path = path.as_ref();
    let xml = doc.to_xml_string()?;
    std::fs::write(path, &xml)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing {:?}", path)))?;
    tracing::info!(path = %path.display(), bytes = xml.len(), "Saved document");
    Ok(())
}

fn read_document<P: AsRef<Path>>(path: P) -> Result<XmlTree> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("reading {:?}", path)))?;
    let doc = XmlTree::parse(&xml).map_err(|e| e.with_context(format!("parsing {:?}", path)))?;
    tracing::info!(path = %path.display(), bytes = xml.len(), "Loaded document");
    Ok(doc)
}

/// Writes a result document for `inputs` to `path`.
pub fn save_result_file<P: AsRef<Path>>(path: P, inputs: &ResultInputs<'_>) -> Result<()> {
    let mut doc = XmlTree::new();
    write_result(&mut doc, inputs);
    write_document(path, &doc)
}

pub fn load_result_file<P: AsRef<Path>>(path: P) -> Result<SimResult> {
    let path = path.as_ref();
    let mut doc = read_document(path)?;
    read_result(&mut doc).map_err(|e| e.with_context(format!("reading result from {:?}", path)))
}

/// Writes `record` as a `GA` section nested in `VXA` / `Simulator`.
pub fn save_config_file<P: AsRef<Path>>(path: P, record: &FitnessRecord) -> Result<()> {
    let mut doc = XmlTree::new();
    doc.section(VXA_SECTION, |doc| {
        doc.set_attribute("Version", VXA_VERSION);
        doc.section(SIMULATOR_SECTION, |doc| write_config(doc, record));
    });
    write_document(path, &doc)
}

/// Loads the `GA` section of a saved configuration into `record`.
///
/// `VXA` and `Simulator` are descended when present, so a bare `GA` document
/// also loads. A file without any `GA` section leaves `record` unchanged.
pub fn load_config_file<P: AsRef<Path>>(path: P, record: &mut FitnessRecord) -> Result<LoadOutcome> {
    let mut doc = read_document(path)?;
    if doc.find_section(VXA_SECTION) {
        doc.find_section(SIMULATOR_SECTION);
    }
    let outcome = read_config(&mut doc, record);
    if let Some(message) = outcome.message() {
        tracing::warn!(%message, "Fitness record loaded with defaults");
    }
    Ok(outcome)
}

/// Writes the standalone fitness report if the record asks for one.
///
/// Returns whether a file was written.
pub fn save_fitness_report(record: &FitnessRecord, inputs: &ResultInputs<'_>) -> Result<bool> {
    match record.report_destination() {
        Some(path) => {
            save_result_file(path, inputs)?;
            Ok(true)
        }
        None => {
            tracing::debug!("Fitness report disabled");
            Ok(false)
        }
    }
}
