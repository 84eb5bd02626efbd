//! The `GA` configuration section.
//!
//! Written fields: `Fitness`, `FitnessType`, `TrackVoxel`, `FitnessFileName`,
//! `WriteFitnessFile`. The reader also accepts the two scratch-file paths
//! `QhullTmpFile` and `CurvaturesTmpFile`.

use crate::fields::{FieldDef, FieldIssue, LoadOutcome};
use crate::markup::{MarkupTree, MarkupTreeExt};
use voxfit_data::{FitnessRecord, FitnessType, InvalidFitnessType};

pub const GA_SECTION: &str = "GA";

pub mod tags {
    pub const FITNESS: &str = "Fitness";
    pub const FITNESS_TYPE: &str = "FitnessType";
    pub const TRACK_VOXEL: &str = "TrackVoxel";
    pub const FITNESS_FILE_NAME: &str = "FitnessFileName";
    pub const WRITE_FITNESS_FILE: &str = "WriteFitnessFile";
    pub const QHULL_TMP_FILE: &str = "QhullTmpFile";
    pub const CURVATURES_TMP_FILE: &str = "CurvaturesTmpFile";
}

const FITNESS: FieldDef<f64> = FieldDef::new(tags::FITNESS, 0.0);
const FITNESS_TYPE: FieldDef<i32> = FieldDef::new(tags::FITNESS_TYPE, FitnessType::None.tag());
const TRACK_VOXEL: FieldDef<i32> = FieldDef::new(tags::TRACK_VOXEL, 0);
const FITNESS_FILE_NAME: FieldDef<String> = FieldDef::new(tags::FITNESS_FILE_NAME, String::new());
const QHULL_TMP_FILE: FieldDef<String> = FieldDef::new(tags::QHULL_TMP_FILE, String::new());
const CURVATURES_TMP_FILE: FieldDef<String> =
    FieldDef::new(tags::CURVATURES_TMP_FILE, String::new());
// A saved configuration without the flag predates it and always wrote reports.
const WRITE_FITNESS_FILE: FieldDef<bool> = FieldDef::new(tags::WRITE_FITNESS_FILE, true);

/// Appends a `GA` section holding the record's current values.
pub fn write_config<T: MarkupTree + ?Sized>(doc: &mut T, record: &FitnessRecord) {
    doc.section(GA_SECTION, |doc| {
        doc.element(tags::FITNESS, &record.fitness);
        doc.element(tags::FITNESS_TYPE, &record.fitness_type.tag());
        doc.element(tags::TRACK_VOXEL, &record.track_voxel_id);
        doc.element(tags::FITNESS_FILE_NAME, &record.fitness_file_name);
        doc.element(tags::WRITE_FITNESS_FILE, &record.write_fitness_file);
    });
    tracing::debug!(
        fitness = record.fitness,
        fitness_type = %record.fitness_type,
        "Wrote GA section"
    );
}

/// Restores `record` from the `GA` section under the cursor.
///
/// Without a `GA` section the record is left untouched. Otherwise every field
/// is assigned, either from its leaf or from its default. Never fails.
pub fn read_config<T: MarkupTree + ?Sized>(doc: &mut T, record: &mut FitnessRecord) -> LoadOutcome {
    if !doc.find_section(GA_SECTION) {
        tracing::debug!("No GA section, keeping current fitness record");
        return LoadOutcome::section_absent();
    }

    let mut outcome = LoadOutcome::section_present();
    record.fitness = outcome.take(FITNESS.resolve(doc));
    let tag = outcome.take(FITNESS_TYPE.resolve(doc));
    record.fitness_type = match FitnessType::try_from(tag) {
        Ok(kind) => kind,
        Err(InvalidFitnessType(tag)) => {
            tracing::warn!(tag, "Unknown fitness type tag, using none");
            outcome.push(FieldIssue::OutOfRange {
                field: tags::FITNESS_TYPE,
                tag,
            });
            FitnessType::None
        }
    };
    record.track_voxel_id = outcome.take(TRACK_VOXEL.resolve(doc));
    record.fitness_file_name = outcome.take(FITNESS_FILE_NAME.resolve(doc));
    record.qhull_tmp_file = outcome.take(QHULL_TMP_FILE.resolve(doc));
    record.curvatures_tmp_file = outcome.take(CURVATURES_TMP_FILE.resolve(doc));
    record.write_fitness_file = outcome.take(WRITE_FITNESS_FILE.resolve(doc));
    doc.up_level();

    outcome
}
