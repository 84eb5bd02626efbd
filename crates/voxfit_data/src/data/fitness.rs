use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// Which scalar semantics the `fitness` value of a [`FitnessRecord`] carries.
///
/// The discriminants are the integer tags used in saved documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum FitnessType {
    /// No fitness reporting.
    #[default]
    None = 0,
    /// Displacement of the center of mass along x.
    CenterX = 1,
    /// Displacement of the center of mass along y.
    CenterY = 2,
    /// Displacement of the center of mass along z.
    CenterZ = 3,
    /// Position of the tracked voxel along x.
    VoxelX = 4,
    /// Position of the tracked voxel along y.
    VoxelY = 5,
    /// Position of the tracked voxel along z.
    VoxelZ = 6,
}

impl FitnessType {
    pub const ALL: [FitnessType; 7] = [
        FitnessType::None,
        FitnessType::CenterX,
        FitnessType::CenterY,
        FitnessType::CenterZ,
        FitnessType::VoxelX,
        FitnessType::VoxelY,
        FitnessType::VoxelZ,
    ];

    /// Integer tag written to documents.
    #[must_use]
    pub const fn tag(self) -> i32 {
        self as i32
    }

    /// Whether this kind reads the position of `track_voxel_id`.
    #[must_use]
    pub const fn uses_tracked_voxel(self) -> bool {
        matches!(
            self,
            FitnessType::VoxelX | FitnessType::VoxelY | FitnessType::VoxelZ
        )
    }
}

impl fmt::Display for FitnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitnessType::None => "none",
            FitnessType::CenterX => "center_x",
            FitnessType::CenterY => "center_y",
            FitnessType::CenterZ => "center_z",
            FitnessType::VoxelX => "voxel_x",
            FitnessType::VoxelY => "voxel_y",
            FitnessType::VoxelZ => "voxel_z",
        };
        f.write_str(name)
    }
}

/// Error returned when an integer tag does not name a [`FitnessType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFitnessType(pub i32);

impl fmt::Display for InvalidFitnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid fitness type tag: {}", self.0)
    }
}

impl error::Error for InvalidFitnessType {}

impl TryFrom<i32> for FitnessType {
    type Error = InvalidFitnessType;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        FitnessType::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == tag)
            .ok_or(InvalidFitnessType(tag))
    }
}

/// Fitness bookkeeping owned by one simulation run.
///
/// Created alongside the simulation object, mutated by configuration loads or
/// by the external fitness-assignment step, and serialized on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessRecord {
    pub fitness: f64,
    pub fitness_type: FitnessType,
    /// Voxel whose position stands in for the body. 0 means unset.
    pub track_voxel_id: i32,
    /// Destination of the standalone fitness report.
    pub fitness_file_name: String,
    pub write_fitness_file: bool,
    /// Scratch file for the convex hull computation.
    pub qhull_tmp_file: String,
    /// Scratch file for the surface curvature computation.
    pub curvatures_tmp_file: String,
}

impl Default for FitnessRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl FitnessRecord {
    /// Constructor defaults. Note `write_fitness_file` starts out `false`,
    /// while a load that finds no `WriteFitnessFile` leaf resolves it to `true`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fitness: 0.0,
            fitness_type: FitnessType::None,
            track_voxel_id: 0,
            fitness_file_name: String::new(),
            write_fitness_file: false,
            qhull_tmp_file: String::new(),
            curvatures_tmp_file: String::new(),
        }
    }

    /// Whether a standalone fitness report should be emitted, and where.
    #[must_use]
    pub fn report_destination(&self) -> Option<&str> {
        if self.write_fitness_file && !self.fitness_file_name.is_empty() {
            Some(&self.fitness_file_name)
        } else {
            None
        }
    }
}
