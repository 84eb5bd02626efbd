//! Core data structures for the voxel simulation result.

pub mod fitness;
pub mod geometry;
pub mod trace;
