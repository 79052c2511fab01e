//! The `lbmcheck` crate provides tools for verifying lattice Boltzmann
//! simulation output against a reference solver.
//!
//! Snapshots of a density field `rho` and a velocity field `v` on a regular
//! 3D lattice are read from VTK image data files, compared iteration by
//! iteration, or converted into plain text matrices.

pub mod comparison;
pub mod dataset;
pub mod error;
pub mod io;
pub mod num;
pub mod pipeline;
pub mod report;
pub mod reshape;
pub mod sequence;

#[cfg(feature = "cli")]
pub mod cli;
