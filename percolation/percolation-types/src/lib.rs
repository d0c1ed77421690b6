//! Core data model for percolation lattices.
//!
//! This crate provides the voxel state model shared by the generator, the
//! propagation engine and the visibility culling engine:
//!
//! - [`Voxel`] and [`VoxelFlags`] - Monotonic per-voxel attributes
//! - [`LatticeCoord`] - Integer `(i, j, k)` coordinates
//! - [`LatticeBounds`] and [`Face`] - The cube and its faces
//! - [`Lattice`] - Dense `n × n × n` voxel storage
//! - [`LatticeError`] - Construction errors
//!
//! # Coordinate System
//!
//! - `i`: vertical, `i = 0` is the top layer (fluid enters here)
//! - `j`: horizontal, the `j = n - 1` slab is the left face of the isometric view
//! - `k`: horizontal, the `k = 0` slab is the right face of the isometric view
//!
//! # Example
//!
//! ```
//! use percolation_types::{Lattice, LatticeCoord, ViewMode};
//!
//! let mut lattice = Lattice::from_solids(3, [LatticeCoord::new(1, 1, 1)]).unwrap();
//!
//! // Solid voxels never take fluid
//! assert!(!lattice.mark_fluid(LatticeCoord::new(1, 1, 1)));
//! assert!(lattice.mark_fluid(LatticeCoord::new(0, 0, 0)));
//!
//! // Visibility is scoped per view mode
//! lattice.mark_visible(LatticeCoord::new(0, 0, 0), ViewMode::Combined);
//! assert!(lattice.is_visible_combined(LatticeCoord::new(0, 0, 0)));
//! assert!(!lattice.is_visible_isolated(LatticeCoord::new(0, 0, 0)));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod coord;
mod error;
mod lattice;
mod voxel;

pub use bounds::{Face, LatticeBounds, LatticeBoundsIter};
pub use coord::LatticeCoord;
pub use error::{LatticeError, LatticeResult};
pub use lattice::{Lattice, check_probability, check_signed_size, check_size};
pub use voxel::{Material, ViewMode, Voxel, VoxelFlags};
