//! Visibility culling for isometric views of percolation lattices.
//!
//! A renderer only needs to draw voxels a viewer can actually see. This
//! crate marks, for each view, the voxels that are first along a line of
//! sight entering through the top, left or right face of the cube:
//!
//! - **Combined view** - any occupied voxel blocks the line
//!   (`VisibleCombined`)
//! - **Solid view** / **Fluid view** - only voxels of that material block
//!   the line (`VisibleIsolated`)
//!
//! # Strategies
//!
//! - [`CullStrategy::RayScan`] (default) - one diagonal line per visible-face
//!   voxel, at most one mark per line; optionally evaluated in parallel
//! - [`CullStrategy::RegionFlood`] - flood through non-target voxels from the
//!   visible faces and mark every target voxel reached
//! - [`CullStrategy::Disabled`] - no flags are set
//!
//! # Example
//!
//! ```
//! use percolation_cull::{cull, CullParams};
//! use percolation_flow::{flow, generate_lattice, GenerateParams};
//!
//! let mut lattice = generate_lattice(&GenerateParams::new(12, 0.4).with_seed(5)).unwrap();
//! flow(&mut lattice);
//!
//! let report = cull(&mut lattice, &CullParams::default());
//! assert!(report.combined.marked <= report.combined.origins);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cull;
mod params;
mod ray_scan;
mod region_flood;
mod report;

pub use cull::{cull, cull_pass};
pub use params::{CullParams, CullStrategy, Target};
pub use ray_scan::{VIEW_DIRECTION, first_hit, ray_scan};
pub use region_flood::region_flood;
pub use report::{CullReport, PassReport};
