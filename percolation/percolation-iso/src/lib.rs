//! Isometric projection and draw plans for percolation lattices.
//!
//! This crate turns lattice coordinates into screen geometry. It does not
//! render anything itself:
//!
//! - [`IsoProjection`] / [`project`] - Outline of a cell as three
//!   parallelograms in the unit square, using a fixed 30° projection
//! - [`draw_plan`] - Back-to-front list of cells for the combined, solid and
//!   fluid panels, optionally restricted to culled voxels
//! - [`face_color`] - Fill color per material and face
//!
//! # Example
//!
//! ```
//! use percolation_iso::{draw_plan, project, Panel};
//! use percolation_types::{Lattice, LatticeCoord};
//!
//! let faces = project(LatticeCoord::new(0, 0, 0), 8);
//! assert!(faces.top.iter().all(|p| (0.0..=1.0).contains(&p.x)));
//!
//! let lattice = Lattice::from_fn(4, |c| c.i == 3).unwrap();
//! let plan = draw_plan(&lattice, false);
//! assert_eq!(plan.count(Panel::Solid), 16);
//! ```
//!
//! # Coordinate System
//!
//! Screen X grows to the right and Y grows upwards. Lattice `i` grows
//! downwards, so the `i = 0` layer is drawn on top.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod draw;
mod projection;

pub use draw::{
    BACKGROUND, DrawCommand, DrawPlan, Panel, Rgb, draw_plan, face_color, painter_order,
};
pub use projection::{ANGLE, CubeFaces, FaceKind, IsoProjection, MARGIN, project};

// Re-export nalgebra point types used in the public API
pub use nalgebra::{Point2, Vector2};
