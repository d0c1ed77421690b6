//! Random lattice generation and fluid propagation.
//!
//! This crate provides the first two stages of the percolation pipeline:
//!
//! - [`generate`] / [`generate_lattice`] - Fill an `n × n × n` lattice with
//!   independently placed solid blocks
//! - [`propagate`] / [`flow`] - Pour fluid in through the top layer and fill
//!   every non-solid voxel it can reach through face-adjacent neighbors
//!
//! # Quick Start
//!
//! ```
//! use percolation_flow::{generate_lattice, propagate, FlowParams, GenerateParams};
//!
//! let params = GenerateParams::new(16, 0.3).with_seed(11);
//! let mut lattice = generate_lattice(&params).unwrap();
//!
//! let report = propagate(&mut lattice, &FlowParams::default());
//! println!("filled {} voxels, percolates: {}", report.filled, report.percolates);
//! ```
//!
//! # Architecture
//!
//! Propagation never recurses: it drives an explicit stack of coordinates,
//! so pathological lattices (long single-voxel corridors) cost heap memory
//! rather than call-stack depth.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod generate;
mod params;
mod propagate;

pub use generate::{generate, generate_lattice};
pub use params::{FlowParams, GenerateParams};
pub use propagate::{FlowReport, flow, percolates, propagate};
