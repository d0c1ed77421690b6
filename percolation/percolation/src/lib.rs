//! Percolation lattice toolkit.
//!
//! This umbrella crate re-exports the percolation-* crates and adds the
//! end-to-end pipeline that ties them together:
//!
//! 1. **Generate** an `n × n × n` lattice of randomly placed solid blocks
//! 2. **Fill** every open voxel reachable from the top layer with fluid
//! 3. **Cull** voxels a viewer cannot see in the isometric view
//! 4. **Project** the remaining voxels into a painter-ordered draw plan
//!
//! # Quick Start
//!
//! ```
//! use percolation::prelude::*;
//!
//! let config = PipelineConfig::new(20, 0.35).with_seed(7);
//! let output = run(&config).unwrap();
//!
//! println!("{}", output.stats);
//! let plan = output.draw_plan();
//! assert_eq!(plan.count(Panel::Combined), output.stats.visible_combined);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Voxel flags, coordinates, bounds and the dense lattice
//! - [`flow`] - Random generation and fluid propagation
//! - [`cull`] - Ray-scan and region-flood visibility culling
//! - [`iso`] - Isometric projection and draw plans
//!
//! # Feature Flags
//!
//! - `serde` - Serialization of configuration and report types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod pipeline;
mod stats;

// =============================================================================
// Re-exports
// =============================================================================

/// Voxel flags, coordinates, bounds and the dense lattice.
pub use percolation_types as types;

/// Random generation and fluid propagation.
pub use percolation_flow as flow;

/// Ray-scan and region-flood visibility culling.
pub use percolation_cull as cull;

/// Isometric projection and draw plans.
pub use percolation_iso as iso;

pub use percolation_cull::{CullParams, CullStrategy};
pub use percolation_flow::{FlowParams, GenerateParams};
pub use percolation_types::{Lattice, LatticeError, LatticeResult};
pub use pipeline::{PipelineConfig, PipelineOutput, process, run, run_with_rng};
pub use stats::LatticeStats;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for running the pipeline.
///
/// # Usage
///
/// ```
/// use percolation::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use percolation_types::{Lattice, LatticeCoord, LatticeError, Material, ViewMode};

    // Stages
    pub use percolation_cull::{CullParams, CullReport, CullStrategy};
    pub use percolation_flow::{FlowParams, FlowReport, GenerateParams};
    pub use percolation_iso::{DrawPlan, FaceKind, Panel};

    // Pipeline
    pub use crate::pipeline::{PipelineConfig, PipelineOutput, run};
    pub use crate::stats::LatticeStats;
}
