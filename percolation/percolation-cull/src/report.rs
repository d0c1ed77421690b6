//! Results of culling passes.

use crate::params::{CullStrategy, Target};

/// Outcome of one culling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport {
    /// What the pass was looking for.
    pub target: Target,
    /// Lines scanned (ray scan) or seeds pushed (region flood).
    pub origins: usize,
    /// Distinct voxels found visible by this pass.
    pub marked: usize,
    /// Of those, voxels whose flag was not already set.
    pub newly_marked: usize,
}

impl PassReport {
    pub(crate) const fn new(target: Target, origins: usize) -> Self {
        Self {
            target,
            origins,
            marked: 0,
            newly_marked: 0,
        }
    }
}

/// Outcome of a full culling run: one pass per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CullReport {
    /// Strategy used for every pass.
    pub strategy: CullStrategy,
    /// Combined view, any occupied voxel.
    pub combined: PassReport,
    /// Solid-only view.
    pub solid: PassReport,
    /// Fluid-only view.
    pub fluid: PassReport,
}

impl CullReport {
    /// Returns the three passes in execution order.
    #[must_use]
    pub const fn passes(&self) -> [PassReport; 3] {
        [self.combined, self.solid, self.fluid]
    }

    /// Total voxels found visible in the single-material views.
    #[must_use]
    pub const fn isolated_marked(&self) -> usize {
        self.solid.marked + self.fluid.marked
    }
}
