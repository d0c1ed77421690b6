//! Culling entry points.

use percolation_types::Lattice;
use tracing::info;

use crate::params::{CullParams, CullStrategy, Target};
use crate::ray_scan::ray_scan;
use crate::region_flood::region_flood;
use crate::report::{CullReport, PassReport};

/// Runs a single culling pass for `target` with the configured strategy.
///
/// With [`CullStrategy::Disabled`] the lattice is left untouched and an empty
/// report is returned.
pub fn cull_pass(lattice: &mut Lattice, target: Target, params: &CullParams) -> PassReport {
    match params.strategy {
        CullStrategy::RayScan => ray_scan(lattice, target, params.parallel),
        CullStrategy::RegionFlood => region_flood(lattice, target),
        CullStrategy::Disabled => PassReport::new(target, 0),
    }
}

/// Marks the visible voxels of all three views.
///
/// Runs the combined pass, then the solid-only and fluid-only passes. The
/// two single-material passes share the isolated flag; since a voxel holds
/// at most one material, they never mark the same voxel.
///
/// # Example
///
/// ```
/// use percolation_cull::{cull, CullParams};
/// use percolation_flow::flow;
/// use percolation_types::{Lattice, LatticeCoord};
///
/// let mut lattice = Lattice::from_solids(2, [LatticeCoord::origin()]).unwrap();
/// flow(&mut lattice);
///
/// let report = cull(&mut lattice, &CullParams::default());
/// assert_eq!(report.combined.marked, 7);
/// assert_eq!(report.solid.marked, 1);
/// assert_eq!(report.fluid.marked, 6);
/// assert!(lattice.is_visible_combined(LatticeCoord::origin()));
/// ```
pub fn cull(lattice: &mut Lattice, params: &CullParams) -> CullReport {
    let [combined, solid, fluid] = Target::PASSES.map(|target| cull_pass(lattice, target, params));

    let report = CullReport {
        strategy: params.strategy,
        combined,
        solid,
        fluid,
    };

    info!(
        strategy = %params.strategy,
        combined = report.combined.marked,
        solid = report.solid.marked,
        fluid = report.fluid.marked,
        "Culling complete"
    );

    report
}
