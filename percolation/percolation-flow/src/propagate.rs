//! Fluid propagation through non-solid voxels.
//!
//! Fluid enters through every non-solid voxel of the top layer (`i = 0`) and
//! spreads to face-adjacent voxels that are not solid. The traversal uses an
//! explicit heap-backed stack, so its depth is bounded by memory rather than
//! by the call stack.
//!
//! # Algorithm
//!
//! 1. Push every non-solid top-layer coordinate.
//! 2. Pop a coordinate. Out-of-range, solid and already-filled voxels are
//!    skipped.
//! 3. Otherwise fill it and push all of its face neighbors unconditionally.
//! 4. Repeat until the stack is empty.
//!
//! Every voxel is filled at most once, so the work is `O(n³)` fills plus at
//! most six pushes per fill. The filled set is the set of non-solid voxels
//! connected to the top layer and does not depend on pop order.

use percolation_types::{Face, Lattice, LatticeCoord};
use tracing::{debug, info};

use crate::params::FlowParams;

/// Summary of a propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowReport {
    /// Number of non-solid entry-face voxels used as seeds.
    pub seeds: usize,
    /// Number of voxels newly filled by this run.
    pub filled: usize,
    /// Number of coordinates popped from the work-list.
    pub visits: usize,
    /// Largest work-list length observed.
    pub peak_pending: usize,
    /// Whether fluid reached the bottom layer.
    pub percolates: bool,
}

/// Fills every non-solid voxel reachable from the top layer.
///
/// # Arguments
///
/// * `lattice` - The lattice to fill in place
/// * `params` - Propagation parameters
///
/// # Returns
///
/// A [`FlowReport`] describing the run. Running again on the same lattice
/// fills nothing.
///
/// # Example
///
/// ```
/// use percolation_flow::{propagate, FlowParams};
/// use percolation_types::{Lattice, LatticeCoord};
///
/// // A solid wall at i = 1 blocks the way down
/// let mut lattice = Lattice::from_fn(3, |c| c.i == 1).unwrap();
/// let report = propagate(&mut lattice, &FlowParams::default());
///
/// assert_eq!(report.filled, 9);
/// assert!(!report.percolates);
/// assert!(lattice.is_fluid(LatticeCoord::new(0, 2, 2)));
/// assert!(!lattice.is_fluid(LatticeCoord::new(2, 0, 0)));
///
/// let again = propagate(&mut lattice, &FlowParams::default());
/// assert_eq!(again.filled, 0);
/// ```
pub fn propagate(lattice: &mut Lattice, params: &FlowParams) -> FlowReport {
    let bounds = lattice.bounds();

    let mut pending: Vec<LatticeCoord> = bounds
        .face(Face::Top)
        .filter(|coord| !lattice.is_solid(*coord))
        .collect();

    let mut report = FlowReport {
        seeds: pending.len(),
        peak_pending: pending.len(),
        ..FlowReport::default()
    };

    debug!(seeds = report.seeds, "Starting propagation");

    // The upward neighbor comes first in `face_neighbors`
    let first_neighbor = usize::from(!params.allow_upward);

    while let Some(coord) = pending.pop() {
        report.visits += 1;

        if !lattice.mark_fluid(coord) {
            continue;
        }
        report.filled += 1;

        let neighbors = coord.face_neighbors();
        pending.extend_from_slice(&neighbors[first_neighbor..]);
        report.peak_pending = report.peak_pending.max(pending.len());
    }

    report.percolates = percolates(lattice);

    info!(
        filled = report.filled,
        visits = report.visits,
        peak_pending = report.peak_pending,
        percolates = report.percolates,
        "Propagation complete"
    );

    report
}

/// Fills the lattice with full 6-connected propagation.
///
/// Shorthand for [`propagate`] with [`FlowParams::default`].
pub fn flow(lattice: &mut Lattice) -> FlowReport {
    propagate(lattice, &FlowParams::default())
}

/// Returns `true` if any voxel of the bottom layer holds fluid.
///
/// # Example
///
/// ```
/// use percolation_flow::{flow, percolates};
/// use percolation_types::Lattice;
///
/// let mut open = Lattice::empty(4).unwrap();
/// flow(&mut open);
/// assert!(percolates(&open));
///
/// assert!(!percolates(&Lattice::empty(0).unwrap()));
/// ```
#[must_use]
pub fn percolates(lattice: &Lattice) -> bool {
    lattice
        .bounds()
        .face(Face::Bottom)
        .any(|coord| lattice.is_fluid(coord))
}
