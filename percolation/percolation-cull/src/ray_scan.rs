//! Diagonal line-of-sight scanning.
//!
//! The isometric viewer looks at the top (`i = 0`), left (`j = n - 1`) and
//! right (`k = 0`) faces of the cube. Every line of sight runs parallel to
//! the cube diagonal [`VIEW_DIRECTION`], so one line starts at each voxel of
//! the visible shell and the lines never share a voxel.
//!
//! A line stops at the first voxel matching the target. That voxel is marked
//! visible and nothing behind it on the same line is considered. A voxel can
//! still end up marked although a voxel on a neighboring line covers part of
//! it on screen; such a voxel is drawn once more than strictly necessary,
//! which is harmless in painter's order.

use percolation_types::{Lattice, LatticeCoord};
use rayon::prelude::*;
use tracing::debug;

use crate::params::Target;
use crate::report::PassReport;

/// Step taken along a line of sight, as `(Δi, Δj, Δk)`.
///
/// Moves down from the top face, away from the left face (`j` decreasing)
/// and away from the right face (`k` increasing).
pub const VIEW_DIRECTION: (i32, i32, i32) = (1, -1, 1);

/// Returns the first voxel matching `target` on the line starting at `origin`.
///
/// Walks from `origin` along [`VIEW_DIRECTION`] until a match is found or
/// the line leaves the lattice.
///
/// # Example
///
/// ```
/// use percolation_cull::{first_hit, Target};
/// use percolation_types::{Lattice, LatticeCoord};
///
/// // A single block in the middle of a 3-lattice
/// let lattice = Lattice::from_solids(3, [LatticeCoord::new(1, 1, 1)]).unwrap();
///
/// // The line from the top-left-right corner runs through the centre
/// let hit = first_hit(&lattice, LatticeCoord::new(0, 2, 0), Target::Any);
/// assert_eq!(hit, Some(LatticeCoord::new(1, 1, 1)));
///
/// // A neighboring line passes by
/// assert_eq!(first_hit(&lattice, LatticeCoord::new(0, 1, 0), Target::Any), None);
/// ```
#[must_use]
pub fn first_hit(lattice: &Lattice, origin: LatticeCoord, target: Target) -> Option<LatticeCoord> {
    let (di, dj, dk) = VIEW_DIRECTION;
    let mut coord = origin;

    while let Some(voxel) = lattice.get(coord) {
        if target.matches(voxel) {
            return Some(coord);
        }
        coord = coord.step(di, dj, dk);
    }

    None
}

/// Scans every line of sight and marks the first `target` voxel of each.
///
/// When `parallel` is set, lines are evaluated concurrently and the hits are
/// written afterwards on the calling thread, so both paths mark the same set.
///
/// # Returns
///
/// A [`PassReport`] with one line per visible-shell voxel.
pub fn ray_scan(lattice: &mut Lattice, target: Target, parallel: bool) -> PassReport {
    let origins: Vec<LatticeCoord> = lattice.bounds().visible_shell().collect();

    let hits: Vec<LatticeCoord> = if parallel {
        let view: &Lattice = lattice;
        origins
            .par_iter()
            .filter_map(|&origin| first_hit(view, origin, target))
            .collect()
    } else {
        origins
            .iter()
            .filter_map(|&origin| first_hit(lattice, origin, target))
            .collect()
    };

    let mode = target.mode();
    let mut report = PassReport::new(target, origins.len());
    for coord in hits {
        report.marked += 1;
        if lattice.mark_visible(coord, mode) {
            report.newly_marked += 1;
        }
    }

    debug!(
        %target,
        lines = report.origins,
        marked = report.marked,
        parallel,
        "Ray scan complete"
    );

    report
}
