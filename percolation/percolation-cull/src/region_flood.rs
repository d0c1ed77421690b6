//! Visibility by flooding through transparent voxels.
//!
//! Voxels that do not match the target are treated as transparent. Starting
//! from every voxel of the visible shell, a 6-connected flood moves through
//! transparent voxels; each target voxel it touches is marked visible and
//! blocks further progress.
//!
//! The flood finds every target voxel with an open face-connected path to
//! the outside, which is a superset of what a viewer can actually see from a
//! single direction. It is kept as an alternative to the ray scan.

use percolation_types::{Lattice, LatticeCoord};
use tracing::debug;

use crate::params::Target;
use crate::report::PassReport;

/// Per-pass record of which voxels the flood has already processed.
///
/// Lives only for the duration of one pass, so nothing about a previous
/// pass leaks into the voxel attributes.
#[derive(Debug)]
struct VisitMarks {
    seen: Vec<bool>,
}

impl VisitMarks {
    fn new(len: usize) -> Self {
        Self {
            seen: vec![false; len],
        }
    }

    /// Records a visit. Returns `false` if `index` was already visited.
    fn visit(&mut self, index: usize) -> bool {
        !std::mem::replace(&mut self.seen[index], true)
    }
}

/// Floods from the visible shell and marks every `target` voxel reached.
///
/// # Returns
///
/// A [`PassReport`] whose `origins` is the number of shell voxels used as
/// seeds.
///
/// # Example
///
/// ```
/// use percolation_cull::{region_flood, Target};
/// use percolation_types::{Lattice, LatticeCoord};
///
/// // A solid 3x3x3 block in a 5-lattice: only its visible outer faces are
/// // touched, the centre stays hidden.
/// let mut lattice = Lattice::from_fn(5, |c| {
///     (1..=3).contains(&c.i) && (1..=3).contains(&c.j) && (1..=3).contains(&c.k)
/// })
/// .unwrap();
///
/// let report = region_flood(&mut lattice, Target::Any);
/// assert_eq!(report.marked, 27 - 1);
/// assert!(!lattice.is_visible_combined(LatticeCoord::new(2, 2, 2)));
/// ```
pub fn region_flood(lattice: &mut Lattice, target: Target) -> PassReport {
    let mut pending: Vec<LatticeCoord> = lattice.bounds().visible_shell().collect();
    let mut report = PassReport::new(target, pending.len());

    let mode = target.mode();
    let mut marks = VisitMarks::new(lattice.len());
    let mut visits = 0usize;

    while let Some(coord) = pending.pop() {
        let Some(index) = lattice.index(coord) else {
            continue;
        };
        if !marks.visit(index) {
            continue;
        }
        visits += 1;

        let voxel = lattice.voxels()[index];
        if target.matches(voxel) {
            report.marked += 1;
            if lattice.mark_visible(coord, mode) {
                report.newly_marked += 1;
            }
            continue;
        }

        pending.extend_from_slice(&coord.face_neighbors());
    }

    debug!(
        %target,
        seeds = report.origins,
        visits,
        marked = report.marked,
        "Region flood complete"
    );

    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use percolation_types::{Material, ViewMode};

    #[test]
    fn test_visit_marks() {
        let mut marks = VisitMarks::new(3);
        assert!(marks.visit(1));
        assert!(!marks.visit(1));
        assert!(marks.visit(0));
    }

    #[test]
    fn test_zero_size() {
        let mut lattice = Lattice::empty(0).unwrap();
        let report = region_flood(&mut lattice, Target::Any);
        assert_eq!(report.origins, 0);
        assert_eq!(report.marked, 0);
    }

    #[test]
    fn test_full_lattice_marks_exactly_the_shell() {
        let mut lattice = Lattice::from_fn(4, |_| true).unwrap();
        let report = region_flood(&mut lattice, Target::Any);
        assert_eq!(report.marked, 64 - 27);

        let bounds = lattice.bounds();
        for (coord, voxel) in lattice.iter() {
            assert_eq!(
                voxel.is_visible(ViewMode::Combined),
                bounds.on_visible_shell(coord)
            );
        }
    }

    #[test]
    fn test_reaches_around_corners() {
        // A block off the visible shell, reached through the empty voxels
        // around it: the bottom-back corner of a 3-lattice.
        let corner = LatticeCoord::new(2, 0, 2);
        let mut lattice = Lattice::from_solids(3, [corner]).unwrap();
        let report = region_flood(&mut lattice, Target::Only(Material::Solid));
        assert_eq!(report.marked, 1);
        assert!(lattice.is_visible_isolated(corner));
    }

    #[test]
    fn test_other_material_is_transparent() {
        // Fluid everywhere except a solid core; the solid pass sees through it
        let core = LatticeCoord::new(1, 1, 1);
        let mut lattice = Lattice::from_solids(3, [core]).unwrap();
        for coord in lattice.bounds().iter() {
            lattice.mark_fluid(coord);
        }

        let solid = region_flood(&mut lattice, Target::Only(Material::Solid));
        assert_eq!(solid.marked, 1);
        assert!(lattice.is_visible_isolated(core));

        let combined = region_flood(&mut lattice, Target::Any);
        assert_eq!(combined.marked, 27 - 8);
        assert!(!lattice.is_visible_combined(core));
    }
}
