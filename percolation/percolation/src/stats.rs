//! Summary statistics of a lattice.

use percolation_types::{Lattice, Material, ViewMode, Voxel};

/// Voxel counts of a lattice, by material and visibility.
///
/// # Example
///
/// ```
/// use percolation::LatticeStats;
/// use percolation::types::{Lattice, LatticeCoord};
///
/// let lattice = Lattice::from_solids(3, [LatticeCoord::new(0, 0, 0)]).unwrap();
/// let stats = LatticeStats::collect(&lattice);
/// assert_eq!(stats.total, 27);
/// assert_eq!(stats.solid, 1);
/// assert_eq!(stats.empty, 26);
/// assert!(!stats.percolates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeStats {
    /// Voxels per axis.
    pub size: usize,
    /// Total voxel count.
    pub total: usize,
    /// Solid voxels.
    pub solid: usize,
    /// Fluid voxels.
    pub fluid: usize,
    /// Voxels holding neither material.
    pub empty: usize,
    /// Voxels visible in the combined view.
    pub visible_combined: usize,
    /// Solid voxels visible in the solid-only view.
    pub visible_solid: usize,
    /// Fluid voxels visible in the fluid-only view.
    pub visible_fluid: usize,
    /// Whether fluid reached the bottom layer.
    pub percolates: bool,
}

impl LatticeStats {
    /// Counts the voxels of a lattice in one pass.
    #[must_use]
    pub fn collect(lattice: &Lattice) -> Self {
        let mut stats = Self {
            size: lattice.size(),
            total: lattice.len(),
            percolates: percolation_flow::percolates(lattice),
            ..Self::default()
        };

        for voxel in lattice.voxels() {
            stats.record(*voxel);
        }

        stats
    }

    fn record(&mut self, voxel: Voxel) {
        match voxel.material() {
            Some(Material::Solid) => self.solid += 1,
            Some(Material::Fluid) => self.fluid += 1,
            None => self.empty += 1,
        }
        if voxel.is_visible(ViewMode::Combined) {
            self.visible_combined += 1;
        }
        if voxel.is_visible(ViewMode::Isolated) {
            match voxel.material() {
                Some(Material::Solid) => self.visible_solid += 1,
                Some(Material::Fluid) => self.visible_fluid += 1,
                None => {}
            }
        }
    }

    /// Fraction of voxels that are solid, or `0.0` for an empty lattice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn solid_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solid as f64 / self.total as f64
        }
    }

    /// Fraction of non-solid voxels reached by fluid, or `0.0` if there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_fraction(&self) -> f64 {
        let open = self.fluid + self.empty;
        if open == 0 {
            0.0
        } else {
            self.fluid as f64 / open as f64
        }
    }
}

impl std::fmt::Display for LatticeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lattice: {n}x{n}x{n} ({} voxels)", self.total, n = self.size)?;
        writeln!(f, "  Solid: {} ({:.1}%)", self.solid, self.solid_fraction() * 100.0)?;
        writeln!(f, "  Fluid: {} ({:.1}% of open)", self.fluid, self.fill_fraction() * 100.0)?;
        writeln!(f, "  Empty: {}", self.empty)?;
        writeln!(f, "  Percolates: {}", if self.percolates { "yes" } else { "no" })?;
        write!(
            f,
            "  Visible: {} combined, {} solid, {} fluid",
            self.visible_combined, self.visible_solid, self.visible_fluid
        )
    }
}
