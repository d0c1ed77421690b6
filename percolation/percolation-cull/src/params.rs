//! Culling targets, strategies and parameters.

use percolation_types::{Material, ViewMode, Voxel};

/// Which voxels a culling pass is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// Any occupied voxel, solid or fluid. Marks the combined view.
    Any,
    /// Voxels of one material only. Marks the isolated view.
    Only(Material),
}

impl Target {
    /// The three passes run by [`cull`](crate::cull), in order.
    pub const PASSES: [Self; 3] = [
        Self::Any,
        Self::Only(Material::Solid),
        Self::Only(Material::Fluid),
    ];

    /// Returns the view whose flag this target sets.
    #[must_use]
    pub const fn mode(self) -> ViewMode {
        match self {
            Self::Any => ViewMode::Combined,
            Self::Only(_) => ViewMode::Isolated,
        }
    }

    /// Returns `true` if `voxel` stops a line of sight for this target.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_cull::Target;
    /// use percolation_types::{Material, Voxel};
    ///
    /// assert!(Target::Any.matches(Voxel::solid()));
    /// assert!(!Target::Any.matches(Voxel::empty()));
    /// assert!(!Target::Only(Material::Fluid).matches(Voxel::solid()));
    /// ```
    #[must_use]
    pub const fn matches(self, voxel: Voxel) -> bool {
        match self {
            Self::Any => voxel.is_occupied(),
            Self::Only(material) => voxel.holds(material),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "combined"),
            Self::Only(Material::Solid) => write!(f, "solid"),
            Self::Only(Material::Fluid) => write!(f, "fluid"),
        }
    }
}

/// Algorithm used to find visible voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CullStrategy {
    /// Walk one diagonal line of sight per visible-face voxel.
    /// Marks at most one voxel per line.
    #[default]
    RayScan,

    /// Flood through non-target voxels from the visible faces.
    /// Marks every target voxel reachable that way.
    RegionFlood,

    /// Set no visibility flags.
    Disabled,
}

impl std::fmt::Display for CullStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RayScan => write!(f, "ray-scan"),
            Self::RegionFlood => write!(f, "region-flood"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Configuration for visibility culling.
///
/// # Examples
///
/// ```
/// use percolation_cull::{CullParams, CullStrategy};
///
/// let params = CullParams::default();
/// assert_eq!(params.strategy, CullStrategy::RayScan);
/// assert!(!params.parallel);
///
/// let params = CullParams::region_flood();
/// assert_eq!(params.strategy, CullStrategy::RegionFlood);
///
/// let params = CullParams::default().with_parallel(true);
/// assert!(params.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CullParams {
    /// Algorithm used to find visible voxels.
    pub strategy: CullStrategy,

    /// Whether ray-scan lines are evaluated in parallel (via rayon).
    ///
    /// Flags are still written from one thread, so the result does not
    /// depend on this setting. Ignored by the other strategies.
    pub parallel: bool,
}

impl CullParams {
    /// Parameters for the region-flood strategy.
    #[must_use]
    pub const fn region_flood() -> Self {
        Self {
            strategy: CullStrategy::RegionFlood,
            parallel: false,
        }
    }

    /// Parameters that disable culling.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            strategy: CullStrategy::Disabled,
            parallel: false,
        }
    }

    /// Sets the culling strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: CullStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets whether ray-scan lines are evaluated in parallel.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_modes() {
        assert_eq!(Target::Any.mode(), ViewMode::Combined);
        assert_eq!(Target::Only(Material::Solid).mode(), ViewMode::Isolated);
        assert_eq!(Target::Only(Material::Fluid).mode(), ViewMode::Isolated);
    }

    #[test]
    fn test_target_matches_fluid() {
        let mut fluid = Voxel::empty();
        assert!(fluid.mark_fluid());

        assert!(Target::Any.matches(fluid));
        assert!(Target::Only(Material::Fluid).matches(fluid));
        assert!(!Target::Only(Material::Solid).matches(fluid));
        assert!(!Target::Only(Material::Fluid).matches(Voxel::empty()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CullStrategy::RayScan.to_string(), "ray-scan");
        assert_eq!(CullStrategy::RegionFlood.to_string(), "region-flood");
        assert_eq!(Target::Only(Material::Solid).to_string(), "solid");
        assert_eq!(Target::Any.to_string(), "combined");
    }

    #[test]
    fn test_builders() {
        let params = CullParams::disabled().with_strategy(CullStrategy::RayScan);
        assert_eq!(params.strategy, CullStrategy::RayScan);
        assert!(CullParams::region_flood().with_parallel(true).parallel);
    }
}
