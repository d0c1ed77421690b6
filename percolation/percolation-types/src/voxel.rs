//! Per-voxel state: material and visibility attributes.

bitflags::bitflags! {
    /// Independent boolean attributes carried by a voxel.
    ///
    /// `SOLID` and `FLUID` are mutually exclusive; the [`Voxel`] API enforces
    /// this. All other combinations are allowed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct VoxelFlags: u8 {
        /// Occupied by a block. Set at generation only.
        const SOLID = 0b0000_0001;
        /// Filled by the propagation engine.
        const FLUID = 0b0000_0010;
        /// Visible when both materials are drawn together.
        const VISIBLE_COMBINED = 0b0000_0100;
        /// Visible when only this voxel's material is drawn.
        const VISIBLE_ISOLATED = 0b0000_1000;
    }
}

/// The two materials a voxel can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// A permanent block.
    Solid,
    /// Fluid that flowed in from the entry face.
    Fluid,
}

impl Material {
    /// Both materials, solid first.
    pub const ALL: [Self; 2] = [Self::Solid, Self::Fluid];

    /// Returns the flag that marks a voxel as holding this material.
    #[must_use]
    pub const fn flag(self) -> VoxelFlags {
        match self {
            Self::Solid => VoxelFlags::SOLID,
            Self::Fluid => VoxelFlags::FLUID,
        }
    }
}

/// Which materials are rendered together when deciding visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// Solids and fluid are drawn together; either one hides what is behind it.
    Combined,
    /// One material is drawn alone against empty space.
    Isolated,
}

impl ViewMode {
    /// Returns the visibility flag scoped to this mode.
    #[must_use]
    pub const fn flag(self) -> VoxelFlags {
        match self {
            Self::Combined => VoxelFlags::VISIBLE_COMBINED,
            Self::Isolated => VoxelFlags::VISIBLE_ISOLATED,
        }
    }
}

/// A single lattice cell.
///
/// Attributes are monotonic: the only mutators set flags, none clear them.
///
/// # Example
///
/// ```
/// use percolation_types::{Voxel, ViewMode, Material};
///
/// let mut voxel = Voxel::empty();
/// assert!(voxel.is_empty());
///
/// assert!(voxel.mark_fluid());
/// assert!(!voxel.mark_fluid()); // already filled
/// assert_eq!(voxel.material(), Some(Material::Fluid));
///
/// let mut block = Voxel::solid();
/// assert!(!block.mark_fluid()); // solids never take fluid
/// assert!(block.mark_visible(ViewMode::Combined));
/// assert!(block.is_visible(ViewMode::Combined));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Voxel {
    flags: VoxelFlags,
}

impl Voxel {
    /// Creates a voxel with no attributes.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            flags: VoxelFlags::empty(),
        }
    }

    /// Creates a solid voxel.
    #[must_use]
    pub const fn solid() -> Self {
        Self {
            flags: VoxelFlags::SOLID,
        }
    }

    /// Returns the raw attribute set.
    #[must_use]
    pub const fn flags(&self) -> VoxelFlags {
        self.flags
    }

    /// Returns `true` if the voxel holds a block.
    #[must_use]
    pub const fn is_solid(&self) -> bool {
        self.flags.contains(VoxelFlags::SOLID)
    }

    /// Returns `true` if the voxel has been filled with fluid.
    #[must_use]
    pub const fn is_fluid(&self) -> bool {
        self.flags.contains(VoxelFlags::FLUID)
    }

    /// Returns `true` if the voxel holds neither material.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.flags.intersects(VoxelFlags::SOLID.union(VoxelFlags::FLUID))
    }

    /// Returns `true` if the voxel holds either material.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the material held by the voxel, if any.
    #[must_use]
    pub const fn material(&self) -> Option<Material> {
        if self.is_solid() {
            Some(Material::Solid)
        } else if self.is_fluid() {
            Some(Material::Fluid)
        } else {
            None
        }
    }

    /// Returns `true` if the voxel holds `material`.
    #[must_use]
    pub const fn holds(&self, material: Material) -> bool {
        self.flags.contains(material.flag())
    }

    /// Returns `true` if the voxel is visible in `mode`.
    #[must_use]
    pub const fn is_visible(&self, mode: ViewMode) -> bool {
        self.flags.contains(mode.flag())
    }

    /// Fills the voxel with fluid.
    ///
    /// Returns `true` if the voxel changed. Solid and already-filled voxels
    /// are left untouched.
    pub fn mark_fluid(&mut self) -> bool {
        if self.flags.intersects(VoxelFlags::SOLID | VoxelFlags::FLUID) {
            return false;
        }
        self.flags.insert(VoxelFlags::FLUID);
        true
    }

    /// Marks the voxel visible in `mode`.
    ///
    /// Returns `true` if the flag was not already set.
    pub fn mark_visible(&mut self, mode: ViewMode) -> bool {
        let flag = mode.flag();
        if self.flags.contains(flag) {
            return false;
        }
        self.flags.insert(flag);
        true
    }
}
