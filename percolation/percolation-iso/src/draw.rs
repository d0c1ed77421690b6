//! Painter-ordered draw plans.
//!
//! A lattice is shown as three panels side by side, each one unit wide:
//! every occupied voxel, solids only, fluid only. A [`DrawPlan`] lists the
//! cells to draw for every panel in back-to-front order, so a renderer can
//! fill the polygons in sequence and let nearer cells paint over farther ones.

use nalgebra::Vector2;
use percolation_types::{Lattice, LatticeCoord, Material, ViewMode, Voxel};
use tracing::debug;

use crate::projection::{CubeFaces, FaceKind, IsoProjection};

/// An RGB color.
pub type Rgb = [u8; 3];

/// Background color behind the panels.
pub const BACKGROUND: Rgb = [150, 35, 31];

/// Returns the fill color of one face of a cell of `material`.
///
/// # Example
///
/// ```
/// use percolation_iso::{face_color, FaceKind};
/// use percolation_types::Material;
///
/// assert_eq!(face_color(Material::Solid, FaceKind::Right), [0, 0, 0]);
/// assert_ne!(
///     face_color(Material::Fluid, FaceKind::Right),
///     face_color(Material::Fluid, FaceKind::Top)
/// );
/// ```
#[must_use]
pub const fn face_color(material: Material, face: FaceKind) -> Rgb {
    match (material, face) {
        (Material::Solid, FaceKind::Right) => [0, 0, 0],
        (Material::Solid, FaceKind::Left) => [128, 128, 128],
        (Material::Solid, FaceKind::Top) => [64, 64, 64],
        (Material::Fluid, FaceKind::Right) => [9, 90, 166],
        (Material::Fluid, FaceKind::Left | FaceKind::Top) => [103, 198, 243],
    }
}

/// One of the three side-by-side views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Panel {
    /// Solid and fluid together.
    Combined,
    /// Solid voxels only.
    Solid,
    /// Fluid voxels only.
    Fluid,
}

impl Panel {
    /// All panels, left to right.
    pub const ALL: [Self; 3] = [Self::Combined, Self::Solid, Self::Fluid];

    /// Horizontal offset of the panel, in unit-square widths.
    #[must_use]
    pub const fn x_offset(self) -> f64 {
        match self {
            Self::Combined => 0.0,
            Self::Solid => 1.0,
            Self::Fluid => 2.0,
        }
    }

    /// Returns `true` if `voxel` is drawn in this panel.
    ///
    /// With `culled` set, a voxel must also carry the visibility flag of the
    /// panel's view.
    #[must_use]
    pub const fn shows(self, voxel: Voxel, culled: bool) -> bool {
        let (holds, mode) = match self {
            Self::Combined => (voxel.is_occupied(), ViewMode::Combined),
            Self::Solid => (voxel.is_solid(), ViewMode::Isolated),
            Self::Fluid => (voxel.is_fluid(), ViewMode::Isolated),
        };
        holds && (!culled || voxel.is_visible(mode))
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combined => write!(f, "combined"),
            Self::Solid => write!(f, "solid"),
            Self::Fluid => write!(f, "fluid"),
        }
    }
}

/// A single cell to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCommand {
    /// Lattice coordinate of the cell.
    pub coord: LatticeCoord,
    /// Material of the cell.
    pub material: Material,
    /// Panel the cell belongs to.
    pub panel: Panel,
    /// Screen outline, already shifted into the panel.
    pub faces: CubeFaces,
}

impl DrawCommand {
    /// Returns the fill color of one face of this cell.
    #[must_use]
    pub const fn color(&self, face: FaceKind) -> Rgb {
        face_color(self.material, face)
    }
}

/// Cells to draw, grouped by panel and back-to-front within each panel.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawPlan {
    commands: Vec<DrawCommand>,
}

impl DrawPlan {
    /// Total width of the drawing, in unit-square widths.
    pub const WIDTH: f64 = 3.0;

    /// Returns every command in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the commands of one panel, in drawing order.
    pub fn panel(&self, panel: Panel) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.panel == panel)
    }

    /// Returns the number of cells drawn in one panel.
    #[must_use]
    pub fn count(&self, panel: Panel) -> usize {
        self.panel(panel).count()
    }
}

/// Returns lattice coordinates from the farthest cell to the nearest.
///
/// Layers go bottom to top (`i` descending), then `j` ascending toward the
/// left face, then `k` descending toward the right face.
///
/// # Example
///
/// ```
/// use percolation_iso::painter_order;
/// use percolation_types::LatticeCoord;
///
/// let order: Vec<_> = painter_order(2).collect();
/// assert_eq!(order.len(), 8);
/// assert_eq!(order[0], LatticeCoord::new(1, 0, 1));
/// assert_eq!(order[7], LatticeCoord::new(0, 1, 0));
/// ```
pub fn painter_order(size: usize) -> impl Iterator<Item = LatticeCoord> {
    let n = i32::try_from(size).unwrap_or(i32::MAX);
    (0..n).rev().flat_map(move |i| {
        (0..n).flat_map(move |j| (0..n).rev().map(move |k| LatticeCoord::new(i, j, k)))
    })
}

/// Builds the draw plan of a lattice.
///
/// Each panel lists, in [`painter_order`], the voxels it shows. With
/// `culled` set only voxels flagged visible for the panel's view are kept;
/// otherwise every voxel holding the panel's material is drawn.
///
/// # Example
///
/// ```
/// use percolation_iso::{draw_plan, Panel};
/// use percolation_types::{Lattice, LatticeCoord};
///
/// let lattice = Lattice::from_solids(3, [LatticeCoord::new(1, 1, 1)]).unwrap();
/// let plan = draw_plan(&lattice, false);
///
/// assert_eq!(plan.count(Panel::Combined), 1);
/// assert_eq!(plan.count(Panel::Solid), 1);
/// assert_eq!(plan.count(Panel::Fluid), 0);
/// ```
#[must_use]
pub fn draw_plan(lattice: &Lattice, culled: bool) -> DrawPlan {
    let projection = IsoProjection::for_lattice(lattice);
    let mut commands = Vec::new();

    for panel in Panel::ALL {
        let offset = Vector2::new(panel.x_offset(), 0.0);
        for coord in painter_order(lattice.size()) {
            let Some(voxel) = lattice.get(coord) else {
                continue;
            };
            let Some(material) = voxel.material() else {
                continue;
            };
            if !panel.shows(voxel, culled) {
                continue;
            }
            commands.push(DrawCommand {
                coord,
                material,
                panel,
                faces: projection.faces(coord).translated(offset),
            });
        }
    }

    let plan = DrawPlan { commands };
    debug!(
        culled,
        combined = plan.count(Panel::Combined),
        solid = plan.count(Panel::Solid),
        fluid = plan.count(Panel::Fluid),
        "Built draw plan"
    );
    plan
}
