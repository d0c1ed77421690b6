//! Isometric projection of lattice cells onto the unit square.
//!
//! Each cell is drawn as three parallelograms: its top face and the two
//! upright faces turned toward the viewer (`j = n - 1` side on the left,
//! `k = 0` side on the right). Horizontal cube edges are drawn at 30° to
//! the screen x axis and vertical edges stay vertical.
//!
//! # Screen coordinates
//!
//! X grows to the right and Y grows upwards. Moving one cell along an axis
//! shifts the drawing by:
//!
//! | Axis | ΔX | ΔY |
//! |------|----|----|
//! | `i + 1` (down) | `0` | `-e` |
//! | `j + 1` (toward the left face) | `-e·cos 30°` | `-e·sin 30°` |
//! | `k + 1` (away from the right face) | `-e·cos 30°` | `+e·sin 30°` |
//!
//! The edge length `e = 0.45 / n` makes the whole cube span `Y ∈ [0.05, 0.95]`
//! and `X ∈ [0.5 - 0.45·cos 30°, 0.5 + 0.45·cos 30°]` for every `n`.

use nalgebra::{Point2, Vector2};
use percolation_types::{Lattice, LatticeCoord};

/// Blank border kept around the drawing, in unit-square coordinates.
pub const MARGIN: f64 = 0.05;

/// Angle between horizontal cube edges and the screen x axis.
pub const ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Which of the three drawn faces of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceKind {
    /// The face pointing up (`i` side).
    Top,
    /// The upright face on the left (`j + 1` side).
    Left,
    /// The upright face on the right (`k` side).
    Right,
}

impl FaceKind {
    /// All faces, in the order they are drawn.
    pub const ALL: [Self; 3] = [Self::Right, Self::Left, Self::Top];
}

/// Screen-space outline of one cell.
///
/// Every face is a quadrilateral given counter-clockwise or clockwise as
/// four consecutive corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeFaces {
    /// Corners of the top face.
    pub top: [Point2<f64>; 4],
    /// Corners of the left upright face.
    pub left: [Point2<f64>; 4],
    /// Corners of the right upright face.
    pub right: [Point2<f64>; 4],
}

impl CubeFaces {
    /// Returns the corners of one face.
    #[must_use]
    pub const fn face(&self, kind: FaceKind) -> &[Point2<f64>; 4] {
        match kind {
            FaceKind::Top => &self.top,
            FaceKind::Left => &self.left,
            FaceKind::Right => &self.right,
        }
    }

    /// Returns every face with its kind, in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceKind, &[Point2<f64>; 4])> {
        FaceKind::ALL.into_iter().map(move |kind| (kind, self.face(kind)))
    }

    /// Returns the outline shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        let shift = |quad: [Point2<f64>; 4]| quad.map(|p| p + offset);
        Self {
            top: shift(self.top),
            left: shift(self.left),
            right: shift(self.right),
        }
    }
}

/// Isometric projection for a lattice of a given size.
///
/// # Example
///
/// ```
/// use percolation_iso::IsoProjection;
/// use percolation_types::LatticeCoord;
///
/// let projection = IsoProjection::new(10);
/// assert!((projection.edge() - 0.045).abs() < 1e-12);
///
/// // The front corner cell touches the bottom margin
/// let faces = projection.faces(LatticeCoord::new(9, 9, 0));
/// assert!((faces.left[0].y - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    size: f64,
    edge: f64,
    run: f64,
    rise: f64,
}

impl IsoProjection {
    /// Creates the projection for a lattice of `size³` cells.
    ///
    /// A size of zero is projected like a size of one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(size: usize) -> Self {
        let size = size.max(1) as f64;
        let edge = (0.5 - MARGIN) / size;
        Self {
            size,
            edge,
            run: edge * ANGLE.cos(),
            rise: edge * ANGLE.sin(),
        }
    }

    /// Creates the projection matching a lattice.
    #[must_use]
    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self::new(lattice.size())
    }

    /// Returns the drawn length of a cube edge.
    #[must_use]
    pub const fn edge(&self) -> f64 {
        self.edge
    }

    /// Returns the screen offset of one cell step along the `j` axis.
    #[must_use]
    pub fn step_j(&self) -> Vector2<f64> {
        Vector2::new(-self.run, -self.rise)
    }

    /// Returns the screen offset of one cell step along the `k` axis.
    #[must_use]
    pub fn step_k(&self) -> Vector2<f64> {
        Vector2::new(-self.run, self.rise)
    }

    /// Returns the screen offset of one cell step along the `i` axis.
    #[must_use]
    pub fn step_i(&self) -> Vector2<f64> {
        Vector2::new(0.0, -self.edge)
    }

    /// Returns the lowest corner of the cell's front vertical edge.
    ///
    /// The coordinate does not need to lie inside the lattice.
    #[must_use]
    pub fn anchor(&self, coord: LatticeCoord) -> Point2<f64> {
        let last = self.size - 1.0;
        let i = f64::from(coord.i);
        let j = f64::from(coord.j);
        let k = f64::from(coord.k);

        Point2::new(
            0.5 + self.run * (last - j - k),
            MARGIN + self.rise * (last - j + k) + self.edge * (last - i),
        )
    }

    /// Returns the outline of the cell at `coord`.
    ///
    /// Neighboring cells share edges exactly: the drawing of a lattice has no
    /// gaps and no overlaps between visible faces.
    #[must_use]
    pub fn faces(&self, coord: LatticeCoord) -> CubeFaces {
        let b = self.anchor(coord);
        let up = Vector2::new(0.0, self.edge);
        let right = Vector2::new(self.run, self.rise);
        let left = Vector2::new(-self.run, self.rise);

        CubeFaces {
            top: [b + up, b + up + right, b + up + right + left, b + up + left],
            left: [b, b + up, b + up + left, b + left],
            right: [b, b + up, b + up + right, b + right],
        }
    }
}

/// Projects a single cell of a lattice of `size³` cells.
///
/// Shorthand for [`IsoProjection::new`] followed by [`IsoProjection::faces`].
#[must_use]
pub fn project(coord: LatticeCoord, size: usize) -> CubeFaces {
    IsoProjection::new(size).faces(coord)
}
