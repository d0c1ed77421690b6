//! Cubic bounds in lattice space and the faces of the cube.

use crate::coord::LatticeCoord;

/// One face of the lattice cube.
///
/// The naming follows the isometric view: the viewer looks down on
/// [`Face::Top`], and sees [`Face::Left`] and [`Face::Right`] as the two
/// upright faces. [`Face::Bottom`] is the face opposite the fluid entry face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// The `i = 0` layer. Fluid enters here.
    Top,
    /// The `i = n - 1` layer.
    Bottom,
    /// The `j = n - 1` slab.
    Left,
    /// The `k = 0` slab.
    Right,
}

impl Face {
    /// The three faces visible in the isometric projection.
    pub const VISIBLE: [Self; 3] = [Self::Top, Self::Left, Self::Right];

    /// Returns `true` if `coord` lies on this face of a cube of `size`.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::{Face, LatticeCoord};
    ///
    /// assert!(Face::Top.contains(LatticeCoord::new(0, 2, 3), 4));
    /// assert!(Face::Left.contains(LatticeCoord::new(1, 3, 1), 4));
    /// assert!(!Face::Right.contains(LatticeCoord::new(1, 1, 1), 4));
    /// ```
    #[must_use]
    pub const fn contains(self, coord: LatticeCoord, size: i32) -> bool {
        match self {
            Self::Top => coord.i == 0,
            Self::Bottom => coord.i == size - 1,
            Self::Left => coord.j == size - 1,
            Self::Right => coord.k == 0,
        }
    }
}

/// Half-open cubic bounds `[0, size)` on every axis.
///
/// # Example
///
/// ```
/// use percolation_types::{LatticeBounds, LatticeCoord};
///
/// let bounds = LatticeBounds::new(10);
/// assert!(bounds.contains(LatticeCoord::new(5, 5, 5)));
/// assert!(!bounds.contains(LatticeCoord::new(10, 5, 5)));
/// assert!(!bounds.contains(LatticeCoord::new(-1, 5, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LatticeBounds {
    size: i32,
}

impl LatticeBounds {
    /// Creates bounds for a cube of `size` voxels per axis.
    ///
    /// Negative sizes are treated as zero.
    #[must_use]
    pub const fn new(size: i32) -> Self {
        Self {
            size: if size < 0 { 0 } else { size },
        }
    }

    /// Returns the number of voxels per axis.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Returns `true` if the bounds contain no voxels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the total number of voxels in the cube.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeBounds;
    ///
    /// assert_eq!(LatticeBounds::new(10).volume(), 1000);
    /// assert_eq!(LatticeBounds::new(0).volume(), 0);
    /// ```
    #[must_use]
    pub const fn volume(&self) -> u64 {
        let n = self.size.unsigned_abs() as u64;
        n.saturating_mul(n).saturating_mul(n)
    }

    /// Checks if the bounds contain a coordinate.
    #[must_use]
    pub const fn contains(&self, coord: LatticeCoord) -> bool {
        coord.i >= 0
            && coord.i < self.size
            && coord.j >= 0
            && coord.j < self.size
            && coord.k >= 0
            && coord.k < self.size
    }

    /// Returns an iterator over all coordinates in row-major `(i, j, k)` order
    /// (`k` varies fastest).
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::{LatticeBounds, LatticeCoord};
    ///
    /// let coords: Vec<_> = LatticeBounds::new(2).iter().collect();
    /// assert_eq!(coords.len(), 8);
    /// assert_eq!(coords[1], LatticeCoord::new(0, 0, 1));
    /// ```
    #[must_use]
    pub const fn iter(&self) -> LatticeBoundsIter {
        LatticeBoundsIter {
            size: self.size,
            current: if self.size > 0 {
                Some(LatticeCoord::origin())
            } else {
                None
            },
        }
    }

    /// Returns an iterator over the `size²` coordinates of one face.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::{Face, LatticeBounds};
    ///
    /// let bounds = LatticeBounds::new(3);
    /// let top: Vec<_> = bounds.face(Face::Top).collect();
    /// assert_eq!(top.len(), 9);
    /// assert!(top.iter().all(|c| c.i == 0));
    /// ```
    pub fn face(&self, face: Face) -> impl Iterator<Item = LatticeCoord> + use<> {
        let n = self.size;
        let last = n - 1;
        (0..n).flat_map(move |a| {
            (0..n).map(move |b| match face {
                Face::Top => LatticeCoord::new(0, a, b),
                Face::Bottom => LatticeCoord::new(last, a, b),
                Face::Left => LatticeCoord::new(a, last, b),
                Face::Right => LatticeCoord::new(a, b, 0),
            })
        })
    }

    /// Returns `true` if `coord` lies on any of the three visible faces.
    #[must_use]
    pub const fn on_visible_shell(&self, coord: LatticeCoord) -> bool {
        self.contains(coord)
            && (Face::Top.contains(coord, self.size)
                || Face::Left.contains(coord, self.size)
                || Face::Right.contains(coord, self.size))
    }

    /// Returns an iterator over every coordinate on the three visible faces,
    /// each coordinate yielded exactly once.
    ///
    /// Voxels on an edge shared by two visible faces are not repeated, so a
    /// cube of size `n` yields `n³ - (n - 1)³` coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeBounds;
    ///
    /// assert_eq!(LatticeBounds::new(3).visible_shell().count(), 27 - 8);
    /// assert_eq!(LatticeBounds::new(1).visible_shell().count(), 1);
    /// assert_eq!(LatticeBounds::new(0).visible_shell().count(), 0);
    /// ```
    pub fn visible_shell(&self) -> impl Iterator<Item = LatticeCoord> + use<> {
        let bounds = *self;
        let last = self.size - 1;
        // Top layer in full, then the left slab below it, then the right slab
        // minus the column already covered by the left slab.
        let top = bounds.face(Face::Top);
        let left = (1..bounds.size).flat_map(move |i| {
            (0..bounds.size).map(move |k| LatticeCoord::new(i, last, k))
        });
        let right = (1..bounds.size)
            .flat_map(move |i| (0..last.max(0)).map(move |j| LatticeCoord::new(i, j, 0)));
        top.chain(left).chain(right)
    }
}

impl IntoIterator for LatticeBounds {
    type Item = LatticeCoord;
    type IntoIter = LatticeBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &LatticeBounds {
    type Item = LatticeCoord;
    type IntoIter = LatticeBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all coordinates in a [`LatticeBounds`].
#[derive(Debug, Clone)]
pub struct LatticeBoundsIter {
    size: i32,
    current: Option<LatticeCoord>,
}

impl Iterator for LatticeBoundsIter {
    type Item = LatticeCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        let mut next = current;
        next.k += 1;
        if next.k >= self.size {
            next.k = 0;
            next.j += 1;
            if next.j >= self.size {
                next.j = 0;
                next.i += 1;
                if next.i >= self.size {
                    self.current = None;
                    return Some(current);
                }
            }
        }
        self.current = Some(next);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.map_or(0, |c| {
            let n = u64::from(self.size.unsigned_abs());
            let linear = u64::from(c.i.unsigned_abs()) * n * n
                + u64::from(c.j.unsigned_abs()) * n
                + u64::from(c.k.unsigned_abs());
            (n * n * n).saturating_sub(linear)
        });
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LatticeBoundsIter {}
