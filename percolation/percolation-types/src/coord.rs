//! Lattice coordinate types.

/// A discrete coordinate `(i, j, k)` in lattice space.
///
/// `i` is the vertical axis with `i = 0` the top layer; `j` and `k` are the
/// two horizontal axes. Components are signed so that neighbors of boundary
/// voxels can be formed and then rejected by a bounds check.
///
/// # Example
///
/// ```
/// use percolation_types::LatticeCoord;
///
/// let coord = LatticeCoord::new(1, 2, 3);
/// assert_eq!(coord.i, 1);
/// assert_eq!(coord.j, 2);
/// assert_eq!(coord.k, 3);
///
/// // Neighbors of a boundary voxel may fall outside the lattice
/// let above = LatticeCoord::new(0, 0, 0).step(-1, 0, 0);
/// assert_eq!(above.i, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeCoord {
    /// Vertical index (`0` is the top layer).
    pub i: i32,
    /// First horizontal index.
    pub j: i32,
    /// Second horizontal index.
    pub k: i32,
}

impl LatticeCoord {
    /// Creates a new lattice coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeCoord;
    ///
    /// let coord = LatticeCoord::new(10, 20, 30);
    /// assert_eq!(coord.j, 20);
    /// ```
    #[must_use]
    pub const fn new(i: i32, j: i32, k: i32) -> Self {
        Self { i, j, k }
    }

    /// Creates the coordinate `(0, 0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as an `[i, j, k]` array.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeCoord;
    ///
    /// assert_eq!(LatticeCoord::new(1, 2, 3).as_array(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.i, self.j, self.k]
    }

    /// Returns this coordinate moved by `(di, dj, dk)`.
    ///
    /// Uses wrapping arithmetic; out-of-range results are rejected by the
    /// lattice bounds check rather than here.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeCoord;
    ///
    /// let next = LatticeCoord::new(0, 4, 0).step(1, -1, 1);
    /// assert_eq!(next, LatticeCoord::new(1, 3, 1));
    /// ```
    #[must_use]
    pub const fn step(self, di: i32, dj: i32, dk: i32) -> Self {
        Self::new(
            self.i.wrapping_add(di),
            self.j.wrapping_add(dj),
            self.k.wrapping_add(dk),
        )
    }

    /// Returns the 6 face-adjacent neighbors (von Neumann neighborhood).
    ///
    /// The first entry is the voxel above (`i - 1`), the second the voxel
    /// below (`i + 1`); the remaining four are the horizontal neighbors.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeCoord;
    ///
    /// let neighbors = LatticeCoord::new(5, 5, 5).face_neighbors();
    /// assert_eq!(neighbors.len(), 6);
    /// assert_eq!(neighbors[0], LatticeCoord::new(4, 5, 5));
    /// assert!(neighbors.contains(&LatticeCoord::new(5, 5, 6)));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 6] {
        [
            self.step(-1, 0, 0),
            self.step(1, 0, 0),
            self.step(0, -1, 0),
            self.step(0, 1, 0),
            self.step(0, 0, -1),
            self.step(0, 0, 1),
        ]
    }

    /// Computes the Manhattan distance to another coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::LatticeCoord;
    ///
    /// let a = LatticeCoord::new(0, 0, 0);
    /// let b = LatticeCoord::new(3, 4, 5);
    /// assert_eq!(a.manhattan_distance(b), 12);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let di = self.i.abs_diff(other.i);
        let dj = self.j.abs_diff(other.j);
        let dk = self.k.abs_diff(other.k);
        di.saturating_add(dj).saturating_add(dk)
    }
}

impl From<(i32, i32, i32)> for LatticeCoord {
    fn from((i, j, k): (i32, i32, i32)) -> Self {
        Self::new(i, j, k)
    }
}

impl From<[i32; 3]> for LatticeCoord {
    fn from([i, j, k]: [i32; 3]) -> Self {
        Self::new(i, j, k)
    }
}

impl From<LatticeCoord> for [i32; 3] {
    fn from(coord: LatticeCoord) -> Self {
        coord.as_array()
    }
}

impl std::ops::Add for LatticeCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.step(other.i, other.j, other.k)
    }
}

impl std::ops::Sub for LatticeCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.i.wrapping_sub(other.i),
            self.j.wrapping_sub(other.j),
            self.k.wrapping_sub(other.k),
        )
    }
}

impl std::fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}
