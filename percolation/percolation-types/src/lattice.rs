//! Dense cubic voxel lattice.

use crate::bounds::LatticeBounds;
use crate::coord::LatticeCoord;
use crate::error::{LatticeError, LatticeResult};
use crate::voxel::{Material, ViewMode, Voxel};

/// Validates a lattice size and returns the number of voxels it holds.
///
/// # Errors
///
/// Returns [`LatticeError::SizeOverflow`] if `size` does not fit the `i32`
/// coordinate range or `size³` overflows `usize`.
///
/// # Example
///
/// ```
/// use percolation_types::check_size;
///
/// assert_eq!(check_size(10).unwrap(), 1000);
/// assert_eq!(check_size(0).unwrap(), 0);
/// assert!(check_size(usize::MAX).is_err());
/// ```
pub fn check_size(size: usize) -> LatticeResult<usize> {
    if i32::try_from(size).is_err() {
        return Err(LatticeError::SizeOverflow { size });
    }
    size.checked_mul(size)
        .and_then(|sq| sq.checked_mul(size))
        .ok_or(LatticeError::SizeOverflow { size })
}

/// Validates a signed lattice size.
///
/// # Errors
///
/// Returns [`LatticeError::NegativeSize`] for negative input and
/// [`LatticeError::SizeOverflow`] for sizes that [`check_size`] rejects.
///
/// # Example
///
/// ```
/// use percolation_types::{check_signed_size, LatticeError};
///
/// assert_eq!(check_signed_size(4).unwrap(), 4);
/// assert_eq!(check_signed_size(-1), Err(LatticeError::NegativeSize(-1)));
/// ```
pub fn check_signed_size(size: i64) -> LatticeResult<usize> {
    let size = usize::try_from(size).map_err(|_| LatticeError::NegativeSize(size))?;
    check_size(size)?;
    Ok(size)
}

/// Validates an occupancy probability.
///
/// # Errors
///
/// Returns [`LatticeError::InvalidProbability`] if `p` is not a finite value
/// in `[0, 1]`.
///
/// # Example
///
/// ```
/// use percolation_types::check_probability;
///
/// assert!(check_probability(0.0).is_ok());
/// assert!(check_probability(1.0).is_ok());
/// assert!(check_probability(1.5).is_err());
/// assert!(check_probability(f64::NAN).is_err());
/// ```
pub fn check_probability(p: f64) -> LatticeResult<f64> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(LatticeError::InvalidProbability(p))
    }
}

/// An `n × n × n` array of voxels.
///
/// Voxels are stored densely in row-major `(i, j, k)` order. The only
/// mutators are [`Lattice::mark_fluid`] and [`Lattice::mark_visible`], which
/// preserve the monotonicity and solid/fluid exclusion invariants.
///
/// Queries with out-of-range coordinates return `false` / `None`.
///
/// # Example
///
/// ```
/// use percolation_types::{Lattice, LatticeCoord};
///
/// let mut lattice = Lattice::from_solids(2, [LatticeCoord::new(0, 0, 0)]).unwrap();
/// assert!(lattice.is_solid(LatticeCoord::new(0, 0, 0)));
/// assert!(!lattice.mark_fluid(LatticeCoord::new(0, 0, 0)));
/// assert!(lattice.mark_fluid(LatticeCoord::new(1, 1, 1)));
/// assert!(lattice.is_fluid(LatticeCoord::new(1, 1, 1)));
/// assert!(!lattice.is_fluid(LatticeCoord::new(5, 5, 5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    bounds: LatticeBounds,
    voxels: Vec<Voxel>,
}

impl Lattice {
    /// Creates a lattice of empty voxels.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SizeOverflow`] if the size cannot be indexed.
    pub fn empty(size: usize) -> LatticeResult<Self> {
        Self::from_fn(size, |_| false)
    }

    /// Creates a lattice whose solid voxels are chosen by `is_solid`.
    ///
    /// `is_solid` is called exactly once per coordinate, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SizeOverflow`] if the size cannot be indexed.
    ///
    /// # Example
    ///
    /// ```
    /// use percolation_types::Lattice;
    ///
    /// // Solid floor, empty above
    /// let lattice = Lattice::from_fn(3, |c| c.i == 2).unwrap();
    /// assert_eq!(lattice.count_where(|v| v.is_solid()), 9);
    /// ```
    pub fn from_fn<F>(size: usize, mut is_solid: F) -> LatticeResult<Self>
    where
        F: FnMut(LatticeCoord) -> bool,
    {
        let volume = check_size(size)?;
        // check_size guarantees the size fits in i32
        let bounds = LatticeBounds::new(i32::try_from(size).unwrap_or(0));

        let mut voxels = Vec::with_capacity(volume);
        voxels.extend(bounds.iter().map(|coord| {
            if is_solid(coord) {
                Voxel::solid()
            } else {
                Voxel::empty()
            }
        }));

        Ok(Self { bounds, voxels })
    }

    /// Creates a lattice with exactly the given voxels solid.
    ///
    /// Coordinates outside the lattice are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SizeOverflow`] if the size cannot be indexed.
    pub fn from_solids<I>(size: usize, solids: I) -> LatticeResult<Self>
    where
        I: IntoIterator<Item = LatticeCoord>,
    {
        let mut lattice = Self::empty(size)?;
        for coord in solids {
            if let Some(index) = lattice.index(coord) {
                lattice.voxels[index] = Voxel::solid();
            }
        }
        Ok(lattice)
    }

    /// Returns the number of voxels per axis.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bounds.size().unsigned_abs() as usize
    }

    /// Returns the total number of voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns `true` for the degenerate `n = 0` lattice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Returns the bounds of the lattice.
    #[must_use]
    pub const fn bounds(&self) -> LatticeBounds {
        self.bounds
    }

    /// Checks whether a coordinate lies inside the lattice.
    #[must_use]
    pub const fn contains(&self, coord: LatticeCoord) -> bool {
        self.bounds.contains(coord)
    }

    /// Returns the storage index of a coordinate, or `None` if out of range.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn index(&self, coord: LatticeCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        // All components are non-negative after the bounds check
        let n = self.size();
        Some((coord.i as usize * n + coord.j as usize) * n + coord.k as usize)
    }

    /// Returns the voxel at a coordinate.
    #[must_use]
    pub fn get(&self, coord: LatticeCoord) -> Option<Voxel> {
        self.index(coord).map(|index| self.voxels[index])
    }

    /// Returns `true` if the voxel at `coord` holds a block.
    #[must_use]
    pub fn is_solid(&self, coord: LatticeCoord) -> bool {
        self.get(coord).is_some_and(|v| v.is_solid())
    }

    /// Returns `true` if the voxel at `coord` is filled with fluid.
    #[must_use]
    pub fn is_fluid(&self, coord: LatticeCoord) -> bool {
        self.get(coord).is_some_and(|v| v.is_fluid())
    }

    /// Returns `true` if the voxel at `coord` holds `material`.
    #[must_use]
    pub fn holds(&self, coord: LatticeCoord, material: Material) -> bool {
        self.get(coord).is_some_and(|v| v.holds(material))
    }

    /// Returns `true` if the voxel at `coord` is visible in the combined view.
    #[must_use]
    pub fn is_visible_combined(&self, coord: LatticeCoord) -> bool {
        self.get(coord)
            .is_some_and(|v| v.is_visible(ViewMode::Combined))
    }

    /// Returns `true` if the voxel at `coord` is visible in its single-material view.
    #[must_use]
    pub fn is_visible_isolated(&self, coord: LatticeCoord) -> bool {
        self.get(coord)
            .is_some_and(|v| v.is_visible(ViewMode::Isolated))
    }

    /// Fills the voxel at `coord` with fluid.
    ///
    /// Returns `true` only if the voxel is in range, not solid and not
    /// already filled.
    pub fn mark_fluid(&mut self, coord: LatticeCoord) -> bool {
        match self.index(coord) {
            Some(index) => self.voxels[index].mark_fluid(),
            None => false,
        }
    }

    /// Marks the voxel at `coord` visible in `mode`.
    ///
    /// Returns `true` only if the voxel is in range and the flag was not set.
    pub fn mark_visible(&mut self, coord: LatticeCoord, mode: ViewMode) -> bool {
        match self.index(coord) {
            Some(index) => self.voxels[index].mark_visible(mode),
            None => false,
        }
    }

    /// Returns the voxels in storage order.
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Returns an iterator over `(coordinate, voxel)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (LatticeCoord, Voxel)> + '_ {
        self.bounds.iter().zip(self.voxels.iter().copied())
    }

    /// Counts the voxels matching a predicate.
    #[must_use]
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Voxel) -> bool,
    {
        self.voxels.iter().filter(|v| predicate(v)).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lattice_of_size_zero() {
        let lattice = Lattice::empty(0).unwrap();
        assert!(lattice.is_empty());
        assert_eq!(lattice.len(), 0);
        assert_eq!(lattice.size(), 0);
        assert!(!lattice.is_solid(LatticeCoord::origin()));
        assert_eq!(lattice.iter().count(), 0);
    }

    #[test]
    fn test_size_overflow_is_rejected_before_allocation() {
        let err = Lattice::empty(usize::MAX).unwrap_err();
        assert_eq!(err, LatticeError::SizeOverflow { size: usize::MAX });
    }

    #[test]
    fn test_check_signed_size() {
        assert_eq!(check_signed_size(0).unwrap(), 0);
        assert_eq!(check_signed_size(-5), Err(LatticeError::NegativeSize(-5)));
    }

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability(0.5).is_ok());
        assert!(check_probability(-0.1).is_err());
        assert!(check_probability(f64::INFINITY).is_err());
    }

    #[test]
    fn test_index_is_row_major() {
        let lattice = Lattice::empty(3).unwrap();
        assert_eq!(lattice.index(LatticeCoord::new(0, 0, 0)), Some(0));
        assert_eq!(lattice.index(LatticeCoord::new(0, 0, 1)), Some(1));
        assert_eq!(lattice.index(LatticeCoord::new(0, 1, 0)), Some(3));
        assert_eq!(lattice.index(LatticeCoord::new(1, 0, 0)), Some(9));
        assert_eq!(lattice.index(LatticeCoord::new(2, 2, 2)), Some(26));
        assert_eq!(lattice.index(LatticeCoord::new(3, 0, 0)), None);
        assert_eq!(lattice.index(LatticeCoord::new(0, -1, 0)), None);
    }

    #[test]
    fn test_iter_matches_index() {
        let lattice = Lattice::from_fn(3, |c| (c.i + c.j + c.k) % 2 == 0).unwrap();
        for (position, (coord, voxel)) in lattice.iter().enumerate() {
            assert_eq!(lattice.index(coord), Some(position));
            assert_eq!(voxel.is_solid(), (coord.i + coord.j + coord.k) % 2 == 0);
        }
    }

    #[test]
    fn test_from_solids_ignores_out_of_range() {
        let lattice = Lattice::from_solids(
            2,
            [LatticeCoord::new(1, 1, 1), LatticeCoord::new(7, 0, 0)],
        )
        .unwrap();
        assert_eq!(lattice.count_where(Voxel::is_solid), 1);
        assert!(lattice.is_solid(LatticeCoord::new(1, 1, 1)));
    }

    #[test]
    fn test_mark_visible_out_of_range() {
        let mut lattice = Lattice::empty(2).unwrap();
        assert!(!lattice.mark_visible(LatticeCoord::new(2, 0, 0), ViewMode::Combined));
        assert!(lattice.mark_visible(LatticeCoord::new(1, 0, 0), ViewMode::Combined));
        assert!(lattice.is_visible_combined(LatticeCoord::new(1, 0, 0)));
        assert!(!lattice.is_visible_isolated(LatticeCoord::new(1, 0, 0)));
    }

    #[test]
    fn test_holds() {
        let mut lattice = Lattice::from_solids(2, [LatticeCoord::origin()]).unwrap();
        lattice.mark_fluid(LatticeCoord::new(1, 1, 1));
        assert!(lattice.holds(LatticeCoord::origin(), Material::Solid));
        assert!(lattice.holds(LatticeCoord::new(1, 1, 1), Material::Fluid));
        assert!(!lattice.holds(LatticeCoord::new(1, 0, 1), Material::Fluid));
    }
}
