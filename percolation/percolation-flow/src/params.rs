//! Generation and propagation parameters.

use percolation_types::{LatticeResult, check_probability, check_signed_size, check_size};

/// Configuration for random lattice generation.
///
/// # Examples
///
/// ```
/// use percolation_flow::GenerateParams;
///
/// let params = GenerateParams::new(50, 0.35).with_seed(7);
/// assert_eq!(params.size, 50);
/// assert_eq!(params.seed, Some(7));
/// assert!(params.validate().is_ok());
///
/// assert!(GenerateParams::new(10, 1.2).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerateParams {
    /// Number of voxels per axis.
    pub size: usize,

    /// Probability that a voxel is solid, in `[0, 1]`.
    pub occupancy: f64,

    /// Seed for a reproducible random source.
    ///
    /// When `None`, the thread-local generator is used.
    pub seed: Option<u64>,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            size: 20,
            occupancy: 0.4,
            seed: None,
        }
    }
}

impl GenerateParams {
    /// Creates parameters for a lattice of `size³` voxels.
    #[must_use]
    pub fn new(size: usize, occupancy: f64) -> Self {
        Self {
            size,
            occupancy,
            ..Default::default()
        }
    }

    /// Creates parameters from a signed size, as read from user input.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::NegativeSize`](percolation_types::LatticeError::NegativeSize)
    /// if `size` is negative, or any error [`GenerateParams::validate`] reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation_flow::GenerateParams;
    /// use percolation_types::LatticeError;
    ///
    /// assert!(GenerateParams::from_signed(8, 0.5).is_ok());
    /// assert_eq!(
    ///     GenerateParams::from_signed(-8, 0.5),
    ///     Err(LatticeError::NegativeSize(-8))
    /// );
    /// ```
    pub fn from_signed(size: i64, occupancy: f64) -> LatticeResult<Self> {
        let params = Self::new(check_signed_size(size)?, occupancy);
        params.validate()?;
        Ok(params)
    }

    /// Sets the seed of the random source.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the occupancy probability.
    #[must_use]
    pub const fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = occupancy;
        self
    }

    /// Checks the parameters without allocating anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the occupancy is outside `[0, 1]` or the size
    /// cannot be indexed.
    pub fn validate(&self) -> LatticeResult<()> {
        check_probability(self.occupancy)?;
        check_size(self.size)?;
        Ok(())
    }
}

/// Configuration for fluid propagation.
///
/// # Examples
///
/// ```
/// use percolation_flow::FlowParams;
///
/// // Full 6-connected reachability
/// let params = FlowParams::default();
/// assert!(params.allow_upward);
///
/// // Fluid may spread sideways and downwards only
/// let gravity = FlowParams::gravity_only();
/// assert!(!gravity.allow_upward);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowParams {
    /// Whether fluid may move to the voxel above (`i - 1`).
    pub allow_upward: bool,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self { allow_upward: true }
    }
}

impl FlowParams {
    /// Parameters for flow that never climbs.
    #[must_use]
    pub const fn gravity_only() -> Self {
        Self {
            allow_upward: false,
        }
    }

    /// Sets whether fluid may move upwards.
    #[must_use]
    pub const fn with_upward(mut self, allow: bool) -> Self {
        self.allow_upward = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percolation_types::LatticeError;

    #[test]
    fn test_defaults() {
        let params = GenerateParams::default();
        assert_eq!(params.size, 20);
        assert!(params.seed.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_boundary_probabilities_are_valid() {
        assert!(GenerateParams::new(4, 0.0).validate().is_ok());
        assert!(GenerateParams::new(4, 1.0).validate().is_ok());
        assert!(GenerateParams::new(0, 0.5).validate().is_ok());
    }

    #[test]
    fn test_invalid_probability() {
        assert_eq!(
            GenerateParams::new(4, -0.5).validate(),
            Err(LatticeError::InvalidProbability(-0.5))
        );
    }

    #[test]
    fn test_from_signed_checks_probability_too() {
        assert!(matches!(
            GenerateParams::from_signed(3, 2.0),
            Err(LatticeError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_builders() {
        let params = GenerateParams::new(3, 0.1).with_occupancy(0.9).with_seed(1);
        assert!((params.occupancy - 0.9).abs() < f64::EPSILON);
        assert_eq!(params.seed, Some(1));
        assert!(!FlowParams::default().with_upward(false).allow_upward);
    }
}
