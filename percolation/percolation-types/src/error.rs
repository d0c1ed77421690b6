//! Error types for lattice construction.

/// Errors that can occur while constructing a lattice.
///
/// All of these are reported before any voxel storage is allocated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum LatticeError {
    /// The lattice size was negative.
    #[error("lattice size must be non-negative, got {0}")]
    NegativeSize(i64),

    /// The occupancy probability was outside `[0, 1]` or not finite.
    #[error("occupancy probability must be in range [0.0, 1.0], got {0}")]
    InvalidProbability(f64),

    /// The lattice is too large to index or allocate.
    #[error("lattice size {size} is too large: {size}³ voxels cannot be indexed")]
    SizeOverflow {
        /// The requested size per axis.
        size: usize,
    },
}

/// Result type for lattice construction.
pub type LatticeResult<T> = Result<T, LatticeError>;
