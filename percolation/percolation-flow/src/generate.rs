//! Random lattice generation.
//!
//! Every voxel is an independent Bernoulli trial: solid with probability
//! `occupancy`, empty otherwise.

use percolation_types::{Lattice, LatticeResult, Voxel, check_probability, check_size};
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info};

use crate::params::GenerateParams;

/// Generates a random lattice from an explicit random source.
///
/// Inputs are validated before any voxel storage is allocated.
///
/// # Arguments
///
/// * `size` - Number of voxels per axis
/// * `occupancy` - Probability that a voxel is solid, in `[0, 1]`
/// * `rng` - Random source; one trial is drawn per voxel
///
/// # Errors
///
/// Returns [`LatticeError::InvalidProbability`](percolation_types::LatticeError::InvalidProbability)
/// or [`LatticeError::SizeOverflow`](percolation_types::LatticeError::SizeOverflow).
///
/// # Example
///
/// ```
/// use percolation_flow::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let lattice = generate(8, 0.3, &mut rng).unwrap();
/// assert_eq!(lattice.len(), 512);
///
/// let solid = generate(4, 1.0, &mut rng).unwrap();
/// assert_eq!(solid.count_where(|v| v.is_solid()), 64);
/// ```
pub fn generate<R>(size: usize, occupancy: f64, rng: &mut R) -> LatticeResult<Lattice>
where
    R: Rng + ?Sized,
{
    check_probability(occupancy)?;
    check_size(size)?;

    let lattice = Lattice::from_fn(size, |_| rng.gen_bool(occupancy))?;

    info!(
        size,
        occupancy,
        solids = lattice.count_where(Voxel::is_solid),
        "Generated lattice"
    );

    Ok(lattice)
}

/// Generates a random lattice from parameters.
///
/// Uses a seeded [`StdRng`](rand::rngs::StdRng) when `params.seed` is set so
/// that runs can be reproduced, otherwise the thread-local generator.
///
/// # Errors
///
/// Returns any error reported by [`GenerateParams::validate`].
///
/// # Example
///
/// ```
/// use percolation_flow::{generate_lattice, GenerateParams};
///
/// let params = GenerateParams::new(6, 0.5).with_seed(3);
/// let a = generate_lattice(&params).unwrap();
/// let b = generate_lattice(&params).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_lattice(params: &GenerateParams) -> LatticeResult<Lattice> {
    params.validate()?;

    let mut rng: Box<dyn RngCore> = if let Some(seed) = params.seed {
        debug!(seed, "Using seeded random source");
        Box::new(rand::rngs::StdRng::seed_from_u64(seed))
    } else {
        Box::new(rand::thread_rng())
    };

    generate(params.size, params.occupancy, &mut rng)
}
