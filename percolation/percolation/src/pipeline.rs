//! End-to-end pipeline: generate, fill, cull, summarize.

use percolation_cull::{CullParams, CullReport, CullStrategy, cull};
use percolation_flow::{
    FlowParams, FlowReport, GenerateParams, generate, generate_lattice, propagate,
};
use percolation_iso::{DrawPlan, draw_plan};
use percolation_types::{Lattice, LatticeResult};
use rand::Rng;
use tracing::info;

use crate::stats::LatticeStats;

/// Configuration of every pipeline stage.
///
/// # Examples
///
/// ```
/// use percolation::{CullStrategy, PipelineConfig};
///
/// let config = PipelineConfig::new(30, 0.4)
///     .with_seed(1)
///     .with_cull_strategy(CullStrategy::RegionFlood);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.generate.size, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Lattice generation.
    pub generate: GenerateParams,
    /// Fluid propagation.
    pub flow: FlowParams,
    /// Visibility culling.
    pub cull: CullParams,
}

impl PipelineConfig {
    /// Creates a configuration for a lattice of `size³` voxels, with default
    /// propagation and culling.
    #[must_use]
    pub fn new(size: usize, occupancy: f64) -> Self {
        Self {
            generate: GenerateParams::new(size, occupancy),
            ..Self::default()
        }
    }

    /// Sets the seed of the random source.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.generate.seed = Some(seed);
        self
    }

    /// Sets the propagation parameters.
    #[must_use]
    pub const fn with_flow(mut self, flow: FlowParams) -> Self {
        self.flow = flow;
        self
    }

    /// Sets the culling parameters.
    #[must_use]
    pub const fn with_cull(mut self, cull: CullParams) -> Self {
        self.cull = cull;
        self
    }

    /// Sets the culling strategy.
    #[must_use]
    pub const fn with_cull_strategy(mut self, strategy: CullStrategy) -> Self {
        self.cull.strategy = strategy;
        self
    }

    /// Checks the configuration without allocating anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the generation parameters are invalid.
    pub fn validate(&self) -> LatticeResult<()> {
        self.generate.validate()
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The filled and culled lattice.
    pub lattice: Lattice,
    /// Propagation summary.
    pub flow: FlowReport,
    /// Culling summary.
    pub cull: CullReport,
    /// Voxel counts after all stages.
    pub stats: LatticeStats,
}

impl PipelineOutput {
    /// Returns `true` if fluid reached the bottom layer.
    #[must_use]
    pub const fn percolates(&self) -> bool {
        self.flow.percolates
    }

    /// Builds the draw plan of the result.
    ///
    /// Only voxels flagged visible are drawn, unless culling was disabled.
    #[must_use]
    pub fn draw_plan(&self) -> DrawPlan {
        draw_plan(&self.lattice, self.cull.strategy != CullStrategy::Disabled)
    }
}

/// Runs the whole pipeline.
///
/// # Errors
///
/// Returns an error if the configuration is invalid. Nothing is allocated
/// in that case.
///
/// # Example
///
/// ```
/// use percolation::{run, PipelineConfig};
///
/// let output = run(&PipelineConfig::new(10, 0.0).with_seed(4)).unwrap();
/// assert!(output.percolates());
/// assert_eq!(output.stats.fluid, 1000);
/// assert_eq!(output.stats.visible_combined, 1000 - 729);
/// ```
pub fn run(config: &PipelineConfig) -> LatticeResult<PipelineOutput> {
    let lattice = generate_lattice(&config.generate)?;
    Ok(process(lattice, config))
}

/// Runs the whole pipeline with an explicit random source.
///
/// `config.generate.seed` is ignored.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_with_rng<R>(config: &PipelineConfig, rng: &mut R) -> LatticeResult<PipelineOutput>
where
    R: Rng + ?Sized,
{
    let lattice = generate(config.generate.size, config.generate.occupancy, rng)?;
    Ok(process(lattice, config))
}

/// Fills and culls an existing lattice.
///
/// The generation parameters of `config` are ignored.
#[must_use]
pub fn process(mut lattice: Lattice, config: &PipelineConfig) -> PipelineOutput {
    let flow = propagate(&mut lattice, &config.flow);
    let visibility = cull(&mut lattice, &config.cull);
    let stats = LatticeStats::collect(&lattice);

    info!(
        size = stats.size,
        solid = stats.solid,
        fluid = stats.fluid,
        percolates = stats.percolates,
        visible = stats.visible_combined,
        "Pipeline complete"
    );

    PipelineOutput {
        lattice,
        flow,
        cull: visibility,
        stats,
    }
}
