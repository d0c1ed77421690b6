//! Command-line arguments and configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use percolation::{CullStrategy, GenerateParams, PipelineConfig};
use tracing::debug;

/// Percolation lattice simulator
///
/// Fills a random n×n×n lattice of solid blocks with fluid poured in from the
/// top, culls hidden voxels and reports what an isometric view would show.
#[derive(Debug, Parser)]
#[command(name = "percolation")]
#[command(about = "Simulate fluid percolating through a random voxel lattice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Voxels per axis
    #[arg(name = "N", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Probability that a voxel is solid, in [0, 1]
    #[arg(name = "P", allow_negative_numbers = true)]
    pub occupancy: Option<f64>,

    /// Seed for reproducible lattices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Visibility culling strategy
    #[arg(long, value_enum)]
    pub cull: Option<CullArg>,

    /// Evaluate ray-scan lines on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Let fluid spread only sideways and downwards
    #[arg(long)]
    pub no_upward: bool,

    /// JSON pipeline configuration; command-line values take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include per-panel draw counts in the summary
    #[arg(long)]
    pub panels: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Culling strategy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CullArg {
    /// One diagonal line of sight per visible-face voxel
    RayScan,
    /// Flood through transparent voxels from the visible faces
    RegionFlood,
    /// Draw every occupied voxel
    None,
}

impl From<CullArg> for CullStrategy {
    fn from(arg: CullArg) -> Self {
        match arg {
            CullArg::RayScan => Self::RayScan,
            CullArg::RegionFlood => Self::RegionFlood,
            CullArg::None => Self::Disabled,
        }
    }
}

impl Cli {
    /// Builds the pipeline configuration: defaults, then the config file,
    /// then command-line values.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(size) = self.size {
            let occupancy = self.occupancy.unwrap_or(config.generate.occupancy);
            config.generate = GenerateParams {
                seed: config.generate.seed,
                ..GenerateParams::from_signed(size, occupancy)
                    .context("Invalid lattice parameters")?
            };
        } else if let Some(occupancy) = self.occupancy {
            config.generate.occupancy = occupancy;
        }
        if let Some(seed) = self.seed {
            config.generate.seed = Some(seed);
        }
        if let Some(cull) = self.cull {
            config.cull.strategy = cull.into();
        }
        if self.parallel {
            config.cull.parallel = true;
        }
        if self.no_upward {
            config.flow.allow_upward = false;
        }

        config.validate().context("Invalid lattice parameters")?;
        debug!(?config, "Resolved pipeline configuration");
        Ok(config)
    }
}

/// Reads a JSON pipeline configuration.
fn load_config(path: &Path) -> Result<PipelineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("percolation").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let config = parse(&["25", "0.4"]).pipeline_config().unwrap();
        assert_eq!(config.generate.size, 25);
        assert!((config.generate.occupancy - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.cull.strategy, CullStrategy::RayScan);
        assert!(config.flow.allow_upward);
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "10",
            "0.5",
            "--seed",
            "3",
            "--cull",
            "region-flood",
            "--parallel",
            "--no-upward",
        ])
        .pipeline_config()
        .unwrap();

        assert_eq!(config.generate.seed, Some(3));
        assert_eq!(config.cull.strategy, CullStrategy::RegionFlood);
        assert!(config.cull.parallel);
        assert!(!config.flow.allow_upward);
    }

    #[test]
    fn test_cull_none_disables_culling() {
        let config = parse(&["4", "0.1", "--cull", "none"]).pipeline_config().unwrap();
        assert_eq!(config.cull.strategy, CullStrategy::Disabled);
    }

    #[test]
    fn test_negative_size_is_reported() {
        let err = parse(&["-4", "0.5"]).pipeline_config().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("negative"), "{message}");
    }

    #[test]
    fn test_bad_probability_is_reported() {
        assert!(parse(&["4", "1.5"]).pipeline_config().is_err());
        assert!(parse(&["4", "-0.5"]).pipeline_config().is_err());
    }

    #[test]
    fn test_config_file_with_overrides() {
        let path = std::env::temp_dir().join(format!("percolation-cli-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "generate": { "size": 9, "occupancy": 0.2, "seed": 5 }, "cull": { "strategy": "region-flood" } }"#,
        )
        .unwrap();

        let file_only = Cli {
            config: Some(path.clone()),
            ..parse(&[])
        };
        let config = file_only.pipeline_config().unwrap();
        assert_eq!(config.generate.size, 9);
        assert_eq!(config.generate.seed, Some(5));
        assert_eq!(config.cull.strategy, CullStrategy::RegionFlood);

        let overridden = Cli {
            config: Some(path.clone()),
            ..parse(&["12", "--cull", "ray-scan"])
        };
        let config = overridden.pipeline_config().unwrap();
        assert_eq!(config.generate.size, 12);
        assert!((config.generate.occupancy - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.generate.seed, Some(5));
        assert_eq!(config.cull.strategy, CullStrategy::RayScan);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/percolation.json")),
            ..parse(&[])
        };
        let message = format!("{:#}", cli.pipeline_config().unwrap_err());
        assert!(message.contains("Failed to read config file"));
    }
}
