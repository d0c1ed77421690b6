//! API Regression Tests for the Percolation Crates
//!
//! These tests exercise the public API of every stage through the umbrella
//! crate. They are organized in tiers following the pipeline:
//!
//! - Tier 1: Foundation (percolation-types)
//! - Tier 2: Generation and propagation (percolation-flow)
//! - Tier 3: Visibility culling (percolation-cull)
//! - Tier 4: Projection and draw plans (percolation-iso)
//! - Tier 5: Pipeline (configuration, runs, statistics)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::cast_precision_loss)]

use percolation::{cull, flow, iso, prelude::*, types};

// =============================================================================
// TIER 1: Foundation
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn lattice_queries_out_of_range_are_false() {
        let lattice = Lattice::from_fn(3, |_| true).unwrap();
        let outside = LatticeCoord::new(3, 0, 0);

        assert!(!lattice.is_solid(outside));
        assert!(!lattice.is_fluid(outside));
        assert!(!lattice.is_visible_combined(outside));
        assert!(!lattice.is_visible_isolated(LatticeCoord::new(0, -1, 0)));
    }

    #[test]
    fn invalid_inputs_are_reported() {
        assert_eq!(
            types::check_signed_size(-3),
            Err(LatticeError::NegativeSize(-3))
        );
        assert!(matches!(
            types::check_probability(f64::NAN),
            Err(LatticeError::InvalidProbability(_))
        ));
        assert!(types::check_probability(0.0).is_ok());
        assert!(types::check_probability(1.0).is_ok());
    }

    #[test]
    fn visible_shell_size() {
        for n in 0..6 {
            let bounds = types::LatticeBounds::new(n);
            let expected = n.pow(3) - (n - 1).max(0).pow(3);
            assert_eq!(bounds.visible_shell().count(), usize::try_from(expected).unwrap());
        }
    }
}

// =============================================================================
// TIER 2: Generation and propagation
// =============================================================================

mod tier2_flow {
    use super::*;

    #[test]
    fn signed_size_parameters() {
        assert!(GenerateParams::from_signed(0, 0.5).is_ok());
        assert_eq!(
            GenerateParams::from_signed(-1, 0.5),
            Err(LatticeError::NegativeSize(-1))
        );
    }

    #[test]
    fn generation_then_flow() {
        let mut lattice =
            flow::generate_lattice(&GenerateParams::new(15, 0.3).with_seed(21)).unwrap();
        let report = flow::propagate(&mut lattice, &FlowParams::default());

        assert_eq!(report.filled, lattice.count_where(|v| v.is_fluid()));
        assert_eq!(report.percolates, flow::percolates(&lattice));
    }

    #[test]
    fn gravity_only_never_fills_more() {
        let params = GenerateParams::new(12, 0.45).with_seed(8);
        let mut full = flow::generate_lattice(&params).unwrap();
        let mut gravity = full.clone();

        let a = flow::propagate(&mut full, &FlowParams::default());
        let b = flow::propagate(&mut gravity, &FlowParams::gravity_only());
        assert!(b.filled <= a.filled);
    }
}

// =============================================================================
// TIER 3: Visibility culling
// =============================================================================

mod tier3_cull {
    use super::*;

    #[test]
    fn concrete_two_cube_scenario() {
        let mut lattice = Lattice::from_solids(2, [LatticeCoord::origin()]).unwrap();
        flow::flow(&mut lattice);
        let report = cull::cull(&mut lattice, &CullParams::default());

        // The entry face: the solid corner blocks its own line, the other
        // three lines stop at fluid
        assert!(lattice.is_visible_combined(LatticeCoord::new(0, 0, 0)));
        assert!(lattice.is_solid(LatticeCoord::new(0, 0, 0)));
        for coord in [
            LatticeCoord::new(0, 0, 1),
            LatticeCoord::new(0, 1, 0),
            LatticeCoord::new(0, 1, 1),
        ] {
            assert!(lattice.is_fluid(coord));
            assert!(lattice.is_visible_combined(coord));
        }
        assert_eq!(report.combined.origins, 7);
    }

    #[test]
    fn single_pass_api() {
        let mut lattice = Lattice::from_fn(4, |c| c.i == 2).unwrap();
        let pass = cull::cull_pass(
            &mut lattice,
            cull::Target::Only(Material::Solid),
            &CullParams::default(),
        );
        assert_eq!(pass.target, cull::Target::Only(Material::Solid));
        assert!(pass.marked > 0);
        assert_eq!(pass.marked, lattice.count_where(|v| v.is_visible(ViewMode::Isolated)));
    }

    #[test]
    fn strategies_can_be_switched() {
        for strategy in [
            CullStrategy::RayScan,
            CullStrategy::RegionFlood,
            CullStrategy::Disabled,
        ] {
            let mut lattice = Lattice::from_fn(5, |c| (c.i + c.j + c.k) % 3 == 0).unwrap();
            flow::flow(&mut lattice);
            let report = cull::cull(&mut lattice, &CullParams::default().with_strategy(strategy));
            assert_eq!(report.strategy, strategy);
            if strategy == CullStrategy::Disabled {
                assert_eq!(report.combined.marked, 0);
            } else {
                assert!(report.combined.marked > 0);
            }
        }
    }
}

// =============================================================================
// TIER 4: Projection and draw plans
// =============================================================================

mod tier4_iso {
    use super::*;

    #[test]
    fn projection_constants() {
        assert!((iso::ANGLE.to_degrees() - 30.0).abs() < 1e-9);
        assert!((iso::MARGIN - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn cube_faces_have_four_corners_each() {
        let faces = iso::project(LatticeCoord::new(1, 1, 1), 3);
        let kinds: Vec<FaceKind> = faces.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![FaceKind::Right, FaceKind::Left, FaceKind::Top]);
    }

    #[test]
    fn draw_plan_panels() {
        let mut lattice = Lattice::from_fn(3, |c| c.i == 2).unwrap();
        flow::flow(&mut lattice);
        let plan = iso::draw_plan(&lattice, false);

        assert_eq!(plan.count(Panel::Solid), 9);
        assert_eq!(plan.count(Panel::Fluid), 18);
        assert_eq!(plan.count(Panel::Combined), 27);
        assert!(plan.panel(Panel::Fluid).all(|c| c.material == Material::Fluid));
    }
}

// =============================================================================
// TIER 5: Pipeline
// =============================================================================

mod tier5_pipeline {
    use super::*;

    #[test]
    fn run_and_summarize() {
        let output = run(&PipelineConfig::new(16, 0.4).with_seed(3)).unwrap();
        let stats = output.stats;

        assert_eq!(stats.total, 16 * 16 * 16);
        assert_eq!(stats.solid + stats.fluid + stats.empty, stats.total);
        assert_eq!(stats.fluid, output.flow.filled);
        assert_eq!(stats.visible_combined, output.cull.combined.marked);
        assert_eq!(stats.visible_solid, output.cull.solid.marked);
        assert_eq!(stats.visible_fluid, output.cull.fluid.marked);
        assert_eq!(stats.percolates, output.percolates());
    }

    #[test]
    fn occupancy_is_respected() {
        let output = run(&PipelineConfig::new(30, 0.25).with_seed(12)).unwrap();
        assert!((output.stats.solid_fraction() - 0.25).abs() < 0.02);
    }

    #[test]
    fn low_occupancy_percolates_and_high_does_not() {
        let open = run(&PipelineConfig::new(20, 0.05).with_seed(1)).unwrap();
        assert!(open.percolates());

        let blocked = run(&PipelineConfig::new(20, 0.95).with_seed(1)).unwrap();
        assert!(!blocked.percolates());
    }

    #[test]
    fn process_prebuilt_lattice() {
        let lattice = Lattice::from_fn(4, |c| c.i == 1 && c.j != 0).unwrap();
        let output = percolation::process(lattice, &PipelineConfig::default());

        // A gap along j = 0 lets fluid through to the bottom
        assert!(output.percolates());
        assert_eq!(output.stats.empty, 0);
    }

    #[test]
    fn pipeline_rejects_bad_probability() {
        let result = run(&PipelineConfig::new(4, -0.1));
        assert!(matches!(result, Err(LatticeError::InvalidProbability(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{ "generate": { "size": 12, "occupancy": 0.3 }, "cull": { "strategy": "region-flood" } }"#,
        )
        .unwrap();
        assert_eq!(config.generate.size, 12);
        assert_eq!(config.generate.seed, None);
        assert_eq!(config.cull.strategy, CullStrategy::RegionFlood);
        assert!(config.flow.allow_upward);

        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
