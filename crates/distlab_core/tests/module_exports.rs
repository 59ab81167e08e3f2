//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

use std::collections::BTreeMap;

/// Test that the numeric helpers are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use distlab_core::math::quantile::{invert_continuous, invert_discrete};
    use distlab_core::math::solvers::{BrentSolver, SolverConfig};
    use distlab_core::math::stats::{linspace, mean, population_std, sample_std};

    let solver = BrentSolver::new(SolverConfig::<f64>::default());
    let root = solver.find_root(|x| x * x - 4.0, 0.0, 5.0).unwrap();
    assert!((root - 2.0).abs() < 1e-9);

    let logistic = |x: f64| 1.0 / (1.0 + (-x).exp());
    let median = invert_continuous(logistic, 0.5, (f64::NEG_INFINITY, f64::INFINITY), 3.0)
        .unwrap();
    assert!(median.abs() < 1e-9);

    let die = |k: f64| (k.floor() / 6.0).clamp(0.0, 1.0);
    assert_eq!(invert_discrete(die, 0.34, (1.0, 6.0), 3.5).unwrap(), 3.0);

    let xs = linspace(1.0, 3.0, 3);
    assert_eq!(mean(&xs), Some(2.0));
    assert_eq!(sample_std(&xs), Some(1.0));
    assert!((population_std(&xs).unwrap() - (2.0_f64 / 3.0).sqrt()).abs() < 1e-15);
}

/// Test that the trait module is accessible via absolute path.
#[test]
fn test_traits_module_exports() {
    use distlab_core::traits::distribution::defined;
    use distlab_core::traits::ParametricDistribution;
    use distlab_core::types::DistributionKind;
    use rand::Rng;

    struct PointMass(f64);

    impl ParametricDistribution for PointMass {
        fn family(&self) -> &'static str {
            "Degenerate"
        }
        fn kind(&self) -> DistributionKind {
            DistributionKind::Discrete
        }
        fn mean(&self) -> Option<f64> {
            Some(self.0)
        }
        fn variance(&self) -> Option<f64> {
            Some(0.0)
        }
        fn skewness(&self) -> Option<f64> {
            None
        }
        fn excess_kurtosis(&self) -> Option<f64> {
            None
        }
        fn support(&self) -> (f64, f64) {
            (self.0, self.0)
        }
        fn cdf(&self, x: f64) -> f64 {
            if x >= self.0 {
                1.0
            } else {
                0.0
            }
        }
        fn density(&self, x: f64) -> f64 {
            if x == self.0 {
                1.0
            } else {
                0.0
            }
        }
        fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
            self.0
        }
    }

    let point = PointMass(4.0);
    assert_eq!(point.quantile(0.5).unwrap(), 4.0);
    assert_eq!(point.std_dev(), Some(0.0));
    assert_eq!(defined(f64::NAN), None);
}

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use distlab_core::types::error::{CatalogError, DistributionError, SolverError};
    use distlab_core::types::kind::DistributionKind;
    use distlab_core::types::params::{require, ParamSchema, ParamSpec, ParamValues};

    let schema = ParamSchema::new(vec![("df", ParamSpec::new("Degrees of freedom (ν)", 3.0, 1.0, 20.0, 1.0))]);
    let mut raw: ParamValues = BTreeMap::new();
    raw.insert("df".to_string(), 0.0);
    let validated = schema.clamp(&raw);
    assert_eq!(require(&validated, "df"), Ok(1.0));

    assert_eq!(DistributionKind::Continuous.to_string(), "continuous");
    assert!(CatalogError::unknown("x").to_string().contains("x"));
    assert!(matches!(
        DistributionError::invalid("Beta", "a <= 0"),
        DistributionError::InvalidParameters { family: "Beta", .. }
    ));
    assert!(matches!(
        SolverError::NoBracket { a: 0.0, b: 1.0 },
        SolverError::NoBracket { .. }
    ));
}

/// Test that the re-exports at module level work.
#[test]
fn test_reexports() {
    use distlab_core::types::{CatalogError, DistributionKind, ParamSchema};

    assert!(ParamSchema::empty().is_empty());
    assert!(DistributionKind::Discrete.is_discrete());
    let _ = CatalogError::unknown("Cauchy");
}
