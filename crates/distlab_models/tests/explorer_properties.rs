//! Integration tests for the explorer catalogue.
//!
//! Exercise the public API end to end: listing, clamping, evaluation and
//! curves for every catalogue entry.

use std::collections::BTreeMap;

use approx::assert_abs_diff_eq;
use distlab_core::types::{DistributionKind, ParamValues};
use distlab_models::explorer::{
    clamp_params, density_curve, entries, evaluate, list_by_kind, param_spec, sample,
    scenario_text, MAX_EXPLICIT_DISCRETE_POINTS,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn params(pairs: &[(&str, f64)]) -> ParamValues {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_listing_covers_catalogue() {
    let listing = list_by_kind();
    assert!(listing.continuous.contains(&"Normal"));
    assert!(listing.discrete.contains(&"Binomial"));
    assert_eq!(
        listing.continuous.len() + listing.discrete.len(),
        entries().len()
    );
}

#[test]
fn test_empty_input_yields_declared_defaults() {
    for entry in entries() {
        let schema = param_spec(entry.name).unwrap();
        assert!(!schema.is_empty());
        let validated = clamp_params(entry.name, &BTreeMap::new()).unwrap();
        assert_eq!(validated, schema.defaults(), "{}", entry.name);
    }
}

#[test]
fn test_out_of_range_normal_parameters() {
    let validated = clamp_params("Normal", &params(&[("loc", 100.0), ("scale", -1.0)])).unwrap();
    assert!(validated["loc"] <= 10.0);
    assert!(validated["scale"] >= 0.1);
}

#[test]
fn test_normal_edge_parameters() {
    let result = evaluate("Normal", &params(&[("loc", 0.0), ("scale", 0.1)])).unwrap();
    assert_eq!(result.std, Some(0.1));
    let result = evaluate("Normal", &params(&[("loc", 0.0), ("scale", 5.0)])).unwrap();
    assert_eq!(result.std, Some(5.0));
}

#[test]
fn test_binomial_exact_moments() {
    let result = evaluate("Binomial", &params(&[("n", 10.0), ("p", 0.5)])).unwrap();
    assert_eq!(result.kind, DistributionKind::Discrete);
    assert_eq!(result.mean, Some(5.0));
    assert_eq!(result.variance, Some(2.5));
}

#[test]
fn test_every_entry_evaluates_with_defaults() {
    for entry in entries() {
        let result = evaluate(entry.name, &BTreeMap::new()).unwrap();
        assert_eq!(result.name, entry.name);
        assert!(result.mean.is_some(), "{} mean", entry.name);
        assert!(result.variance.is_some(), "{} variance", entry.name);
        if entry.kind().is_continuous() {
            let (q25, median, q75) = (result.q25.unwrap(), result.median.unwrap(), result.q75.unwrap());
            assert!(q25 <= median && median <= q75, "{} quartiles", entry.name);
        }
    }
}

#[test]
fn test_continuous_curves_are_finite_and_non_negative() {
    for entry in entries().iter().filter(|e| e.kind().is_continuous()) {
        let curve = density_curve(entry.name, &BTreeMap::new(), None).unwrap();
        assert_eq!(curve.x.len(), curve.y.len());
        assert!(curve.x.iter().all(|x| x.is_finite()), "{}", entry.name);
        assert!(curve.y.iter().all(|y| y.is_finite() && *y >= 0.0), "{}", entry.name);
    }
}

#[test]
fn test_discrete_curves_are_probabilities() {
    for entry in entries().iter().filter(|e| e.kind().is_discrete()) {
        let curve = density_curve(entry.name, &BTreeMap::new(), None).unwrap();
        assert!(!curve.is_empty());
        assert!(curve.len() <= 100, "{} has {} points", entry.name, curve.len());
        assert!(curve.y.iter().all(|y| (0.0..=1.0).contains(y)), "{}", entry.name);
        if curve.len() < 100 {
            let total: f64 = curve.y.iter().sum();
            assert_abs_diff_eq!(total, 1.0, epsilon = 0.1);
        }
    }
}

#[test]
fn test_custom_range() {
    let curve = density_curve(
        "Normal",
        &params(&[("loc", 0.0), ("scale", 1.0)]),
        Some((-2.0, 2.0)),
    )
    .unwrap();
    let min = curve.x.iter().copied().fold(f64::INFINITY, f64::min);
    let max = curve.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(min >= -2.0);
    assert!(max <= 2.0);
}

#[test]
fn test_wide_discrete_range_is_capped() {
    let curve = density_curve("Binomial", &ParamValues::new(), Some((0.0, 1e300))).unwrap();
    assert_eq!(curve.len(), MAX_EXPLICIT_DISCRETE_POINTS);
    assert_eq!(curve.x[0], 0.0);
    assert!(curve.y.iter().all(|y| (0.0..=1.0).contains(y)));
    let total: f64 = curve.y.iter().sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);

    let curve = density_curve("Poisson", &ParamValues::new(), Some((-1e12, 1e12))).unwrap();
    assert_eq!(curve.len(), MAX_EXPLICIT_DISCRETE_POINTS);
    assert!(curve.x.windows(2).all(|w| w[1] - w[0] == 1.0));
}

#[test]
fn test_unknown_name_everywhere() {
    let empty = BTreeMap::new();
    assert!(param_spec("Weibull").is_err());
    assert!(clamp_params("Weibull", &empty).is_err());
    assert!(evaluate("Weibull", &empty).unwrap_err().is_unknown_distribution());
    assert!(density_curve("Weibull", &empty, None)
        .unwrap_err()
        .is_unknown_distribution());
    let mut rng = StdRng::seed_from_u64(1);
    assert!(sample("Weibull", &empty, 5, &mut rng).is_err());
}

#[test]
fn test_scenario_text_for_normal() {
    let text = scenario_text("Normal", &params(&[("loc", 0.0), ("scale", 1.0)]));
    assert!(!text.is_empty());
}

#[test]
fn test_result_serialises_undefined_as_null() {
    let result = evaluate("Student-t", &params(&[("df", 1.0)])).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["mean"].is_null());
    assert_eq!(json["kind"], "continuous");
    assert_eq!(json["params"]["df"], 1.0);
}

proptest! {
    #[test]
    fn prop_clamp_is_idempotent(idx in 0usize..12, a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let entry = &entries()[idx];
        let mut raw = ParamValues::new();
        for ((name, _), value) in entry.params.iter().zip([a, b]) {
            raw.insert(name.to_string(), value);
        }
        let once = clamp_params(entry.name, &raw).unwrap();
        let twice = clamp_params(entry.name, &once).unwrap();
        prop_assert_eq!(&once, &twice);
        for (name, spec) in entry.params {
            prop_assert!(once[*name] >= spec.min && once[*name] <= spec.max);
        }
    }

    #[test]
    fn prop_curves_stay_valid_under_any_parameters(idx in 0usize..12, a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let entry = &entries()[idx];
        let mut raw = ParamValues::new();
        for ((name, _), value) in entry.params.iter().zip([a, b]) {
            raw.insert(name.to_string(), value);
        }
        let curve = density_curve(entry.name, &raw, None).unwrap();
        prop_assert!(!curve.is_empty());
        prop_assert_eq!(curve.x.len(), curve.y.len());
        prop_assert!(curve.y.iter().all(|y| y.is_finite() && *y >= 0.0));
    }
}
