//! Parameter specifications and clamping.
//!
//! Every adjustable parameter carries a `[min, max]` range. Raw values are
//! saturated into that range before they reach a distribution, so an
//! interactive caller always gets a valid result instead of an error.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::error::DistributionError;

/// Parameter values keyed by parameter name.
pub type ParamValues = BTreeMap<String, f64>;

/// Specification of a single adjustable parameter.
///
/// # Example
///
/// ```
/// use distlab_core::types::ParamSpec;
///
/// let spec = ParamSpec::new("Success probability (p)", 0.3, 0.01, 0.99, 0.01);
/// assert_eq!(spec.clamp(1.5), 0.99);
/// assert_eq!(spec.clamp(f64::NAN), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Display label.
    pub label: &'static str,
    /// Value used when the caller supplies none.
    pub default: f64,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Slider step size (display only).
    pub step: f64,
}

impl ParamSpec {
    /// Create a new parameter specification.
    pub const fn new(label: &'static str, default: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            label,
            default,
            min,
            max,
            step,
        }
    }

    /// Saturate `value` into `[min, max]`.
    ///
    /// NaN has no position on the slider and is replaced by the default.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.max(self.min).min(self.max)
    }
}

/// Ordered parameter schema of one distribution.
///
/// Declaration order is preserved for display and serialisation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSchema {
    entries: Vec<(&'static str, ParamSpec)>,
}

impl ParamSchema {
    /// Create a schema from `(name, spec)` pairs in display order.
    pub fn new(entries: Vec<(&'static str, ParamSpec)>) -> Self {
        Self { entries }
    }

    /// Schema with no adjustable parameters.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Iterate over `(name, spec)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamSpec)> + '_ {
        self.entries.iter().map(|(name, spec)| (*name, spec))
    }

    /// Look up the specification of `name`.
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, spec)| spec)
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameter is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared defaults.
    pub fn defaults(&self) -> ParamValues {
        self.entries
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.default))
            .collect()
    }

    /// Validate raw caller values against the schema.
    ///
    /// For every declared parameter the caller's value is taken if present,
    /// else the default, and saturated into `[min, max]`. Undeclared keys are
    /// dropped. The function is total and idempotent.
    pub fn clamp(&self, raw: &ParamValues) -> ParamValues {
        self.entries
            .iter()
            .map(|(name, spec)| {
                let value = raw.get(*name).copied().unwrap_or(spec.default);
                (name.to_string(), spec.clamp(value))
            })
            .collect()
    }
}

impl Serialize for ParamSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, spec) in &self.entries {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

/// Fetch a required parameter from validated values.
///
/// # Errors
///
/// Returns `DistributionError::MissingParameter` if `name` is absent.
pub fn require(values: &ParamValues, name: &'static str) -> Result<f64, DistributionError> {
    values
        .get(name)
        .copied()
        .ok_or(DistributionError::MissingParameter(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn binomial_schema() -> ParamSchema {
        ParamSchema::new(vec![
            ("n", ParamSpec::new("Number of trials (n)", 10.0, 1.0, 100.0, 1.0)),
            ("p", ParamSpec::new("Success probability (p)", 0.3, 0.01, 0.99, 0.01)),
        ])
    }

    #[test]
    fn test_clamp_empty_input_returns_defaults() {
        let schema = binomial_schema();
        let validated = schema.clamp(&ParamValues::new());
        assert_eq!(validated, schema.defaults());
        assert_eq!(validated["n"], 10.0);
        assert_eq!(validated["p"], 0.3);
    }

    #[test]
    fn test_clamp_saturates_and_ignores_unknown_keys() {
        let schema = binomial_schema();
        let mut raw = ParamValues::new();
        raw.insert("n".into(), 500.0);
        raw.insert("p".into(), -1.0);
        raw.insert("loc".into(), 3.0);

        let validated = schema.clamp(&raw);
        assert_eq!(validated.len(), 2);
        assert_eq!(validated["n"], 100.0);
        assert_eq!(validated["p"], 0.01);
        assert!(!validated.contains_key("loc"));
    }

    #[test]
    fn test_clamp_non_finite_values() {
        let spec = ParamSpec::new("Rate (λ)", 3.0, 0.1, 20.0, 0.1);
        assert_eq!(spec.clamp(f64::INFINITY), 20.0);
        assert_eq!(spec.clamp(f64::NEG_INFINITY), 0.1);
        assert_eq!(spec.clamp(f64::NAN), 3.0);
    }

    #[test]
    fn test_schema_lookup_and_order() {
        let schema = binomial_schema();
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
        assert_eq!(schema.get("p").map(|s| s.max), Some(0.99));
        assert!(schema.get("q").is_none());
        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["n", "p"]);
        assert!(ParamSchema::empty().is_empty());
    }

    #[test]
    fn test_require() {
        let values = binomial_schema().defaults();
        assert_eq!(require(&values, "n").unwrap(), 10.0);
        assert_eq!(
            require(&values, "df"),
            Err(DistributionError::MissingParameter("df"))
        );
    }

    proptest! {
        #[test]
        fn prop_clamp_is_idempotent(n in proptest::num::f64::ANY, p in proptest::num::f64::ANY) {
            let schema = binomial_schema();
            let mut raw = ParamValues::new();
            raw.insert("n".into(), n);
            raw.insert("p".into(), p);

            let once = schema.clamp(&raw);
            let twice = schema.clamp(&once);
            prop_assert_eq!(&once, &twice);
        }

        #[test]
        fn prop_clamp_stays_in_range(n in -1e6f64..1e6, p in -10.0f64..10.0) {
            let schema = binomial_schema();
            let mut raw = ParamValues::new();
            raw.insert("n".into(), n);
            raw.insert("p".into(), p);

            let validated = schema.clamp(&raw);
            for (name, spec) in schema.iter() {
                let value = validated[name];
                prop_assert!(value >= spec.min && value <= spec.max);
            }
        }
    }
}
