//! The explorer catalogue: twelve families with adjustable parameters.
//!
//! Entries are compile-time constants. Every operation that takes a name
//! fails with `CatalogError::UnknownDistribution` for names outside the
//! catalogue and is otherwise total.

use distlab_core::types::{CatalogError, DistributionKind, ParamSchema, ParamSpec, ParamValues};
use serde::Serialize;

use crate::error::ModelError;
use crate::families::{DistributionModel, Family};

/// One catalogue entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Display name, unique within the catalogue.
    pub name: &'static str,
    /// Family constructed from the entry's parameters.
    pub family: Family,
    /// Parameter specifications in display order.
    pub params: &'static [(&'static str, ParamSpec)],
    /// Display-only support description.
    pub support: &'static str,
}

impl CatalogEntry {
    /// Continuous or discrete.
    pub fn kind(&self) -> DistributionKind {
        self.family.kind()
    }

    /// Ordered parameter schema.
    pub fn schema(&self) -> ParamSchema {
        ParamSchema::new(self.params.to_vec())
    }

    /// Clamp raw values into the declared ranges.
    pub fn clamp(&self, raw: &ParamValues) -> ParamValues {
        self.schema().clamp(raw)
    }

    /// Clamp `raw` and construct the distribution.
    ///
    /// Returns the validated parameters alongside the model.
    pub fn build(&self, raw: &ParamValues) -> Result<(ParamValues, DistributionModel), ModelError> {
        let validated = self.clamp(raw);
        let model = DistributionModel::build(self.family, &validated)?;
        Ok((validated, model))
    }
}

static CATALOG: [CatalogEntry; 12] = [
    CatalogEntry {
        name: "Normal",
        family: Family::Normal,
        params: &[
            ("loc", ParamSpec::new("Mean (μ)", 0.0, -10.0, 10.0, 0.1)),
            ("scale", ParamSpec::new("Standard deviation (σ)", 1.0, 0.1, 5.0, 0.1)),
        ],
        support: "(-∞, +∞)",
    },
    CatalogEntry {
        name: "Uniform",
        family: Family::Uniform,
        params: &[
            ("loc", ParamSpec::new("Lower bound (a)", 0.0, -5.0, 5.0, 0.1)),
            ("scale", ParamSpec::new("Width (b - a)", 1.0, 0.1, 10.0, 0.1)),
        ],
        support: "[a, b]",
    },
    CatalogEntry {
        name: "Exponential",
        family: Family::Exponential,
        params: &[("scale", ParamSpec::new("Scale (1/λ)", 1.0, 0.1, 5.0, 0.1))],
        support: "[0, +∞)",
    },
    CatalogEntry {
        name: "Gamma",
        family: Family::Gamma,
        params: &[
            ("a", ParamSpec::new("Shape (α)", 2.0, 0.1, 10.0, 0.1)),
            ("scale", ParamSpec::new("Scale (θ)", 1.0, 0.1, 5.0, 0.1)),
        ],
        support: "[0, +∞)",
    },
    CatalogEntry {
        name: "Beta",
        family: Family::Beta,
        params: &[
            ("a", ParamSpec::new("Shape (α)", 2.0, 0.1, 10.0, 0.1)),
            ("b", ParamSpec::new("Shape (β)", 5.0, 0.1, 10.0, 0.1)),
        ],
        support: "[0, 1]",
    },
    CatalogEntry {
        name: "Chi-squared",
        family: Family::ChiSquared,
        params: &[("df", ParamSpec::new("Degrees of freedom (ν)", 3.0, 1.0, 20.0, 1.0))],
        support: "[0, +∞)",
    },
    CatalogEntry {
        name: "Student-t",
        family: Family::StudentT,
        params: &[("df", ParamSpec::new("Degrees of freedom (ν)", 5.0, 1.0, 30.0, 1.0))],
        support: "(-∞, +∞)",
    },
    CatalogEntry {
        name: "F",
        family: Family::FisherF,
        params: &[
            ("dfn", ParamSpec::new("Numerator degrees of freedom", 5.0, 1.0, 20.0, 1.0)),
            ("dfd", ParamSpec::new("Denominator degrees of freedom", 10.0, 1.0, 30.0, 1.0)),
        ],
        support: "[0, +∞)",
    },
    CatalogEntry {
        name: "Binomial",
        family: Family::Binomial,
        params: &[
            ("n", ParamSpec::new("Number of trials (n)", 10.0, 1.0, 100.0, 1.0)),
            ("p", ParamSpec::new("Success probability (p)", 0.3, 0.01, 0.99, 0.01)),
        ],
        support: "{0, 1, 2, ..., n}",
    },
    CatalogEntry {
        name: "Poisson",
        family: Family::Poisson,
        params: &[("mu", ParamSpec::new("Rate (λ)", 3.0, 0.1, 20.0, 0.1))],
        support: "{0, 1, 2, ...}",
    },
    CatalogEntry {
        name: "Geometric",
        family: Family::Geometric,
        params: &[("p", ParamSpec::new("Success probability (p)", 0.3, 0.01, 0.99, 0.01))],
        support: "{1, 2, 3, ...}",
    },
    CatalogEntry {
        name: "Negative Binomial",
        family: Family::NegativeBinomial,
        params: &[
            ("n", ParamSpec::new("Number of successes (r)", 5.0, 1.0, 20.0, 1.0)),
            ("p", ParamSpec::new("Success probability (p)", 0.3, 0.01, 0.99, 0.01)),
        ],
        support: "{0, 1, 2, ...}",
    },
];

/// All catalogue entries in display order.
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Look up the entry registered under `name`.
///
/// # Errors
///
/// `CatalogError::UnknownDistribution` if `name` is not registered.
pub fn lookup(name: &str) -> Result<&'static CatalogEntry, CatalogError> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| CatalogError::unknown(name))
}

/// Catalogue names grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindListing {
    /// Continuous distribution names in catalogue order.
    pub continuous: Vec<&'static str>,
    /// Discrete distribution names in catalogue order.
    pub discrete: Vec<&'static str>,
}

/// Partition the catalogue into continuous and discrete names.
///
/// # Example
///
/// ```
/// use distlab_models::explorer::list_by_kind;
///
/// let listing = list_by_kind();
/// assert_eq!(listing.continuous.len(), 8);
/// assert_eq!(listing.discrete[0], "Binomial");
/// ```
pub fn list_by_kind() -> KindListing {
    let (continuous, discrete): (Vec<&CatalogEntry>, Vec<&CatalogEntry>) =
        CATALOG.iter().partition(|entry| entry.kind().is_continuous());
    KindListing {
        continuous: continuous.into_iter().map(|entry| entry.name).collect(),
        discrete: discrete.into_iter().map(|entry| entry.name).collect(),
    }
}

/// Ordered parameter schema of `name`.
///
/// # Errors
///
/// `CatalogError::UnknownDistribution` for unknown names.
pub fn param_spec(name: &str) -> Result<ParamSchema, CatalogError> {
    Ok(lookup(name)?.schema())
}

/// Validate raw parameter values for `name`.
///
/// Each declared parameter takes the caller's value if present, else the
/// default, saturated into `[min, max]`. Undeclared keys are ignored.
///
/// # Errors
///
/// `CatalogError::UnknownDistribution` for unknown names.
///
/// # Example
///
/// ```
/// use distlab_models::explorer::clamp_params;
/// use std::collections::BTreeMap;
///
/// let mut raw = BTreeMap::new();
/// raw.insert("loc".to_string(), 100.0);
/// raw.insert("scale".to_string(), -1.0);
///
/// let validated = clamp_params("Normal", &raw).unwrap();
/// assert_eq!(validated["loc"], 10.0);
/// assert_eq!(validated["scale"], 0.1);
/// ```
pub fn clamp_params(name: &str, raw: &ParamValues) -> Result<ParamValues, CatalogError> {
    Ok(lookup(name)?.clamp(raw))
}
