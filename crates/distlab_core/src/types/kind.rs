//! Continuous/discrete distribution kind.

use serde::Serialize;

/// Whether a distribution has a density (continuous) or a mass function
/// (discrete).
///
/// # Example
///
/// ```
/// use distlab_core::types::DistributionKind;
///
/// assert_eq!(DistributionKind::Continuous.as_str(), "continuous");
/// assert!(DistributionKind::Discrete.is_discrete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Density-based distribution over the reals.
    Continuous,
    /// Mass-based distribution over the integers.
    Discrete,
}

impl DistributionKind {
    /// Return the lowercase string representation.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionKind::Continuous => "continuous",
            DistributionKind::Discrete => "discrete",
        }
    }

    /// True for [`DistributionKind::Continuous`].
    #[inline]
    pub fn is_continuous(&self) -> bool {
        matches!(self, DistributionKind::Continuous)
    }

    /// True for [`DistributionKind::Discrete`].
    #[inline]
    pub fn is_discrete(&self) -> bool {
        matches!(self, DistributionKind::Discrete)
    }
}

impl std::fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(DistributionKind::Continuous.is_continuous());
        assert!(!DistributionKind::Continuous.is_discrete());
        assert!(DistributionKind::Discrete.is_discrete());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", DistributionKind::Continuous), "continuous");
        assert_eq!(format!("{}", DistributionKind::Discrete), "discrete");
    }
}
