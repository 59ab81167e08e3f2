//! Real-world scenario text for each catalogue distribution.

use distlab_core::types::ParamValues;

use super::catalog::lookup;
use crate::families::Family;

/// Text returned for names without a scenario.
pub const NO_SCENARIO: &str = "No application scenario available.";

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Describe a real-world situation modelled by `name` with the given
/// parameters.
///
/// Parameters are clamped first, so the text always quotes values the
/// distribution actually uses. Unknown names yield [`NO_SCENARIO`].
///
/// # Example
///
/// ```
/// use distlab_models::explorer::scenario_text;
/// use std::collections::BTreeMap;
///
/// let mut raw = BTreeMap::new();
/// raw.insert("mu".to_string(), 4.5);
///
/// let text = scenario_text("Poisson", &raw);
/// assert!(text.contains("4.5 customers"));
/// ```
pub fn scenario_text(name: &str, raw: &ParamValues) -> String {
    let Ok(entry) = lookup(name) else {
        return NO_SCENARIO.to_string();
    };
    let params = entry.clamp(raw);
    let value = |key: &str| params.get(key).copied().unwrap_or(f64::NAN);

    match entry.family {
        Family::Normal => format!(
            "Adult heights: a population whose mean height is {:.1} cm with a standard deviation of {:.1} cm.",
            value("loc"),
            value("scale")
        ),
        Family::Uniform => format!(
            "Random number generation: values spread evenly over the interval [{:.1}, {:.1}].",
            value("loc"),
            value("loc") + value("scale")
        ),
        Family::Exponential => format!(
            "Equipment lifetime: how long an electronic device lasts when its mean life is {:.1} years.",
            value("scale")
        ),
        Family::Gamma => format!(
            "Waiting time: the time until customer number {:.0} arrives when customers arrive on average every {:.1} minutes.",
            value("a"),
            value("scale")
        ),
        Family::Beta => format!(
            "Success rate: belief about the true success rate after observing {:.0} successes and {:.0} failures.",
            value("a"),
            value("b")
        ),
        Family::ChiSquared => format!(
            "Variance testing: the sum of squares of {:.0} independent standard normal variables.",
            value("df")
        ),
        Family::StudentT => format!(
            "Small-sample means: the standardised mean of a sample of size {:.0}+1 with unknown variance.",
            value("df")
        ),
        Family::FisherF => format!(
            "Variance ratio test: the ratio of two independent chi-squared variables with {:.0} and {:.0} degrees of freedom.",
            value("dfn"),
            value("dfd")
        ),
        Family::Binomial => format!(
            "Quality control: the number of passing items among {:.0} products when each passes with probability {}.",
            value("n"),
            percent(value("p"))
        ),
        Family::Poisson => format!(
            "Store traffic: the number of arrivals in an hour when on average {:.1} customers arrive per hour.",
            value("mu")
        ),
        Family::Geometric => format!(
            "First success: the number of attempts needed for the first success when each succeeds with probability {}.",
            percent(value("p"))
        ),
        Family::NegativeBinomial => format!(
            "Repeated trials: the number of failures before reaching {:.0} successes when each trial succeeds with probability {}.",
            value("n"),
            percent(value("p"))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::catalog::entries;

    #[test]
    fn test_every_entry_has_a_scenario() {
        for entry in entries() {
            let text = scenario_text(entry.name, &ParamValues::new());
            assert!(!text.is_empty());
            assert_ne!(text, NO_SCENARIO, "{} has no scenario", entry.name);
            assert!(!text.contains("NaN"), "{}: {}", entry.name, text);
        }
    }

    #[test]
    fn test_scenario_quotes_clamped_values() {
        let mut raw = ParamValues::new();
        raw.insert("n".to_string(), 250.0);
        raw.insert("p".to_string(), 0.3);
        let text = scenario_text("Binomial", &raw);
        assert!(text.contains("among 100 products"), "{}", text);
        assert!(text.contains("30.0%"), "{}", text);
    }

    #[test]
    fn test_normal_defaults() {
        let text = scenario_text("Normal", &ParamValues::new());
        assert!(text.contains("0.0 cm"));
        assert!(text.contains("1.0 cm"));
    }

    #[test]
    fn test_unknown_name_placeholder() {
        assert_eq!(scenario_text("Cauchy", &ParamValues::new()), NO_SCENARIO);
    }
}
