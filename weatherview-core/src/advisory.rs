use serde::Serialize;

/// Sunscreen advisory tier derived from the risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
    Low,
    Moderate,
    High,
}

impl AdvisoryLevel {
    pub fn message(&self) -> &'static str {
        match self {
            AdvisoryLevel::High => "High Risk: Apply Sunscreen!",
            AdvisoryLevel::Moderate => "Moderate Risk: Sunscreen Recommended",
            AdvisoryLevel::Low => "Low Risk: No Need for Sunscreen",
        }
    }
}

impl std::fmt::Display for AdvisoryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Map a risk factor to its advisory tier. First match wins; NaN is `Low`.
pub fn derive_advisory(risk_factor: f64) -> AdvisoryLevel {
    if risk_factor >= 4.0 {
        AdvisoryLevel::High
    } else if risk_factor >= 2.0 {
        AdvisoryLevel::Moderate
    } else {
        AdvisoryLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exact() {
        assert_eq!(derive_advisory(1.9), AdvisoryLevel::Low);
        assert_eq!(derive_advisory(2.0), AdvisoryLevel::Moderate);
        assert_eq!(derive_advisory(3.9), AdvisoryLevel::Moderate);
        assert_eq!(derive_advisory(4.0), AdvisoryLevel::High);
    }

    #[test]
    fn non_decreasing_as_risk_grows() {
        let mut previous = derive_advisory(-10.0);
        let mut risk = -10.0;
        while risk <= 20.0 {
            let current = derive_advisory(risk);
            assert!(current >= previous, "tier dropped at {risk}");
            previous = current;
            risk += 0.05;
        }
        assert_eq!(previous, AdvisoryLevel::High);
    }

    #[test]
    fn unvalidated_inputs_fall_through_to_low() {
        assert_eq!(derive_advisory(f64::NAN), AdvisoryLevel::Low);
        assert_eq!(derive_advisory(-3.0), AdvisoryLevel::Low);
        assert_eq!(derive_advisory(f64::NEG_INFINITY), AdvisoryLevel::Low);
        assert_eq!(derive_advisory(f64::INFINITY), AdvisoryLevel::High);
    }

    #[test]
    fn messages_match_tiers() {
        assert_eq!(AdvisoryLevel::High.message(), "High Risk: Apply Sunscreen!");
        assert_eq!(AdvisoryLevel::Moderate.to_string(), "Moderate Risk: Sunscreen Recommended");
        assert_eq!(AdvisoryLevel::Low.message(), "Low Risk: No Need for Sunscreen");
    }
}
