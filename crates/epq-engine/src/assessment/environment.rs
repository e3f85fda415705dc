//! Employer scoping and applicant environment dimensions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::MIDPOINT;
use super::constructs::{AJL, CCD, CIL, CVL, ERL, ICI, SCL};
use super::domain::ConstructCode;

/// Role-intensity class derived from the employer's overall average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentClass {
    Low,
    Moderate,
    High,
}

impl EnvironmentClass {
    pub fn from_average(average: f64) -> Self {
        if average >= 3.0 {
            EnvironmentClass::High
        } else if average >= 2.0 {
            EnvironmentClass::Moderate
        } else {
            EnvironmentClass::Low
        }
    }

    /// Applicant item-count cap: higher-intensity roles get a longer instrument.
    pub const fn max_items(self) -> u32 {
        match self {
            EnvironmentClass::Low => 25,
            EnvironmentClass::Moderate => 32,
            EnvironmentClass::High => 50,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EnvironmentClass::Low => "low",
            EnvironmentClass::Moderate => "moderate",
            EnvironmentClass::High => "high",
        }
    }

    pub const fn tier(self) -> EmployerBand {
        match self {
            EnvironmentClass::Low => EmployerBand::Core,
            EnvironmentClass::Moderate => EmployerBand::Standard,
            EnvironmentClass::High => EmployerBand::Advanced,
        }
    }
}

/// Employer-facing reading of the same thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployerBand {
    Core,
    Standard,
    Advanced,
}

impl EmployerBand {
    pub const fn label(self) -> &'static str {
        match self {
            EmployerBand::Core => "Core",
            EmployerBand::Standard => "Standard",
            EmployerBand::Advanced => "Advanced",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            EmployerBand::Core => "Core Preference (below 2.0): prefers lower environmental load",
            EmployerBand::Standard => "Standard Preference (2.0 to 2.9): flexible across environments",
            EmployerBand::Advanced => {
                "Advanced Preference (3.0 and above): prefers higher environmental load"
            }
        }
    }
}

/// Result of scoping an applicant assessment from employer answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScope {
    pub environment: EnvironmentClass,
    pub max_items: u32,
    pub overall_average: f64,
    pub band: EmployerBand,
    pub answered: usize,
}

impl AssessmentScope {
    pub fn from_average(overall_average: f64, answered: usize) -> Self {
        let environment = EnvironmentClass::from_average(overall_average);
        Self {
            environment,
            max_items: environment.max_items(),
            overall_average,
            band: environment.tier(),
            answered,
        }
    }
}

/// Rescale a 1..4 construct average to 0..100. Non-finite input reads as the midpoint.
pub fn scale_to_percent(value: f64) -> u8 {
    let value = if value.is_finite() { value } else { MIDPOINT };
    let scaled = (((value - 1.0) / 3.0) * 100.0).round().clamp(0.0, 100.0);
    scaled as u8
}

/// Six workplace dimensions, each 0..100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    pub autonomy: u8,
    pub pace: u8,
    pub structure: u8,
    pub collaboration: u8,
    pub innovation: u8,
    pub ambiguity: u8,
}

impl EnvironmentProfile {
    /// Missing constructs read as the midpoint so incomplete sessions drift toward neutral.
    pub fn from_construct_scores(scores: &BTreeMap<ConstructCode, f64>) -> Self {
        let read = |code: &str| {
            scores
                .get(&ConstructCode::from(code))
                .copied()
                .filter(|value| value.is_finite())
                .unwrap_or(MIDPOINT)
        };

        let scl = read(SCL);
        let ccd = read(CCD);
        let cil = read(CIL);
        let cvl = read(CVL);
        let erl = read(ERL);
        let ici = read(ICI);
        let ajl = read(AJL);

        Self {
            autonomy: scale_to_percent(ajl),
            pace: scale_to_percent((ccd + cil) / 2.0),
            structure: scale_to_percent(scl),
            collaboration: scale_to_percent((ici + (5.0 - erl)) / 2.0),
            innovation: scale_to_percent((cvl + (5.0 - scl)) / 2.0),
            ambiguity: scale_to_percent((cil + (5.0 - scl)) / 2.0),
        }
    }

    pub fn dimensions(&self) -> [(&'static str, u8); 6] {
        [
            ("autonomy", self.autonomy),
            ("pace", self.pace),
            ("structure", self.structure),
            ("collaboration", self.collaboration),
            ("innovation", self.innovation),
            ("ambiguity", self.ambiguity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employer_average_selects_scope() {
        let scope = AssessmentScope::from_average(2.4, 20);
        assert_eq!(scope.environment.label(), "moderate");
        assert_eq!(scope.max_items, 32);
        assert_eq!(scope.band, EmployerBand::Standard);

        assert_eq!(AssessmentScope::from_average(3.0, 20).max_items, 50);
        assert_eq!(AssessmentScope::from_average(1.95, 20).max_items, 25);
    }

    #[test]
    fn scaling_hits_endpoints_and_rounds() {
        assert_eq!(scale_to_percent(1.0), 0);
        assert_eq!(scale_to_percent(4.0), 100);
        assert_eq!(scale_to_percent(2.5), 50);
        assert_eq!(scale_to_percent(2.0), 33);
        assert_eq!(scale_to_percent(3.0), 67);
        assert_eq!(scale_to_percent(9.0), 100);
        assert_eq!(scale_to_percent(f64::NAN), 50);
    }

    #[test]
    fn empty_scores_give_neutral_profile() {
        let profile = EnvironmentProfile::from_construct_scores(&BTreeMap::new());
        assert!(profile.dimensions().iter().all(|(_, value)| *value == 50));
    }

    #[test]
    fn erl_is_inverted_for_collaboration() {
        let mut scores = BTreeMap::new();
        scores.insert(ConstructCode::from(ICI), 4.0);
        scores.insert(ConstructCode::from(ERL), 1.0);
        scores.insert(ConstructCode::from(SCL), 4.0);
        scores.insert(ConstructCode::from(CVL), 1.0);
        let profile = EnvironmentProfile::from_construct_scores(&scores);
        assert_eq!(profile.collaboration, 100);
        assert_eq!(profile.innovation, 0);
        assert_eq!(profile.structure, 100);
        assert_eq!(profile.pace, 50);
    }
}
