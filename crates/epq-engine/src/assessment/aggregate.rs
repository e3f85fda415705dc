//! Per-construct accumulation over one session.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::domain::{ConstructCode, ResolvedAnswer, ScoreVector};

/// Neutral construct average reported when nothing was observed.
pub const MIDPOINT: f64 = 2.5;

/// Coarse classification of an overall average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Low,
    Moderate,
    High,
}

impl Band {
    pub fn from_average(average: f64) -> Self {
        if average >= 3.0 {
            Band::High
        } else if average >= 2.0 {
            Band::Moderate
        } else {
            Band::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Band::Low => "Low",
            Band::Moderate => "Moderate",
            Band::High => "High",
        }
    }
}

/// Running totals for one session. Only constructs present in an answer are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionAccumulator {
    totals: BTreeMap<ConstructCode, u64>,
    counts: BTreeMap<ConstructCode, u32>,
}

impl SessionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, answer: &ResolvedAnswer) {
        self.accumulate_scores(&answer.contribution);
    }

    pub fn accumulate_scores(&mut self, scores: &ScoreVector) {
        for (construct, value) in scores {
            *self.totals.entry(construct.clone()).or_insert(0) += u64::from(*value);
            *self.counts.entry(construct.clone()).or_insert(0) += 1;
        }
    }

    /// Snapshot the session. Constructs in `universe` that were never observed are reported
    /// with count 0 at the midpoint and do not enter the overall average.
    pub fn finalize(&self, universe: &BTreeSet<ConstructCode>) -> SessionAggregate {
        let mut totals = BTreeMap::new();
        let mut counts = BTreeMap::new();
        let mut averages = BTreeMap::new();

        let constructs: BTreeSet<&ConstructCode> =
            universe.iter().chain(self.totals.keys()).collect();

        let mut observed = Vec::new();
        for construct in constructs {
            let total = self.totals.get(construct).copied().unwrap_or(0);
            let count = self.counts.get(construct).copied().unwrap_or(0);
            let average = if count == 0 {
                MIDPOINT
            } else {
                let average = total as f64 / f64::from(count);
                observed.push(average);
                average
            };
            totals.insert(construct.clone(), total);
            counts.insert(construct.clone(), count);
            averages.insert(construct.clone(), average);
        }

        let overall_average = if observed.is_empty() {
            MIDPOINT
        } else {
            observed.iter().sum::<f64>() / observed.len() as f64
        };

        SessionAggregate {
            totals,
            counts,
            averages,
            overall_average,
            band: Band::from_average(overall_average),
        }
    }
}

/// Immutable per-session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAggregate {
    pub totals: BTreeMap<ConstructCode, u64>,
    pub counts: BTreeMap<ConstructCode, u32>,
    pub averages: BTreeMap<ConstructCode, f64>,
    pub overall_average: f64,
    pub band: Band,
}

impl SessionAggregate {
    pub fn from_answers<'a>(
        answers: impl IntoIterator<Item = &'a ResolvedAnswer>,
        universe: &BTreeSet<ConstructCode>,
    ) -> Self {
        let mut accumulator = SessionAccumulator::new();
        for answer in answers {
            accumulator.accumulate(answer);
        }
        accumulator.finalize(universe)
    }

    /// No construct received a single observation: every figure is a default.
    pub fn is_degenerate(&self) -> bool {
        self.counts.values().all(|count| *count == 0)
    }

    pub fn average(&self, construct: &str) -> Option<f64> {
        self.averages.get(&ConstructCode::from(construct)).copied()
    }

    pub fn count(&self, construct: &str) -> u32 {
        self.counts
            .get(&ConstructCode::from(construct))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, u32)]) -> ScoreVector {
        entries
            .iter()
            .map(|(code, value)| (ConstructCode::from(*code), *value))
            .collect()
    }

    fn universe(codes: &[&str]) -> BTreeSet<ConstructCode> {
        codes.iter().map(|code| ConstructCode::from(*code)).collect()
    }

    #[test]
    fn overall_average_is_mean_of_construct_averages() {
        let mut accumulator = SessionAccumulator::new();
        accumulator.accumulate_scores(&scores(&[("SCL", 3), ("AJL", 1)]));
        accumulator.accumulate_scores(&scores(&[("SCL", 3)]));
        accumulator.accumulate_scores(&scores(&[("SCL", 3)]));

        let aggregate = accumulator.finalize(&universe(&["SCL", "AJL"]));
        assert_eq!(aggregate.average("SCL"), Some(3.0));
        assert_eq!(aggregate.average("AJL"), Some(1.0));
        assert_eq!(aggregate.count("SCL"), 3);
        assert!((aggregate.overall_average - 2.0).abs() < f64::EPSILON);
        assert_eq!(aggregate.band, Band::Moderate);
    }

    #[test]
    fn unobserved_constructs_report_midpoint_without_diluting() {
        let mut accumulator = SessionAccumulator::new();
        accumulator.accumulate_scores(&scores(&[("CVL", 4)]));
        accumulator.accumulate_scores(&ScoreVector::new());

        let aggregate = accumulator.finalize(&universe(&["CVL", "MSD"]));
        assert_eq!(aggregate.count("MSD"), 0);
        assert_eq!(aggregate.average("MSD"), Some(MIDPOINT));
        assert_eq!(aggregate.overall_average, 4.0);
        assert_eq!(aggregate.band, Band::High);
        assert!(!aggregate.is_degenerate());
    }

    #[test]
    fn empty_session_is_degenerate_not_an_error() {
        let aggregate = SessionAccumulator::new().finalize(&universe(&["SCL"]));
        assert!(aggregate.is_degenerate());
        assert_eq!(aggregate.overall_average, MIDPOINT);
        assert_eq!(aggregate.band, Band::Moderate);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(Band::from_average(3.0), Band::High);
        assert_eq!(Band::from_average(2.99), Band::Moderate);
        assert_eq!(Band::from_average(2.0), Band::Moderate);
        assert_eq!(Band::from_average(1.99), Band::Low);
    }
}
