//! Response-time and per-construct variance signals. Descriptive only, never a gate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ConstructCode, ItemId, ResolvedAnswer};

pub const VERY_FAST_RATIO: f64 = 0.4;
pub const VERY_SLOW_RATIO: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyFlag {
    VeryFast,
    VerySlow,
}

impl LatencyFlag {
    pub const fn label(self) -> &'static str {
        match self {
            LatencyFlag::VeryFast => "very_fast",
            LatencyFlag::VerySlow => "very_slow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyObservation {
    pub item_id: ItemId,
    pub latency_seconds: f64,
    pub flag: Option<LatencyFlag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalytics {
    pub median_latency_seconds: Option<f64>,
    pub latency: Vec<LatencyObservation>,
    /// `None` for constructs with fewer than two observations.
    pub consistency: BTreeMap<ConstructCode, Option<f64>>,
    pub very_fast_count: usize,
    pub very_slow_count: usize,
}

pub fn analyze(answers: &[ResolvedAnswer]) -> SessionAnalytics {
    let timed: Vec<(ItemId, f64)> = answers
        .iter()
        .filter_map(|answer| {
            answer
                .latency_seconds
                .filter(|latency| latency.is_finite() && *latency >= 0.0)
                .map(|latency| (answer.item_id, latency))
        })
        .collect();

    let median_latency_seconds = median(timed.iter().map(|(_, latency)| *latency).collect());

    let latency: Vec<LatencyObservation> = timed
        .iter()
        .map(|&(item_id, latency_seconds)| LatencyObservation {
            item_id,
            latency_seconds,
            flag: median_latency_seconds.and_then(|median| flag_latency(latency_seconds, median)),
        })
        .collect();

    let very_fast_count = latency
        .iter()
        .filter(|observation| observation.flag == Some(LatencyFlag::VeryFast))
        .count();
    let very_slow_count = latency
        .iter()
        .filter(|observation| observation.flag == Some(LatencyFlag::VerySlow))
        .count();

    let mut observed: BTreeMap<ConstructCode, Vec<f64>> = BTreeMap::new();
    for answer in answers {
        for (construct, value) in &answer.contribution {
            observed
                .entry(construct.clone())
                .or_default()
                .push(f64::from(*value));
        }
    }

    let consistency = observed
        .into_iter()
        .map(|(construct, values)| {
            let score = sample_stdev(&values).map(|stdev| (1.0 - stdev).max(0.0));
            (construct, score)
        })
        .collect();

    SessionAnalytics {
        median_latency_seconds,
        latency,
        consistency,
        very_fast_count,
        very_slow_count,
    }
}

fn flag_latency(latency: f64, median: f64) -> Option<LatencyFlag> {
    if median <= 0.0 {
        return None;
    }
    if latency < VERY_FAST_RATIO * median {
        Some(LatencyFlag::VeryFast)
    } else if latency > VERY_SLOW_RATIO * median {
        Some(LatencyFlag::VerySlow)
    } else {
        None
    }
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

fn sample_stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    Some(variance.sqrt())
}
