use serde::{Deserialize, Serialize};

use super::classify::{classify_quadrant, confidence_label, ConfidenceLabel, Quadrant};
use super::config::ScoringConfig;
use super::reliability::split_half_reliability;
use crate::bank::{Dimension, Question, ATTENTION_CHECK_ID, PARADOX_PROBE_IDS, SOCIAL_DESIRABILITY_IDS};
use crate::responses::ResponseMap;

/// Neutral midpoint used for any missing response.
pub const NEUTRAL: i32 = 3;

/// Weight totals below this are treated as "no data" and yield the neutral mean.
const MIN_WEIGHT_TOTAL: f64 = 1e-9;

/// Scores and quality signals for one set of responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentScores {
    pub anxiety: u8,
    pub avoidance: u8,
    pub reliability: f64,
    pub attention_passed: bool,
    pub social_desirability: f64,
    pub disorganized_lean: bool,
    pub quadrant: Quadrant,
    pub confidence_label: ConfidenceLabel,
}

/// Weighted per-dimension means on the 1-5 response scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMeans {
    pub anxiety: f64,
    pub avoidance: f64,
}

#[derive(Debug, Default)]
struct Accumulator {
    sum: f64,
    weight: f64,
}

impl Accumulator {
    fn add(&mut self, value: f64, weight: f64) {
        let weight = weight.max(0.0);
        self.sum += value * weight;
        self.weight += weight;
    }

    fn mean(&self) -> f64 {
        if self.weight < MIN_WEIGHT_TOTAL {
            f64::from(NEUTRAL)
        } else {
            self.sum / self.weight
        }
    }
}

/// Raw response for `id`, clamped to 1-5. `None` when unanswered.
pub fn raw_response(responses: &ResponseMap, id: &str) -> Option<i32> {
    responses.get(id).map(|v| (*v).clamp(1, 5))
}

/// Reversed items score as (6 - raw).
pub fn recode(question: &Question, raw: i32) -> i32 {
    if question.reversed {
        6 - raw
    } else {
        raw
    }
}

/// Weighted means over the core items in `items`.
///
/// With `impute_missing`, unanswered items count as [`NEUTRAL`]; otherwise
/// they are skipped. A dimension with no contributing weight reads as neutral.
pub fn dimension_means<'a, I>(responses: &ResponseMap, items: I, impute_missing: bool) -> DimensionMeans
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut anxiety = Accumulator::default();
    let mut avoidance = Accumulator::default();

    for q in items.into_iter().filter(|q| q.is_core()) {
        let raw = match raw_response(responses, &q.id) {
            Some(raw) => raw,
            None if impute_missing => NEUTRAL,
            None => continue,
        };
        let value = f64::from(recode(q, raw));
        match q.dimension {
            Dimension::Anxiety => anxiety.add(value, q.weight),
            Dimension::Avoidance => avoidance.add(value, q.weight),
            Dimension::None => {}
        }
    }

    DimensionMeans {
        anxiety: anxiety.mean(),
        avoidance: avoidance.mean(),
    }
}

/// Map a 1-5 mean onto 0-100.
pub fn mean_to_score(mean: f64) -> u8 {
    let pct = ((mean - 1.0) / 4.0) * 100.0;
    if pct.is_nan() {
        return 50;
    }
    pct.clamp(0.0, 100.0).round() as u8
}

/// Score a response map against `items`.
///
/// Never fails: missing answers default to [`NEUTRAL`], out-of-range answers
/// are clamped, and empty dimensions read as the midpoint.
pub fn score_responses(responses: &ResponseMap, items: &[Question], config: &ScoringConfig) -> AttachmentScores {
    let means = dimension_means(responses, items, true);
    let anxiety = mean_to_score(means.anxiety);
    let avoidance = mean_to_score(means.avoidance);

    let scored: Vec<f64> = items
        .iter()
        .filter(|q| q.is_core())
        .map(|q| f64::from(recode(q, raw_response(responses, &q.id).unwrap_or(NEUTRAL))))
        .collect();
    let reliability = split_half_reliability(&scored, config.reliability.min_items);

    let attention_passed = attention_passed(responses, items, config);
    let social_desirability = social_desirability(responses, items);

    let probe = paradox_probe(responses, items);
    let lean = &config.disorganized;
    let disorganized_lean =
        anxiety >= lean.min_score && avoidance >= lean.min_score && probe >= lean.probe_min;

    let quadrant = classify_quadrant(anxiety, avoidance, disorganized_lean, &config.quadrant);
    let confidence_label = confidence_label(reliability, anxiety, avoidance, &config.confidence);

    tracing::debug!(
        anxiety,
        avoidance,
        reliability,
        answered = items.iter().filter(|q| responses.contains_key(&q.id)).count(),
        %quadrant,
        %confidence_label,
        "scored responses"
    );

    AttachmentScores {
        anxiety,
        avoidance,
        reliability,
        attention_passed,
        social_desirability,
        disorganized_lean,
        quadrant,
        confidence_label,
    }
}

/// Designated id first, then any flagged item from `items`; duplicates dropped.
fn designated_ids<'a>(
    ids: &[&'a str],
    items: &'a [Question],
    flagged: impl Fn(&Question) -> bool,
) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = ids.to_vec();
    for q in items.iter().filter(|q| flagged(*q)) {
        if !out.contains(&q.id.as_str()) {
            out.push(q.id.as_str());
        }
    }
    out
}

fn attention_passed(responses: &ResponseMap, items: &[Question], config: &ScoringConfig) -> bool {
    let candidates = designated_ids(&[ATTENTION_CHECK_ID], items, |q| q.is_attention_check);
    match candidates.iter().find_map(|id| raw_response(responses, id)) {
        Some(raw) => config.attention_rule.passes(raw),
        None => {
            tracing::debug!(?candidates, "attention check unanswered");
            false
        }
    }
}

/// Mean of the social-desirability items, normalized to 0-1.
///
/// Uses the flagged items in `items` when there are any, else the built-in ids.
fn social_desirability(responses: &ResponseMap, items: &[Question]) -> f64 {
    let flagged: Vec<&str> = items
        .iter()
        .filter(|q| q.is_social_desirability)
        .map(|q| q.id.as_str())
        .collect();
    let ids: &[&str] = if flagged.is_empty() { &SOCIAL_DESIRABILITY_IDS } else { &flagged };

    let total: i32 = ids
        .iter()
        .map(|id| raw_response(responses, id).unwrap_or(NEUTRAL))
        .sum();
    let mean = f64::from(total) / ids.len() as f64;
    ((mean - 1.0) / 4.0).clamp(0.0, 1.0)
}

/// First answered paradox probe, or neutral.
fn paradox_probe(responses: &ResponseMap, items: &[Question]) -> i32 {
    designated_ids(&PARADOX_PROBE_IDS, items, Question::is_paradox)
        .iter()
        .find_map(|id| raw_response(responses, id))
        .unwrap_or(NEUTRAL)
}
