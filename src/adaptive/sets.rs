use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Lean;
use crate::bank::{Dimension, Question, QuestionBank};
use crate::responses::ResponseMap;
use crate::scoring::dimension_means;

/// Share of content slots used for seed items; the rest become follow-ups.
const SEED_SHARE: f64 = 0.6;

/// Position of the attention check in a reordered quick set.
const ATTENTION_INDEX: usize = 2;

/// Shape of a quick set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QuickSetOptions {
    /// Maximum number of items, quality checks included
    pub total: usize,
    /// Draw from scenario items before core catalog items
    pub prefer_scenarios: bool,
    /// Reserve one attention check and one social-desirability item
    pub include_quality_checks: bool,
}

impl Default for QuickSetOptions {
    fn default() -> Self {
        Self {
            total: 8,
            prefer_scenarios: true,
            include_quality_checks: true,
        }
    }
}

impl QuickSetOptions {
    /// Six items, core catalog first, quality checks included.
    pub fn mini_screener() -> Self {
        Self {
            total: 6,
            prefer_scenarios: false,
            include_quality_checks: true,
        }
    }
}

/// Candidate pools for one quick set, ordered per `prefer_scenarios`.
struct Pools<'a> {
    anxious: Vec<&'a Question>,
    avoidant: Vec<&'a Question>,
    secure: Vec<&'a Question>,
    paradox: Vec<&'a Question>,
}

impl<'a> Pools<'a> {
    fn new(bank: &'a QuestionBank, prefer_scenarios: bool) -> Self {
        let (first, second) = if prefer_scenarios {
            (&bank.scenarios, &bank.core)
        } else {
            (&bank.core, &bank.scenarios)
        };
        let pool = |pred: fn(&Question) -> bool| -> Vec<&'a Question> {
            first.iter().chain(second.iter()).filter(|&q| pred(q)).collect()
        };

        Self {
            anxious: pool(|q| q.is_core() && q.dimension == Dimension::Anxiety && !q.reversed),
            avoidant: pool(|q| q.is_core() && q.dimension == Dimension::Avoidance && !q.reversed),
            secure: pool(|q| q.is_core() && q.reversed),
            paradox: pool(|q| q.is_paradox() && q.is_selectable()),
        }
    }

    fn content(&self) -> Vec<&'a Question> {
        self.anxious
            .iter()
            .chain(self.avoidant.iter())
            .chain(self.secure.iter())
            .copied()
            .collect()
    }
}

/// Uniform draw from `pool`, skipping anything already picked.
fn draw<'a, R: Rng + ?Sized>(pool: &[&'a Question], picked: &[&'a Question], rng: &mut R) -> Option<&'a Question> {
    let candidates: Vec<&'a Question> = pool
        .iter()
        .copied()
        .filter(|q| !picked.iter().any(|p| p.id == q.id))
        .collect();
    candidates.choose(rng).copied()
}

/// Assemble a short question set: quality checks, seed items from each pole,
/// one paradox probe when follow-up room remains, then random fill.
///
/// The result has unique ids and at most `options.total` items. When it holds
/// an attention check and more than three items, the attention check sits at
/// index 2; otherwise it is appended after the shuffled content.
pub fn build_quick_set<'a, R: Rng + ?Sized>(
    bank: &'a QuestionBank,
    options: &QuickSetOptions,
    rng: &mut R,
) -> Vec<&'a Question> {
    let total = options.total;
    let pools = Pools::new(bank, options.prefer_scenarios);
    let mut picked: Vec<&'a Question> = Vec::with_capacity(total + 2);

    if options.include_quality_checks {
        if let Some(attention) = bank.attention_check() {
            picked.push(attention);
        }
        if let Some(sd) = bank.social_desirability_items().choose(rng).copied() {
            picked.push(sd);
        }
    }

    let content_slots = total.saturating_sub(picked.len());
    let seed_slots = (content_slots as f64 * SEED_SHARE).round() as usize;
    let follow_up_slots = content_slots - seed_slots;

    for pole in [&pools.anxious, &pools.avoidant] {
        if let Some(q) = draw(pole, &picked, rng) {
            picked.push(q);
        }
        if seed_slots > 3 && pole.len() > 1 {
            if let Some(q) = draw(pole, &picked, rng) {
                picked.push(q);
            }
        }
    }

    let seed_target = total.saturating_sub(follow_up_slots);
    while picked.len() < seed_target {
        match draw(&pools.secure, &picked, rng) {
            Some(q) => picked.push(q),
            None => break,
        }
    }

    if follow_up_slots > 0 {
        if let Some(q) = draw(&pools.paradox, &picked, rng) {
            picked.push(q);
        }
    }

    let content = pools.content();
    while picked.len() < total {
        match draw(&content, &picked, rng) {
            Some(q) => picked.push(q),
            None => break,
        }
    }
    picked.truncate(total);

    place_attention_check(&mut picked, rng);

    tracing::debug!(
        total,
        seed_slots,
        follow_up_slots,
        picked = picked.len(),
        "built quick set"
    );
    picked
}

/// Shuffle content, then put the attention check at a fixed index (or last, for tiny sets).
fn place_attention_check<R: Rng + ?Sized>(items: &mut Vec<&Question>, rng: &mut R) {
    let attention = items
        .iter()
        .position(|q| q.is_attention_check)
        .map(|i| items.remove(i));

    items.shuffle(rng);

    if let Some(attention) = attention {
        if items.len() + 1 > 3 {
            items.insert(ATTENTION_INDEX, attention);
        } else {
            items.push(attention);
        }
    }
}

/// Six-item screener: see [`QuickSetOptions::mini_screener`].
pub fn build_mini_screener<'a, R: Rng + ?Sized>(bank: &'a QuestionBank, rng: &mut R) -> Vec<&'a Question> {
    build_quick_set(bank, &QuickSetOptions::mini_screener(), rng)
}

/// Pick up to `max_follow_ups` unasked items that sharpen the provisional result.
///
/// Provisional means come from the already-asked items that have a response.
pub fn build_follow_up_set<'a, R: Rng + ?Sized>(
    bank: &'a QuestionBank,
    responses: &ResponseMap,
    already_asked: &[String],
    max_follow_ups: usize,
    cutoff: f64,
    rng: &mut R,
) -> Vec<&'a Question> {
    let asked = |q: &Question| already_asked.iter().any(|id| *id == q.id);

    let scored = bank.core.iter().chain(bank.scenarios.iter());
    let means = dimension_means(responses, scored.clone().filter(|&q| asked(q)), false);
    let lean = Lean::from_means(means, cutoff);

    let candidates: Vec<&'a Question> = scored.filter(|&q| q.is_selectable() && !asked(q)).collect();
    let matching = |pred: &dyn Fn(&Question) -> bool| -> Vec<&'a Question> {
        candidates.iter().copied().filter(|&q| pred(q)).collect()
    };

    let picked: Vec<&'a Question> = match lean {
        Lean::Anxiety => sample(&matching(&|q| q.dimension == Dimension::Anxiety), max_follow_ups, rng),
        Lean::Avoidance => sample(&matching(&|q| q.dimension == Dimension::Avoidance), max_follow_ups, rng),
        Lean::BothHigh => {
            let paradox_slots = max_follow_ups.div_ceil(2);
            let mut picked = sample(&matching(&|q| q.is_paradox()), paradox_slots, rng);
            let remaining = max_follow_ups - picked.len();
            picked.extend(sample(&matching(&|q| q.is_core()), remaining, rng));
            picked
        }
        Lean::BothLow => sample(&matching(&|q| q.is_core() && q.reversed), max_follow_ups, rng),
    };

    tracing::debug!(?lean, picked = picked.len(), "built follow-up set");
    picked
}

/// Up to `n` distinct uniform draws.
fn sample<'a, R: Rng + ?Sized>(pool: &[&'a Question], n: usize, rng: &mut R) -> Vec<&'a Question> {
    pool.choose_multiple(rng, n).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn bank() -> &'static QuestionBank {
        QuestionBank::builtin()
    }

    fn ids(items: &[&Question]) -> Vec<String> {
        items.iter().map(|q| q.id.clone()).collect()
    }

    fn assert_unique(items: &[&Question]) {
        let set: HashSet<_> = items.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(set.len(), items.len(), "duplicate ids in {:?}", ids(items));
    }

    #[test]
    fn test_default_quick_set_shape() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = build_quick_set(bank(), &QuickSetOptions::default(), &mut rng);

            assert_eq!(set.len(), 8);
            assert_unique(&set);
            assert_eq!(set.iter().filter(|q| q.is_attention_check).count(), 1);
            assert!(set[2].is_attention_check);
            assert_eq!(set.iter().filter(|q| q.is_social_desirability).count(), 1);
            assert!(set.iter().any(|q| q.is_paradox()));
            assert!(set.iter().all(|q| !q.is_goal));
        }
    }

    #[test]
    fn test_quick_set_is_reproducible() {
        let a = build_quick_set(bank(), &QuickSetOptions::default(), &mut StdRng::seed_from_u64(7));
        let b = build_quick_set(bank(), &QuickSetOptions::default(), &mut StdRng::seed_from_u64(7));
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_quick_set_without_quality_checks() {
        let options = QuickSetOptions {
            include_quality_checks: false,
            ..QuickSetOptions::default()
        };
        let set = build_quick_set(bank(), &options, &mut StdRng::seed_from_u64(1));
        assert_eq!(set.len(), 8);
        assert!(set.iter().all(|q| !q.is_quality_check()));
        // seed_slots = round(4.8) = 5: two draws per pole
        assert!(set.iter().filter(|q| q.is_core() && q.dimension == Dimension::Anxiety && !q.reversed).count() >= 2);
    }

    #[test]
    fn test_quick_set_bounds() {
        for total in [0usize, 1, 3, 4, 6, 12] {
            let options = QuickSetOptions {
                total,
                ..QuickSetOptions::default()
            };
            let set = build_quick_set(bank(), &options, &mut StdRng::seed_from_u64(total as u64));
            assert!(set.len() <= total);
            assert_unique(&set);
            if set.len() > 3 {
                assert!(set[2].is_attention_check);
            }
        }
    }

    #[test]
    fn test_tiny_set_appends_attention_check() {
        let options = QuickSetOptions {
            total: 3,
            ..QuickSetOptions::default()
        };
        let set = build_quick_set(bank(), &options, &mut StdRng::seed_from_u64(3));
        assert_eq!(set.len(), 3);
        assert!(set[2].is_attention_check);
    }

    #[test]
    fn test_prefer_scenarios_controls_pool_order() {
        let scenarios_first = Pools::new(bank(), true);
        let core_first = Pools::new(bank(), false);
        assert_eq!(scenarios_first.anxious[0].id, "SCN_ANX_1");
        assert_eq!(core_first.anxious[0].id, "ANX_1");
        assert_eq!(scenarios_first.anxious.len(), core_first.anxious.len());
    }

    #[test]
    fn test_quick_set_on_small_bank() {
        let small = QuestionBank {
            core: vec![
                Question::likert("ANX_1", "p", Dimension::Anxiety),
                Question::likert("AVO_1", "p", Dimension::Avoidance),
            ],
            scenarios: vec![],
            goals: vec![],
        };
        let set = build_quick_set(&small, &QuickSetOptions::default(), &mut StdRng::seed_from_u64(0));
        assert_eq!(set.len(), 2);
        assert_unique(&set);
    }

    #[test]
    fn test_mini_screener() {
        let set = build_mini_screener(bank(), &mut StdRng::seed_from_u64(11));
        assert_eq!(set.len(), 6);
        assert_unique(&set);
        assert!(set[2].is_attention_check);
    }

    fn asked_all(responses: &ResponseMap) -> Vec<String> {
        responses.keys().cloned().collect()
    }

    #[test]
    fn test_follow_up_anxiety_lean() {
        let responses: ResponseMap = [("ANX_1", 5), ("ANX_2", 5), ("AVO_1", 1)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let asked = asked_all(&responses);
        let set = build_follow_up_set(bank(), &responses, &asked, 3, 3.5, &mut StdRng::seed_from_u64(2));

        assert_eq!(set.len(), 3);
        assert_unique(&set);
        assert!(set.iter().all(|q| q.dimension == Dimension::Anxiety));
        assert!(set.iter().all(|q| !asked.contains(&q.id)));
    }

    #[test]
    fn test_follow_up_avoidance_lean() {
        let responses: ResponseMap = [("ANX_1", 2), ("AVO_1", 5), ("AVO_2", 4)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let asked = asked_all(&responses);
        let set = build_follow_up_set(bank(), &responses, &asked, 4, 3.5, &mut StdRng::seed_from_u64(4));

        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|q| q.dimension == Dimension::Avoidance));
    }

    #[test]
    fn test_follow_up_both_high_splits_paradox_and_mixed() {
        let responses: ResponseMap = [("ANX_1", 5), ("AVO_1", 5)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let asked = asked_all(&responses);
        let set = build_follow_up_set(bank(), &responses, &asked, 3, 3.5, &mut StdRng::seed_from_u64(5));

        assert_eq!(set.len(), 3);
        assert_unique(&set);
        // ceil(3 / 2) = 2 paradox probes are available
        assert_eq!(set.iter().filter(|q| q.is_paradox()).count(), 2);
        assert_eq!(set.iter().filter(|q| q.is_core()).count(), 1);
    }

    #[test]
    fn test_follow_up_both_low_picks_reversed() {
        let responses: ResponseMap = [("ANX_1", 1), ("AVO_1", 2)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let asked = asked_all(&responses);
        let set = build_follow_up_set(bank(), &responses, &asked, 3, 3.5, &mut StdRng::seed_from_u64(6));

        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|q| q.reversed && q.is_core()));
    }

    #[test]
    fn test_follow_up_ignores_unasked_responses() {
        // Only AVO_1 counts as asked; the high ANX_1 answer must not lean the result.
        let responses: ResponseMap = [("ANX_1", 5), ("AVO_1", 5)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let asked = vec!["AVO_1".to_string()];
        let set = build_follow_up_set(bank(), &responses, &asked, 2, 3.5, &mut StdRng::seed_from_u64(8));
        assert!(set.iter().all(|q| q.dimension == Dimension::Avoidance));
    }

    #[test]
    fn test_follow_up_zero_max() {
        let set = build_follow_up_set(bank(), &ResponseMap::new(), &[], 0, 3.5, &mut StdRng::seed_from_u64(0));
        assert!(set.is_empty());
    }
}
