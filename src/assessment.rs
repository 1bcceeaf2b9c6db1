use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::adaptive::{self, QuickSetOptions};
use crate::bank::{Question, QuestionBank};
use crate::responses::ResponseMap;
use crate::routing::{GoalRouter, GoalRoutingResult, RoutingConfig};
use crate::scoring::{score_responses, AttachmentScores, ConfidenceLabel, ScoringConfig};

/// Results below this reliability are not trusted for recommendations.
pub const GATE_MIN_RELIABILITY: f64 = 0.5;

/// Social-desirability above this suggests faked-good answers.
pub const GATE_MAX_SOCIAL_DESIRABILITY: f64 = 0.85;

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub scores: AttachmentScores,
    pub routing: GoalRoutingResult,
}

impl AssessmentOutcome {
    /// Whether downstream recommendations must be held back for this result.
    pub fn gates_recommendations(&self) -> bool {
        let s = &self.scores;
        !s.attention_passed
            || s.reliability < GATE_MIN_RELIABILITY
            || s.social_desirability > GATE_MAX_SOCIAL_DESIRABILITY
            || s.confidence_label == ConfidenceLabel::Cautious
    }
}

/// Entry point tying scoring, routing and adaptive selection to one bank and config.
///
/// Holds no per-respondent state; every call takes its own response map and
/// (for set builders) its own random source.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    bank: QuestionBank,
    scoring: ScoringConfig,
    router: GoalRouter,
}

impl AssessmentEngine {
    pub fn new(bank: QuestionBank, scoring: ScoringConfig, routing: RoutingConfig) -> Self {
        Self {
            bank,
            scoring,
            router: GoalRouter::new(routing),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Score against the core catalog and route the bank's goal items.
    pub fn run(&self, responses: &ResponseMap) -> AssessmentOutcome {
        AssessmentOutcome {
            scores: score_responses(responses, &self.bank.core, &self.scoring),
            routing: self.router.route(responses, &self.bank.goals),
        }
    }

    /// Score against caller-supplied items.
    ///
    /// Goal items among `items` are routed; when there are none, the bank's
    /// goal items are used instead.
    pub fn run_with_items(&self, responses: &ResponseMap, items: &[Question]) -> AssessmentOutcome {
        let routing = if items.iter().any(|q| q.is_goal) {
            self.router.route(responses, items)
        } else {
            self.router.route(responses, &self.bank.goals)
        };

        AssessmentOutcome {
            scores: score_responses(responses, items, &self.scoring),
            routing,
        }
    }

    pub fn pick_next<'a>(&self, responses: &ResponseMap, pool: &'a [Question]) -> Option<&'a Question> {
        adaptive::pick_next(responses, pool, self.scoring.adaptive.cutoff)
    }

    pub fn build_quick_set<R: Rng + ?Sized>(&self, options: &QuickSetOptions, rng: &mut R) -> Vec<&Question> {
        adaptive::build_quick_set(&self.bank, options, rng)
    }

    pub fn build_mini_screener<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Question> {
        adaptive::build_mini_screener(&self.bank, rng)
    }

    pub fn build_follow_up_set<R: Rng + ?Sized>(
        &self,
        responses: &ResponseMap,
        already_asked: &[String],
        max_follow_ups: usize,
        rng: &mut R,
    ) -> Vec<&Question> {
        adaptive::build_follow_up_set(
            &self.bank,
            responses,
            already_asked,
            max_follow_ups,
            self.scoring.adaptive.cutoff,
            rng,
        )
    }
}
