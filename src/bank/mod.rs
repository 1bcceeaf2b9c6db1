pub mod catalog;
pub mod loader;
pub mod types;

pub use loader::{load_bank, validate_bank};
pub use types::{likert_options, AnswerOption, Dimension, Question};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Item whose only correct answer is "Agree".
pub const ATTENTION_CHECK_ID: &str = "CHK_ATTEN";

/// Items averaged into the social-desirability signal.
pub const SOCIAL_DESIRABILITY_IDS: [&str; 2] = ["SD1", "SD2"];

/// Paradox probe candidates; the first one with a response wins.
pub const PARADOX_PROBE_IDS: [&str; 2] = ["PARADOX_1", "SCN_PARADOX_1"];

/// Static questionnaire content, split by purpose.
///
/// `core` holds the catalog scored by default (including quality checks and the
/// paradox probe), `scenarios` the situational variants used by adaptive sets,
/// `goals` the routing questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionBank {
    #[serde(default)]
    pub core: Vec<Question>,
    #[serde(default)]
    pub scenarios: Vec<Question>,
    #[serde(default)]
    pub goals: Vec<Question>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        QuestionBank::builtin().clone()
    }
}

impl QuestionBank {
    /// The built-in bank, constructed once per process.
    pub fn builtin() -> &'static QuestionBank {
        static BUILTIN: OnceLock<QuestionBank> = OnceLock::new();
        BUILTIN.get_or_init(catalog::builtin_bank)
    }

    /// Every item, in catalog order: core, scenarios, goals.
    pub fn all(&self) -> impl Iterator<Item = &Question> {
        self.core
            .iter()
            .chain(self.scenarios.iter())
            .chain(self.goals.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.all().find(|q| q.id == id)
    }

    /// The attention-check item, if the bank has one.
    pub fn attention_check(&self) -> Option<&Question> {
        self.all().find(|q| q.is_attention_check)
    }

    pub fn social_desirability_items(&self) -> Vec<&Question> {
        self.all().filter(|q| q.is_social_desirability).collect()
    }

    /// Core items followed by scenario items, without goal questions.
    pub fn scored_items(&self) -> Vec<Question> {
        self.core.iter().chain(self.scenarios.iter()).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let a = QuestionBank::builtin() as *const QuestionBank;
        let b = QuestionBank::builtin() as *const QuestionBank;
        assert_eq!(a, b);
    }

    #[test]
    fn test_designated_items_exist() {
        let bank = QuestionBank::builtin();
        let atten = bank.attention_check().unwrap();
        assert_eq!(atten.id, ATTENTION_CHECK_ID);
        for id in SOCIAL_DESIRABILITY_IDS {
            assert!(bank.find(id).unwrap().is_social_desirability);
        }
        for id in PARADOX_PROBE_IDS {
            assert!(bank.find(id).unwrap().is_paradox());
        }
    }

    #[test]
    fn test_scored_items_exclude_goals() {
        let bank = QuestionBank::builtin();
        let items = bank.scored_items();
        assert_eq!(items.len(), bank.core.len() + bank.scenarios.len());
        assert!(items.iter().all(|q| !q.is_goal));
    }
}
