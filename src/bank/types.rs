use serde::{Deserialize, Serialize};
use std::fmt;

/// Attachment axis a question measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Anxiety,
    Avoidance,
    #[default]
    None,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Anxiety => write!(f, "anxiety"),
            Dimension::Avoidance => write!(f, "avoidance"),
            Dimension::None => write!(f, "none"),
        }
    }
}

/// One selectable answer. `route_tag` is only meaningful on goal items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerOption {
    pub text: String,
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_tag: Option<String>,
}

impl AnswerOption {
    pub fn new(text: &str, value: i32) -> Self {
        Self {
            text: text.to_string(),
            value,
            route_tag: None,
        }
    }

    pub fn routed(text: &str, value: i32, tag: &str) -> Self {
        Self {
            text: text.to_string(),
            value,
            route_tag: Some(tag.to_string()),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

/// A single questionnaire item.
///
/// Example YAML (custom banks):
/// ```yaml
/// - id: ANX_1
///   prompt: "I worry that partners won't stay with me."
///   dimension: anxiety
///   options:
///     - { text: "Strongly Disagree", value: 1 }
///     - { text: "Strongly Agree", value: 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub dimension: Dimension,
    #[serde(default)]
    pub reversed: bool,
    #[serde(default)]
    pub is_goal: bool,
    #[serde(default)]
    pub is_attention_check: bool,
    #[serde(default)]
    pub is_social_desirability: bool,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// A standard 5-point agreement item.
    pub fn likert(id: &str, prompt: &str, dimension: Dimension) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            dimension,
            reversed: false,
            is_goal: false,
            is_attention_check: false,
            is_social_desirability: false,
            weight: default_weight(),
            options: likert_options(),
        }
    }

    /// A goal item; options carry route tags instead of agreement levels.
    pub fn goal(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Self {
        Self {
            is_goal: true,
            options,
            ..Self::likert(id, prompt, Dimension::None)
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    pub fn weighted(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn attention_check(mut self) -> Self {
        self.is_attention_check = true;
        self
    }

    pub fn social_desirability(mut self) -> Self {
        self.is_social_desirability = true;
        self
    }

    /// Counts toward anxiety/avoidance: a real dimension, no quality-check flags.
    pub fn is_core(&self) -> bool {
        self.dimension != Dimension::None && !self.is_quality_check() && !self.is_goal
    }

    pub fn is_quality_check(&self) -> bool {
        self.is_attention_check || self.is_social_desirability
    }

    /// Ids containing "PARADOX" mark paradox probes.
    pub fn is_paradox(&self) -> bool {
        self.dimension == Dimension::None && self.id.to_ascii_uppercase().contains("PARADOX")
    }

    /// Eligible for adaptive follow-up: anything that is not a goal or quality check.
    pub fn is_selectable(&self) -> bool {
        !self.is_goal && !self.is_quality_check()
    }
}

/// Strongly Disagree (1) .. Strongly Agree (5).
pub fn likert_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("Strongly Disagree", 1),
        AnswerOption::new("Disagree", 2),
        AnswerOption::new("Neutral", 3),
        AnswerOption::new("Agree", 4),
        AnswerOption::new("Strongly Agree", 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likert_defaults() {
        let q = Question::likert("ANX_1", "prompt", Dimension::Anxiety);
        assert_eq!(q.weight, 1.0);
        assert!(!q.reversed);
        assert_eq!(q.options.len(), 5);
        assert_eq!(q.options[3].text, "Agree");
        assert_eq!(q.options[3].value, 4);
        assert!(q.is_core());
    }

    #[test]
    fn test_quality_items_are_not_core() {
        let atten = Question::likert("CHK", "p", Dimension::Anxiety).attention_check();
        let sd = Question::likert("SD", "p", Dimension::Avoidance).social_desirability();
        assert!(!atten.is_core());
        assert!(!sd.is_core());
        assert!(!atten.is_selectable());
    }

    #[test]
    fn test_paradox_convention() {
        assert!(Question::likert("SCN_paradox_2", "p", Dimension::None).is_paradox());
        assert!(!Question::likert("PARADOX_1", "p", Dimension::Anxiety).is_paradox());
        assert!(!Question::likert("NONE_1", "p", Dimension::None).is_paradox());
    }

    #[test]
    fn test_question_yaml_defaults() {
        let yaml = r#"
id: AVO_9
prompt: "I keep my feelings to myself."
dimension: avoidance
options:
  - { text: "No", value: 1 }
  - { text: "Yes", value: 5 }
"#;
        let q: Question = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(q.dimension, Dimension::Avoidance);
        assert_eq!(q.weight, 1.0);
        assert!(!q.reversed);
        assert!(!q.is_goal);
        assert!(q.options[0].route_tag.is_none());
    }

    #[test]
    fn test_question_yaml_rejects_unknown_fields() {
        let yaml = r#"
id: X
prompt: "p"
polarity: reversed
options: []
"#;
        assert!(serde_saphyr::from_str::<Question>(yaml).is_err());
    }
}
