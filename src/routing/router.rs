use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::bank::{AnswerOption, Question};
use crate::responses::ResponseMap;

/// Profile used when no tag maps to anything.
pub const DEFAULT_PROFILE: &str = "secure_training";

/// Core profiles, highest priority first.
pub const PROFILE_PRIORITY: [&str; 7] = [
    "coparenting_support",
    "boundary_forward",
    "dating_sensitive",
    "deescalator",
    "empathetic_mirror",
    "balanced",
    "secure_training",
];

/// Communication-style tags and the core profile each implies, in priority order.
pub const STYLE_PROFILES: [(&str, &str); 4] = [
    ("style_direct", "boundary_forward"),
    ("style_calming", "deescalator"),
    ("style_gentle", "empathetic_mirror"),
    ("style_playful", "balanced"),
];

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct RoutingConfig {
    /// Fall back to style tags when no core profile tag was chosen
    pub map_secondary_styles: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            map_secondary_styles: true,
        }
    }
}

/// How an answer was matched to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// An option carries exactly the answered value
    Exact,
    /// No option matched; took the option at index min(answer - 1, last)
    Positional,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedOption<'a> {
    pub option: &'a AnswerOption,
    pub resolution: Resolution,
}

/// Resolve an answer to one of `question`'s options.
///
/// Step 1 matches on option value. Step 2, only when step 1 finds nothing,
/// indexes the option list positionally. `None` only for a question without options.
pub fn resolve_option(question: &Question, answer: i32) -> Option<ResolvedOption<'_>> {
    if let Some(option) = question.options.iter().find(|o| o.value == answer) {
        return Some(ResolvedOption {
            option,
            resolution: Resolution::Exact,
        });
    }

    let last = question.options.len().checked_sub(1)?;
    let index = usize::try_from(answer.saturating_sub(1)).unwrap_or(0).min(last);
    Some(ResolvedOption {
        option: &question.options[index],
        resolution: Resolution::Positional,
    })
}

/// Audit record for one answered goal item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResolution {
    pub question_id: String,
    pub answer: i32,
    pub resolution: Resolution,
    pub route_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRoutingResult {
    pub route_tags: BTreeSet<String>,
    pub primary_profile: String,
    pub resolutions: Vec<GoalResolution>,
}

/// Maps goal-question answers to route tags and one primary profile.
#[derive(Debug, Clone, Default)]
pub struct GoalRouter {
    config: RoutingConfig,
}

impl GoalRouter {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Route the answered goal items among `items`. Non-goal items are ignored.
    pub fn route(&self, responses: &ResponseMap, items: &[Question]) -> GoalRoutingResult {
        let mut route_tags = BTreeSet::new();
        let mut resolutions = Vec::new();

        for question in items.iter().filter(|q| q.is_goal) {
            let Some(&answer) = responses.get(&question.id) else {
                continue;
            };
            let Some(resolved) = resolve_option(question, answer) else {
                continue;
            };

            if resolved.resolution == Resolution::Positional {
                tracing::warn!(
                    question = %question.id,
                    answer,
                    "no option with this value, resolved positionally to '{}'",
                    resolved.option.text
                );
            }

            if let Some(tag) = &resolved.option.route_tag {
                route_tags.insert(tag.clone());
            }
            resolutions.push(GoalResolution {
                question_id: question.id.clone(),
                answer,
                resolution: resolved.resolution,
                route_tag: resolved.option.route_tag.clone(),
            });
        }

        let primary_profile = self.primary_profile(&route_tags);
        tracing::debug!(tags = ?route_tags, %primary_profile, "routed goal answers");

        GoalRoutingResult {
            route_tags,
            primary_profile,
            resolutions,
        }
    }

    fn primary_profile(&self, tags: &BTreeSet<String>) -> String {
        let core = PROFILE_PRIORITY.iter().find(|p| tags.contains(**p));

        let style = || {
            STYLE_PROFILES
                .iter()
                .find(|(style, _)| tags.contains(*style))
                .map(|(_, profile)| profile)
        };

        match core {
            Some(profile) => profile.to_string(),
            None if self.config.map_secondary_styles => style().unwrap_or(&DEFAULT_PROFILE).to_string(),
            None => DEFAULT_PROFILE.to_string(),
        }
    }
}
