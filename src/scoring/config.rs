use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Every threshold the engine uses lives here. All fields are optional in YAML;
/// anything omitted falls back to the defaults below.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   attention_rule: agree_only
///   quadrant:
///     secure_max: 40
///     pole_min: 60
///   confidence:
///     high_reliability: 0.7
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    /// Which answers to the attention check count as a pass
    pub attention_rule: AttentionRule,

    pub quadrant: QuadrantThresholds,

    pub disorganized: DisorganizedThresholds,

    pub confidence: ConfidenceThresholds,

    pub adaptive: AdaptiveConfig,

    pub reliability: ReliabilityConfig,
}

/// Attention-check pass rule.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttentionRule {
    /// Only "Agree" (4) passes
    AgreeOnly,
    /// "Agree" (4) or "Strongly Agree" (5) passes
    #[default]
    AgreeOrStronger,
}

impl AttentionRule {
    pub fn passes(&self, raw: i32) -> bool {
        match self {
            AttentionRule::AgreeOnly => raw == 4,
            AttentionRule::AgreeOrStronger => raw == 4 || raw == 5,
        }
    }
}

/// Score cutoffs (0-100) for quadrant labels.
///
/// Scores strictly between `secure_max` and `pole_min` form the gray band.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct QuadrantThresholds {
    pub secure_max: u8,
    pub pole_min: u8,
}

impl Default for QuadrantThresholds {
    fn default() -> Self {
        Self {
            secure_max: 45,
            pole_min: 55,
        }
    }
}

/// Both scores must reach `min_score` and the paradox probe `probe_min`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DisorganizedThresholds {
    pub min_score: u8,
    pub probe_min: i32,
}

impl Default for DisorganizedThresholds {
    fn default() -> Self {
        Self {
            min_score: 60,
            probe_min: 4,
        }
    }
}

/// Reliability and radial-distance floors for each confidence label.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ConfidenceThresholds {
    pub high_reliability: f64,
    pub high_radius: f64,
    pub moderate_reliability: f64,
    pub moderate_radius: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high_reliability: 0.65,
            high_radius: 20.0,
            moderate_reliability: 0.50,
            moderate_radius: 12.0,
        }
    }
}

/// Provisional-mean cutoff (1-5 scale) that marks a dimension as elevated.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct AdaptiveConfig {
    pub cutoff: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self { cutoff: 3.5 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ReliabilityConfig {
    /// Fewer answered items than this yields reliability 0.0
    pub min_items: usize,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self { min_items: 6 }
    }
}
