use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{ConfidenceThresholds, QuadrantThresholds};

/// Categorical attachment-style label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    Secure,
    Anxious,
    Avoidant,
    DisorganizedLean,
    Mixed,
}

impl Quadrant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::Secure => "secure",
            Quadrant::Anxious => "anxious",
            Quadrant::Avoidant => "avoidant",
            Quadrant::DisorganizedLean => "disorganized_lean",
            Quadrant::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much weight a single result can bear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    High,
    Moderate,
    Cautious,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLabel::High => write!(f, "High"),
            ConfidenceLabel::Moderate => write!(f, "Moderate"),
            ConfidenceLabel::Cautious => write!(f, "Cautious"),
        }
    }
}

/// Map scores to a quadrant. Rules apply in priority order; the gray band
/// between `secure_max` and `pole_min` falls through to `Mixed`.
pub fn classify_quadrant(
    anxiety: u8,
    avoidance: u8,
    disorganized_lean: bool,
    thresholds: &QuadrantThresholds,
) -> Quadrant {
    let QuadrantThresholds {
        secure_max,
        pole_min,
    } = *thresholds;

    if disorganized_lean {
        Quadrant::DisorganizedLean
    } else if anxiety <= secure_max && avoidance <= secure_max {
        Quadrant::Secure
    } else if anxiety >= pole_min && avoidance < pole_min {
        Quadrant::Anxious
    } else if avoidance >= pole_min && anxiety < pole_min {
        Quadrant::Avoidant
    } else {
        Quadrant::Mixed
    }
}

/// Euclidean distance of (anxiety, avoidance) from the (50, 50) midpoint.
pub fn radial_distance(anxiety: u8, avoidance: u8) -> f64 {
    let dx = f64::from(anxiety) - 50.0;
    let dy = f64::from(avoidance) - 50.0;
    (dx * dx + dy * dy).sqrt()
}

/// Confidence needs both a consistent response pattern and a result away from center.
pub fn confidence_label(
    reliability: f64,
    anxiety: u8,
    avoidance: u8,
    thresholds: &ConfidenceThresholds,
) -> ConfidenceLabel {
    let radial = radial_distance(anxiety, avoidance);

    if reliability >= thresholds.high_reliability && radial >= thresholds.high_radius {
        ConfidenceLabel::High
    } else if reliability >= thresholds.moderate_reliability && radial >= thresholds.moderate_radius {
        ConfidenceLabel::Moderate
    } else {
        ConfidenceLabel::Cautious
    }
}
