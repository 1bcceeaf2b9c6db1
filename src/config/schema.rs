use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::routing::RoutingConfig;
use crate::scoring::ScoringConfig;

/// Top-level config file.
///
/// Example YAML:
/// ```yaml
/// bank: ~/questionnaires/short-form.yaml
/// scoring:
///   attention_rule: agree_only
/// routing:
///   map_secondary_styles: false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Custom question bank; the built-in bank is used when absent
    #[serde(default)]
    pub bank: Option<PathBuf>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub routing: Option<RoutingConfig>,
}
