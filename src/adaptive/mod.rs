//! Adaptive item selection.
//!
//! Both the single-step picker ([`pick_next`]) and the set builders read the
//! respondent's provisional position from the items answered so far and steer
//! toward the questions that best separate the remaining candidate quadrants:
//!
//! | Provisional means (1-5)        | Steer toward                     |
//! |--------------------------------|----------------------------------|
//! | anxiety high, avoidance low    | more anxiety items               |
//! | avoidance high, anxiety low    | more avoidance items             |
//! | both high                      | paradox probes, then mixed items |
//! | both low                       | reversed (secure-pole) items     |
//!
//! "High" means at or above the configured cutoff (3.5 by default). All random
//! draws go through a caller-supplied [`rand::Rng`].

pub mod next;
pub mod sets;

pub use next::pick_next;
pub use sets::{build_follow_up_set, build_mini_screener, build_quick_set, QuickSetOptions};

use crate::scoring::DimensionMeans;

/// Where the provisional means point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    Anxiety,
    Avoidance,
    BothHigh,
    BothLow,
}

impl Lean {
    pub fn from_means(means: DimensionMeans, cutoff: f64) -> Self {
        let anxiety_high = means.anxiety >= cutoff;
        let avoidance_high = means.avoidance >= cutoff;
        match (anxiety_high, avoidance_high) {
            (true, false) => Lean::Anxiety,
            (false, true) => Lean::Avoidance,
            (true, true) => Lean::BothHigh,
            (false, false) => Lean::BothLow,
        }
    }
}
