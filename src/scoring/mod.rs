pub mod classify;
pub mod config;
pub mod engine;
pub mod reliability;
pub mod validation;

pub use classify::{classify_quadrant, confidence_label, radial_distance, ConfidenceLabel, Quadrant};
pub use config::*;
pub use engine::{dimension_means, score_responses, AttachmentScores, DimensionMeans, NEUTRAL};
pub use reliability::split_half_reliability;
pub use validation::validate_scoring;
