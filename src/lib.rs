//! Adaptive attachment-style questionnaire engine.
//!
//! Scores a response map into anxiety/avoidance dimensions (0-100), estimates
//! split-half reliability, classifies a quadrant with a confidence label,
//! routes goal answers to a product profile, and picks or assembles the next
//! questions to ask. The core is pure and synchronous; randomness is always
//! supplied by the caller.

pub mod adaptive;
pub mod assessment;
pub mod bank;
pub mod config;
pub mod output;
pub mod responses;
pub mod routing;
pub mod scoring;

pub use assessment::{AssessmentEngine, AssessmentOutcome};
pub use responses::ResponseMap;
