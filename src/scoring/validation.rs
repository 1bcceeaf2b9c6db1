use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Quadrant band
    let quadrant = &config.quadrant;
    if quadrant.secure_max > 100 {
        errors.push("scoring.quadrant.secure_max: must be 0-100".to_string());
    }
    if quadrant.pole_min > 100 {
        errors.push("scoring.quadrant.pole_min: must be 0-100".to_string());
    }
    if quadrant.secure_max >= quadrant.pole_min {
        errors.push(format!(
            "scoring.quadrant: secure_max ({}) must be below pole_min ({})",
            quadrant.secure_max, quadrant.pole_min
        ));
    }

    // Disorganized lean
    if config.disorganized.min_score > 100 {
        errors.push("scoring.disorganized.min_score: must be 0-100".to_string());
    }
    if !(1..=5).contains(&config.disorganized.probe_min) {
        errors.push(format!(
            "scoring.disorganized.probe_min: must be 1-5, got {}",
            config.disorganized.probe_min
        ));
    }

    // Confidence floors
    let confidence = &config.confidence;
    for (name, value) in [
        ("high_reliability", confidence.high_reliability),
        ("moderate_reliability", confidence.moderate_reliability),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(format!("scoring.confidence.{}: must be 0-1, got {}", name, value));
        }
    }
    for (name, value) in [
        ("high_radius", confidence.high_radius),
        ("moderate_radius", confidence.moderate_radius),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!("scoring.confidence.{}: must be non-negative", name));
        }
    }
    if confidence.moderate_reliability > confidence.high_reliability
        || confidence.moderate_radius > confidence.high_radius
    {
        errors.push("scoring.confidence: Moderate floors must not exceed High floors".to_string());
    }

    // Adaptive cutoff is on the 1-5 response scale
    if !(1.0..=5.0).contains(&config.adaptive.cutoff) {
        errors.push(format!(
            "scoring.adaptive.cutoff: must be 1-5, got {}",
            config.adaptive.cutoff
        ));
    }

    // Split-half needs at least two pairs
    if config.reliability.min_items < 4 {
        errors.push(format!(
            "scoring.reliability.min_items: must be at least 4, got {}",
            config.reliability.min_items
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_quadrant_band() {
        let mut config = ScoringConfig::default();
        config.quadrant.secure_max = 60;
        config.quadrant.pole_min = 50;
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.quadrant"));
    }

    #[test]
    fn test_probe_min_out_of_range() {
        let mut config = ScoringConfig::default();
        config.disorganized.probe_min = 6;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.disorganized.probe_min"));
    }

    #[test]
    fn test_moderate_stricter_than_high() {
        let mut config = ScoringConfig::default();
        config.confidence.moderate_reliability = 0.9;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("Moderate floors"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScoringConfig::default();
        config.confidence.high_reliability = 1.5; // Error 1
        config.adaptive.cutoff = 0.0; // Error 2
        config.reliability.min_items = 2; // Error 3
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
