use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::types::Dimension;
use super::QuestionBank;

/// Load a custom question bank from a YAML file.
///
/// The file has the same shape as the built-in bank:
/// ```yaml
/// core:
///   - id: ANX_1
///     prompt: "..."
///     dimension: anxiety
///     options: [...]
/// scenarios: []
/// goals: []
/// ```
///
/// Parsing errors are returned; content problems are left to [`validate_bank`].
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question bank at {}", path.display()))?;

    let bank: QuestionBank = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse question bank: invalid YAML in {}", path.display()))?;

    tracing::debug!(
        core = bank.core.len(),
        scenarios = bank.scenarios.len(),
        goals = bank.goals.len(),
        "loaded question bank from {}",
        path.display()
    );

    Ok(bank)
}

/// Validate question bank content.
/// Returns all validation errors at once (not just the first).
pub fn validate_bank(bank: &QuestionBank) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, q) in bank.all().enumerate() {
        let at = format!("bank[{}]", i);

        if q.id.trim().is_empty() {
            errors.push(format!("{}.id: must not be empty", at));
        } else if !seen.insert(q.id.as_str()) {
            errors.push(format!("{}.id: duplicate id '{}'", at, q.id));
        }

        if !q.weight.is_finite() || q.weight <= 0.0 {
            errors.push(format!("{} ({}).weight: must be positive, got {}", at, q.id, q.weight));
        }

        if q.options.is_empty() {
            errors.push(format!("{} ({}).options: must not be empty", at, q.id));
        }

        for (j, opt) in q.options.iter().enumerate() {
            if !(1..=5).contains(&opt.value) {
                errors.push(format!(
                    "{} ({}).options[{}].value: must be 1-5, got {}",
                    at, q.id, j, opt.value
                ));
            }
        }

        if q.is_goal && q.options.iter().all(|o| o.route_tag.is_none()) {
            errors.push(format!("{} ({}): goal item needs at least one route_tag", at, q.id));
        }

        if q.is_quality_check() && q.dimension != Dimension::None {
            errors.push(format!(
                "{} ({}).dimension: quality-check items must use dimension 'none'",
                at, q.id
            ));
        }
    }

    for q in bank.scenarios.iter().chain(bank.goals.iter()) {
        if q.is_quality_check() {
            errors.push(format!("{}: quality-check items must be listed under core", q.id));
        }
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
    use crate::bank::{AnswerOption, Question};
    use std::io::Write;

    #[test]
    fn test_builtin_bank_is_valid() {
        assert!(validate_bank(QuestionBank::builtin()).is_ok());
    }

    #[test]
    fn test_load_bank_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
core:
  - id: ANX_1
    prompt: "I worry a lot."
    dimension: anxiety
    options:
      - {{ text: "No", value: 1 }}
      - {{ text: "Yes", value: 5 }}
goals:
  - id: GOAL_1
    prompt: "Why are you here?"
    is_goal: true
    options:
      - {{ text: "Boundaries", value: 1, route_tag: boundary_forward }}
"#
        )
        .unwrap();

        let bank = load_bank(file.path()).unwrap();
        assert_eq!(bank.core.len(), 1);
        assert!(bank.scenarios.is_empty());
        assert_eq!(bank.goals[0].options[0].route_tag.as_deref(), Some("boundary_forward"));
        assert!(validate_bank(&bank).is_ok());
    }

    #[test]
    fn test_load_bank_missing_file() {
        let err = load_bank(Path::new("/nonexistent/attune/bank.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read question bank"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut dup = Question::likert("ANX_1", "p", Dimension::Anxiety).weighted(0.0);
        dup.options.push(AnswerOption::new("Way too much", 7));
        let bank = QuestionBank {
            core: vec![
                Question::likert("ANX_1", "p", Dimension::Anxiety),
                dup,
                Question::likert("CHK", "p", Dimension::Anxiety).attention_check(),
            ],
            scenarios: vec![],
            goals: vec![Question::goal("GOAL_1", "p", vec![AnswerOption::new("x", 1)])],
        };

        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors[0].contains("duplicate id 'ANX_1'"));
        assert!(errors[1].contains("weight"));
        assert!(errors[2].contains("options[5].value"));
        assert!(errors[3].contains("quality-check"));
        assert!(errors[4].contains("route_tag"));
    }

    #[test]
    fn test_quality_checks_must_be_core() {
        let bank = QuestionBank {
            core: vec![Question::likert("V1", "p", Dimension::Anxiety)],
            scenarios: vec![Question::likert("ATTN", "p", Dimension::None).attention_check()],
            goals: vec![],
        };
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ATTN: quality-check items must be listed under core"));
    }
}
