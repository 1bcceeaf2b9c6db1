use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Question id -> answer (1-5). Values outside that range are clamped when scored.
pub type ResponseMap = HashMap<String, i32>;

/// Load a response map from a file.
///
/// `.json` files are parsed as JSON; anything else as YAML:
/// ```yaml
/// ANX_1: 4
/// AVO_2: 2
/// CHK_ATTEN: 4
/// ```
pub fn load_responses(path: &Path) -> Result<ResponseMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses at {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let responses: ResponseMap = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse responses: invalid JSON in {}", path.display()))?
    } else if content.trim().is_empty() {
        ResponseMap::new()
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse responses: invalid YAML in {}", path.display()))?
    };

    tracing::debug!("loaded {} responses from {}", responses.len(), path.display());
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_json_responses() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"ANX_1": 4, "CHK_ATTEN": 4}}"#).unwrap();

        let responses = load_responses(file.path()).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses["ANX_1"], 4);
    }

    #[test]
    fn test_load_yaml_responses() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "ANX_1: 2\nAVO_3: 5").unwrap();

        let responses = load_responses(file.path()).unwrap();
        assert_eq!(responses["AVO_3"], 5);
    }

    #[test]
    fn test_empty_yaml_is_empty_map() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(load_responses(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();

        let err = load_responses(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }
}
