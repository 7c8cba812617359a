use crate::utils::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads a `KEY=VALUE` file. A missing file yields an empty map.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path)?;
    tracing::debug!("Loaded environment file {}", path.display());
    Ok(parse_env(&content))
}

pub fn parse_env(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    vars
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_handles_comments_quotes_and_export() {
        let vars = parse_env(
            "# local settings\nSTAGE=prod\nexport AWS_REGION = \"eu-west-1\"\nLAMBDA_NAME='api'\nbroken line\n",
        );

        assert_eq!(vars.get("STAGE").map(String::as_str), Some("prod"));
        assert_eq!(vars.get("AWS_REGION").map(String::as_str), Some("eu-west-1"));
        assert_eq!(vars.get("LAMBDA_NAME").map(String::as_str), Some("api"));
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let vars = read_env_file(dir.path().join(".env")).unwrap();
        assert!(vars.is_empty());
    }
}
