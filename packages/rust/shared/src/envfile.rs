//! Line-oriented `KEY=VALUE` credential file parsing.
//!
//! Deliberately minimal: no quoting or escaping, comments start with `#`,
//! blank lines are ignored, keys and values are whitespace-trimmed.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, WosError};

/// Parse a `{PREFIX}.env` file into a credential map.
///
/// Lines without an `=` are skipped; on duplicate keys the last assignment
/// wins.
pub fn parse_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| WosError::io(path, e))?;
    Ok(parse_env_str(&content))
}

/// Parse env-file content already held in memory.
pub fn parse_env_str(content: &str) -> HashMap<String, String> {
    let mut env = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            env.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_assignments() {
        let env = parse_env_str("HUBSPOT_TOKEN=pat-123\nCARGO_API_KEY=ck-9\n");
        assert_eq!(env.get("HUBSPOT_TOKEN").unwrap(), "pat-123");
        assert_eq!(env.get("CARGO_API_KEY").unwrap(), "ck-9");
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let env = parse_env_str("# header\n\n  # indented comment\nKEY=value\n");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("KEY").unwrap(), "value");
    }

    #[test]
    fn trims_keys_and_values() {
        let env = parse_env_str("  UNIPILE_DNS = api1.unipile.com \n");
        assert_eq!(env.get("UNIPILE_DNS").unwrap(), "api1.unipile.com");
    }

    #[test]
    fn value_keeps_later_equals_signs() {
        let env = parse_env_str("TOKEN=abc=def\n");
        assert_eq!(env.get("TOKEN").unwrap(), "abc=def");
    }

    #[test]
    fn blank_value_parses_as_empty_string() {
        let env = parse_env_str("HUBSPOT_TOKEN=\n");
        assert_eq!(env.get("HUBSPOT_TOKEN").unwrap(), "");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_env_file(Path::new("/nonexistent/XX.env")).expect_err("should fail");
        assert!(matches!(err, WosError::Io { .. }));
    }
}
